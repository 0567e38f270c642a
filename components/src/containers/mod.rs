mod container;
mod page_main;

pub use self::{container::*, page_main::*};
