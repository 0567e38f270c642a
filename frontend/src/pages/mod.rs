mod not_found;
mod technologies;

pub use self::{not_found::*, technologies::*};
