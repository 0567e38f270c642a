mod page_title;

pub use self::page_title::*;
