#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Reusable components used to build the Foodgram pages

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{badge_image::*, containers::*, link::*, page_title::*};
}

/// Everything the component modules need in scope
mod imports {
	pub use leptos::*;

	pub use crate::prelude::*;
}

/// Badge images, shown as the content of a link
pub mod badge_image;
/// Page-level layout wrappers
pub mod containers;
/// Links that leave the site
pub mod link;
/// Page headings
pub mod page_title;
