mod routes;
mod technology;

pub use self::{routes::*, technology::*};

/// Values shared by the pages and the server that hosts them
pub mod constants {
	/// The name of the site, used when a page doesn't set its own title
	pub const SITE_NAME: &str = "Фудграм";
	/// The name of the compiled wasm and css bundle
	pub const OUTPUT_NAME: &str = "frontend";
	/// Where the compiled stylesheet is served from
	pub const STYLESHEET: &str = "/pkg/frontend.css";
}
