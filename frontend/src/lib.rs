#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! The Foodgram technologies page

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use leptos_meta::{Link as MetaLink, Meta, Stylesheet, Title};
	pub use log::{debug, error, info, trace, warn};

	pub use crate::{pages::*, utils::*};
}

/// The application logic code. This contains the router and all the routing
/// logic
pub mod app;
/// The pages module. This contains all the pages used in the application.
/// Pages are the main views that are rendered when a route is matched.
pub mod pages;
/// The utils module. This contains the routes, the technologies shown on the
/// site and the constants shared with the server.
pub mod utils;

use leptos_meta::provide_meta_context;
use prelude::*;

pub use crate::utils::constants::OUTPUT_NAME;

/// The main hydrate function. Called when the application starts to hydrate
/// from the server side.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(render);
}

/// The main render function. Renders the whole application, with the tags
/// every page shares in the document head.
pub fn render() -> impl IntoView {
	use app::{App, SiteTitle};

	provide_meta_context();
	view! {
		<>
			<Meta charset="utf-8"/>
			<Meta name="viewport" content="width=device-width, initial-scale=1"/>
			<Meta name="theme-color" content="#000000"/>
			<MetaLink rel="preconnect" href="https://img.shields.io"/>
			<Stylesheet id="leptos" href=constants::STYLESHEET/>

			<SiteTitle/>

			<App/>
		</>
	}
}
