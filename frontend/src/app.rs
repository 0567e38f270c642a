use leptos_router::{Redirect, Route, Router, Routes};

use crate::prelude::*;

/// The main application component. This is the root component of the
/// application. It contains the main router and all the routes. Any path
/// that doesn't match a route renders the not found page.
#[component]
pub fn App() -> impl IntoView {
	view! {
		<Router fallback={|| view! { <NotFound/> }.into_view()}>
			<Routes>
				<Route
					path=AppRoute::Home
					view=|| view! { <Redirect path=AppRoute::Technologies/> }
				/>
				<Route path=AppRoute::Technologies view=Technologies/>
			</Routes>
		</Router>
	}
}

/// Formats the document title. Pages without a title of their own show the
/// site name.
pub fn format_title(title: String) -> String {
	if title.is_empty() {
		constants::SITE_NAME.to_string()
	} else {
		title
	}
}

/// Sets the site-wide title. The empty text is replaced by any page that sets
/// its own `<Title>`.
#[component]
pub fn SiteTitle() -> impl IntoView {
	view! { <Title formatter=format_title text=""/> }
}
