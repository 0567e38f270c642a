use axum::{
	body::Body,
	extract::State,
	http::{Request, StatusCode},
	response::{IntoResponse, Response},
	Router,
};
use leptos_axum::LeptosRoutes;
use leptos_config::LeptosOptions;
use tower::ServiceExt;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::prelude::*;

/// Sets up the routes for the site. Every page route is rendered on the
/// server, anything else is looked up in the site root.
#[instrument(skip(options))]
pub fn setup_routes(options: LeptosOptions) -> Router {
	Router::new()
		.leptos_routes(
			&options,
			leptos_axum::generate_route_list(frontend::render),
			frontend::render,
		)
		.fallback(serve_file)
		.layer(TraceLayer::new_for_http())
		.with_state(options)
}

/// Serves a file from the site root. If there is no such file, the app is
/// rendered instead, which shows the not found page.
async fn serve_file(State(options): State<LeptosOptions>, req: Request<Body>) -> Response {
	let mut file_request = Request::new(Body::empty());
	*file_request.uri_mut() = req.uri().clone();

	let response = match ServeDir::new(options.site_root.to_string())
		.oneshot(file_request)
		.await
	{
		Ok(response) => response,
		Err(err) => match err {},
	};

	if response.status() == StatusCode::NOT_FOUND {
		debug!("File not found: {}", req.uri());
		leptos_axum::render_app_to_stream(options, frontend::render)(req)
			.await
			.into_response()
	} else {
		trace!("Serving file: {}", req.uri());
		response.into_response()
	}
}
