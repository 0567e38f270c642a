#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Serves the Foodgram technologies page, rendered on the server

use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::prelude::*;

/// The configuration for the server.
mod config;
/// Sets up the global logger.
mod logger;
/// The routes of the server, and the fallback that serves static files.
mod routes;

/// The prelude module contains all the commonly used types and traits that are
/// used across the crate.
pub mod prelude {
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::config::*;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = AppConfig::parse().context("failed to parse configuration")?;

	logger::initialize(&config)?;
	info!(
		"Configuration read. Running environment set to {}",
		config.environment
	);

	let tcp_listener = TcpListener::bind(config.bind_address)
		.await
		.with_context(|| format!("failed to bind to {}", config.bind_address))?;

	info!(
		"Listening for connections on http://{}",
		tcp_listener.local_addr()?
	);

	axum::serve(tcp_listener, routes::setup_routes(config.leptos_options()))
		.with_graceful_shutdown(exit_signal())
		.await
		.context("server stopped unexpectedly")?;

	info!("Server exited");
	Ok(())
}

/// Resolves once the server is asked to stop, by SIGINT or SIGTERM.
#[instrument]
async fn exit_signal() {
	let ctrl_c = wait_for_signal("SIGINT", tokio::signal::ctrl_c());

	#[cfg(unix)]
	let terminate = wait_for_signal("SIGTERM", async {
		use tokio::signal::unix::{signal, SignalKind};

		signal(SignalKind::terminate())?.recv().await;
		Ok(())
	});

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = ctrl_c => (),
		() = terminate => (),
	}
	info!("Shutdown signal received, shutting down server gracefully");
}

/// Waits for a signal. If the signal can't be listened for, the error is
/// logged and this never resolves, so the server keeps running until another
/// signal stops it.
async fn wait_for_signal<F>(name: &str, signal: F)
where
	F: Future<Output = std::io::Result<()>>,
{
	if let Err(err) = signal.await {
		error!("Cannot listen for {name}: {err}");
		std::future::pending::<()>().await;
	}
}

#[cfg(test)]
mod tests {
	use std::{io, time::Duration};

	use tokio::time::timeout;

	use super::wait_for_signal;

	#[tokio::test]
	async fn received_signal_resolves() {
		let waited = timeout(
			Duration::from_millis(100),
			wait_for_signal("SIGTEST", async { Ok(()) }),
		)
		.await;

		assert!(waited.is_ok());
	}

	#[tokio::test]
	async fn failing_listener_keeps_waiting_without_panicking() {
		let waited = timeout(
			Duration::from_millis(100),
			wait_for_signal("SIGTEST", async {
				Err(io::Error::new(io::ErrorKind::Other, "no signal support"))
			}),
		)
		.await;

		assert!(waited.is_err());
	}
}
