use anyhow::Context;
use tracing::{level_filters::LevelFilter, Dispatch, Level};
use tracing_subscriber::{
	filter::Targets,
	fmt::{format::FmtSpan, Layer as FmtLayer},
	layer::SubscriberExt,
	Layer,
};

use crate::prelude::*;

/// Sets up the global default subscriber. Records from the `log` facade, used
/// by the pages and components, are forwarded to it as well.
pub fn initialize(config: &AppConfig) -> anyhow::Result<()> {
	tracing_log::LogTracer::init().context("failed to forward log records to tracing")?;

	tracing::dispatcher::set_global_default(Dispatch::new(
		tracing_subscriber::registry().with(
			FmtLayer::new()
				.with_span_events(FmtSpan::NONE)
				.event_format(
					tracing_subscriber::fmt::format()
						.with_ansi(true)
						.with_file(false)
						.without_time()
						.compact(),
				)
				.with_filter(
					Targets::new()
						.with_target(env!("CARGO_PKG_NAME"), LevelFilter::TRACE)
						.with_target("frontend", LevelFilter::TRACE)
						.with_target("components", LevelFilter::TRACE)
						.with_target("tower_http", LevelFilter::DEBUG),
				)
				.with_filter(LevelFilter::from_level(
					if config.environment == RunningEnvironment::Development {
						Level::TRACE
					} else {
						Level::DEBUG
					},
				)),
		),
	))
	.context("failed to set global default subscriber")?;

	debug!("Logger initialized");
	Ok(())
}
