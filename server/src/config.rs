use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
};

use config::{Config, ConfigError, Environment, File};
use leptos_config::{Env, LeptosOptions};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The configuration for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
	/// The address to listen for connections on
	pub bind_address: SocketAddr,
	/// The environment the application is running in. This is set at runtime
	/// based on an environment variable and if the application is compiled with
	/// debug mode.
	pub environment: RunningEnvironment,
	/// The directory the compiled site is served from
	pub site_root: String,
	/// The directory, relative to the site root, holding the wasm and css
	/// bundles
	pub site_pkg_dir: String,
	/// The name of the wasm and css bundles
	pub output_name: String,
}

impl AppConfig {
	/// Get the server configuration for the environment the server is running
	/// in. Debug builds always run in development.
	#[instrument]
	pub fn parse() -> Result<Self, ConfigError> {
		let env = if cfg!(debug_assertions) {
			"dev".to_string()
		} else {
			env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
		};

		Self::parse_for(&env)
	}

	/// Get the server configuration for the given environment name. Values are
	/// read from the defaults, then `config/<env>`, then `APP_*` environment
	/// variables, each overriding the previous one.
	pub fn parse_for(env: &str) -> Result<Self, ConfigError> {
		trace!("Reading config data for `{env}`...");

		let environment = env.parse::<RunningEnvironment>()?;

		Config::builder()
			.set_default("bind_address", "127.0.0.1:3000")?
			.set_default("site_root", "target/site")?
			.set_default("site_pkg_dir", "pkg")?
			.set_default("output_name", frontend::OUTPUT_NAME)?
			.set_default("environment", environment.as_str())?
			.add_source(
				File::with_name(&format!("config/{}", environment.file_stem())).required(false),
			)
			.add_source(
				Environment::with_prefix("APP")
					.prefix_separator("_")
					.separator("__"),
			)
			.build()?
			.try_deserialize()
	}

	/// The options the leptos integration renders the site with
	pub fn leptos_options(&self) -> LeptosOptions {
		LeptosOptions::builder()
			.output_name(self.output_name.clone())
			.site_root(self.site_root.clone())
			.site_pkg_dir(self.site_pkg_dir.clone())
			.env(match self.environment {
				RunningEnvironment::Development => Env::DEV,
				RunningEnvironment::Production => Env::PROD,
			})
			.site_addr(self.bind_address)
			.build()
	}
}

/// The environment the application is running in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunningEnvironment {
	/// The application is running in development mode
	Development,
	/// The application is running in production mode
	Production,
}

impl RunningEnvironment {
	/// The name of the environment, as written in the configuration
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Development => "development",
			Self::Production => "production",
		}
	}

	/// The name of the configuration file for this environment, without the
	/// extension
	pub const fn file_stem(self) -> &'static str {
		match self {
			Self::Development => "dev",
			Self::Production => "prod",
		}
	}
}

impl std::str::FromStr for RunningEnvironment {
	type Err = ConfigError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"prod" | "production" => Ok(Self::Production),
			"dev" | "development" => Ok(Self::Development),
			unknown => Err(ConfigError::Message(format!(
				"unknown running environment `{unknown}`"
			))),
		}
	}
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn environment_names_are_parsed() {
		assert_eq!(
			"dev".parse::<RunningEnvironment>().unwrap(),
			RunningEnvironment::Development
		);
		assert_eq!(
			"development".parse::<RunningEnvironment>().unwrap(),
			RunningEnvironment::Development
		);
		assert_eq!(
			"prod".parse::<RunningEnvironment>().unwrap(),
			RunningEnvironment::Production
		);
		assert_eq!(
			"production".parse::<RunningEnvironment>().unwrap(),
			RunningEnvironment::Production
		);
	}

	#[test]
	fn unknown_environment_is_an_error() {
		assert!(AppConfig::parse_for("staging").is_err());
	}

	#[test]
	fn defaults_are_used_without_a_config_file() {
		let config = AppConfig::parse_for("production").unwrap();

		assert_eq!(config.environment, RunningEnvironment::Production);
		assert_eq!(config.output_name, frontend::OUTPUT_NAME);
		assert_eq!(config.site_pkg_dir, "pkg");
	}

	#[test]
	fn leptos_options_follow_the_config() {
		let config = AppConfig::parse_for("development").unwrap();
		let options = config.leptos_options();

		assert_eq!(options.output_name.to_string(), config.output_name);
		assert_eq!(options.site_root.to_string(), config.site_root);
		assert_eq!(options.site_addr, config.bind_address);
		assert!(matches!(options.env, Env::DEV));
	}
}
