use std::fmt::Display;

use strum::EnumIter;

/// The list of all the routes on the frontend
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppRoute {
	/// The root of the site. Redirects to the technologies page.
	#[default]
	Home,
	/// The page listing the technologies the project is built with
	Technologies,
}

impl AppRoute {
	/// The path this route is mounted at
	pub const fn path(self) -> &'static str {
		match self {
			Self::Home => "/",
			Self::Technologies => "/technologies",
		}
	}
}

impl Display for AppRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.path())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use strum::IntoEnumIterator;

	use super::AppRoute;

	#[test]
	fn every_route_is_absolute() {
		for route in AppRoute::iter() {
			assert!(route.to_string().starts_with('/'), "{route:?} is not absolute");
		}
	}

	#[test]
	fn routes_are_unique() {
		let paths = AppRoute::iter().map(AppRoute::path).collect::<HashSet<_>>();

		assert_eq!(paths.len(), AppRoute::iter().count());
	}

	#[test]
	fn technologies_path() {
		assert_eq!(AppRoute::Technologies.to_string(), "/technologies");
	}
}
