use url::Url;

/// Where the shields.io static badges are generated
const SHIELDS_BADGE_BASE: &str = "https://img.shields.io/badge";
/// Background colour of the (empty) left half of a badge
const BADGE_LABEL_COLOR: &str = "464646";
/// Colour of the logo drawn on a badge
const BADGE_LOGO_COLOR: &str = "56C0C0";
/// Background colour of the right half of a badge
const BADGE_COLOR: &str = "008080";

/// A technology the project is built with, shown as a linked badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
	/// The name shown on the badge, also used as its alt text
	pub name: &'static str,
	/// The website the badge links to
	pub homepage: &'static str,
	/// The simple-icons logo drawn on the badge
	pub logo: &'static str,
}

/// Every technology shown on the technologies page, in display order
pub const TECHNOLOGIES: [Technology; 10] = [
	Technology {
		name: "Python",
		homepage: "https://www.python.org/",
		logo: "Python",
	},
	Technology {
		name: "Django",
		homepage: "https://www.djangoproject.com/",
		logo: "Django",
	},
	Technology {
		name: "Django REST Framework",
		homepage: "https://www.django-rest-framework.org/",
		logo: "Django REST Framework",
	},
	Technology {
		name: "PostgreSQL",
		homepage: "https://www.postgresql.org/",
		logo: "PostgreSQL",
	},
	Technology {
		name: "NGINX",
		homepage: "https://nginx.org/ru/",
		logo: "NGINX",
	},
	Technology {
		name: "gunicorn",
		homepage: "https://gunicorn.org/",
		logo: "gunicorn",
	},
	Technology {
		name: "Docker",
		homepage: "https://www.docker.com/",
		logo: "Docker",
	},
	Technology {
		name: "Docker compose",
		homepage: "https://www.docker.com/",
		logo: "Docker",
	},
	Technology {
		name: "Docker Hub",
		homepage: "https://www.docker.com/products/docker-hub",
		logo: "Docker",
	},
	Technology {
		name: "GitHub Actions",
		homepage: "https://github.com/features/actions",
		logo: "GitHub actions",
	},
];

/// Why a badge URL couldn't be built
#[derive(Debug, thiserror::Error)]
pub enum BadgeUrlError {
	/// The badge base is not a valid URL
	#[error("invalid badge base url: {0}")]
	InvalidBase(#[from] url::ParseError),
	/// The badge base has no path that segments can be added to
	#[error("badge base url `{0}` cannot have path segments")]
	CannotBeABase(String),
}

impl Technology {
	/// The shields.io badge for this technology. The badge has an empty left
	/// half and the name of the technology on the right.
	pub fn badge_url(&self) -> Result<Url, BadgeUrlError> {
		self.badge_url_from(SHIELDS_BADGE_BASE)
	}

	/// Builds the badge for this technology on top of the given badge service
	fn badge_url_from(&self, base: &str) -> Result<Url, BadgeUrlError> {
		let mut url = Url::parse(base)?;
		url.path_segments_mut()
			.map_err(|()| BadgeUrlError::CannotBeABase(base.to_string()))?
			.push(&format!(
				"-{}-{}",
				escape_badge_text(self.name),
				BADGE_LABEL_COLOR
			));
		url.set_query(Some(&format!(
			"style=flat&logo={}&logoColor={}&color={}",
			escape_query_value(self.logo),
			BADGE_LOGO_COLOR,
			BADGE_COLOR
		)));

		Ok(url)
	}
}

/// Shields.io splits the badge path on `-` and `_`. Literal ones are written
/// twice.
fn escape_badge_text(text: &str) -> String {
	text.replace('-', "--").replace('_', "__")
}

/// `set_query` leaves `&` and `%` alone. Encode them so a value can't start a
/// new parameter or be read as an escape.
fn escape_query_value(value: &str) -> String {
	value.replace('%', "%25").replace('&', "%26")
}
