use std::{
	fmt,
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf
};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
	pub port: u16,
	pub host: IpAddr,
	/// Where trunk put the built frontend
	pub dist_dir: PathBuf,
	/// What the outside world calls us, without a trailing slash. Only used for robots.txt and the
	/// sitemap.
	pub public_url: String,
	pub log_level: Level
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigErr {
	BadValue { key: &'static str, value: String },
	MissingDistDir(PathBuf),
	BadPublicUrl(String)
}

impl fmt::Display for ConfigErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::BadValue { key, value } => write!(f, "{key} is set to '{value}', which couldn't be understood"),
			Self::MissingDistDir(dir) => write!(
				f,
				"DIST_DIR ({}) is not a directory; build the frontend with `trunk build` first or point DIST_DIR at its output",
				dir.display()
			),
			Self::BadPublicUrl(url) => write!(f, "PUBLIC_URL ('{url}') must start with http:// or https://")
		}
	}
}

impl std::error::Error for ConfigErr {}

impl Config {
	/// Reads from the environment, and from `.env` if there is one
	pub fn from_env() -> Result<Self, ConfigErr> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigErr> {
		macro_rules! lookup_parse{
			($key:expr, $default:expr) => {
				match lookup($key) {
					None => $default,
					Some(value) => value.trim()
						.parse()
						.map_err(|_| ConfigErr::BadValue { key: $key, value })?
				}
			}
		}

		let port = lookup_parse!("FESTIVAL_PORT", 8080);
		let host = lookup_parse!("FESTIVAL_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST));
		let log_level = lookup_parse!("LOG_LEVEL", Level::INFO);

		let dist_dir = lookup("DIST_DIR")
			.filter(|d| !d.is_empty())
			.map_or_else(|| PathBuf::from("frontend/dist"), PathBuf::from);

		if !dist_dir.is_dir() {
			return Err(ConfigErr::MissingDistDir(dist_dir));
		}

		let public_url = lookup("PUBLIC_URL")
			.unwrap_or_else(|| format!("http://localhost:{port}"));

		if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
			return Err(ConfigErr::BadPublicUrl(public_url));
		}

		Ok(Self {
			port,
			host,
			dist_dir,
			public_url: public_url.trim_end_matches('/').to_string(),
			log_level
		})
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let dist = std::env::temp_dir().display().to_string();
		let mut map = HashMap::from([("DIST_DIR".to_string(), dist)]);
		map.extend(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())));
		move |key: &str| map.get(key).cloned()
	}

	#[test]
	fn defaults() {
		let config = Config::from_lookup(lookup_in(&[])).unwrap();
		assert_eq!(config.port, 8080);
		assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
		assert_eq!(config.public_url, "http://localhost:8080");
		assert_eq!(config.log_level, Level::INFO);
	}

	#[test]
	fn overrides() {
		let config = Config::from_lookup(lookup_in(&[
			("FESTIVAL_PORT", "3000"),
			("FESTIVAL_HOST", "0.0.0.0"),
			("PUBLIC_URL", "https://castelorock.example/"),
			("LOG_LEVEL", "debug")
		])).unwrap();

		assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 3000)));
		assert_eq!(config.public_url, "https://castelorock.example");
		assert_eq!(config.log_level, Level::DEBUG);
	}

	#[test]
	fn bad_values() {
		let err = Config::from_lookup(lookup_in(&[("FESTIVAL_PORT", "eighty")])).unwrap_err();
		assert_eq!(err, ConfigErr::BadValue { key: "FESTIVAL_PORT", value: "eighty".into() });

		let err = Config::from_lookup(lookup_in(&[("FESTIVAL_HOST", "localhost:80")])).unwrap_err();
		assert!(matches!(err, ConfigErr::BadValue { key: "FESTIVAL_HOST", .. }));

		let err = Config::from_lookup(lookup_in(&[("PUBLIC_URL", "castelorock.example")])).unwrap_err();
		assert_eq!(err, ConfigErr::BadPublicUrl("castelorock.example".into()));
	}

	#[test]
	fn dist_dir_must_exist() {
		let err = Config::from_lookup(lookup_in(&[("DIST_DIR", "/definitely/not/a/real/dir")])).unwrap_err();
		assert_eq!(err, ConfigErr::MissingDistDir("/definitely/not/a/real/dir".into()));
	}
}
