use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
	/// Public base URL of the tiles API, used to build tile and metadata links.
	#[serde(default)]
	pub url: Option<String>,
}

impl ServerConfig {
	pub fn url(&self) -> &str {
		self.url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
	}

	pub fn override_optional_url(&mut self, url: &Option<String>) {
		if url.is_some() {
			self.url = url.clone();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_url() {
		assert_eq!(ServerConfig::default().url(), DEFAULT_SERVER_URL);
	}

	#[test]
	fn override_url() {
		let mut config = ServerConfig {
			url: Some("https://api.example.org".to_string()),
		};
		config.override_optional_url(&None);
		assert_eq!(config.url(), "https://api.example.org");
		config.override_optional_url(&Some("http://127.0.0.1:5000".to_string()));
		assert_eq!(config.url(), "http://127.0.0.1:5000");
	}
}
