use serde::Deserialize;
use std::path::Path;
use tilemeta_core::{DataLocation, ProviderConfig};

pub const DEFAULT_TILE_MATRIX_SET: &str = "WebMercatorQuad";

/// A published collection and the providers backing it.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct ResourceConfig {
	#[serde(default)]
	pub title: String,

	#[serde(default)]
	pub description: String,

	#[serde(default)]
	pub keywords: Vec<String>,

	#[serde(default)]
	pub providers: Vec<ProviderConfig>,
}

impl ResourceConfig {
	/// The first provider of type `tile`.
	pub fn tile_provider(&self) -> Option<&ProviderConfig> {
		self.providers.iter().find(|p| p.is_tile_provider())
	}

	/// First tile matrix set of the tile provider, `WebMercatorQuad` otherwise.
	pub fn default_tileset(&self) -> &str {
		self
			.tile_provider()
			.and_then(|p| p.options.schemes.first())
			.map_or(DEFAULT_TILE_MATRIX_SET, String::as_str)
	}

	/// Makes relative local `data` paths relative to `base`.
	pub fn resolve_paths(&mut self, base: &Path) {
		for provider in &mut self.providers {
			if let DataLocation::Path(path) = DataLocation::from(provider.data.as_str())
				&& path.is_relative()
			{
				provider.data = base.join(path).to_string_lossy().into_owned();
			}
		}
	}
}

impl From<(&str, &str)> for ResourceConfig {
	fn from((title, data): (&str, &str)) -> Self {
		ResourceConfig {
			title: title.to_owned(),
			providers: vec![ProviderConfig::new("tile", data)],
			..Default::default()
		}
	}
}
