use super::{ProviderConfig, TileProviderTrait};
use crate::{
	DataLocation,
	error::{ProviderError, Result},
	tilejson::TileSetDescriptor,
};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Tile provider that reaches remote locations over HTTP(S) and local ones
/// through the filesystem.
#[derive(Debug, Clone)]
pub struct BaseTileProvider {
	client: Client,
	data: String,
	layer: String,
}

impl BaseTileProvider {
	/// Creates a provider for `data`.
	///
	/// Without an explicit `layer` the name is derived from `data`, see
	/// [`DataLocation::layer_name`].
	pub fn new(data: &str, layer: Option<&str>) -> Result<BaseTileProvider> {
		let layer = match layer {
			Some(layer) => layer.to_owned(),
			None => DataLocation::from(data)
				.layer_name()
				.ok_or_else(|| ProviderError::InvalidConfig(format!("cannot derive a layer name from '{data}'")))?,
		};
		log::debug!("layer: {layer}");

		let client = Client::builder()
			.build()
			.map_err(|e| ProviderError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

		Ok(BaseTileProvider {
			client,
			data: data.to_owned(),
			layer,
		})
	}

	pub fn from_config(config: &ProviderConfig) -> Result<BaseTileProvider> {
		BaseTileProvider::new(&config.data, config.options.layer.as_deref())
	}

	async fn fetch_text(&self, location: &DataLocation) -> Result<String> {
		match location {
			DataLocation::Url(url) => {
				let response = self
					.client
					.get(url.clone())
					.send()
					.await
					.map_err(|e| ProviderError::connection(format!("failed to request '{url}': {e}")))?;

				let status = response.status();
				if !status.is_success() {
					return Err(ProviderError::connection(format!("'{url}' returned HTTP {status}")));
				}

				response
					.text()
					.await
					.map_err(|e| ProviderError::connection(format!("failed to read response of '{url}': {e}")))
			}
			DataLocation::Path(path) => tokio::fs::read_to_string(path)
				.await
				.map_err(|e| ProviderError::connection(format!("failed to read '{}': {e}", path.display()))),
		}
	}
}

#[async_trait]
impl TileProviderTrait for BaseTileProvider {
	fn data(&self) -> &str {
		&self.data
	}

	fn layer(&self) -> &str {
		&self.layer
	}

	async fn head_status(&self, url: &Url) -> Result<u16> {
		let response = self
			.client
			.head(url.clone())
			.send()
			.await
			.map_err(|e| ProviderError::connection(format!("failed to request '{url}': {e}")))?;
		Ok(response.status().as_u16())
	}

	async fn fetch_descriptor(&self, location: &DataLocation) -> Result<TileSetDescriptor> {
		log::debug!("fetching tile set descriptor from {location}");
		let text = self.fetch_text(location).await?;
		TileSetDescriptor::parse(&text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{TempDir, prelude::*};
	use std::path::PathBuf;

	#[test]
	fn explicit_layer_wins() {
		let provider = BaseTileProvider::new("http://localhost:8080/lakes/{z}/{x}/{y}.mvt", Some("rivers")).unwrap();
		assert_eq!(provider.layer(), "rivers");
		assert_eq!(provider.data(), "http://localhost:8080/lakes/{z}/{x}/{y}.mvt");
	}

	#[test]
	fn derived_layer() {
		let provider = BaseTileProvider::new("http://localhost:8080/lakes/{z}/{x}/{y}.mvt", None).unwrap();
		assert_eq!(provider.layer(), "lakes");

		let provider = BaseTileProvider::new("/data/tiles/ne_110m_lakes", None).unwrap();
		assert_eq!(provider.layer(), "ne_110m_lakes");
	}

	#[test]
	fn underivable_layer() {
		let err = BaseTileProvider::new("http://localhost:8080/", None).unwrap_err();
		assert!(matches!(err, ProviderError::InvalidConfig(_)));
	}

	#[test]
	fn from_config() {
		let mut config = ProviderConfig::new("tile", "/data/tiles/lakes");
		config.options.layer = Some("water".to_string());
		assert_eq!(BaseTileProvider::from_config(&config).unwrap().layer(), "water");
	}

	#[tokio::test]
	async fn fetch_local_descriptor() {
		let dir = TempDir::new().unwrap();
		dir.child("metadata")
			.write_str(r#"{"name":"lakes","vector_layers":[{"id":"lakes"}]}"#)
			.unwrap();

		let provider = BaseTileProvider::new(dir.path().to_str().unwrap(), None).unwrap();
		let descriptor = provider
			.fetch_descriptor(&DataLocation::from(dir.path().join("metadata")))
			.await
			.unwrap();
		assert_eq!(descriptor.get("name"), Some(&serde_json::json!("lakes")));
	}

	#[tokio::test]
	async fn fetch_local_failures_are_connection_errors() {
		let dir = TempDir::new().unwrap();
		dir.child("broken").write_str("{ not json").unwrap();
		dir.child("list").write_str("[]").unwrap();

		let provider = BaseTileProvider::new(dir.path().to_str().unwrap(), None).unwrap();
		for name in ["missing", "broken", "list"] {
			let location = DataLocation::from(PathBuf::from(dir.path()).join(name));
			let err = provider.fetch_descriptor(&location).await.unwrap_err();
			assert!(err.is_connection(), "{name}: {err}");
		}
	}
}
