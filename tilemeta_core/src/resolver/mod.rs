//! Metadata resolver for tile sets published by a PMTiles server or stored
//! in a local tile directory.
//!
//! Construction settles where the tiles and the tile set descriptor live.
//! Every render call fetches the descriptor again and reshapes it into one of
//! two views:
//! - [`PmtilesMetadataResolver::html_metadata`]: envelope for the HTML tiles page,
//!   degrades to the envelope alone when the descriptor cannot be fetched.
//! - [`PmtilesMetadataResolver::vendor_metadata`]: plain TileJSON, fails when the
//!   descriptor cannot be fetched.
//!
//! # Example
//! ```rust,no_run
//! use tilemeta_core::{BaseTileProvider, MetadataRequest, PmtilesMetadataResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tilemeta_core::ProviderError> {
//!     let provider = BaseTileProvider::new("http://localhost:8080/lakes/{z}/{x}/{y}.mvt", None)?;
//!     let resolver = PmtilesMetadataResolver::new(provider).await?;
//!
//!     let request = MetadataRequest::new("lakes", "http://localhost:5000", "WebMercatorQuad");
//!     let tilejson = resolver.vendor_metadata(&request).await?;
//!     println!("{}", tilejson.tiles[0]);
//!     Ok(())
//! }
//! ```

mod html;
mod request;
mod service_location;

pub use html::HtmlMetadata;
pub use request::MetadataRequest;
pub use service_location::{ServiceLocation, TILE_COL, TILE_MATRIX, TILE_MATRIX_SET_ID, TILE_ROW};

use crate::{
	DataLocation,
	error::{ProviderError, Result},
	provider::TileProviderTrait,
	tilejson::TileJson,
	url_join,
};
use reqwest::Url;
use std::{
	fmt::Display,
	path::{Path, PathBuf},
};

/// Name of the descriptor file inside a local tile directory.
pub const LOCAL_METADATA_FILE: &str = "metadata";

#[derive(Debug)]
pub struct PmtilesMetadataResolver<P: TileProviderTrait> {
	provider: P,
	service_location: ServiceLocation,
	service_metadata_location: DataLocation,
}

impl<P: TileProviderTrait> PmtilesMetadataResolver<P> {
	/// Resolves the service and descriptor locations of `provider`.
	///
	/// A missing descriptor is only logged. A missing local tile directory
	/// is fatal.
	///
	/// # Errors
	/// [`ProviderError::Connection`] when `data` is a path that does not exist.
	pub async fn new(provider: P) -> Result<Self> {
		let (service_location, service_metadata_location) = match DataLocation::from(provider.data()) {
			location @ DataLocation::Url(_) => resolve_remote(&provider, &location).await?,
			DataLocation::Path(path) => resolve_local(&path).await?,
		};

		Ok(PmtilesMetadataResolver {
			provider,
			service_location,
			service_metadata_location,
		})
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	pub fn service_location(&self) -> &ServiceLocation {
		&self.service_location
	}

	/// Location of the tile set descriptor.
	pub fn service_metadata_location(&self) -> &DataLocation {
		&self.service_metadata_location
	}

	/// Renders the metadata of the HTML tiles page.
	///
	/// A descriptor that cannot be fetched leaves out `metadata` and
	/// `tilejson_url`.
	///
	/// # Errors
	/// Only [`ProviderError::MissingField`] for a descriptor without
	/// `vector_layers`. Optional keys are copied whatever their type.
	pub async fn html_metadata(&self, request: &MetadataRequest) -> Result<HtmlMetadata> {
		let service_url = request.tiles_url(&format!("{TILE_MATRIX}/{TILE_ROW}/{TILE_COL}?f=mvt"));
		let metadata_url = request.tiles_url("metadata");

		let mut metadata = HtmlMetadata {
			id: request.dataset.clone(),
			title: request.title.clone(),
			tileset: request.tileset.clone(),
			collections_path: service_url.clone(),
			json_url: format!("{metadata_url}?f=json"),
			metadata: None,
			tilejson_url: None,
		};

		match self.provider.fetch_descriptor(&self.service_metadata_location).await {
			Ok(descriptor) => {
				metadata.metadata = Some(TileJson::from_descriptor(&descriptor, &service_url)?);
				metadata.tilejson_url = Some(format!("{metadata_url}?f=tilejson"));
			}
			Err(ProviderError::Connection(msg)) => {
				log::debug!("no tile set descriptor for '{}': {msg}", request.dataset);
			}
			Err(e) => return Err(e),
		}

		Ok(metadata)
	}

	/// Renders the descriptor as TileJSON with a `{z}/{x}/{y}` tile URL.
	///
	/// # Errors
	/// [`ProviderError::Connection`] naming the descriptor location when it
	/// cannot be fetched, [`ProviderError::MissingField`] without
	/// `vector_layers`.
	pub async fn vendor_metadata(&self, request: &MetadataRequest) -> Result<TileJson> {
		let descriptor = self
			.provider
			.fetch_descriptor(&self.service_metadata_location)
			.await
			.map_err(|e| match e {
				ProviderError::Connection(cause) => {
					let msg = format!(
						"no tiles metadata json available: {} ({cause})",
						self.service_metadata_location
					);
					log::error!("{msg}");
					ProviderError::Connection(msg)
				}
				other => other,
			})?;

		TileJson::from_descriptor(&descriptor, &request.tiles_url("{z}/{x}/{y}?f=mvt"))
	}
}

impl<P: TileProviderTrait> Display for PmtilesMetadataResolver<P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<PmtilesMetadataResolver> {}", self.provider.data())
	}
}

async fn resolve_remote<P: TileProviderTrait>(
	provider: &P,
	data: &DataLocation,
) -> Result<(ServiceLocation, DataLocation)> {
	let base_url = data
		.origin()
		.ok_or_else(|| ProviderError::InvalidConfig(format!("'{data}' has no host")))?;
	let layer = provider.layer();
	log::debug!("layer: {layer}");

	let template = url_join(&[
		base_url.as_str(),
		layer,
		"tiles",
		format!("{TILE_MATRIX_SET_ID}/{TILE_MATRIX}/{TILE_ROW}/{TILE_COL}?f=mvt").as_str(),
	]);

	// go-pmtiles publishes the descriptor as `/<layer>.json`, not under the tile path
	let tiles_metadata_url = template
		.split(&format!("{TILE_MATRIX}/{TILE_ROW}/{TILE_COL}"))
		.next()
		.map(|head| url_join(&[head, "metadata"]))
		.unwrap_or_default();
	let metadata_url = url_join(&[base_url.as_str(), format!("{layer}.json").as_str()]);
	log::debug!("using '{metadata_url}' instead of '{tiles_metadata_url}'");

	let metadata_url =
		Url::parse(&metadata_url).map_err(|e| ProviderError::InvalidConfig(format!("'{metadata_url}': {e}")))?;

	match provider.head_status(&metadata_url).await {
		Ok(200) => (),
		Ok(status) => {
			let msg = format!("service metadata does not exist: {metadata_url} (HTTP {status})");
			log::error!("{msg}");
			log::warn!("{msg}");
		}
		Err(e) => {
			let msg = format!("service metadata does not exist: {metadata_url} ({e})");
			log::error!("{msg}");
			log::warn!("{msg}");
		}
	}

	Ok((
		ServiceLocation::Remote { base_url, template },
		DataLocation::Url(metadata_url),
	))
}

async fn exists(path: &Path) -> bool {
	tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn resolve_local(path: &Path) -> Result<(ServiceLocation, DataLocation)> {
	if !exists(path).await {
		let msg = format!("service does not exist: {}", path.display());
		log::error!("{msg}");
		return Err(ProviderError::Connection(msg));
	}

	let metadata_path: PathBuf = path.join(LOCAL_METADATA_FILE);
	if !exists(&metadata_path).await {
		let msg = format!("service metadata does not exist: {}", metadata_path.display());
		log::error!("{msg}");
		log::warn!("{msg}");
	}

	Ok((
		ServiceLocation::Local(path.to_path_buf()),
		DataLocation::Path(metadata_path),
	))
}
