//! The seam between the metadata resolver and the tile serving framework.
//!
//! A provider knows where its tiles live (`data`), which layer it serves and
//! how to talk to that location. [`BaseTileProvider`] is the stock
//! implementation backed by `reqwest` and the local filesystem.

mod base;
mod config;

pub use base::BaseTileProvider;
pub use config::{ProviderConfig, ProviderOptions};

use crate::{DataLocation, error::Result, tilejson::TileSetDescriptor};
use async_trait::async_trait;
use reqwest::Url;
use std::fmt::Debug;

#[async_trait]
pub trait TileProviderTrait: Debug + Send + Sync {
	/// The configured data location, a URL or a filesystem path.
	fn data(&self) -> &str;

	/// The configured (or derived) layer name.
	fn layer(&self) -> &str;

	/// Issues a HEAD request and returns the response status code.
	///
	/// # Errors
	/// [`ProviderError::Connection`](crate::ProviderError::Connection) when no response arrives.
	async fn head_status(&self, url: &Url) -> Result<u16>;

	/// Fetches and parses the descriptor stored at `location`.
	///
	/// # Errors
	/// [`ProviderError::Connection`](crate::ProviderError::Connection) when the location is
	/// unreachable, unreadable or does not contain a JSON object.
	async fn fetch_descriptor(&self, location: &DataLocation) -> Result<TileSetDescriptor>;
}
