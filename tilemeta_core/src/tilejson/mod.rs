//! TileJSON output model and the descriptor it is built from.
//!
//! A [`TileSetDescriptor`] is whatever a PMTiles server or a tile directory
//! publishes next to its tiles. [`TileJson::from_descriptor`] copies the keys
//! it knows, one by one and only when present, into a [`TileJson`] whose
//! remaining keys keep their defaults.
//!
//! # Example
//! ```rust
//! # use tilemeta_core::tilejson::*;
//! # fn main() -> Result<(), tilemeta_core::ProviderError> {
//! let descriptor = TileSetDescriptor::parse(r#"{"minzoom": 2, "vector_layers": [{"id": "roads"}]}"#)?;
//! let tilejson = TileJson::from_descriptor(&descriptor, "https://example.org/{z}/{x}/{y}?f=mvt")?;
//!
//! assert_eq!(tilejson.minzoom, 2);
//! assert_eq!(tilejson.maxzoom, 30);
//! assert_eq!(tilejson.tiles, ["https://example.org/{z}/{x}/{y}?f=mvt"]);
//! # Ok(())
//! # }
//! ```

mod descriptor;

pub use descriptor::TileSetDescriptor;

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

pub const TILEJSON_VERSION: &str = "3.0.0";
pub const DEFAULT_MIN_ZOOM: u8 = 0;
pub const DEFAULT_MAX_ZOOM: u8 = 30;

/// A TileJSON document describing one vector tile set.
///
/// Every key is serialized, absent optional values as `null`. Values copied
/// from a descriptor are kept as published, whatever their JSON type: a
/// string `minzoom` or MBTiles-style `"w,s,e,n"` bounds pass through as-is.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileJson {
	pub tilejson: String,
	pub name: Option<Value>,
	pub tiles: Vec<String>,
	pub minzoom: Value,
	pub maxzoom: Value,
	pub attribution: Option<Value>,
	pub description: Option<Value>,
	pub vector_layers: Value,
	/// `[west, south, east, north]`
	pub bounds: Option<Value>,
	/// `[longitude, latitude, zoom]`
	pub center: Option<Value>,
}

impl Default for TileJson {
	fn default() -> Self {
		TileJson {
			tilejson: TILEJSON_VERSION.to_owned(),
			name: None,
			tiles: Vec::new(),
			minzoom: Value::from(DEFAULT_MIN_ZOOM),
			maxzoom: Value::from(DEFAULT_MAX_ZOOM),
			attribution: None,
			description: None,
			vector_layers: Value::Array(Vec::new()),
			bounds: None,
			center: None,
		}
	}
}

impl TileJson {
	/// Reshapes a fetched descriptor.
	///
	/// `name`, `description`, `attribution`, `bounds`, `center`, `minzoom`
	/// and `maxzoom` are copied when the descriptor has them. `tiles` becomes
	/// the single `tiles_url`. `vector_layers` is copied unconditionally.
	///
	/// # Errors
	/// [`ProviderError::MissingField`](crate::ProviderError::MissingField) without
	/// `vector_layers`.
	pub fn from_descriptor(descriptor: &TileSetDescriptor, tiles_url: &str) -> Result<TileJson> {
		let mut r = TileJson::default();

		if let Some(v) = descriptor.get("name") {
			r.name = Some(v.clone());
		}
		if let Some(v) = descriptor.get("description") {
			r.description = Some(v.clone());
		}
		if let Some(v) = descriptor.get("attribution") {
			r.attribution = Some(v.clone());
		}
		if let Some(v) = descriptor.get("bounds") {
			r.bounds = Some(v.clone());
		}
		if let Some(v) = descriptor.get("center") {
			r.center = Some(v.clone());
		}
		if let Some(v) = descriptor.get("minzoom") {
			r.minzoom = v.clone();
		}
		if let Some(v) = descriptor.get("maxzoom") {
			r.maxzoom = v.clone();
		}

		r.tiles = vec![tiles_url.to_owned()];
		r.vector_layers = descriptor.vector_layers()?.clone();

		Ok(r)
	}
}
