use crate::tilejson::TileJson;
use serde::Serialize;

/// Metadata shown on the HTML tiles page of a collection.
///
/// `metadata` and `tilejson_url` are only present when the tile set
/// descriptor could be fetched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HtmlMetadata {
	pub id: String,
	pub title: String,
	pub tileset: String,
	/// Tile URL template using `{tileMatrix}/{tileRow}/{tileCol}`.
	pub collections_path: String,
	pub json_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub metadata: Option<TileJson>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tilejson_url: Option<String>,
}

impl HtmlMetadata {
	pub fn has_metadata(&self) -> bool {
		self.metadata.is_some()
	}
}
