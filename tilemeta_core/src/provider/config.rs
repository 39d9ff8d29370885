use serde::Deserialize;

/// One provider entry of a resource definition.
///
/// Keys not modelled here, like `format` or `options.zoom`, are ignored.
///
/// ```yaml
/// type: tile
/// name: MVT-pmtiles
/// data: http://localhost:8080/lakes/{z}/{x}/{y}.mvt
/// options:
///   layer: lakes
///   schemes: [WebMercatorQuad]
/// format:
///   name: pbf
///   mimetype: application/vnd.mapbox-vector-tile
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderConfig {
	/// Provider category, `tile` for tile providers.
	#[serde(rename = "type")]
	pub kind: String,

	/// Provider implementation name, e.g. `MVT-pmtiles`.
	#[serde(default)]
	pub name: Option<String>,

	/// URL of a PMTiles server or path of a local tile directory.
	pub data: String,

	#[serde(default)]
	pub options: ProviderOptions,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProviderOptions {
	/// Layer name. Derived from `data` when missing.
	#[serde(default)]
	pub layer: Option<String>,

	/// Tile matrix set ids the tiles are published in.
	#[serde(default)]
	pub schemes: Vec<String>,
}

impl ProviderConfig {
	pub fn new(kind: &str, data: &str) -> Self {
		ProviderConfig {
			kind: kind.to_owned(),
			name: None,
			data: data.to_owned(),
			options: ProviderOptions::default(),
		}
	}

	pub fn is_tile_provider(&self) -> bool {
		self.kind == "tile"
	}
}
