use crate::url_join;

/// Parameters of a metadata request, as handed over by the serving layer.
///
/// `layer`, `description` and `keywords` are accepted for completeness; the
/// rendered views do not use them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataRequest {
	/// Collection id.
	pub dataset: String,
	/// Public base URL of the serving API.
	pub server_url: String,
	pub layer: String,
	/// Tile matrix set id, e.g. `WebMercatorQuad`.
	pub tileset: String,
	pub title: String,
	pub description: String,
	pub keywords: Vec<String>,
}

impl MetadataRequest {
	pub fn new(dataset: &str, server_url: &str, tileset: &str) -> Self {
		MetadataRequest {
			dataset: dataset.to_owned(),
			server_url: server_url.to_owned(),
			tileset: tileset.to_owned(),
			..Default::default()
		}
	}

	pub fn with_title(mut self, title: &str) -> Self {
		self.title = title.to_owned();
		self
	}

	pub fn with_layer(mut self, layer: &str) -> Self {
		self.layer = layer.to_owned();
		self
	}

	pub fn with_description(mut self, description: &str) -> Self {
		self.description = description.to_owned();
		self
	}

	pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
		self.keywords = keywords.iter().map(|k| (*k).to_owned()).collect();
		self
	}

	/// `<server_url>/collections/<dataset>/tiles/<tileset>/<suffix>`
	pub fn tiles_url(&self, suffix: &str) -> String {
		url_join(&[
			self.server_url.as_str(),
			"collections",
			self.dataset.as_str(),
			"tiles",
			self.tileset.as_str(),
			suffix,
		])
	}
}
