use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::fmt::Display;
use tilemeta_core::{
	BaseTileProvider, HtmlMetadata, MetadataRequest, PmtilesMetadataResolver, TileProviderTrait, tilejson::TileJson,
};

/// A configured collection together with the resolver of its tile provider.
#[derive(Debug)]
pub struct Collection {
	request: MetadataRequest,
	resolver: PmtilesMetadataResolver<BaseTileProvider>,
}

impl Collection {
	/// Resolves resource `id` of `config`.
	///
	/// `tileset` overrides the first configured scheme.
	pub async fn open(config: &Config, id: &str, tileset: Option<&str>) -> Result<Collection> {
		let resource = config.resource(id)?;
		let provider_config = resource
			.tile_provider()
			.ok_or_else(|| anyhow!("resource '{id}' has no tile provider"))?;

		if let Some(name) = &provider_config.name {
			log::debug!("resource '{id}' uses tile provider {name}");
		}
		let provider = BaseTileProvider::from_config(provider_config)
			.with_context(|| format!("invalid tile provider of resource '{id}'"))?;

		let request = MetadataRequest::new(
			id,
			config.server.url(),
			tileset.unwrap_or_else(|| resource.default_tileset()),
		)
		.with_title(&resource.title)
		.with_layer(provider.layer())
		.with_description(&resource.description)
		.with_keywords(&resource.keywords.iter().map(String::as_str).collect::<Vec<_>>());

		let resolver = PmtilesMetadataResolver::new(provider)
			.await
			.with_context(|| format!("failed to open resource '{id}'"))?;
		log::debug!("opened {resolver}");

		Ok(Collection { request, resolver })
	}

	pub fn request(&self) -> &MetadataRequest {
		&self.request
	}

	pub fn resolver(&self) -> &PmtilesMetadataResolver<BaseTileProvider> {
		&self.resolver
	}

	pub async fn html(&self) -> Result<HtmlMetadata> {
		Ok(self.resolver.html_metadata(&self.request).await?)
	}

	pub async fn tilejson(&self) -> Result<TileJson> {
		Ok(self.resolver.vendor_metadata(&self.request).await?)
	}
}

impl Display for Collection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.request.dataset, self.resolver)
	}
}
