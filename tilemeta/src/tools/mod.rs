pub mod html;
pub mod tilejson;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tilemeta::{collection::Collection, config::Config};

/// Arguments shared by the commands that render a collection.
#[derive(Args, Debug)]
pub struct CollectionArgs {
	/// YAML configuration file
	#[arg(required = true)]
	config: PathBuf,

	/// id of the resource in the configuration
	#[arg(required = true)]
	resource: String,

	/// tile matrix set id, defaults to the first scheme of the tile provider
	#[arg(long, value_name = "ID")]
	tileset: Option<String>,

	/// public base URL of the tiles API, overrides `server.url`
	#[arg(long, value_name = "URL")]
	server_url: Option<String>,

	/// pretty-print the JSON output
	#[arg(long, short)]
	pretty: bool,
}

impl CollectionArgs {
	async fn open(&self) -> Result<Collection> {
		let mut config = Config::from_path(&self.config)?;
		config.server.override_optional_url(&self.server_url);
		Collection::open(&config, &self.resource, self.tileset.as_deref()).await
	}

	fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
		Ok(if self.pretty {
			serde_json::to_string_pretty(value)?
		} else {
			serde_json::to_string(value)?
		})
	}
}
