use super::CollectionArgs;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	collection: CollectionArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", render(&arguments.collection).await?);
	Ok(())
}

async fn render(arguments: &CollectionArgs) -> Result<String> {
	let collection = arguments.open().await?;
	log::debug!("rendering html metadata of {collection}");
	log::debug!("tiles served from {}", collection.resolver().service_location());
	let metadata = collection.html().await?;
	if !metadata.has_metadata() {
		log::warn!("no tile set descriptor available for {collection}");
	}
	arguments.to_json(&metadata)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use clap::Parser;
	use pretty_assertions::assert_eq;
	use serde_json::{Value, json};

	#[derive(Parser)]
	struct Cli {
		#[command(flatten)]
		collection: CollectionArgs,
	}

	async fn render_args(args: &[&str]) -> Result<Value> {
		let cli = Cli::try_parse_from(std::iter::once("html").chain(args.iter().copied()))?;
		Ok(serde_json::from_str(&render(&cli.collection).await?)?)
	}

	#[tokio::test]
	async fn with_descriptor() {
		let value = render_args(&["../testdata/config.yml", "lakes"]).await.unwrap();
		assert_eq!(value["id"], "lakes");
		assert_eq!(value["title"], "Large Lakes");
		assert_eq!(
			value["collections_path"],
			"http://localhost:5000/collections/lakes/tiles/WebMercatorQuad/{tileMatrix}/{tileRow}/{tileCol}?f=mvt"
		);
		assert_eq!(
			value["json_url"],
			"http://localhost:5000/collections/lakes/tiles/WebMercatorQuad/metadata?f=json"
		);
		assert_eq!(value["metadata"]["vector_layers"][0]["id"], "lakes");
		assert_eq!(value["metadata"]["minzoom"], 0);
		assert_eq!(value["metadata"]["maxzoom"], 6);
	}

	#[tokio::test]
	async fn without_descriptor() {
		let value = render_args(&["../testdata/config.yml", "empty", "--server-url", "https://maps.example.org"])
			.await
			.unwrap();
		assert_eq!(
			value,
			json!({
				"id": "empty",
				"title": "No descriptor",
				"tileset": "WebMercatorQuad",
				"collections_path": "https://maps.example.org/collections/empty/tiles/WebMercatorQuad/{tileMatrix}/{tileRow}/{tileCol}?f=mvt",
				"json_url": "https://maps.example.org/collections/empty/tiles/WebMercatorQuad/metadata?f=json"
			})
		);
	}

	#[test]
	fn subcommand() {
		run_command(vec!["tilemeta", "-q", "html", "../testdata/config.yml", "lakes"]).unwrap();
	}
}
