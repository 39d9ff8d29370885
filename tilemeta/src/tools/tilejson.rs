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
	log::debug!("rendering tilejson of {collection}");
	arguments.to_json(&collection.tilejson().await?)
}
