mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the metadata of the HTML tiles page of a collection
	Html(tools::html::Subcommand),

	#[clap(alias = "vendor")]
	/// Print the TileJSON of a collection
	Tilejson(tools::tilejson::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Html(arguments) => tools::html::run(arguments),
		Commands::Tilejson(arguments) => tools::tilejson::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tilemeta"]).unwrap_err().to_string();
		assert!(err.starts_with("Resolves and renders the metadata of PMTiles vector tile sets."));
		assert!(err.contains("\nUsage: tilemeta [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tilemeta", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tilemeta "));
	}

	#[test]
	fn html_subcommand() {
		let output = run_command(vec!["tilemeta", "html"]).unwrap_err().to_string();
		assert!(output.starts_with("Print the metadata of the HTML tiles page of a collection"));
	}

	#[test]
	fn tilejson_subcommand() {
		let output = run_command(vec!["tilemeta", "tilejson"]).unwrap_err().to_string();
		assert!(output.starts_with("Print the TileJSON of a collection"));
	}

	#[test]
	fn missing_resource() {
		let err = run_command(vec!["tilemeta", "tilejson", "../testdata/config.yml", "rivers"]).unwrap_err();
		assert!(err.to_string().starts_with("unknown resource 'rivers'"));
	}
}
