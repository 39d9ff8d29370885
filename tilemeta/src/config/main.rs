use super::{ResourceConfig, ServerConfig};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::{
	collections::BTreeMap,
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Top-level configuration file.
///
/// Keys this tool does not use (logging, extents, links, ...) are ignored,
/// so a complete server configuration can be pointed at directly.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
	/// Public server settings
	#[serde(default)]
	pub server: ServerConfig,

	/// Published collections, keyed by collection id
	#[serde(default)]
	pub resources: BTreeMap<String, ResourceConfig>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parses a file and resolves relative local `data` paths against its directory.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let mut cfg =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))?;

		if let Some(base) = path.parent() {
			cfg.resolve_paths(base);
		}
		Ok(cfg)
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		for resource in self.resources.values_mut() {
			resource.resolve_paths(base);
		}
	}

	pub fn resource(&self, id: &str) -> Result<&ResourceConfig> {
		self.resources.get(id).ok_or_else(|| {
			anyhow!(
				"unknown resource '{id}', known resources: {}",
				self.resources.keys().cloned().collect::<Vec<_>>().join(", ")
			)
		})
	}
}
