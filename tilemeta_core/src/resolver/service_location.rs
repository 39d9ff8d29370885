use std::{fmt::Display, path::PathBuf};

pub const TILE_MATRIX_SET_ID: &str = "{tileMatrixSetId}";
pub const TILE_MATRIX: &str = "{tileMatrix}";
pub const TILE_ROW: &str = "{tileRow}";
pub const TILE_COL: &str = "{tileCol}";

/// Where the tiles of a tile set are served from.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceLocation {
	/// A PMTiles server. `template` addresses single tiles through the
	/// tile matrix set placeholders.
	Remote { base_url: String, template: String },
	/// A local tile directory.
	Local(PathBuf),
}

impl ServiceLocation {
	pub fn template(&self) -> Option<&str> {
		match self {
			ServiceLocation::Remote { template, .. } => Some(template),
			ServiceLocation::Local(_) => None,
		}
	}
}

impl Display for ServiceLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceLocation::Remote { template, .. } => write!(f, "{template}"),
			ServiceLocation::Local(path) => write!(f, "{}", path.display()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn remote_template() {
		let location = ServiceLocation::Remote {
			base_url: "http://localhost:8080".to_string(),
			template: "http://localhost:8080/lakes/tiles/{tileMatrixSetId}/{tileMatrix}/{tileRow}/{tileCol}?f=mvt"
				.to_string(),
		};
		assert_eq!(location.template(), Some(location.to_string().as_str()));
		for placeholder in [TILE_MATRIX_SET_ID, TILE_MATRIX, TILE_ROW, TILE_COL] {
			assert!(location.template().unwrap().contains(placeholder), "{placeholder}");
		}
	}

	#[test]
	fn local_has_no_template() {
		let location = ServiceLocation::Local(PathBuf::from("/data/lakes"));
		assert_eq!(location.template(), None);
		assert_eq!(location.to_string(), "/data/lakes");
	}
}
