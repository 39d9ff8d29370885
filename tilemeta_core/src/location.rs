use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::{
	fmt::{Debug, Display},
	path::{Path, PathBuf},
};

/// Where a tile set or its descriptor lives: a remote URL or a local path.
#[derive(Clone, PartialEq)]
pub enum DataLocation {
	Url(Url),
	Path(PathBuf),
}

impl DataLocation {
	pub fn as_url(&self) -> Option<&Url> {
		match self {
			DataLocation::Url(url) => Some(url),
			DataLocation::Path(_) => None,
		}
	}

	pub fn as_path(&self) -> Option<&Path> {
		match self {
			DataLocation::Url(_) => None,
			DataLocation::Path(path) => Some(path.as_path()),
		}
	}

	pub fn is_url(&self) -> bool {
		matches!(self, DataLocation::Url(_))
	}

	/// `<scheme>://<host>[:<port>]` of a URL location.
	pub fn origin(&self) -> Option<String> {
		let url = self.as_url()?;
		let host = url.host_str()?;
		Some(match url.port() {
			Some(port) => format!("{}://{host}:{port}", url.scheme()),
			None => format!("{}://{host}", url.scheme()),
		})
	}

	/// Guesses the layer name from the location.
	///
	/// URLs use the path in front of the first `{z}/{x}/{y}` placeholder,
	/// paths use their last component.
	pub fn layer_name(&self) -> Option<String> {
		match self {
			DataLocation::Url(url) => {
				let path = percent_decode_str(url.path()).decode_utf8_lossy();
				let layer = ["/{z}/{x}/{y}", "/{z}/{y}/{x}"]
					.iter()
					.find_map(|placeholder| path.split_once(*placeholder).map(|(head, _)| head))
					.unwrap_or(&*path);
				let layer = layer.trim_matches('/');
				(!layer.is_empty()).then(|| layer.to_string())
			}
			DataLocation::Path(path) => path.file_name().map(|name| name.to_string_lossy().into_owned()),
		}
	}
}

impl From<&str> for DataLocation {
	fn from(s: &str) -> Self {
		match Url::parse(s) {
			Ok(url) if url.has_host() => DataLocation::Url(url),
			_ => DataLocation::Path(PathBuf::from(s)),
		}
	}
}

impl From<String> for DataLocation {
	fn from(s: String) -> Self {
		DataLocation::from(s.as_str())
	}
}

impl From<PathBuf> for DataLocation {
	fn from(p: PathBuf) -> Self {
		DataLocation::Path(p)
	}
}

impl From<&Path> for DataLocation {
	fn from(p: &Path) -> Self {
		DataLocation::Path(p.to_path_buf())
	}
}

impl From<Url> for DataLocation {
	fn from(u: Url) -> Self {
		DataLocation::Url(u)
	}
}

impl Display for DataLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DataLocation::Url(url) => write!(f, "{url}"),
			DataLocation::Path(path) => write!(f, "{}", path.display()),
		}
	}
}

impl Debug for DataLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DataLocation::Url(url) => write!(f, "Url({url})"),
			DataLocation::Path(path) => write!(f, "Path({})", path.display()),
		}
	}
}

/// Joins URL parts with exactly one `/` between them.
///
/// Surrounding whitespace and slashes of every part are dropped, so
/// `url_join(&["http://a/", "/b"])` and `url_join(&["http://a", "b"])` agree.
pub fn url_join(parts: &[&str]) -> String {
	parts
		.iter()
		.map(|part| part.trim().trim_matches('/'))
		.collect::<Vec<_>>()
		.join("/")
		.trim_end_matches('/')
		.to_string()
}
