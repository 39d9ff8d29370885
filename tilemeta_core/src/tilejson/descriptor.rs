use crate::error::{ProviderError, Result};
use serde_json::{Map, Value};

/// A tile set descriptor exactly as it was fetched: a JSON object with any
/// subset of the TileJSON keys.
///
/// Values are never validated: whatever the publisher wrote is handed on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSetDescriptor(Map<String, Value>);

impl TileSetDescriptor {
	/// Parses descriptor text. Invalid JSON or a non-object document is
	/// reported as a connection error: the location did not hold usable data.
	pub fn parse(text: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(text)
			.map_err(|e| ProviderError::connection(format!("invalid tile set descriptor: {e}")))?;
		TileSetDescriptor::try_from(value)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// The `vector_layers` value. Unlike every other key it must be present.
	pub fn vector_layers(&self) -> Result<&Value> {
		self.0.get("vector_layers").ok_or(ProviderError::MissingField("vector_layers"))
	}
}

impl TryFrom<Value> for TileSetDescriptor {
	type Error = ProviderError;

	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::Object(map) => Ok(TileSetDescriptor(map)),
			other => Err(ProviderError::connection(format!(
				"invalid tile set descriptor: expected a JSON object, found {other}"
			))),
		}
	}
}

impl From<Map<String, Value>> for TileSetDescriptor {
	fn from(map: Map<String, Value>) -> Self {
		TileSetDescriptor(map)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn descriptor(value: Value) -> TileSetDescriptor {
		TileSetDescriptor::try_from(value).unwrap()
	}

	#[test]
	fn parse_rejects_non_objects() {
		assert!(TileSetDescriptor::parse("{\"name\":\"lakes\"}").is_ok());
		assert!(TileSetDescriptor::parse("[1,2,3]").unwrap_err().is_connection());
		assert!(TileSetDescriptor::parse("<html>").unwrap_err().is_connection());
		assert!(TileSetDescriptor::parse("").unwrap_err().is_connection());
	}

	#[test]
	fn values_are_returned_as_published() {
		let d = descriptor(json!({ "name": 5, "minzoom": "0", "bounds": "-180,-85,180,85", "center": null }));
		assert!(d.contains_key("center"));
		assert!(!d.contains_key("maxzoom"));
		assert_eq!(d.get("name"), Some(&json!(5)));
		assert_eq!(d.get("minzoom"), Some(&json!("0")));
		assert_eq!(d.get("bounds"), Some(&json!("-180,-85,180,85")));
		assert_eq!(d.get("center"), Some(&Value::Null));
		assert_eq!(d.get("maxzoom"), None);
	}

	#[test]
	fn vector_layers_are_required() {
		let d = descriptor(json!({ "name": "lakes" }));
		assert_eq!(d.vector_layers(), Err(ProviderError::MissingField("vector_layers")));

		let d = descriptor(json!({ "vector_layers": [{ "id": "roads" }] }));
		assert_eq!(d.vector_layers().unwrap(), &json!([{ "id": "roads" }]));

		let d = descriptor(json!({ "vector_layers": "roads" }));
		assert_eq!(d.vector_layers().unwrap(), &json!("roads"));
	}
}
