//! Error type shared by providers and the metadata resolver.

use thiserror::Error;

/// Errors raised while locating or reshaping tile set metadata.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
	/// A URL or path does not exist, cannot be reached or does not hold readable JSON.
	#[error("connection error: {0}")]
	Connection(String),

	/// A key that the output format requires is absent from the descriptor.
	#[error("missing required field '{0}' in tile set descriptor")]
	MissingField(&'static str),

	/// The provider configuration cannot be used.
	#[error("invalid provider configuration: {0}")]
	InvalidConfig(String),
}

impl ProviderError {
	pub fn connection(msg: impl Into<String>) -> Self {
		ProviderError::Connection(msg.into())
	}

	/// `true` for [`ProviderError::Connection`].
	pub fn is_connection(&self) -> bool {
		matches!(self, ProviderError::Connection(_))
	}
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		let err = ProviderError::connection("service does not exist: /data/tiles");
		assert_eq!(err.to_string(), "connection error: service does not exist: /data/tiles");
		assert!(err.is_connection());

		let err = ProviderError::MissingField("vector_layers");
		assert!(err.to_string().contains("vector_layers"));
		assert!(!err.is_connection());

		let err = ProviderError::InvalidConfig("no layer name".to_string());
		assert_eq!(err.to_string(), "invalid provider configuration: no layer name");
	}
}
