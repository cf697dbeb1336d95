//! Error types for asset registration

use thiserror::Error;

/// Errors raised while registering assets.
///
/// Registration runs during application startup, so every variant here is a
/// startup failure; nothing in this enum occurs on the request path.
#[derive(Debug, Error)]
pub enum Error {
	/// The original name supplied at registration was empty or whitespace.
	#[error("cannot register a file with a blank name: '{name}'")]
	BlankName {
		/// The rejected name, verbatim.
		name: String,
	},

	/// Reading the asset content for hashing failed.
	#[error("failed to read asset content: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for registration operations.
pub type Result<T> = std::result::Result<T, Error>;
