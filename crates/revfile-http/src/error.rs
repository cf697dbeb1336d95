//! Error types for the serving layer

use thiserror::Error;

/// Errors raised by the serving layer.
#[derive(Debug, Error)]
pub enum RevFileError {
	/// The middleware was installed without any registered files.
	///
	/// An application that forgets to add its registries should fail at
	/// startup instead of silently answering 404 forever.
	#[error(
		"no revisioned files registered; add at least one non-empty registry to the RevFileConfig"
	)]
	EmptyRegistry,

	/// The configured cache-control string cannot be used as a header value.
	#[error("cache-control value is not a valid header value: {0:?}")]
	InvalidCacheControl(String),

	/// A registration error bubbled up from the core.
	#[error(transparent)]
	Core(#[from] revfile_core::Error),

	/// Reading asset content while serving a response failed.
	#[error("failed to stream asset content: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for handlers and middleware.
pub type Result<T> = std::result::Result<T, RevFileError>;
