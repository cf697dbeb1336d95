//! Streaming SHA-256 digest and its presentation encodings
//!
//! The digest is computed exactly once per asset, at registration time, by
//! streaming the content through the hasher in fixed-size chunks. Nothing on
//! the request path ever hashes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Number of lowercase hex characters used for the revision token.
///
/// Truncating the digest is intentional: the token only needs a low collision
/// probability over the asset set of one application, not global uniqueness.
/// Collisions are not detected.
const REVISION_LEN: usize = 10;

const READ_BUF_SIZE: usize = 8 * 1024;

/// The raw SHA-256 digest of an asset's content.
///
/// Carries the full 32 bytes; the three public encodings (revision token,
/// weak ETag, subresource integrity) are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
	/// Hashes the complete byte stream of `reader`.
	///
	/// Supports content of unbounded size; the input is never buffered in
	/// full. Read errors propagate to the caller and abort registration.
	pub async fn from_reader<R>(mut reader: R) -> io::Result<Self>
	where
		R: AsyncRead + Unpin,
	{
		let mut hasher = Sha256::new();
		let mut buf = [0u8; READ_BUF_SIZE];
		loop {
			let n = reader.read(&mut buf).await?;
			if n == 0 {
				break;
			}
			hasher.update(&buf[..n]);
		}
		Ok(Self(hasher.finalize().into()))
	}

	/// Hashes an in-memory buffer.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		let mut hasher = Sha256::new();
		hasher.update(bytes);
		Self(hasher.finalize().into())
	}

	/// The short revision token embedded in the revisioned file name,
	/// e.g. `aa4f186fdc`.
	pub fn revision(&self) -> String {
		let mut hex = hex::encode(self.0);
		hex.truncate(REVISION_LEN);
		hex
	}

	/// The weak HTTP validator for this content,
	/// e.g. `W/"qk8Yb9znBHVgFUizgjNa2/+Ks6gXhzXHRBHhlF634Ls="`.
	pub fn weak_etag(&self) -> String {
		format!("W/\"{}\"", STANDARD.encode(self.0))
	}

	/// The subresource integrity value for this content,
	/// e.g. `sha256-qk8Yb9znBHVgFUizgjNa2/+Ks6gXhzXHRBHhlF634Ls=`.
	pub fn integrity(&self) -> String {
		format!("sha256-{}", STANDARD.encode(self.0))
	}
}
