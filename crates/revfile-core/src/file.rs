//! The immutable revisioned file record

use crate::content::AssetContent;
use mime::Mime;
use std::fmt;
use std::sync::Arc;

/// A registered asset whose public path embeds its content revision.
///
/// Created once by [`RevFileRegistry::register`](crate::RevFileRegistry::register)
/// and never mutated afterwards, which is what makes concurrent lock-free
/// lookups safe after startup.
pub struct RevisionedFile {
	content_type: Mime,
	path: String,
	original_name: String,
	weak_etag: String,
	integrity: String,
	content: Arc<dyn AssetContent>,
}

impl RevisionedFile {
	/// Builds a record from the pieces the registry derived.
	///
	/// # Panics
	///
	/// Panics if the weak ETag or integrity string is malformed. Both values
	/// are produced internally from the digest, so a violation is a bug in
	/// this crate, not a recoverable condition.
	pub(crate) fn new(
		content_type: Mime,
		path: String,
		original_name: String,
		weak_etag: String,
		integrity: String,
		content: Arc<dyn AssetContent>,
	) -> Self {
		assert!(
			weak_etag.starts_with("W/\"") && weak_etag.ends_with('"') && weak_etag.len() > 4,
			"generated weak ETag is invalid: {weak_etag}"
		);
		assert!(
			integrity.starts_with("sha256-") && integrity.len() > 7,
			"generated subresource integrity is invalid: {integrity}"
		);
		Self {
			content_type,
			path,
			original_name,
			weak_etag,
			integrity,
			content,
		}
	}

	/// The normalized content type, e.g. `text/javascript; charset=utf-8`.
	pub fn content_type(&self) -> &Mime {
		&self.content_type
	}

	/// The full public path, e.g. `/assets/main.aa4f186fdc.js`.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// The name supplied at registration, e.g. `main.js`.
	///
	/// Used as the import-map key and for diagnostics.
	pub fn original_name(&self) -> &str {
		&self.original_name
	}

	/// The weak HTTP validator, e.g. `W/"qk8Yb9z...4Ls="`.
	pub fn weak_etag(&self) -> &str {
		&self.weak_etag
	}

	/// The subresource integrity value, e.g. `sha256-qk8Yb9z...4Ls=`.
	pub fn integrity(&self) -> &str {
		&self.integrity
	}

	/// The content handle used to stream the response body.
	///
	/// Only the serving layer reads this; the core never inspects the
	/// content again after registration.
	pub fn content(&self) -> &Arc<dyn AssetContent> {
		&self.content
	}
}

impl fmt::Debug for RevisionedFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RevisionedFile")
			.field("path", &self.path)
			.field("original_name", &self.original_name)
			.field("content_type", &self.content_type.as_ref())
			.field("integrity", &self.integrity)
			.finish_non_exhaustive()
	}
}
