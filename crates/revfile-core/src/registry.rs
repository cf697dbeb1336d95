//! Asset registries and the composite merge algebra
//!
//! A [`RevFileRegistry`] owns its files: it hashes content at registration,
//! derives the revisioned path and stores the immutable record. A
//! [`CompositeRegistry`] is a non-owning view that merges several registries
//! into one lookup surface. [`MergedRegistry`] is the algebra used while an
//! application installs registries one by one.
//!
//! Registration is `&mut self` and expected to run single-threaded during
//! startup; afterwards registries live behind `Arc` and serve unbounded
//! concurrent readers without locking.

use crate::content::{AssetContent, BytesContent, FileContent};
use crate::digest::ContentDigest;
use crate::error::{Error, Result};
use crate::file::RevisionedFile;
use crate::{media, name};
use indexmap::IndexMap;
use mime::Mime;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity assigned to every registry at construction.
///
/// Composite registries deduplicate constituents by comparing ids rather
/// than relying on pointer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
	fn next() -> Self {
		Self(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Read access shared by single registries and composite views.
pub trait RevFileLookup {
	/// Number of registered files.
	fn len(&self) -> usize;

	/// Whether no files are registered.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the file registered under the given public path, if any.
	fn get(&self, path: &str) -> Option<&Arc<RevisionedFile>>;

	/// Iterates all files in registration order.
	fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RevisionedFile>> + '_>;
}

/// A registry for revisioned files, scoped under a base path.
///
/// ```rust,ignore
/// let mut assets = RevFileRegistry::new("/assets/");
/// let main = assets.register_static("main.js", include_bytes!("../assets/main.js")).await?;
/// assert!(main.path().starts_with("/assets/main."));
/// ```
pub struct RevFileRegistry {
	id: RegistryId,
	base_path: String,
	files: IndexMap<String, Arc<RevisionedFile>>,
}

impl RevFileRegistry {
	/// Creates an empty registry.
	///
	/// The base path is normalized to start and end with `/`, so `assets/js`
	/// and `/assets/js/` produce the same registry.
	pub fn new(base_path: &str) -> Self {
		let trimmed = base_path.trim_matches('/');
		let base_path = if trimmed.is_empty() {
			"/".to_string()
		} else {
			format!("/{trimmed}/")
		};
		Self {
			id: RegistryId::next(),
			base_path,
			files: IndexMap::new(),
		}
	}

	/// This registry's identity.
	pub fn id(&self) -> RegistryId {
		self.id
	}

	/// The normalized base path, e.g. `/assets/`.
	pub fn base_path(&self) -> &str {
		&self.base_path
	}

	/// Registers content under the given original name and returns the
	/// immutable revisioned record.
	///
	/// The content is streamed through SHA-256 once, the revision token is
	/// embedded into the file name and the media type is normalized
	/// (`application/javascript` folds onto `text/javascript`).
	///
	/// Two distinct contents landing on the same revisioned path would
	/// silently overwrite each other; with a 10-hex-character token this is
	/// accepted rather than detected.
	///
	/// # Errors
	///
	/// Fails if `original_name` is blank or the content cannot be read.
	pub async fn register(
		&mut self,
		original_name: &str,
		content_type: Mime,
		content: Arc<dyn AssetContent>,
	) -> Result<Arc<RevisionedFile>> {
		if original_name.trim().is_empty() {
			return Err(Error::BlankName {
				name: original_name.to_string(),
			});
		}

		let reader = content.open().await?;
		let digest = ContentDigest::from_reader(reader).await?;
		let file_name = name::derive_name(original_name, &digest.revision());

		let file = Arc::new(RevisionedFile::new(
			media::normalize(content_type),
			format!("{}{file_name}", self.base_path),
			original_name.to_string(),
			digest.weak_etag(),
			digest.integrity(),
			content,
		));
		tracing::debug!(path = file.path(), "registered revisioned file");
		self.files.insert(file.path().to_string(), Arc::clone(&file));
		Ok(file)
	}

	/// Registers in-memory content, inferring the media type from the name.
	pub async fn register_bytes(
		&mut self,
		original_name: &str,
		bytes: impl Into<bytes::Bytes>,
	) -> Result<Arc<RevisionedFile>> {
		let content_type = media::media_type_for(original_name);
		self.register(original_name, content_type, Arc::new(BytesContent::new(bytes)))
			.await
	}

	/// Registers content embedded into the binary, typically via
	/// `include_bytes!`. Media type is inferred from the name.
	pub async fn register_static(
		&mut self,
		original_name: &str,
		bytes: &'static [u8],
	) -> Result<Arc<RevisionedFile>> {
		self.register_bytes(original_name, bytes).await
	}

	/// Registers content produced by a caller-supplied reader factory.
	///
	/// The factory is invoked once for hashing and once per served response.
	pub async fn register_with<F>(
		&mut self,
		original_name: &str,
		content_type: Mime,
		factory: F,
	) -> Result<Arc<RevisionedFile>>
	where
		F: Fn() -> std::io::Result<crate::content::ContentReader> + Send + Sync + 'static,
	{
		self.register(
			original_name,
			content_type,
			Arc::new(crate::content::ReaderFactory::new(factory)),
		)
		.await
	}

	/// Registers a local file, using its file name as the original name and
	/// inferring the media type from it.
	pub async fn register_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<RevisionedFile>> {
		let path = path.as_ref();
		let original_name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_default();
		let content_type = media::media_type_for(&original_name);
		self.register(&original_name, content_type, Arc::new(FileContent::new(path)))
			.await
	}
}

impl RevFileLookup for RevFileRegistry {
	fn len(&self) -> usize {
		self.files.len()
	}

	fn get(&self, path: &str) -> Option<&Arc<RevisionedFile>> {
		self.files.get(path)
	}

	fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RevisionedFile>> + '_> {
		Box::new(self.files.values())
	}
}

impl std::fmt::Debug for RevFileRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RevFileRegistry")
			.field("base_path", &self.base_path)
			.field("len", &self.files.len())
			.finish()
	}
}

/// A read-only view merging several registries into one lookup surface.
///
/// Lookups query constituents in the order they were added; if two
/// constituents define the same path, the earlier one wins. That tie-break
/// is deliberate and mirrors the count in [`RevFileLookup::len`], which sums
/// constituent sizes without deduplicating overlapping paths.
pub struct CompositeRegistry {
	registries: Vec<Arc<RevFileRegistry>>,
}

impl CompositeRegistry {
	/// Creates a composite over two registries.
	pub fn new(first: Arc<RevFileRegistry>, second: Arc<RevFileRegistry>) -> Self {
		let mut composite = Self {
			registries: vec![first],
		};
		composite.add(second);
		composite
	}

	/// Appends a constituent unless one with the same identity is already
	/// present.
	pub fn add(&mut self, registry: Arc<RevFileRegistry>) {
		if !self.registries.iter().any(|r| r.id() == registry.id()) {
			self.registries.push(registry);
		}
	}
}

impl RevFileLookup for CompositeRegistry {
	fn len(&self) -> usize {
		self.registries.iter().map(|r| r.len()).sum()
	}

	fn get(&self, path: &str) -> Option<&Arc<RevisionedFile>> {
		self.registries.iter().find_map(|r| r.get(path))
	}

	fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RevisionedFile>> + '_> {
		Box::new(self.registries.iter().flat_map(|r| r.iter()))
	}
}

impl std::fmt::Debug for CompositeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CompositeRegistry")
			.field("constituents", &self.registries.len())
			.field("len", &self.len())
			.finish()
	}
}

/// The merge algebra used while installing registries.
///
/// Starts out [`Empty`](MergedRegistry::Empty) and absorbs registries one by
/// one. Merging never nests: combining a composite with a further registry
/// extends the same composite, so repeated merging stays flat and preserves
/// first-match-wins ordering.
#[derive(Debug, Default)]
pub enum MergedRegistry {
	/// No registry installed yet.
	#[default]
	Empty,
	/// Exactly one registry installed.
	Single(Arc<RevFileRegistry>),
	/// Two or more distinct registries installed.
	Composite(CompositeRegistry),
}

impl MergedRegistry {
	/// Absorbs another registry.
	///
	/// `Empty` yields the registry itself; merging a registry with itself is
	/// a no-op; two distinct registries form a composite; a composite is
	/// extended in place.
	#[must_use]
	pub fn merge(self, registry: Arc<RevFileRegistry>) -> Self {
		match self {
			Self::Empty => Self::Single(registry),
			Self::Single(existing) if existing.id() == registry.id() => Self::Single(existing),
			Self::Single(existing) => Self::Composite(CompositeRegistry::new(existing, registry)),
			Self::Composite(mut composite) => {
				composite.add(registry);
				Self::Composite(composite)
			}
		}
	}
}

impl RevFileLookup for MergedRegistry {
	fn len(&self) -> usize {
		match self {
			Self::Empty => 0,
			Self::Single(registry) => registry.len(),
			Self::Composite(composite) => composite.len(),
		}
	}

	fn get(&self, path: &str) -> Option<&Arc<RevisionedFile>> {
		match self {
			Self::Empty => None,
			Self::Single(registry) => registry.get(path),
			Self::Composite(composite) => composite.get(path),
		}
	}

	fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RevisionedFile>> + '_> {
		match self {
			Self::Empty => Box::new(std::iter::empty()),
			Self::Single(registry) => registry.iter(),
			Self::Composite(composite) => composite.iter(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_path_is_normalized() {
		assert_eq!(RevFileRegistry::new("/assets/").base_path(), "/assets/");
		assert_eq!(RevFileRegistry::new("assets/js").base_path(), "/assets/js/");
		assert_eq!(RevFileRegistry::new("").base_path(), "/");
	}

	#[test]
	fn registry_ids_are_unique() {
		let a = RevFileRegistry::new("/a/");
		let b = RevFileRegistry::new("/a/");
		assert_ne!(a.id(), b.id());
	}

	#[tokio::test]
	async fn blank_name_is_rejected() {
		let mut registry = RevFileRegistry::new("/assets/");
		let err = registry.register_bytes("   ", &b"x"[..]).await.unwrap_err();
		assert!(matches!(err, Error::BlankName { .. }));
	}

	#[tokio::test]
	async fn merge_algebra_stays_flat() {
		async fn registry_with_one_file(base: &str) -> Arc<RevFileRegistry> {
			let mut registry = RevFileRegistry::new(base);
			registry.register_bytes("a.js", &b"a"[..]).await.unwrap();
			Arc::new(registry)
		}

		let r1 = registry_with_one_file("/one/").await;
		let r2 = registry_with_one_file("/two/").await;
		let r3 = registry_with_one_file("/three/").await;

		// Empty + R = R
		let merged = MergedRegistry::Empty.merge(Arc::clone(&r1));
		assert!(matches!(merged, MergedRegistry::Single(_)));
		assert_eq!(merged.len(), 1);

		// R + R = R
		let merged = merged.merge(Arc::clone(&r1));
		assert!(matches!(merged, MergedRegistry::Single(_)));

		// R1 + R2 = composite of both
		let merged = merged.merge(Arc::clone(&r2));
		assert!(matches!(merged, MergedRegistry::Composite(_)));
		assert_eq!(merged.len(), 2);

		// composite + R3 extends the same composite, never nests
		let merged = merged.merge(Arc::clone(&r3));
		match &merged {
			MergedRegistry::Composite(composite) => assert_eq!(composite.registries.len(), 3),
			other => panic!("expected a flat composite, got {other:?}"),
		}

		// re-adding a constituent is a no-op
		let merged = merged.merge(r2);
		assert_eq!(merged.len(), 3);
	}
}
