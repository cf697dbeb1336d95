//! Re-readable asset content sources
//!
//! The registry only needs two capabilities from a content source: stream the
//! bytes once for hashing at registration, and stream them again for every
//! served response. [`AssetContent`] captures exactly that; how the bytes are
//! obtained (memory, file, caller-supplied factory) is up to the
//! implementation.

use async_trait::async_trait;
use bytes::Bytes;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::AsyncRead;

/// A boxed asynchronous byte stream over an asset's content.
pub type ContentReader = Pin<Box<dyn AsyncRead + Send>>;

/// A content source that can be opened for reading any number of times.
///
/// Each call to [`open`](AssetContent::open) must yield the complete content
/// from the start. The registry opens the source once while hashing; the
/// serving layer opens it once per response.
#[async_trait]
pub trait AssetContent: Send + Sync {
	/// Opens a fresh reader over the complete content.
	async fn open(&self) -> io::Result<ContentReader>;
}

/// In-memory content.
///
/// Backed by [`Bytes`], so clones and repeated opens are cheap. This also
/// covers assets embedded into the binary with `include_bytes!`.
pub struct BytesContent(Bytes);

impl BytesContent {
	/// Wraps the given bytes.
	pub fn new(bytes: impl Into<Bytes>) -> Self {
		Self(bytes.into())
	}
}

#[async_trait]
impl AssetContent for BytesContent {
	async fn open(&self) -> io::Result<ContentReader> {
		Ok(Box::pin(io::Cursor::new(self.0.clone())))
	}
}

/// Content read from a local file.
///
/// The file is opened lazily on every read, so the handle stays valid for the
/// process lifetime without pinning a file descriptor.
pub struct FileContent {
	path: PathBuf,
}

impl FileContent {
	/// Creates a source for the file at `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

#[async_trait]
impl AssetContent for FileContent {
	async fn open(&self) -> io::Result<ContentReader> {
		let file = tokio::fs::File::open(&self.path).await?;
		Ok(Box::pin(file))
	}
}

/// Content produced by a caller-supplied factory.
///
/// The most general source: the factory is invoked once per open and returns
/// a fresh reader. Use this for anything the built-in sources do not cover,
/// such as remote resources fetched through an HTTP client.
pub struct ReaderFactory<F> {
	factory: F,
}

impl<F> ReaderFactory<F>
where
	F: Fn() -> io::Result<ContentReader> + Send + Sync,
{
	/// Wraps the given factory.
	pub fn new(factory: F) -> Self {
		Self { factory }
	}
}

#[async_trait]
impl<F> AssetContent for ReaderFactory<F>
where
	F: Fn() -> io::Result<ContentReader> + Send + Sync,
{
	async fn open(&self) -> io::Result<ContentReader> {
		(self.factory)()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::io::AsyncReadExt;

	async fn read_all(content: &dyn AssetContent) -> Vec<u8> {
		let mut reader = content.open().await.unwrap();
		let mut buf = Vec::new();
		reader.read_to_end(&mut buf).await.unwrap();
		buf
	}

	#[tokio::test]
	async fn bytes_content_is_rereadable() {
		let content = BytesContent::new(&b"hello world"[..]);
		assert_eq!(read_all(&content).await, b"hello world");
		assert_eq!(read_all(&content).await, b"hello world");
	}

	#[tokio::test]
	async fn file_content_reads_from_disk() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("main.js");
		std::fs::write(&path, b"console.log('hi')").unwrap();

		let content = FileContent::new(&path);
		assert_eq!(read_all(&content).await, b"console.log('hi')");
	}

	#[tokio::test]
	async fn file_content_propagates_missing_file() {
		let content = FileContent::new("/definitely/not/here.js");
		assert!(content.open().await.is_err());
	}

	#[tokio::test]
	async fn reader_factory_invokes_per_open() {
		let content =
			ReaderFactory::new(|| Ok(Box::pin(io::Cursor::new(Bytes::from_static(b"abc"))) as ContentReader));
		assert_eq!(read_all(&content).await, b"abc");
		assert_eq!(read_all(&content).await, b"abc");
	}
}
