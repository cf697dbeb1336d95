//! # RevFile Core
//!
//! Content-addressed revisioning for static web assets.
//!
//! Every registered asset is hashed with SHA-256 at registration time and
//! served under a path that embeds a short revision token derived from that
//! hash, e.g. `/assets/main.aa4f186fdc.js`. Because the path changes whenever
//! the content changes, responses can carry cache-forever headers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use revfile_core::RevFileRegistry;
//!
//! #[tokio::main]
//! async fn main() -> revfile_core::Result<()> {
//!     let mut assets = RevFileRegistry::new("/assets/");
//!     let main = assets.register_static("main.js", include_bytes!("../assets/main.js")).await?;
//!
//!     // Use `main.path()` throughout the application.
//!     println!("{}", main.path());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`digest`] - Streaming SHA-256 and the derived revision/ETag/integrity encodings
//! - [`name`] - Revisioned file name derivation
//! - [`media`] - Media type inference and normalization
//! - [`content`] - Re-readable asset content sources
//! - [`file`] - The immutable [`RevisionedFile`] record
//! - [`registry`] - [`RevFileRegistry`], [`CompositeRegistry`] and the merge algebra
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod digest;
pub mod error;
pub mod file;
pub mod media;
pub mod name;
pub mod registry;

pub use content::{AssetContent, BytesContent, ContentReader, FileContent, ReaderFactory};
pub use digest::ContentDigest;
pub use error::{Error, Result};
pub use file::RevisionedFile;
pub use registry::{
	CompositeRegistry, MergedRegistry, RegistryId, RevFileLookup, RevFileRegistry,
};
