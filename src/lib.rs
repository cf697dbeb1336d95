//! # RevFile
//!
//! Content-addressed revisioning and serving for static web assets.
//!
//! Register an asset once at startup and get back an immutable record whose
//! public path embeds a revision token derived from the content's SHA-256
//! digest, e.g. `/assets/main.aa4f186fdc.js`. Because a content change moves
//! the asset to a new path, the middleware can serve every match with
//! `Cache-Control: max-age=31536000, public, immutable` plus a weak ETag for
//! conditional requests.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use revfile::{RevFileConfig, RevFileMiddleware, RevFileRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut assets = RevFileRegistry::new("/assets/");
//!     let main = assets
//!         .register_static("main.js", include_bytes!("../assets/main.js"))
//!         .await?;
//!
//!     // Use `main.path()` wherever the app links the script.
//!     let config = RevFileConfig::new().add(Arc::new(assets));
//!     let middleware = RevFileMiddleware::new(config)?;
//!
//!     // Install `middleware` into the server's middleware chain.
//!     Ok(())
//! }
//! ```
//!
//! ## Crates
//!
//! - [`revfile_core`] - registry, digest engine and data model
//! - [`revfile_http`] - the serving middleware
//! - [`revfile_html`] - tag helpers and import maps (feature `html`)

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use revfile_core::{
	AssetContent, BytesContent, CompositeRegistry, ContentDigest, ContentReader, FileContent,
	MergedRegistry, ReaderFactory, RevFileLookup, RevFileRegistry, RevisionedFile,
};
pub use revfile_http::{
	Handler, Middleware, Request, Response, RevFileConfig, RevFileError, RevFileMiddleware,
};

#[cfg(feature = "html")]
pub use revfile_html::{HtmlOptions, ImportMap, import_map_tag, script_tag, stylesheet_tag};

/// Commonly used items, for glob import.
pub mod prelude {
	pub use revfile_core::{Error as CoreError, Result as CoreResult};
	pub use revfile_core::{RevFileLookup, RevFileRegistry, RevisionedFile};
	pub use revfile_http::{RevFileConfig, RevFileError, RevFileMiddleware};

	#[cfg(feature = "html")]
	pub use revfile_html::{HtmlOptions, ImportMap};
}
