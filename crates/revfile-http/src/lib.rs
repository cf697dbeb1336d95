//! # RevFile HTTP
//!
//! Serving layer for revisioned assets.
//!
//! [`RevFileMiddleware`] resolves incoming request paths against the
//! installed registries and answers matches with cache-forever headers, a
//! weak ETag and `304 Not Modified` support. Unmatched paths pass through to
//! the next handler untouched.
//!
//! ```rust,ignore
//! use revfile_http::{RevFileConfig, RevFileMiddleware};
//!
//! let config = RevFileConfig::new().add(app_assets).add(vendor_assets);
//! let middleware = RevFileMiddleware::new(config)?; // fails fast if nothing registered
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod middleware;
pub mod request;
pub mod response;
pub mod revfile;

pub use error::{Result, RevFileError};
pub use middleware::{Handler, Middleware};
pub use request::Request;
pub use response::Response;
pub use revfile::{RevFileConfig, RevFileMiddleware};
