//! The revisioned-file serving middleware
//!
//! Per-request logic: resolve the path against the installed registries and
//! either stream the asset with cache-forever headers or answer
//! `304 Not Modified`. Paths that resolve to nothing pass through to the
//! next handler, so the middleware can sit in front of any routing setup.

use crate::error::{Result, RevFileError};
use crate::middleware::{Handler, Middleware};
use crate::request::Request;
use crate::response::Response;
use async_trait::async_trait;
use bytes::Bytes;
use hyper::Method;
use hyper::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, HeaderValue, IF_NONE_MATCH};
use revfile_core::{MergedRegistry, RevFileLookup, RevFileRegistry, RevisionedFile};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Cache-control applied by default: clients may cache for a year and never
/// revalidate, because a content change moves the asset to a new path.
pub const DEFAULT_CACHE_CONTROL: &str = "max-age=31536000, public, immutable";

/// Configuration collected before installing [`RevFileMiddleware`].
pub struct RevFileConfig {
	/// The `Cache-Control` header value applied to every served asset.
	pub cache_control: String,
	/// Whether the middleware handles `ETag` and `If-None-Match`.
	pub etag_enabled: bool,
	registry: MergedRegistry,
}

impl RevFileConfig {
	/// Creates the default configuration with no registries installed.
	pub fn new() -> Self {
		Self {
			cache_control: DEFAULT_CACHE_CONTROL.to_string(),
			etag_enabled: true,
			registry: MergedRegistry::Empty,
		}
	}

	/// Installs a registry.
	///
	/// Adding the same registry twice is a no-op; adding several distinct
	/// registries merges them into one flat lookup surface where the
	/// earliest-added registry wins lookups on overlapping paths.
	#[must_use]
	pub fn add(mut self, registry: Arc<RevFileRegistry>) -> Self {
		self.registry = self.registry.merge(registry);
		self
	}

	/// Overrides the `Cache-Control` header value.
	#[must_use]
	pub fn cache_control(mut self, value: impl Into<String>) -> Self {
		self.cache_control = value.into();
		self
	}

	/// Disables `ETag`/`If-None-Match` handling; matches are always served
	/// in full.
	#[must_use]
	pub fn without_etag(mut self) -> Self {
		self.etag_enabled = false;
		self
	}
}

impl Default for RevFileConfig {
	fn default() -> Self {
		Self::new()
	}
}

/// Middleware serving revisioned assets registered in a
/// [`RevFileRegistry`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use revfile_core::RevFileRegistry;
/// use revfile_http::{RevFileConfig, RevFileMiddleware};
///
/// # tokio_test::block_on(async {
/// let mut assets = RevFileRegistry::new("/assets/");
/// assets
///     .register_bytes("main.js", &b"console.log('hi')"[..])
///     .await
///     .unwrap();
///
/// let config = RevFileConfig::new().add(Arc::new(assets));
/// let middleware = RevFileMiddleware::new(config).unwrap();
/// # });
/// ```
#[derive(Debug)]
pub struct RevFileMiddleware {
	cache_control: HeaderValue,
	etag_enabled: bool,
	registry: MergedRegistry,
}

impl RevFileMiddleware {
	/// Validates the configuration and builds the middleware.
	///
	/// # Errors
	///
	/// Fails with [`RevFileError::EmptyRegistry`] if no files were
	/// registered: an application that forgets its assets should abort at
	/// startup, before the first request is served. Also fails if the
	/// configured cache-control string is not a valid header value.
	pub fn new(config: RevFileConfig) -> Result<Self> {
		if config.registry.is_empty() {
			return Err(RevFileError::EmptyRegistry);
		}
		let cache_control = HeaderValue::from_str(&config.cache_control)
			.map_err(|_| RevFileError::InvalidCacheControl(config.cache_control.clone()))?;
		tracing::debug!(
			files = config.registry.len(),
			etag_enabled = config.etag_enabled,
			"installed revisioned file middleware"
		);
		Ok(Self {
			cache_control,
			etag_enabled: config.etag_enabled,
			registry: config.registry,
		})
	}

	async fn serve(&self, file: &RevisionedFile) -> Result<Response> {
		let mut reader = file.content().open().await?;
		let mut body = Vec::new();
		reader.read_to_end(&mut body).await?;

		Ok(Response::ok()
			.with_header(CACHE_CONTROL, self.cache_control.clone())
			.with_header(CONTENT_TYPE, content_type_value(file))
			.with_body(Bytes::from(body)))
	}
}

fn content_type_value(file: &RevisionedFile) -> HeaderValue {
	// Mime renders to plain ASCII, always a valid header value.
	HeaderValue::from_str(file.content_type().as_ref())
		.unwrap_or(HeaderValue::from_static("application/octet-stream"))
}

#[async_trait]
impl Middleware for RevFileMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		if request.method != Method::GET && request.method != Method::HEAD {
			return next.handle(request).await;
		}

		let Some(file) = self.registry.get(request.path()) else {
			// Not a revisioned path; a miss is not an error.
			return next.handle(request).await;
		};
		let file = Arc::clone(file);

		if !self.etag_enabled {
			return self.serve(&file).await;
		}

		let etag = HeaderValue::from_str(file.weak_etag())
			.expect("weak ETag is validated at registration");

		let if_none_match = request
			.headers
			.get(IF_NONE_MATCH)
			.and_then(|value| value.to_str().ok());
		if if_none_match == Some(file.weak_etag()) {
			return Ok(Response::not_modified()
				.with_header(CACHE_CONTROL, self.cache_control.clone())
				.with_header(ETAG, etag));
		}

		let response = self.serve(&file).await?;
		Ok(response.with_header(ETAG, etag))
	}
}
