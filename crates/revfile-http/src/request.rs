//! HTTP request representation

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

/// An incoming HTTP request.
///
/// Carries only what the serving layer needs: method, URI, headers and body.
#[derive(Debug, Clone)]
pub struct Request {
	/// Request method.
	pub method: Method,
	/// Request URI.
	pub uri: Uri,
	/// HTTP protocol version.
	pub version: Version,
	/// Request headers.
	pub headers: HeaderMap,
	/// Request body.
	pub body: Bytes,
}

impl Request {
	/// Creates a request from its parts.
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
		}
	}

	/// Convenience constructor for a plain GET request.
	pub fn get(uri: Uri) -> Self {
		Self::new(
			Method::GET,
			uri,
			Version::HTTP_11,
			HeaderMap::new(),
			Bytes::new(),
		)
	}

	/// The request path without query string, e.g. `/assets/main.abc.js`.
	pub fn path(&self) -> &str {
		self.uri.path()
	}
}
