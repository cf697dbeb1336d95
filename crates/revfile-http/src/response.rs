//! HTTP response representation

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};

/// An outgoing HTTP response.
#[derive(Debug)]
pub struct Response {
	/// Response status code.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Response body.
	pub body: Bytes,
}

impl Response {
	/// Creates an empty response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Creates a `200 OK` response.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Creates a `304 Not Modified` response.
	pub fn not_modified() -> Self {
		Self::new(StatusCode::NOT_MODIFIED)
	}

	/// Creates a `404 Not Found` response.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Replaces the body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Inserts a header.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constructors_set_status() {
		assert_eq!(Response::ok().status, StatusCode::OK);
		assert_eq!(Response::not_modified().status, StatusCode::NOT_MODIFIED);
		assert_eq!(Response::not_found().status, StatusCode::NOT_FOUND);
		assert!(Response::ok().body.is_empty());
	}

	#[test]
	fn builders_compose() {
		let response = Response::ok()
			.with_header(
				hyper::header::CACHE_CONTROL,
				HeaderValue::from_static("no-store"),
			)
			.with_body("hello");
		assert_eq!(response.body, Bytes::from("hello"));
		assert_eq!(
			response.headers.get(hyper::header::CACHE_CONTROL).unwrap(),
			"no-store"
		);
	}
}
