//! Handler and middleware traits
//!
//! The `Handler` trait is the core abstraction for producing responses;
//! middleware wraps handlers to add cross-cutting behavior. Composition over
//! inheritance: a middleware receives the request plus the next handler in
//! the chain and decides whether to delegate.

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use async_trait::async_trait;
use std::sync::Arc;

/// Handles a request and produces a response.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation so `Arc<dyn Handler>` is itself a handler,
/// enabling shared ownership across threads.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Wraps a handler with request/response processing.
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request, delegating to `next` where appropriate.
	///
	/// # Errors
	///
	/// Returns an error if the middleware or the next handler fails.
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;
}
