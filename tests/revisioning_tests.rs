//! Full registration-to-response flow through the facade crate

use revfile::{
	Handler, Middleware, Request, Response, RevFileConfig, RevFileMiddleware, RevFileRegistry,
};
use std::sync::Arc;

struct NotFoundHandler;

#[async_trait::async_trait]
impl Handler for NotFoundHandler {
	async fn handle(&self, _request: Request) -> revfile_http::Result<Response> {
		Ok(Response::not_found())
	}
}

#[tokio::test]
async fn register_link_and_serve() {
	let mut assets = RevFileRegistry::new("/assets/");
	let main = assets
		.register_bytes("main.js", &b"console.log('hi')"[..])
		.await
		.unwrap();

	// The path embeds a ten-character hex revision between name and extension.
	let revision = main
		.path()
		.strip_prefix("/assets/main.")
		.and_then(|rest| rest.strip_suffix(".js"))
		.unwrap();
	assert_eq!(revision.len(), 10);
	assert!(revision.chars().all(|c| c.is_ascii_hexdigit()));

	#[cfg(feature = "html")]
	{
		let tag = revfile::script_tag(&main, &revfile::HtmlOptions::new());
		assert!(tag.contains(main.path()));
	}

	let middleware =
		RevFileMiddleware::new(RevFileConfig::new().add(Arc::new(assets))).unwrap();
	let uri: hyper::Uri = main.path().parse().unwrap();
	let response = middleware
		.process(Request::get(uri), Arc::new(NotFoundHandler))
		.await
		.unwrap();

	assert_eq!(response.status, hyper::StatusCode::OK);
	assert!(
		response
			.headers
			.get(hyper::header::ETAG)
			.unwrap()
			.to_str()
			.unwrap()
			.starts_with("W/\"")
	);
}
