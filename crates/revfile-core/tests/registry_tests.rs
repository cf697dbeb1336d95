//! Registration and composite lookup behavior

use revfile_core::{CompositeRegistry, RevFileLookup, RevFileRegistry};
use std::sync::Arc;

const MAIN_JS: &[u8] = b"console.log('hi')";

#[tokio::test]
async fn registers_under_revisioned_path() {
	let mut assets = RevFileRegistry::new("/assets/");
	let main = assets.register_bytes("main.js", MAIN_JS).await.unwrap();

	// SHA-256 of the content starts with d68859168d.
	assert_eq!(main.path(), "/assets/main.d68859168d.js");
	assert_eq!(main.original_name(), "main.js");
	assert_eq!(
		main.weak_etag(),
		"W/\"1ohZFo3B9w3UOFBbfx6JSomkpkME90iPs1r/qXzvX7Y=\""
	);
	assert_eq!(
		main.integrity(),
		"sha256-1ohZFo3B9w3UOFBbfx6JSomkpkME90iPs1r/qXzvX7Y="
	);
	assert_eq!(assets.len(), 1);
	assert!(assets.get(main.path()).is_some());
	assert!(assets.get("/assets/main.js").is_none());
}

#[tokio::test]
async fn registration_is_deterministic() {
	let mut first = RevFileRegistry::new("/assets/");
	let mut second = RevFileRegistry::new("/assets/");

	let a = first.register_bytes("main.js", MAIN_JS).await.unwrap();
	let b = second.register_bytes("main.js", MAIN_JS).await.unwrap();

	assert_eq!(a.path(), b.path());
	assert_eq!(a.weak_etag(), b.weak_etag());
	assert_eq!(a.integrity(), b.integrity());
}

#[tokio::test]
async fn content_change_moves_path_and_digest() {
	let mut assets = RevFileRegistry::new("/assets/");
	let original = assets.register_bytes("main.js", MAIN_JS).await.unwrap();
	let changed = assets
		.register_bytes("main.js", &b"console.log('bye')"[..])
		.await
		.unwrap();

	assert_ne!(original.path(), changed.path());
	assert_ne!(original.weak_etag(), changed.weak_etag());
	assert_ne!(original.integrity(), changed.integrity());
	// Both revisions stay resolvable.
	assert_eq!(assets.len(), 2);
}

#[tokio::test]
async fn name_change_keeps_the_digest() {
	let mut assets = RevFileRegistry::new("/assets/");
	let a = assets.register_bytes("main.js", MAIN_JS).await.unwrap();
	let b = assets.register_bytes("other.js", MAIN_JS).await.unwrap();

	assert_ne!(a.path(), b.path());
	assert_eq!(a.weak_etag(), b.weak_etag());
	assert_eq!(a.integrity(), b.integrity());
}

#[tokio::test]
async fn media_type_is_normalized_and_forcible() {
	let mut assets = RevFileRegistry::new("/assets/");

	let legacy: mime::Mime = "application/javascript; charset=utf-8".parse().unwrap();
	let main = assets
		.register(
			"main.js",
			legacy,
			Arc::new(revfile_core::BytesContent::new(MAIN_JS)),
		)
		.await
		.unwrap();
	assert_eq!(main.content_type().essence_str(), "text/javascript");

	// A forced type is respected as-is.
	let forced = assets
		.register(
			"main3.js",
			mime::TEXT_CSS,
			Arc::new(revfile_core::BytesContent::new(&b"p {}"[..])),
		)
		.await
		.unwrap();
	assert_eq!(forced.content_type(), &mime::TEXT_CSS);
	assert!(forced.path().ends_with(".js"));
}

#[tokio::test]
async fn registers_from_the_filesystem() {
	let dir = tempfile::TempDir::new().unwrap();
	let path = dir.path().join("styles.css");
	std::fs::write(&path, b"body { color: red; }").unwrap();

	let mut assets = RevFileRegistry::new("/assets/css/");
	let styles = assets.register_file(&path).await.unwrap();

	assert_eq!(styles.path(), "/assets/css/styles.5de625c363.css");
	assert_eq!(styles.content_type().essence_str(), "text/css");
}

#[tokio::test]
async fn iterates_in_registration_order() {
	let mut assets = RevFileRegistry::new("/assets/");
	assets.register_bytes("b.js", &b"b"[..]).await.unwrap();
	assets.register_bytes("a.js", &b"a"[..]).await.unwrap();
	assets.register_bytes("c.js", &b"c"[..]).await.unwrap();

	let names: Vec<_> = assets.iter().map(|f| f.original_name().to_string()).collect();
	assert_eq!(names, ["b.js", "a.js", "c.js"]);

	// Restartable: a second pass yields the same sequence.
	let again: Vec<_> = assets.iter().map(|f| f.original_name().to_string()).collect();
	assert_eq!(names, again);
}

async fn two_registries() -> (Arc<RevFileRegistry>, Arc<RevFileRegistry>) {
	let mut example = RevFileRegistry::new("/example/");
	example.register_bytes("main.js", &b"one"[..]).await.unwrap();
	example.register_bytes("main2.js", &b"two"[..]).await.unwrap();

	let mut test = RevFileRegistry::new("/test/");
	test.register_bytes("main2.js", &b"two"[..]).await.unwrap();
	test.register_bytes("main3.js", &b"three"[..]).await.unwrap();

	(Arc::new(example), Arc::new(test))
}

#[tokio::test]
async fn composite_does_not_add_duplicates() {
	let (example, test) = two_registries().await;
	let mut composite = CompositeRegistry::new(Arc::clone(&example), Arc::clone(&test));
	assert_eq!(composite.len(), 4);

	composite.add(test);
	assert_eq!(composite.len(), 4);
}

#[tokio::test]
async fn composite_iterates_constituents_in_order() {
	let (example, test) = two_registries().await;
	let composite = CompositeRegistry::new(Arc::clone(&example), Arc::clone(&test));

	let paths: Vec<_> = composite.iter().map(|f| f.path().to_string()).collect();
	let expected: Vec<_> = example
		.iter()
		.chain(test.iter())
		.map(|f| f.path().to_string())
		.collect();
	assert_eq!(paths, expected);
}

#[tokio::test]
async fn composite_lookup_is_first_match_wins() {
	let (example, test) = two_registries().await;
	let composite = CompositeRegistry::new(Arc::clone(&example), Arc::clone(&test));

	// Paths under /example/ resolve through the first constituent.
	let from_example = example.iter().next().unwrap();
	assert!(composite.get(from_example.path()).is_some());

	// Paths only under /test/ still resolve.
	let from_test = test.iter().last().unwrap();
	assert!(composite.get(from_test.path()).is_some());

	assert!(composite.get("/nowhere/main.js").is_none());
}
