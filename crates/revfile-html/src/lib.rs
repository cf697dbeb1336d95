//! # RevFile HTML
//!
//! Pure formatting helpers over [`RevisionedFile`]: `<script>` and `<link>`
//! tags pointing at the revisioned path, optionally carrying the subresource
//! integrity attribute, plus [import
//! map](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script/type/importmap)
//! payloads keyed by the original file names.
//!
//! Nothing in this crate performs I/O; everything formats data the registry
//! already computed.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use revfile_core::RevisionedFile;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Rendering options shared by the tag helpers.
///
/// Defaults to classic scripts with no integrity attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOptions {
	/// Emit `integrity` attributes on script/stylesheet tags and the
	/// integrity section of import maps.
	pub use_subresource_integrity: bool,
	/// Emit `type="module"` on script tags. Required when scripts use
	/// import statements resolved through an import map.
	pub use_js_modules: bool,
}

impl HtmlOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables `integrity` attributes.
	#[must_use]
	pub fn with_subresource_integrity(mut self) -> Self {
		self.use_subresource_integrity = true;
		self
	}

	/// Emits scripts as JS modules.
	#[must_use]
	pub fn with_js_modules(mut self) -> Self {
		self.use_js_modules = true;
		self
	}
}

/// Escapes a value for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Renders a `<script>` tag for the given revisioned file.
///
/// The `src` attribute is the revisioned path; `type` is the file's media
/// type, or `module` when [`HtmlOptions::use_js_modules`] is set.
pub fn script_tag(file: &RevisionedFile, options: &HtmlOptions) -> String {
	let script_type = if options.use_js_modules {
		"module"
	} else {
		file.content_type().essence_str()
	};
	let mut tag = format!(
		"<script src=\"{}\" type=\"{}\"",
		escape_attr(file.path()),
		escape_attr(script_type)
	);
	if options.use_subresource_integrity {
		let _ = write!(tag, " integrity=\"{}\"", escape_attr(file.integrity()));
	}
	tag.push_str("></script>");
	tag
}

/// Renders a `<link rel="stylesheet">` tag for the given revisioned file.
pub fn stylesheet_tag(file: &RevisionedFile, options: &HtmlOptions) -> String {
	let mut tag = format!(
		"<link href=\"{}\" type=\"{}\" rel=\"stylesheet\"",
		escape_attr(file.path()),
		escape_attr(file.content_type().essence_str())
	);
	if options.use_subresource_integrity {
		let _ = write!(tag, " integrity=\"{}\"", escape_attr(file.integrity()));
	}
	tag.push('>');
	tag
}

/// An import-map payload.
///
/// `imports` maps each file's original name to its revisioned path, so
/// client-side `import "main.js"` resolves to the fingerprinted URL. The
/// optional `integrity` section maps revisioned paths to their subresource
/// integrity values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportMap {
	/// Module specifier to URL mapping.
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub imports: IndexMap<String, String>,
	/// Scoped specifier mappings; unused by the helpers but part of the
	/// import-map shape.
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub scopes: IndexMap<String, IndexMap<String, String>>,
	/// URL to subresource-integrity mapping.
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub integrity: IndexMap<String, String>,
}

impl ImportMap {
	/// Builds an import map over the given files.
	///
	/// With `with_integrity`, the integrity section is populated from each
	/// file's subresource integrity value.
	pub fn from_files<'a>(
		files: impl IntoIterator<Item = &'a RevisionedFile>,
		with_integrity: bool,
	) -> Self {
		let mut map = Self::default();
		for file in files {
			map.imports
				.insert(file.original_name().to_string(), file.path().to_string());
			if with_integrity {
				map.integrity
					.insert(file.path().to_string(), file.integrity().to_string());
			}
		}
		map
	}

	/// Serializes the payload to JSON.
	pub fn to_json(&self) -> String {
		serde_json::to_string(self).expect("import map of strings always serializes")
	}
}

/// Renders a `<script type="importmap">` tag for the given files.
pub fn import_map_tag<'a>(
	files: impl IntoIterator<Item = &'a RevisionedFile>,
	options: &HtmlOptions,
) -> String {
	let map = ImportMap::from_files(files, options.use_subresource_integrity);
	format!("<script type=\"importmap\">{}</script>", map.to_json())
}
