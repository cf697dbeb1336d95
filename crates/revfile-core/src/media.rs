//! Media type inference and normalization

use mime::Mime;

/// Infers a media type from a file name, falling back to
/// `application/octet-stream` for unknown extensions.
pub fn media_type_for(name: &str) -> Mime {
	mime_guess::from_path(name).first_or_octet_stream()
}

/// Normalizes a media type for serving.
///
/// The legacy `application/javascript` type is folded onto the modern
/// `text/javascript`, retaining any parameters (most importantly `charset`).
/// Every other type passes through unchanged.
pub fn normalize(media_type: Mime) -> Mime {
	if media_type.type_() == mime::APPLICATION && media_type.subtype() == mime::JAVASCRIPT {
		// Re-parse with the essence swapped so parameters survive verbatim.
		let raw = media_type.as_ref();
		let params = &raw[media_type.essence_str().len()..];
		let folded = format!("text/javascript{params}");
		match folded.parse() {
			Ok(modern) => modern,
			Err(_) => media_type,
		}
	} else {
		media_type
	}
}
