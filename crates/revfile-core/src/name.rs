//! Revisioned file name derivation

/// Builds the revisioned file name from the original name and revision token.
///
/// The token is inserted immediately before the final extension, so
/// `demo.v2.0.0.js` with token `abc123` becomes `demo.v2.0.0.abc123.js`.
/// Names without an extension get the token appended: `demo` becomes
/// `demo.abc123`.
pub fn derive_name(original_name: &str, revision: &str) -> String {
	match original_name.rfind('.') {
		None => format!("{original_name}.{revision}"),
		Some(idx) => format!(
			"{}.{}{}",
			&original_name[..idx],
			revision,
			&original_name[idx..]
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("demo.js", "demo.abc123.js")]
	#[case("demo", "demo.abc123")]
	#[case("demo.v2.0.0.js", "demo.v2.0.0.abc123.js")]
	#[case("styles.min.css", "styles.min.abc123.css")]
	fn derives_expected_names(#[case] original: &str, #[case] expected: &str) {
		assert_eq!(derive_name(original, "abc123"), expected);
	}

	#[test]
	fn is_deterministic() {
		assert_eq!(
			derive_name("main.js", "d68859168d"),
			derive_name("main.js", "d68859168d")
		);
	}
}
