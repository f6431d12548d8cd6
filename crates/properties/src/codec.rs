//! Validated value codecs.
//!
//! One pure function per kind converts raw user input into canonical text:
//! the normalized string form that is both the serialized and the working
//! representation of a property value. Canonicalization is idempotent:
//! feeding canonical text back through the same codec reproduces it
//! unchanged.

use crate::{InvalidInput, PropertyKind};

impl PropertyKind {
	/// Validates raw input and returns its canonical text form.
	///
	/// - `Bool`: never fails; anything other than the literal `"true"`
	///   canonicalizes to `"false"`.
	/// - `Str`: never fails; the input is canonical as-is, empty included.
	/// - `Float` / `Int`: surrounding ASCII whitespace is trimmed, then the
	///   whole remainder must parse; trailing garbage is rejected. Floats
	///   re-serialize in shortest round-trip `Display` form, integers in
	///   plain base-10 (no leading zeros, no `+`). Non-finite floats
	///   (`nan`, `inf`) are rejected.
	/// - `Hex`: surrounding ASCII whitespace is trimmed and a leading
	///   `0x`/`0X` stripped; every remaining character must be a hex digit.
	///   An empty digit string canonicalizes to `"0x0"`. Digit casing is
	///   preserved as typed, so `"0x1A"` and `"0x1a"` are both canonical
	///   forms of the same value.
	pub fn canonicalize(self, raw: &str) -> Result<String, InvalidInput> {
		match self {
			PropertyKind::Bool => Ok(canon_bool(raw)),
			PropertyKind::Str => Ok(raw.to_string()),
			PropertyKind::Float => canon_float(raw),
			PropertyKind::Hex => canon_hex(raw),
			PropertyKind::Int => canon_int(raw),
		}
	}
}

fn canon_bool(raw: &str) -> String {
	if raw == "true" { "true" } else { "false" }.to_string()
}

fn canon_float(raw: &str) -> Result<String, InvalidInput> {
	let value: f64 = raw
		.trim_ascii()
		.parse()
		.map_err(|_| InvalidInput::new(PropertyKind::Float, raw))?;
	// f64::from_str accepts "nan" and "inf", but neither has a canonical
	// text that re-parses to an equal value.
	if !value.is_finite() {
		return Err(InvalidInput::new(PropertyKind::Float, raw));
	}
	Ok(value.to_string())
}

fn canon_int(raw: &str) -> Result<String, InvalidInput> {
	let value: i64 = raw
		.trim_ascii()
		.parse()
		.map_err(|_| InvalidInput::new(PropertyKind::Int, raw))?;
	Ok(value.to_string())
}

fn canon_hex(raw: &str) -> Result<String, InvalidInput> {
	let trimmed = raw.trim_ascii();
	let digits = trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.unwrap_or(trimmed);
	if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
		return Err(InvalidInput::new(PropertyKind::Hex, raw));
	}
	if digits.is_empty() {
		return Ok("0x0".to_string());
	}
	Ok(format!("0x{digits}"))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use crate::PropertyKind;

	fn canon(kind: PropertyKind, raw: &str) -> String {
		kind.canonicalize(raw).unwrap()
	}

	#[test]
	fn bool_matches_literal_true_only() {
		assert_eq!(canon(PropertyKind::Bool, "true"), "true");
		assert_eq!(canon(PropertyKind::Bool, "false"), "false");
		assert_eq!(canon(PropertyKind::Bool, "True"), "false");
		assert_eq!(canon(PropertyKind::Bool, "yes"), "false");
		assert_eq!(canon(PropertyKind::Bool, ""), "false");
	}

	#[test]
	fn string_is_verbatim() {
		assert_eq!(canon(PropertyKind::Str, ""), "");
		assert_eq!(canon(PropertyKind::Str, "  spaced  "), "  spaced  ");
		assert_eq!(canon(PropertyKind::Str, "cycles=max"), "cycles=max");
	}

	#[test]
	fn float_accepts_plain_decimal() {
		assert_eq!(canon(PropertyKind::Float, "3.14"), "3.14");
		assert_eq!(canon(PropertyKind::Float, "-0.5"), "-0.5");
		assert_eq!(canon(PropertyKind::Float, "  2.5 "), "2.5");
	}

	#[test]
	fn float_reserializes_in_display_form() {
		assert_eq!(canon(PropertyKind::Float, "3.0"), "3");
		assert_eq!(canon(PropertyKind::Float, "2.50"), "2.5");
		assert_eq!(canon(PropertyKind::Float, "1e3"), "1000");
	}

	#[test]
	fn float_rejects_garbage_and_empty() {
		assert!(PropertyKind::Float.canonicalize("").is_err());
		assert!(PropertyKind::Float.canonicalize("abc").is_err());
		assert!(PropertyKind::Float.canonicalize("3.5x").is_err());
		assert!(PropertyKind::Float.canonicalize("1.0 1.0").is_err());
	}

	#[test]
	fn float_rejects_non_finite() {
		assert!(PropertyKind::Float.canonicalize("nan").is_err());
		assert!(PropertyKind::Float.canonicalize("inf").is_err());
		assert!(PropertyKind::Float.canonicalize("-inf").is_err());
	}

	#[test]
	fn hex_keeps_prefixed_digits() {
		assert_eq!(canon(PropertyKind::Hex, "0x1A"), "0x1A");
		assert_eq!(canon(PropertyKind::Hex, "0Xff"), "0xff");
	}

	#[test]
	fn hex_prefixes_bare_digits() {
		assert_eq!(canon(PropertyKind::Hex, "  1a  "), "0x1a");
		assert_eq!(canon(PropertyKind::Hex, "deadBEEF"), "0xdeadBEEF");
	}

	#[test]
	fn hex_empty_digits_become_zero() {
		assert_eq!(canon(PropertyKind::Hex, ""), "0x0");
		assert_eq!(canon(PropertyKind::Hex, "0x"), "0x0");
		assert_eq!(canon(PropertyKind::Hex, "0X"), "0x0");
		assert_eq!(canon(PropertyKind::Hex, "   "), "0x0");
	}

	#[test]
	fn hex_rejects_non_digits() {
		assert!(PropertyKind::Hex.canonicalize("0xGG").is_err());
		assert!(PropertyKind::Hex.canonicalize("12g4").is_err());
		assert!(PropertyKind::Hex.canonicalize("0x0x5").is_err());
	}

	#[test]
	fn hex_preserves_digit_casing() {
		assert_eq!(canon(PropertyKind::Hex, "0xAb"), "0xAb");
		assert_eq!(canon(PropertyKind::Hex, "AB"), "0xAB");
	}

	#[test]
	fn int_canonical_base10() {
		assert_eq!(canon(PropertyKind::Int, "42"), "42");
		assert_eq!(canon(PropertyKind::Int, "-7"), "-7");
		assert_eq!(canon(PropertyKind::Int, "+7"), "7");
		assert_eq!(canon(PropertyKind::Int, "007"), "7");
		assert_eq!(canon(PropertyKind::Int, " 42 "), "42");
	}

	#[test]
	fn int_rejects_trailing_garbage() {
		assert!(PropertyKind::Int.canonicalize("3.5").is_err());
		assert!(PropertyKind::Int.canonicalize("42 mph").is_err());
		assert!(PropertyKind::Int.canonicalize("abc").is_err());
		assert!(PropertyKind::Int.canonicalize("").is_err());
	}

	#[test]
	fn canonical_text_is_idempotent() {
		let samples = [
			(PropertyKind::Bool, "true"),
			(PropertyKind::Bool, "maybe"),
			(PropertyKind::Str, "  raw  "),
			(PropertyKind::Float, "3.1400"),
			(PropertyKind::Float, "1e-2"),
			(PropertyKind::Hex, "  0X1aB "),
			(PropertyKind::Hex, "0x"),
			(PropertyKind::Int, " -007 "),
		];
		for (kind, input) in samples {
			let once = kind.canonicalize(input).unwrap();
			let twice = kind.canonicalize(&once).unwrap();
			assert_eq!(once, twice, "{kind} codec not idempotent for {input:?}");
		}
	}
}
