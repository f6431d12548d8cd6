//! Typed configuration properties.
//!
//! Every emulator setting is stored as canonical text: a string form that is
//! guaranteed re-parseable by its own kind's codec. This crate provides:
//! - Kind definitions ([`PropertyKind`]) and the validation error ([`InvalidInput`])
//! - The canonicalizing codecs ([`PropertyKind::canonicalize`])
//! - The property handle and store ([`Property`], [`PropertyStore`])

mod codec;
mod store;

pub use store::{Property, PropertyStore};

use thiserror::Error;

/// The type of a property's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
	/// Boolean value, serialized as `"true"` or `"false"`.
	Bool,
	/// Free-form string value.
	Str,
	/// Decimal floating-point value.
	Float,
	/// Hexadecimal integer value, serialized with a `0x` prefix.
	Hex,
	/// Base-10 signed integer value.
	Int,
}

impl PropertyKind {
	/// Returns the kind name used in messages.
	pub fn name(self) -> &'static str {
		match self {
			PropertyKind::Bool => "boolean",
			PropertyKind::Str => "string",
			PropertyKind::Float => "float",
			PropertyKind::Hex => "hex",
			PropertyKind::Int => "integer",
		}
	}
}

impl core::fmt::Display for PropertyKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Error raised when raw input cannot be coerced to a property's kind.
///
/// This is the only error the codecs produce. Malformed input never reaches a
/// property: the edit session's confirm path handles this error and leaves the
/// stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} input: {input:?}")]
pub struct InvalidInput {
	/// The kind the input was validated against.
	pub kind: PropertyKind,
	/// The rejected raw text.
	pub input: String,
}

impl InvalidInput {
	pub(crate) fn new(kind: PropertyKind, input: &str) -> Self {
		Self {
			kind,
			input: input.to_string(),
		}
	}
}
