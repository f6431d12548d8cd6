//! Property handles and the configuration store.

use crate::{InvalidInput, PropertyKind};

/// A named, textually-serialized configuration setting.
///
/// The stored text is always canonical for the property's kind: construction
/// runs the initial value through the codec, and [`Property::set_text`]
/// trusts its caller to write canonical text only. The edit session upholds
/// that contract by canonicalizing before every write; the handle itself
/// performs no validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
	name: String,
	kind: PropertyKind,
	value: String,
}

impl Property {
	/// Creates a property, canonicalizing the initial value through its
	/// kind's codec.
	pub fn new(
		name: impl Into<String>,
		kind: PropertyKind,
		initial: &str,
	) -> Result<Self, InvalidInput> {
		Ok(Self {
			name: name.into(),
			kind,
			value: kind.canonicalize(initial)?,
		})
	}

	/// The configuration key naming this property.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The kind of value this property holds.
	pub fn kind(&self) -> PropertyKind {
		self.kind
	}

	/// The current canonical text value.
	pub fn text(&self) -> &str {
		&self.value
	}

	/// Overwrites the value with already-canonical text.
	///
	/// No validation happens here; the caller owns canonical-form
	/// correctness.
	pub fn set_text(&mut self, canonical: String) {
		self.value = canonical;
	}
}

/// In-memory store of configuration properties, in registration order.
///
/// The store owns every [`Property`]; edit sessions borrow one handle at a
/// time through [`PropertyStore::get_mut`], so a property always outlives
/// the session editing it.
#[derive(Debug, Default)]
pub struct PropertyStore {
	entries: Vec<Property>,
}

impl PropertyStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a property with its kind and initial value.
	///
	/// The initial value is canonicalized; registration fails if it does not
	/// parse under `kind`. Re-registering a name replaces the old entry.
	pub fn register(
		&mut self,
		name: impl Into<String>,
		kind: PropertyKind,
		initial: &str,
	) -> Result<(), InvalidInput> {
		let prop = Property::new(name, kind, initial)?;
		if let Some(existing) = self.entries.iter_mut().find(|p| p.name == prop.name) {
			*existing = prop;
		} else {
			self.entries.push(prop);
		}
		Ok(())
	}

	/// Finds a property by name.
	pub fn get(&self, name: &str) -> Option<&Property> {
		self.entries.iter().find(|p| p.name == name)
	}

	/// Finds a property by name for mutation, e.g. to open an edit session.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
		self.entries.iter_mut().find(|p| p.name == name)
	}

	/// Iterates all properties in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Property> {
		self.entries.iter()
	}

	/// Number of registered properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the store has no properties.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
