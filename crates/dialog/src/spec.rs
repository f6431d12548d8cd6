//! Dialog UI description.
//!
//! [`DialogSpec`] is plain data: the frontend decides geometry, fonts and
//! drawing. The core only fixes the title and the two action buttons every
//! property dialog carries.

use emubox_properties::PropertyKind;

/// Identity of the activated dialog button, reported by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// The confirm button.
	Ok,
	/// The cancel button.
	Cancel,
}

/// Describes a property dialog for a frontend to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
	/// Fixed window title, derived from the property kind.
	pub title: &'static str,
	/// Confirm button label.
	pub ok_label: &'static str,
	/// Cancel button label.
	pub cancel_label: &'static str,
}

impl DialogSpec {
	pub(crate) fn for_kind(kind: PropertyKind) -> Self {
		let title = match kind {
			PropertyKind::Bool => "Edit Boolean Property",
			PropertyKind::Str => "Edit String Property",
			PropertyKind::Float => "Edit Float Property",
			PropertyKind::Hex => "Edit Hex Property",
			PropertyKind::Int => "Edit Integer Property",
		};
		Self {
			title,
			ok_label: "OK",
			cancel_label: "Cancel",
		}
	}
}

#[cfg(test)]
mod tests {
	use emubox_properties::PropertyKind;

	use super::DialogSpec;

	#[test]
	fn title_follows_kind() {
		assert_eq!(DialogSpec::for_kind(PropertyKind::Bool).title, "Edit Boolean Property");
		assert_eq!(DialogSpec::for_kind(PropertyKind::Int).title, "Edit Integer Property");
		let spec = DialogSpec::for_kind(PropertyKind::Hex);
		assert_eq!((spec.ok_label, spec.cancel_label), ("OK", "Cancel"));
	}
}
