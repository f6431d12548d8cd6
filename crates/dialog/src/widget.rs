//! Transient input widgets.

use emubox_properties::{Property, PropertyKind};

/// The single input control hosted by a property dialog.
///
/// Exactly two capabilities exist: a boolean toggle and a single-line text
/// field. Which one a dialog hosts is decided by the property's kind; no
/// variant needs anything richer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWidget {
	/// On/off toggle, used for boolean properties.
	Toggle {
		/// Current toggle state.
		checked: bool,
	},
	/// Single-line text field, used for every other kind.
	TextField {
		/// Current field contents.
		text: String,
	},
}

impl InputWidget {
	/// Builds the widget for a property, seeded with its current value.
	///
	/// Boolean properties get a toggle that is on iff the current text is
	/// exactly `"true"`; every other kind gets a text field holding the
	/// current text verbatim.
	pub fn for_property(prop: &Property) -> Self {
		match prop.kind() {
			PropertyKind::Bool => InputWidget::Toggle {
				checked: prop.text() == "true",
			},
			_ => InputWidget::TextField {
				text: prop.text().to_string(),
			},
		}
	}

	/// Returns the field contents if this is a text field.
	pub fn text(&self) -> Option<&str> {
		match self {
			InputWidget::TextField { text } => Some(text),
			InputWidget::Toggle { .. } => None,
		}
	}

	/// Replaces the field contents. No-op on a toggle.
	pub fn set_text(&mut self, new: impl Into<String>) {
		if let InputWidget::TextField { text } = self {
			*text = new.into();
		}
	}

	/// Returns the toggle state if this is a toggle.
	pub fn is_checked(&self) -> Option<bool> {
		match self {
			InputWidget::Toggle { checked } => Some(*checked),
			InputWidget::TextField { .. } => None,
		}
	}

	/// Sets the toggle state. No-op on a text field.
	pub fn set_checked(&mut self, on: bool) {
		if let InputWidget::Toggle { checked } = self {
			*checked = on;
		}
	}

	/// The raw input handed to the codec on confirm.
	pub(crate) fn raw_input(&self) -> String {
		match self {
			InputWidget::Toggle { checked } => {
				if *checked { "true" } else { "false" }.to_string()
			}
			InputWidget::TextField { text } => text.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use emubox_properties::{Property, PropertyKind};

	use super::InputWidget;

	#[test]
	fn bool_property_seeds_toggle() {
		let on = Property::new("fullscreen", PropertyKind::Bool, "true").unwrap();
		assert_eq!(InputWidget::for_property(&on).is_checked(), Some(true));

		let off = Property::new("fullscreen", PropertyKind::Bool, "no").unwrap();
		assert_eq!(InputWidget::for_property(&off).is_checked(), Some(false));
	}

	#[test]
	fn other_kinds_seed_text_field_verbatim() {
		let prop = Property::new("base", PropertyKind::Hex, "0x1A").unwrap();
		let widget = InputWidget::for_property(&prop);
		assert_eq!(widget.text(), Some("0x1A"));
		assert_eq!(widget.is_checked(), None);
	}

	#[test]
	fn accessors_ignore_wrong_variant() {
		let mut toggle = InputWidget::Toggle { checked: true };
		toggle.set_text("ignored");
		assert_eq!(toggle.text(), None);
		assert_eq!(toggle.is_checked(), Some(true));

		let mut field = InputWidget::TextField { text: "42".into() };
		field.set_checked(false);
		assert_eq!(field.text(), Some("42"));
	}
}
