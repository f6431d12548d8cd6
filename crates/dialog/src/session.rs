//! Edit session lifecycle and the commit/cancel protocol.

use emubox_properties::{InvalidInput, Property};
use tracing::{debug, warn};

use crate::spec::DialogSpec;
use crate::widget::InputWidget;

/// What happens when confirmed input fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackPolicy {
	/// Close the dialog and discard the edit, outwardly indistinguishable
	/// from cancel. This is the historical behavior and the default.
	#[default]
	SilentDiscard,
	/// Keep the dialog open with the input intact so the frontend can
	/// surface the failure.
	KeepOpen,
}

/// Terminal result of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// Canonical text was written to the property.
	Committed,
	/// The property was left untouched.
	Cancelled,
}

/// Result of [`EditSession::confirm`].
pub enum Confirm<'a> {
	/// Input validated; canonical text was written and the session closed.
	Committed,
	/// Input was invalid under [`FeedbackPolicy::SilentDiscard`]; the
	/// session closed without writing.
	Discarded(InvalidInput),
	/// Input was invalid under [`FeedbackPolicy::KeepOpen`]; the session
	/// comes back still open, input intact.
	Rejected(EditSession<'a>, InvalidInput),
}

type CommitHook<'a> = Box<dyn FnMut(&Property) + 'a>;

/// One modal edit session over a single property.
///
/// The session borrows the property for its whole lifetime, so the handle
/// necessarily outlives the edit. [`EditSession::confirm`] and
/// [`EditSession::cancel`] consume the session: exactly one of them runs,
/// and a second confirm on a closed session is not expressible.
pub struct EditSession<'a> {
	prop: &'a mut Property,
	widget: InputWidget,
	feedback: FeedbackPolicy,
	on_commit: Option<CommitHook<'a>>,
}

impl<'a> EditSession<'a> {
	/// Opens a session, seeding the input widget from the property's
	/// current text.
	pub fn open(prop: &'a mut Property) -> Self {
		let widget = InputWidget::for_property(prop);
		Self {
			prop,
			widget,
			feedback: FeedbackPolicy::default(),
			on_commit: None,
		}
	}

	/// Selects the validation-failure feedback policy.
	pub fn with_feedback(mut self, policy: FeedbackPolicy) -> Self {
		self.feedback = policy;
		self
	}

	/// Installs a hook invoked after each successful commit, once the new
	/// canonical text is in place. No hook is installed by default.
	pub fn on_commit(mut self, hook: impl FnMut(&Property) + 'a) -> Self {
		self.on_commit = Some(Box::new(hook));
		self
	}

	/// The UI description for this session's dialog.
	pub fn dialog_spec(&self) -> DialogSpec {
		DialogSpec::for_kind(self.prop.kind())
	}

	/// The property being edited.
	pub fn property(&self) -> &Property {
		self.prop
	}

	/// The live input widget.
	pub fn widget(&self) -> &InputWidget {
		&self.widget
	}

	/// The live input widget, for the frontend to route edits into.
	pub fn widget_mut(&mut self) -> &mut InputWidget {
		&mut self.widget
	}

	/// Validates the widget contents and commits on success.
	///
	/// The write-back is the session's single mutation of the property:
	/// canonical text goes in whole or not at all. Boolean sessions cannot
	/// fail validation, since both toggle states are valid.
	pub fn confirm(mut self) -> Confirm<'a> {
		let raw = self.widget.raw_input();
		match self.prop.kind().canonicalize(&raw) {
			Ok(canonical) => {
				debug!(property = self.prop.name(), value = %canonical, "commit");
				self.prop.set_text(canonical);
				if let Some(hook) = self.on_commit.as_mut() {
					hook(self.prop);
				}
				Confirm::Committed
			}
			Err(err) => {
				warn!(property = self.prop.name(), input = %raw, "invalid input");
				match self.feedback {
					FeedbackPolicy::SilentDiscard => Confirm::Discarded(err),
					FeedbackPolicy::KeepOpen => Confirm::Rejected(self, err),
				}
			}
		}
	}

	/// Closes the session without touching the property.
	pub fn cancel(self) -> Outcome {
		debug!(property = self.prop.name(), "cancel");
		Outcome::Cancelled
	}
}
