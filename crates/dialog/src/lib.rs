//! Modal property-editing dialogs.
//!
//! One dialog edits one typed configuration property with validate-then-commit
//! semantics: the session seeds its input widget from the property's current
//! text, the user edits, and confirming runs the kind's codec before anything
//! is written back. Invalid input never reaches the store.
//!
//! The crate is frontend-agnostic. A frontend renders [`DialogSpec`], routes
//! user edits into [`PropertyDialog::widget_mut`], and reports button
//! activations through [`PropertyDialog::handle_action`]; everything else is
//! plain data.

mod session;
mod spec;
mod widget;


pub use session::{Confirm, EditSession, FeedbackPolicy, Outcome};
pub use spec::{Action, DialogSpec};
pub use widget::InputWidget;

use emubox_properties::{InvalidInput, Property};

/// Host-facing manager for one modal property dialog.
///
/// Holds the session in an `Option` so that activations arriving after the
/// dialog has closed are ignored rather than being representable: commit and
/// cancel each take the session out, and there is no way to put a closed one
/// back.
pub struct PropertyDialog<'a> {
	session: Option<EditSession<'a>>,
	last_error: Option<InvalidInput>,
}

impl<'a> PropertyDialog<'a> {
	/// Opens a dialog editing `prop` under the given feedback policy.
	pub fn open(prop: &'a mut Property, policy: FeedbackPolicy) -> Self {
		Self::from_session(EditSession::open(prop).with_feedback(policy))
	}

	/// Wraps an already-configured session, e.g. one carrying a commit hook.
	pub fn from_session(session: EditSession<'a>) -> Self {
		Self {
			session: Some(session),
			last_error: None,
		}
	}

	/// Whether the dialog is still open.
	pub fn is_open(&self) -> bool {
		self.session.is_some()
	}

	/// The UI description for the frontend to render, or `None` once the
	/// dialog has closed.
	pub fn spec(&self) -> Option<DialogSpec> {
		self.session.as_ref().map(|s| s.dialog_spec())
	}

	/// The live input widget, for the frontend to route edits into.
	pub fn widget_mut(&mut self) -> Option<&mut InputWidget> {
		self.session.as_mut().map(|s| s.widget_mut())
	}

	/// Handles a button activation.
	///
	/// Returns the terminal outcome when the activation closes the dialog,
	/// `None` otherwise. Activations after close are ignored, as is `Ok`
	/// under [`FeedbackPolicy::KeepOpen`] when the input fails validation;
	/// the rejection reason is then available from
	/// [`PropertyDialog::last_error`].
	pub fn handle_action(&mut self, action: Action) -> Option<Outcome> {
		let session = self.session.take()?;
		match action {
			Action::Ok => match session.confirm() {
				Confirm::Committed => Some(Outcome::Committed),
				Confirm::Discarded(err) => {
					self.last_error = Some(err);
					Some(Outcome::Cancelled)
				}
				Confirm::Rejected(session, err) => {
					self.last_error = Some(err);
					self.session = Some(session);
					None
				}
			},
			Action::Cancel => Some(session.cancel()),
		}
	}

	/// The most recent validation failure, if any.
	pub fn last_error(&self) -> Option<&InvalidInput> {
		self.last_error.as_ref()
	}
}
