//! Link-edit state: decides between inserting and rewriting a hyperlink.

use vellum_protocol::{Command, LinkTouch};

/// An in-progress link edit.
///
/// Captures the URL the edit started from so confirmation knows whether to
/// insert a new link (no initial URL) or rewrite the touched one. The host's
/// dialog mutates [`title`](Self::title) and [`url`](Self::url) as the user
/// types and calls [`confirm`](Self::confirm) on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEdit {
	initial_url: String,
	/// Link text under edit.
	pub title: String,
	/// Link target under edit.
	pub url: String,
}

impl LinkEdit {
	/// Starts an edit, typically from a link-touched event's payload.
	#[must_use]
	pub fn open(title: impl Into<String>, url: impl Into<String>) -> Self {
		let url = url.into();
		Self {
			initial_url: url.clone(),
			title: title.into(),
			url,
		}
	}

	/// Starts an edit from a touched link.
	#[must_use]
	pub fn from_touch(touch: &LinkTouch) -> Self {
		Self::open(touch.title.clone(), touch.url.clone())
	}

	/// True when the edit creates a link rather than rewriting one.
	#[must_use]
	pub fn is_new(&self) -> bool {
		self.initial_url.is_empty()
	}

	/// True when the edit can be confirmed (the URL is not blank).
	#[must_use]
	pub fn can_confirm(&self) -> bool {
		!self.url.trim().is_empty()
	}

	/// The command this edit resolves to, or `None` while the URL is blank.
	///
	/// An empty title falls back to the URL.
	#[must_use]
	pub fn confirm(&self) -> Option<Command> {
		if !self.can_confirm() {
			return None;
		}
		let title = if self.title.is_empty() {
			self.url.clone()
		} else {
			self.title.clone()
		};
		let url = self.url.clone();
		Some(if self.is_new() {
			Command::InsertLink { url, title }
		} else {
			Command::UpdateLink { url, title }
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn fresh_edit_inserts() {
		let mut edit = LinkEdit::open("", "");
		edit.url = "https://example.com".into();
		edit.title = "Example".into();
		assert!(edit.is_new());
		assert_eq!(
			edit.confirm(),
			Some(Command::InsertLink {
				url: "https://example.com".into(),
				title: "Example".into(),
			})
		);
	}

	#[test]
	fn touched_link_updates() {
		let edit = LinkEdit::from_touch(&LinkTouch {
			title: "Example".into(),
			url: "https://example.com".into(),
		});
		assert!(!edit.is_new());
		assert_eq!(
			edit.confirm(),
			Some(Command::UpdateLink {
				url: "https://example.com".into(),
				title: "Example".into(),
			})
		);
	}

	#[test]
	fn blank_url_cannot_confirm() {
		let mut edit = LinkEdit::open("", "");
		edit.title = "text but no target".into();
		assert!(!edit.can_confirm());
		assert_eq!(edit.confirm(), None);

		edit.url = "   ".into();
		assert_eq!(edit.confirm(), None);
	}

	#[test]
	fn empty_title_falls_back_to_url() {
		let mut edit = LinkEdit::open("", "");
		edit.url = "https://example.com".into();
		assert_eq!(
			edit.confirm(),
			Some(Command::InsertLink {
				url: "https://example.com".into(),
				title: "https://example.com".into(),
			})
		);
	}
}
