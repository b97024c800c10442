//! Event distribution: fan-out listeners and singleton handlers.
//!
//! Two registration disciplines coexist and are kept as two distinct types.
//! [`EventRouter`] holds additive listener lists: every listener registered
//! for a kind fires, in registration order, with the same payload, and there
//! is no unregistration. [`ExclusiveHandlers`] holds at-most-one handlers:
//! setting a handler replaces the previous one and only the latest is ever
//! invoked. Neither catches listener panics; delivery is synchronous.

type SelectionListener = Box<dyn Fn(&[String]) + Send + Sync>;
type TextListener = Box<dyn Fn(&str) + Send + Sync>;
type UnitHandler = Box<dyn Fn() + Send + Sync>;
type EmptyStateHandler = Box<dyn Fn(bool) + Send + Sync>;

/// Fan-out listener lists for continuous events.
#[derive(Default)]
pub(crate) struct EventRouter {
	selection_change: Vec<SelectionListener>,
	content_change: Vec<TextListener>,
	selected_text_change: Vec<TextListener>,
}

impl EventRouter {
	pub(crate) fn add_selection_listener(&mut self, listener: SelectionListener) {
		self.selection_change.push(listener);
	}

	pub(crate) fn add_content_change_listener(&mut self, listener: TextListener) {
		self.content_change.push(listener);
	}

	pub(crate) fn add_selected_text_listener(&mut self, listener: TextListener) {
		self.selected_text_change.push(listener);
	}

	pub(crate) fn publish_selection_change(&self, items: &[String]) {
		for listener in &self.selection_change {
			listener(items);
		}
	}

	pub(crate) fn publish_content_change(&self, content: &str) {
		for listener in &self.content_change {
			listener(content);
		}
	}

	pub(crate) fn publish_selected_text_change(&self, text: &str) {
		for listener in &self.selected_text_change {
			listener(text);
		}
	}
}

/// Replace-one handlers for focus, blur, empty-state, and init completion.
#[derive(Default)]
pub(crate) struct ExclusiveHandlers {
	pub(crate) title_focus: Option<UnitHandler>,
	pub(crate) content_focus: Option<UnitHandler>,
	pub(crate) content_blur: Option<UnitHandler>,
	pub(crate) empty_state: Option<EmptyStateHandler>,
	pub(crate) initialized: Option<UnitHandler>,
}

#[cfg(test)]
mod tests;
