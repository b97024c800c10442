//! Editable-height computation for keyboard changes.

/// Host-reported geometry when the on-screen keyboard shows or hides.
///
/// The bridge does not measure anything itself; the host supplies window and
/// keyboard heights plus whatever chrome surrounds the surface, and
/// [`available_editor_height`](Self::available_editor_height) yields the room
/// left for the editable area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardLayout {
	/// Full window height.
	pub window_height: f64,
	/// Height of the on-screen keyboard, 0 when hidden.
	pub keyboard_height: f64,
	/// Host inset above the surface.
	pub inset_top: f64,
	/// Host inset below the surface.
	pub inset_bottom: f64,
	/// Margin above the surface.
	pub margin_top: f64,
	/// Margin below the surface.
	pub margin_bottom: f64,
	/// Distance from the surface's top edge to the screen top.
	pub height_to_screen_top: f64,
}

impl KeyboardLayout {
	/// Vertical room left for the editable area.
	#[must_use]
	pub fn available_editor_height(&self) -> f64 {
		let spacing = self.margin_top + self.margin_bottom + self.inset_top + self.inset_bottom;
		self.window_height - self.keyboard_height - spacing - self.height_to_screen_top
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keyboard_and_chrome_come_out_of_the_window_height() {
		let layout = KeyboardLayout {
			window_height: 812.0,
			keyboard_height: 336.0,
			inset_top: 20.0,
			inset_bottom: 0.0,
			margin_top: 8.0,
			margin_bottom: 8.0,
			height_to_screen_top: 64.0,
		};
		assert_eq!(layout.available_editor_height(), 812.0 - 336.0 - 36.0 - 64.0);
	}

	#[test]
	fn hidden_keyboard_leaves_the_full_window() {
		let layout = KeyboardLayout {
			window_height: 640.0,
			..KeyboardLayout::default()
		};
		assert_eq!(layout.available_editor_height(), 640.0);
	}
}
