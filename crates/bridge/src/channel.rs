//! Host-side collaborator traits.
//!
//! The bridge core never touches the surface or the host UI directly; it
//! talks to them through these traits. All of them are object-safe and held
//! as `Arc<dyn _>` so hosts and tests can swap implementations freely.

use vellum_protocol::LinkTouch;

/// The one-way instruction channel into the embedded surface.
///
/// Injection is fire-and-forget: instructions are delivered reliably and in
/// send order, but nothing is acknowledged and transmission failure is not
/// reported. Implementations typically evaluate `script` inside the
/// surface's document context.
pub trait SurfaceChannel: Send + Sync {
	/// Injects a self-contained executable expression into the surface.
	fn inject(&self, script: &str);
}

/// The host view embedding the surface.
///
/// Receives scroll offsets the surface reports so the host can keep its
/// native scroll position in sync.
pub trait SurfaceView: Send + Sync {
	/// Scrolls the host view to the given vertical offset.
	fn set_content_offset(&self, y: f64);
}

/// Host UI collaborator for editing hyperlinks.
///
/// Triggered when the surface reports an activated link. The dialog is
/// expected to collect a title/URL from the user and drive
/// [`crate::EditorBridge::insert_link`] or [`crate::EditorBridge::update_link`]
/// itself; see [`crate::LinkEdit`] for the decision logic.
pub trait LinkDialog: Send + Sync {
	/// Opens the dialog pre-filled with the touched link.
	fn show(&self, link: &LinkTouch);
}
