//! Asynchronous bridge to an embedded rich-text surface.
//!
//! The surface (an opaque, sandboxed document view) is reachable only through
//! two one-way channels: the host injects executable instructions, and the
//! surface delivers string-encoded messages back. This crate layers a usable
//! editing API on top of that contract:
//! * [`EditorBridge`]: the command dispatcher and inbound message loop.
//! * Query commands (`getTitleHtml` and friends) become deferred results,
//!   correlated to their responses by kind and failed with
//!   [`Error::QueryTimeout`] when the surface stays silent.
//! * Continuous events (selection, content, selected-text changes) fan out to
//!   additively registered listeners; focus/blur/empty-state events go to
//!   replaceable singleton handlers.
//!
//! Malformed or unmatched inbound traffic is dropped silently (logged at
//! debug level); the only failure a well-behaved host observes is a query
//! timeout.

#![warn(missing_docs)]

mod bridge;
pub mod channel;
mod config;
mod events;
mod layout;
mod link;
mod pending;

pub use bridge::EditorBridge;
pub use channel::{LinkDialog, SurfaceChannel, SurfaceView};
pub use config::EditorConfig;
pub use layout::KeyboardLayout;
pub use link::LinkEdit;
/// Re-export of the wire protocol crate.
pub use vellum_protocol as protocol;
pub use vellum_protocol::{Command, Envelope, LinkTouch, Platform, QueryKind, SurfaceEvent};

/// A convenient type alias for `Result` with `E` = [`enum@crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible failures of a query command.
///
/// Fire-and-forget commands cannot fail; the channel owns transmission and
/// inbound irregularities are swallowed before they reach callers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// No matching response arrived before the deadline.
	#[error("query {0} timed out")]
	QueryTimeout(QueryKind),
	/// A newer query of the same kind replaced this one before it resolved.
	#[error("query {0} was superseded by a newer query of the same kind")]
	Superseded(QueryKind),
	/// The bridge was dropped while the query was in flight.
	#[error("bridge closed before a response arrived")]
	BridgeClosed,
}
