//! Wire protocol between a host application and an embedded rich-text surface.
//!
//! The host drives the surface through a one-way, fire-and-forget instruction
//! channel; the surface reports back through a one-way string message channel.
//! This crate defines both directions:
//! * [`Command`]: the closed set of outbound instructions, plus script encoding.
//! * [`Envelope`]: decoded inbound messages, partitioned into the response
//!   family (correlated to a prior query) and the event family (unsolicited)
//!   via [`Envelope::split`].
//! * [`QueryKind`]: the correlation key for query commands and their responses.

#![warn(missing_docs)]

mod command;
mod envelope;

pub use command::{Command, Platform, QueryKind};
pub use envelope::{
	ContentPayload, DecodeError, Envelope, Inbound, LinkTouch, QueryResponse, SelectionPayload,
	SurfaceEvent,
};
