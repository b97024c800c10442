//! Inbound message decoding and classification.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::command::QueryKind;

/// A decoded inbound message from the embedded surface.
///
/// Wire format: `{"type": <kind>, "data": <any>, "isEmpty"?: <bool>}`. The
/// kind set is closed; anything outside it fails to decode and is dropped by
/// the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Envelope {
	/// Response to [`crate::Command::GetTitleHtml`].
	TitleHtmlResponse {
		/// The title markup.
		#[serde(default)]
		data: String,
	},
	/// Response to [`crate::Command::GetTitleText`].
	TitleTextResponse {
		/// The title as plain text.
		#[serde(default)]
		data: String,
	},
	/// Response to [`crate::Command::GetContentHtml`].
	ContentHtmlResponse {
		/// The content markup.
		#[serde(default)]
		data: String,
	},
	/// Response to [`crate::Command::GetSelectedText`].
	SelectedTextResponse {
		/// The selected text.
		#[serde(default)]
		data: String,
	},
	/// The surface-side script finished booting.
	Initialized,
	/// An existing hyperlink was activated.
	LinkTouched {
		/// The touched link.
		data: LinkTouch,
	},
	/// A console line from the surface, forwarded for diagnostics.
	Log {
		/// Whatever the surface logged.
		#[serde(default)]
		data: JsonValue,
	},
	/// The surface scrolled and reports the new vertical offset.
	Scroll {
		/// Vertical offset in surface coordinates.
		data: f64,
	},
	/// The title field gained focus.
	TitleFocused,
	/// The content area gained focus.
	ContentFocused,
	/// The content area lost focus.
	ContentBlur,
	/// The document flipped between empty and non-empty.
	OnChangeEmptyOrNot {
		/// Whether the document is now empty.
		#[serde(rename = "isEmpty")]
		is_empty: bool,
	},
	/// The selection's active formatting changed.
	SelectionChange {
		/// Active formatting items.
		data: SelectionPayload,
	},
	/// The document content changed.
	ContentChange {
		/// The new content markup.
		data: ContentPayload,
	},
	/// The selected text changed.
	SelectedTextChanged {
		/// The newly selected text.
		#[serde(default)]
		data: String,
	},
}

/// Payload of a [`Envelope::LinkTouched`] message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkTouch {
	/// Link text.
	#[serde(default)]
	pub title: String,
	/// Link target.
	#[serde(default)]
	pub url: String,
}

/// Payload of a [`Envelope::SelectionChange`] message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectionPayload {
	/// Formatting active on the current selection, e.g. `["bold"]`.
	pub items: Vec<String>,
}

/// Payload of a [`Envelope::ContentChange`] message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentPayload {
	/// The full content markup after the change.
	pub content: String,
}

/// The surface sent something that is not a well-formed envelope.
///
/// Covers non-JSON input, missing fields, and kinds outside the closed set.
/// Callers drop these without side effects.
#[derive(Debug, thiserror::Error)]
#[error("malformed surface message: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Classification of a decoded envelope.
///
/// Responses correlate to a pending query; events are unsolicited and may
/// occur any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
	/// A response to an outstanding query.
	Response(QueryResponse),
	/// An unsolicited event.
	Event(SurfaceEvent),
}

/// A response envelope reduced to its correlation key and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
	/// Which query this answers.
	pub kind: QueryKind,
	/// The response payload.
	pub payload: String,
}

/// An unsolicited event from the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
	/// The surface-side script finished booting.
	Initialized,
	/// An existing hyperlink was activated.
	LinkTouched(LinkTouch),
	/// A console line from the surface.
	Log(JsonValue),
	/// New vertical scroll offset.
	Scroll(f64),
	/// The title field gained focus.
	TitleFocused,
	/// The content area gained focus.
	ContentFocused,
	/// The content area lost focus.
	ContentBlur,
	/// The document flipped between empty and non-empty.
	EmptyStateChanged(bool),
	/// Active formatting items for the new selection.
	SelectionChanged(Vec<String>),
	/// The full content markup after a change.
	ContentChanged(String),
	/// The newly selected text.
	SelectedTextChanged(String),
}

impl Envelope {
	/// Decodes a raw inbound message.
	///
	/// # Errors
	///
	/// Returns [`DecodeError`] when `raw` is not valid JSON, is missing
	/// required fields, or names a kind outside the closed set.
	pub fn decode(raw: &str) -> Result<Self, DecodeError> {
		Ok(serde_json::from_str(raw)?)
	}

	/// Splits the envelope into its response or event family.
	#[must_use]
	pub fn split(self) -> Inbound {
		match self {
			Self::TitleHtmlResponse { data } => Inbound::Response(QueryResponse {
				kind: QueryKind::TitleHtml,
				payload: data,
			}),
			Self::TitleTextResponse { data } => Inbound::Response(QueryResponse {
				kind: QueryKind::TitleText,
				payload: data,
			}),
			Self::ContentHtmlResponse { data } => Inbound::Response(QueryResponse {
				kind: QueryKind::ContentHtml,
				payload: data,
			}),
			Self::SelectedTextResponse { data } => Inbound::Response(QueryResponse {
				kind: QueryKind::SelectedText,
				payload: data,
			}),
			Self::Initialized => Inbound::Event(SurfaceEvent::Initialized),
			Self::LinkTouched { data } => Inbound::Event(SurfaceEvent::LinkTouched(data)),
			Self::Log { data } => Inbound::Event(SurfaceEvent::Log(data)),
			Self::Scroll { data } => Inbound::Event(SurfaceEvent::Scroll(data)),
			Self::TitleFocused => Inbound::Event(SurfaceEvent::TitleFocused),
			Self::ContentFocused => Inbound::Event(SurfaceEvent::ContentFocused),
			Self::ContentBlur => Inbound::Event(SurfaceEvent::ContentBlur),
			Self::OnChangeEmptyOrNot { is_empty } => {
				Inbound::Event(SurfaceEvent::EmptyStateChanged(is_empty))
			}
			Self::SelectionChange { data } => {
				Inbound::Event(SurfaceEvent::SelectionChanged(data.items))
			}
			Self::ContentChange { data } => {
				Inbound::Event(SurfaceEvent::ContentChanged(data.content))
			}
			Self::SelectedTextChanged { data } => {
				Inbound::Event(SurfaceEvent::SelectedTextChanged(data))
			}
		}
	}
}
