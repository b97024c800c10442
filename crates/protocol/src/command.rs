//! Outbound command set and instruction encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An outbound instruction for the embedded surface.
///
/// The set is closed: every instruction the bridge can send is a variant
/// here, so an unknown command kind is unrepresentable rather than a runtime
/// condition. On the wire a command is `{"type": <name>, "data": <payload>}`,
/// with `data` omitted for payload-less commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Command {
	/// Boot the surface-side script once the document has loaded.
	Init,
	/// Move focus into the title field.
	FocusTitle,
	/// Move focus into the content area.
	FocusContent,
	/// Replace the title markup.
	SetTitleHtml(String),
	/// Replace the content markup.
	SetContentHtml(String),
	/// Query the title markup.
	GetTitleHtml,
	/// Query the title as plain text.
	GetTitleText,
	/// Query the content markup.
	GetContentHtml,
	/// Query the currently selected text.
	GetSelectedText,
	/// Toggle bold on the current selection.
	SetBold,
	/// Toggle italics on the current selection.
	SetItalic,
	/// Toggle underline on the current selection.
	SetUnderline,
	/// Toggle subscript on the current selection.
	SetSubscript,
	/// Toggle superscript on the current selection.
	SetSuperscript,
	/// Toggle strikethrough on the current selection.
	SetStrikethrough,
	/// Make the current block a level-1 heading.
	Heading1,
	/// Make the current block a level-2 heading.
	Heading2,
	/// Make the current block a level-3 heading.
	Heading3,
	/// Make the current block a level-4 heading.
	Heading4,
	/// Make the current block a level-5 heading.
	Heading5,
	/// Make the current block a level-6 heading.
	Heading6,
	/// Make the current block a plain paragraph.
	SetParagraph,
	/// Strip inline formatting from the selection.
	RemoveFormat,
	/// Align the current block left.
	AlignLeft,
	/// Center the current block.
	AlignCenter,
	/// Align the current block right.
	AlignRight,
	/// Justify the current block.
	AlignFull,
	/// Start or toggle an unordered list.
	InsertBulletsList,
	/// Start or toggle an ordered list.
	InsertOrderedList,
	/// Insert a hyperlink at the caret.
	InsertLink {
		/// Link target.
		url: String,
		/// Link text.
		title: String,
	},
	/// Rewrite the hyperlink under the caret.
	UpdateLink {
		/// Link target.
		url: String,
		/// Link text.
		title: String,
	},
	/// Insert an image by URL.
	InsertImage(String),
	/// Insert an emoji image by URL.
	InsertEmoji(String),
	/// Remove a previously inserted emoji by URL.
	DeleteEmoji(String),
	/// Insert a horizontal rule.
	#[serde(rename = "setHR")]
	SetHr,
	/// Increase the indentation of the current block.
	SetIndent,
	/// Decrease the indentation of the current block.
	SetOutdent,
	/// Set the selection's background color.
	SetBackgroundColor(String),
	/// Set the selection's text color.
	SetTextColor(String),
	/// Set the title field's placeholder text.
	SetTitlePlaceholder(Option<String>),
	/// Set the content area's placeholder text.
	SetContentPlaceholder(Option<String>),
	/// Inject custom CSS into the document.
	#[serde(rename = "setCustomCSS")]
	SetCustomCss(String),
	/// Save the caret position ahead of an insertion, optionally showing a
	/// caret placeholder.
	PrepareInsert(Option<bool>),
	/// Restore the caret position saved by `prepareInsert`.
	RestoreSelection,
	/// Constrain the editable area to the given height.
	SetEditorHeight(f64),
	/// Reserve space for host chrome below the editable area.
	SetFooterHeight(f64),
	/// Tell the surface which host platform it is embedded in.
	SetPlatform(Platform),
	/// Start emitting content-change events.
	EnableOnChange,
	/// Reveal the title field.
	ShowTitle,
	/// Hide the title field.
	HideTitle,
	/// Toggle the title field's visibility.
	ToggleTitle,
	/// Drop focus from the title field.
	BlurTitleEditor,
	/// Drop focus from the content area.
	BlurContentEditor,
	/// Start emitting title-focus events.
	SetTitleFocusHandler,
	/// Start emitting content-focus events.
	SetContentFocusHandler,
	/// Start emitting content-blur events.
	SetContentBlurHandler,
	/// Start emitting empty-state change events.
	SetOnChangeEmptyOrNot,
}

impl Command {
	/// Encodes this command as a self-contained expression for the surface.
	///
	/// The surface evaluates the expression as a whole; the trailing `true`
	/// keeps the injection contract from leaking a return value back into the
	/// host.
	#[must_use]
	pub fn to_script(&self) -> String {
		let body = serde_json::to_string(self).expect("closed command set always serializes");
		format!("window.__surfaceBridge.dispatch({body}); true;")
	}
}

/// Host platform tag reported to the surface via [`Command::SetPlatform`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// Apple mobile host.
	#[default]
	Ios,
	/// Android host.
	Android,
}

/// Correlation key for query commands and their responses.
///
/// At most one query per kind is tracked at a time; a response envelope of a
/// given kind resolves the pending query of the same kind, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
	/// Title markup (`getTitleHtml` / `titleHtmlResponse`).
	TitleHtml,
	/// Title plain text (`getTitleText` / `titleTextResponse`).
	TitleText,
	/// Content markup (`getContentHtml` / `contentHtmlResponse`).
	ContentHtml,
	/// Selected text (`getSelectedText` / `selectedTextResponse`).
	SelectedText,
}

impl QueryKind {
	/// The query command that solicits a response of this kind.
	#[must_use]
	pub fn command(self) -> Command {
		match self {
			Self::TitleHtml => Command::GetTitleHtml,
			Self::TitleText => Command::GetTitleText,
			Self::ContentHtml => Command::GetContentHtml,
			Self::SelectedText => Command::GetSelectedText,
		}
	}

	/// Stable name used in logs and error messages.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TitleHtml => "titleHtml",
			Self::TitleText => "titleText",
			Self::ContentHtml => "contentHtml",
			Self::SelectedText => "selectedText",
		}
	}
}

impl fmt::Display for QueryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests;
