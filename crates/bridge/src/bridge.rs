//! The bridge core: command dispatch and the inbound message loop.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use vellum_protocol::{Command, Envelope, Inbound, LinkTouch, Platform, QueryKind, SurfaceEvent};

use crate::channel::{LinkDialog, SurfaceChannel, SurfaceView};
use crate::config::EditorConfig;
use crate::events::{EventRouter, ExclusiveHandlers};
use crate::layout::KeyboardLayout;
use crate::pending::PendingRequests;
use crate::{Error, Result};

/// Remote control for a rich-text document in an embedded surface.
///
/// Commands are encoded and injected through the [`SurfaceChannel`],
/// fire-and-forget. The surface's messages must be fed to
/// [`handle_message`](Self::handle_message); responses resolve pending
/// queries and everything else fans out to listeners and handlers.
///
/// The bridge is `Send + Sync` and usable behind an `Arc`. Callbacks are
/// invoked synchronously with internal registration state locked, so a
/// callback must not register listeners or handlers itself.
pub struct EditorBridge {
	channel: Arc<dyn SurfaceChannel>,
	view: Option<Arc<dyn SurfaceView>>,
	link_dialog: Option<Arc<dyn LinkDialog>>,
	config: EditorConfig,
	query_timeout: Duration,
	pending: PendingRequests,
	router: RwLock<EventRouter>,
	handlers: RwLock<ExclusiveHandlers>,
}

impl fmt::Debug for EditorBridge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EditorBridge")
			.field("config", &self.config)
			.field("query_timeout", &self.query_timeout)
			.field("outstanding_queries", &self.pending.outstanding())
			.finish_non_exhaustive()
	}
}

impl EditorBridge {
	/// Creates a bridge over the given instruction channel.
	#[must_use]
	pub fn new(channel: Arc<dyn SurfaceChannel>, config: EditorConfig) -> Self {
		let query_timeout = Duration::from_secs(config.query_timeout_secs);
		Self {
			channel,
			view: None,
			link_dialog: None,
			config,
			query_timeout,
			pending: PendingRequests::new(),
			router: RwLock::new(EventRouter::default()),
			handlers: RwLock::new(ExclusiveHandlers::default()),
		}
	}

	/// Attaches the host view that receives forwarded scroll offsets.
	#[must_use]
	pub fn with_view(mut self, view: Arc<dyn SurfaceView>) -> Self {
		self.view = Some(view);
		self
	}

	/// Attaches the link dialog triggered by link-touched events.
	#[must_use]
	pub fn with_link_dialog(mut self, dialog: Arc<dyn LinkDialog>) -> Self {
		self.link_dialog = Some(dialog);
		self
	}

	/// The configuration this bridge was built with.
	#[must_use]
	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Encodes `command` and injects it into the surface, fire-and-forget.
	pub fn dispatch(&self, command: &Command) {
		self.channel.inject(&command.to_script());
	}

	// --- Surface lifecycle ---

	/// Boots the surface once its document has loaded: starts the
	/// surface-side script, reports the host platform, and reserves footer
	/// space when configured.
	pub fn init(&self) {
		self.dispatch(&Command::Init);
		self.set_platform(self.config.platform);
		if let Some(height) = self.config.footer_height {
			self.set_footer_height(height);
		}
	}

	/// Sets the callback invoked once surface initialization completes.
	pub fn on_initialized(&self, callback: impl Fn() + Send + Sync + 'static) {
		self.handlers.write().initialized = Some(Box::new(callback));
	}

	// --- Focus and visibility ---

	/// Moves focus into the title field.
	pub fn focus_title(&self) {
		self.dispatch(&Command::FocusTitle);
	}

	/// Moves focus into the content area.
	pub fn focus_content(&self) {
		self.dispatch(&Command::FocusContent);
	}

	/// Drops focus from the title field.
	pub fn blur_title_editor(&self) {
		self.dispatch(&Command::BlurTitleEditor);
	}

	/// Drops focus from the content area.
	pub fn blur_content_editor(&self) {
		self.dispatch(&Command::BlurContentEditor);
	}

	/// Reveals the title field.
	pub fn show_title(&self) {
		self.dispatch(&Command::ShowTitle);
	}

	/// Hides the title field.
	pub fn hide_title(&self) {
		self.dispatch(&Command::HideTitle);
	}

	/// Toggles the title field's visibility.
	pub fn toggle_title(&self) {
		self.dispatch(&Command::ToggleTitle);
	}

	// --- Content ---

	/// Replaces the title markup.
	pub fn set_title_html(&self, html: &str) {
		self.dispatch(&Command::SetTitleHtml(html.to_owned()));
	}

	/// Replaces the content markup.
	pub fn set_content_html(&self, html: &str) {
		self.dispatch(&Command::SetContentHtml(html.to_owned()));
	}

	/// Sets the title field's placeholder text.
	pub fn set_title_placeholder(&self, placeholder: Option<&str>) {
		self.dispatch(&Command::SetTitlePlaceholder(placeholder.map(str::to_owned)));
	}

	/// Sets the content area's placeholder text.
	pub fn set_content_placeholder(&self, placeholder: Option<&str>) {
		self.dispatch(&Command::SetContentPlaceholder(placeholder.map(str::to_owned)));
	}

	/// Injects custom CSS into the document.
	pub fn set_custom_css(&self, css: &str) {
		self.dispatch(&Command::SetCustomCss(css.to_owned()));
	}

	/// Asks the surface to start emitting content-change events.
	pub fn enable_on_change(&self) {
		self.dispatch(&Command::EnableOnChange);
	}

	// --- Formatting ---

	/// Toggles bold on the current selection.
	pub fn set_bold(&self) {
		self.dispatch(&Command::SetBold);
	}

	/// Toggles italics on the current selection.
	pub fn set_italic(&self) {
		self.dispatch(&Command::SetItalic);
	}

	/// Toggles underline on the current selection.
	pub fn set_underline(&self) {
		self.dispatch(&Command::SetUnderline);
	}

	/// Toggles subscript on the current selection.
	pub fn set_subscript(&self) {
		self.dispatch(&Command::SetSubscript);
	}

	/// Toggles superscript on the current selection.
	pub fn set_superscript(&self) {
		self.dispatch(&Command::SetSuperscript);
	}

	/// Toggles strikethrough on the current selection.
	pub fn set_strikethrough(&self) {
		self.dispatch(&Command::SetStrikethrough);
	}

	/// Makes the current block a level-1 heading.
	pub fn heading1(&self) {
		self.dispatch(&Command::Heading1);
	}

	/// Makes the current block a level-2 heading.
	pub fn heading2(&self) {
		self.dispatch(&Command::Heading2);
	}

	/// Makes the current block a level-3 heading.
	pub fn heading3(&self) {
		self.dispatch(&Command::Heading3);
	}

	/// Makes the current block a level-4 heading.
	pub fn heading4(&self) {
		self.dispatch(&Command::Heading4);
	}

	/// Makes the current block a level-5 heading.
	pub fn heading5(&self) {
		self.dispatch(&Command::Heading5);
	}

	/// Makes the current block a level-6 heading.
	pub fn heading6(&self) {
		self.dispatch(&Command::Heading6);
	}

	/// Makes the current block a plain paragraph.
	pub fn set_paragraph(&self) {
		self.dispatch(&Command::SetParagraph);
	}

	/// Strips inline formatting from the selection.
	pub fn remove_format(&self) {
		self.dispatch(&Command::RemoveFormat);
	}

	/// Aligns the current block left.
	pub fn align_left(&self) {
		self.dispatch(&Command::AlignLeft);
	}

	/// Centers the current block.
	pub fn align_center(&self) {
		self.dispatch(&Command::AlignCenter);
	}

	/// Aligns the current block right.
	pub fn align_right(&self) {
		self.dispatch(&Command::AlignRight);
	}

	/// Justifies the current block.
	pub fn align_full(&self) {
		self.dispatch(&Command::AlignFull);
	}

	/// Starts or toggles an unordered list.
	pub fn insert_bullets_list(&self) {
		self.dispatch(&Command::InsertBulletsList);
	}

	/// Starts or toggles an ordered list.
	pub fn insert_ordered_list(&self) {
		self.dispatch(&Command::InsertOrderedList);
	}

	/// Inserts a horizontal rule.
	pub fn set_hr(&self) {
		self.dispatch(&Command::SetHr);
	}

	/// Increases the indentation of the current block.
	pub fn set_indent(&self) {
		self.dispatch(&Command::SetIndent);
	}

	/// Decreases the indentation of the current block.
	pub fn set_outdent(&self) {
		self.dispatch(&Command::SetOutdent);
	}

	/// Sets the selection's background color.
	pub fn set_background_color(&self, color: &str) {
		self.dispatch(&Command::SetBackgroundColor(color.to_owned()));
	}

	/// Sets the selection's text color.
	pub fn set_text_color(&self, color: &str) {
		self.dispatch(&Command::SetTextColor(color.to_owned()));
	}

	// --- Insertions ---

	/// Inserts a hyperlink; the title defaults to the URL.
	pub fn insert_link(&self, url: &str, title: Option<&str>) {
		self.dispatch(&Command::InsertLink {
			url: url.to_owned(),
			title: title.unwrap_or(url).to_owned(),
		});
	}

	/// Rewrites the hyperlink under the caret; the title defaults to the URL.
	pub fn update_link(&self, url: &str, title: Option<&str>) {
		self.dispatch(&Command::UpdateLink {
			url: url.to_owned(),
			title: title.unwrap_or(url).to_owned(),
		});
	}

	/// Inserts an image by URL.
	pub fn insert_image(&self, url: &str) {
		self.dispatch(&Command::InsertImage(url.to_owned()));
	}

	/// Inserts an emoji image by URL.
	pub fn insert_emoji(&self, url: &str) {
		self.dispatch(&Command::InsertEmoji(url.to_owned()));
	}

	/// Removes a previously inserted emoji by URL.
	pub fn delete_emoji(&self, url: &str) {
		self.dispatch(&Command::DeleteEmoji(url.to_owned()));
	}

	/// Saves the caret position ahead of an insertion.
	pub fn prepare_insert(&self, show_caret_placeholder: Option<bool>) {
		self.dispatch(&Command::PrepareInsert(show_caret_placeholder));
	}

	/// Restores the caret position saved by [`prepare_insert`](Self::prepare_insert).
	pub fn restore_selection(&self) {
		self.dispatch(&Command::RestoreSelection);
	}

	/// Opens the link dialog for a fresh insertion or a touched link.
	///
	/// Saves the caret first so the host can restore it when the dialog
	/// resolves into an [`insert_link`](Self::insert_link) or
	/// [`update_link`](Self::update_link).
	pub fn open_link_dialog(&self, link: &LinkTouch) {
		self.prepare_insert(None);
		if let Some(dialog) = &self.link_dialog {
			dialog.show(link);
		}
	}

	// --- Geometry ---

	/// Constrains the editable area to the given height.
	pub fn set_editor_height(&self, height: f64) {
		self.dispatch(&Command::SetEditorHeight(height));
	}

	/// Reserves space for host chrome below the editable area.
	pub fn set_footer_height(&self, height: f64) {
		self.dispatch(&Command::SetFooterHeight(height));
	}

	/// Reports the host platform to the surface.
	pub fn set_platform(&self, platform: Platform) {
		self.dispatch(&Command::SetPlatform(platform));
	}

	/// Resizes the editable area when the on-screen keyboard appears.
	///
	/// Does nothing while the keyboard is hidden; the surface keeps whatever
	/// height it last had.
	pub fn adjust_for_keyboard(&self, layout: &KeyboardLayout) {
		if layout.keyboard_height == 0.0 {
			return;
		}
		self.set_editor_height(layout.available_editor_height());
	}

	// --- Queries ---

	/// Retrieves the title markup from the surface.
	///
	/// # Errors
	///
	/// [`Error::QueryTimeout`] when the surface stays silent past the
	/// deadline; [`Error::Superseded`] when a newer query of the same kind
	/// replaces this one first.
	pub async fn title_html(&self) -> Result<String> {
		self.query(QueryKind::TitleHtml).await
	}

	/// Retrieves the title as plain text from the surface.
	///
	/// # Errors
	///
	/// See [`title_html`](Self::title_html).
	pub async fn title_text(&self) -> Result<String> {
		self.query(QueryKind::TitleText).await
	}

	/// Retrieves the content markup from the surface.
	///
	/// # Errors
	///
	/// See [`title_html`](Self::title_html).
	pub async fn content_html(&self) -> Result<String> {
		self.query(QueryKind::ContentHtml).await
	}

	/// Retrieves the currently selected text from the surface.
	///
	/// # Errors
	///
	/// See [`title_html`](Self::title_html).
	pub async fn selected_text(&self) -> Result<String> {
		self.query(QueryKind::SelectedText).await
	}

	async fn query(&self, kind: QueryKind) -> Result<String> {
		let ticket = self.pending.issue(kind);
		self.dispatch(&kind.command());
		match tokio::time::timeout(self.query_timeout, ticket.rx).await {
			Ok(Ok(outcome)) => outcome,
			Ok(Err(_)) => Err(Error::BridgeClosed),
			Err(_) => {
				self.pending.expire(ticket.kind, ticket.seq);
				tracing::debug!(query = %kind, "query deadline elapsed with no response");
				Err(Error::QueryTimeout(kind))
			}
		}
	}

	// --- Listener and handler registration ---

	/// Registers a listener for selection formatting changes.
	///
	/// Listeners are additive and fire in registration order.
	pub fn add_selection_listener(&self, listener: impl Fn(&[String]) + Send + Sync + 'static) {
		self.router.write().add_selection_listener(Box::new(listener));
	}

	/// Registers a listener for content changes.
	///
	/// The surface only emits these after [`enable_on_change`](Self::enable_on_change).
	pub fn add_content_change_listener(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
		self.router.write().add_content_change_listener(Box::new(listener));
	}

	/// Registers a listener for selected-text changes.
	pub fn add_selected_text_listener(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
		self.router.write().add_selected_text_listener(Box::new(listener));
	}

	/// Sets the title-focus handler, replacing any previous one, and asks the
	/// surface to start reporting title focus.
	pub fn set_title_focus_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
		self.handlers.write().title_focus = Some(Box::new(handler));
		self.dispatch(&Command::SetTitleFocusHandler);
	}

	/// Sets the content-focus handler, replacing any previous one, and asks
	/// the surface to start reporting content focus.
	pub fn set_content_focus_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
		self.handlers.write().content_focus = Some(Box::new(handler));
		self.dispatch(&Command::SetContentFocusHandler);
	}

	/// Sets the content-blur handler, replacing any previous one, and asks
	/// the surface to start reporting content blur.
	pub fn set_content_blur_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
		self.handlers.write().content_blur = Some(Box::new(handler));
		self.dispatch(&Command::SetContentBlurHandler);
	}

	/// Sets the empty-state handler, replacing any previous one, and asks the
	/// surface to start reporting empty-state flips.
	pub fn set_empty_state_handler(&self, handler: impl Fn(bool) + Send + Sync + 'static) {
		self.handlers.write().empty_state = Some(Box::new(handler));
		self.dispatch(&Command::SetOnChangeEmptyOrNot);
	}

	// --- Inbound message loop ---

	/// Entry point for every raw message the surface delivers.
	///
	/// Undecodable input and responses with no pending query are dropped
	/// silently; no branch is fatal.
	pub fn handle_message(&self, raw: &str) {
		let envelope = match Envelope::decode(raw) {
			Ok(envelope) => envelope,
			Err(err) => {
				tracing::debug!(error = %err, "dropping undecodable surface message");
				return;
			}
		};
		match envelope.split() {
			Inbound::Response(response) => {
				if !self.pending.resolve(response.kind, response.payload) {
					tracing::trace!(query = %response.kind, "dropping response with no pending query");
				}
			}
			Inbound::Event(event) => self.handle_event(event),
		}
	}

	fn handle_event(&self, event: SurfaceEvent) {
		match event {
			SurfaceEvent::Initialized => self.run_init_sequence(),
			SurfaceEvent::LinkTouched(link) => self.open_link_dialog(&link),
			SurfaceEvent::Log(value) => {
				tracing::debug!(message = %value, "surface log");
			}
			SurfaceEvent::Scroll(y) => {
				if let Some(view) = &self.view {
					view.set_content_offset(y);
				}
			}
			SurfaceEvent::TitleFocused => {
				if let Some(handler) = &self.handlers.read().title_focus {
					handler();
				}
			}
			SurfaceEvent::ContentFocused => {
				if let Some(handler) = &self.handlers.read().content_focus {
					handler();
				}
			}
			SurfaceEvent::ContentBlur => {
				if let Some(handler) = &self.handlers.read().content_blur {
					handler();
				}
			}
			SurfaceEvent::EmptyStateChanged(is_empty) => {
				if let Some(handler) = &self.handlers.read().empty_state {
					handler(is_empty);
				}
			}
			SurfaceEvent::SelectionChanged(items) => {
				self.router.read().publish_selection_change(&items);
			}
			SurfaceEvent::ContentChanged(content) => {
				self.router.read().publish_content_change(&content);
			}
			SurfaceEvent::SelectedTextChanged(text) => {
				self.router.read().publish_selected_text_change(&text);
			}
		}
	}

	/// One-time setup once the surface-side script reports in.
	///
	/// Order matters: styling before placeholders before initial content
	/// before visibility before change enablement, then the host callback.
	fn run_init_sequence(&self) {
		if let Some(css) = &self.config.custom_css {
			self.set_custom_css(css);
		}
		self.set_title_placeholder(self.config.title_placeholder.as_deref());
		self.set_content_placeholder(self.config.content_placeholder.as_deref());
		self.set_title_html(self.config.initial_title_html.as_deref().unwrap_or(""));
		self.set_content_html(self.config.initial_content_html.as_deref().unwrap_or(""));
		if !self.config.hidden_title {
			self.show_title();
		}
		if self.config.enable_on_change {
			self.enable_on_change();
		}
		if let Some(callback) = &self.handlers.read().initialized {
			callback();
		}
	}
}
