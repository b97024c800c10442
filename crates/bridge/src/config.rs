//! Bridge configuration.

use serde::{Deserialize, Serialize};
use vellum_protocol::Platform;

/// Configuration for an [`crate::EditorBridge`].
///
/// Everything here feeds the surface-load and initialization sequences; none
/// of it is consulted again afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
	/// Markup installed into the title field once the surface reports in.
	#[serde(default)]
	pub initial_title_html: Option<String>,
	/// Markup installed into the content area once the surface reports in.
	#[serde(default)]
	pub initial_content_html: Option<String>,
	/// Placeholder shown in an empty title field.
	#[serde(default)]
	pub title_placeholder: Option<String>,
	/// Placeholder shown in an empty content area.
	#[serde(default)]
	pub content_placeholder: Option<String>,
	/// Extra CSS injected into the document during initialization.
	#[serde(default)]
	pub custom_css: Option<String>,
	/// Keep the title field hidden instead of revealing it after init.
	#[serde(default)]
	pub hidden_title: bool,
	/// Ask the surface to emit content-change events.
	#[serde(default)]
	pub enable_on_change: bool,
	/// Space reserved for host chrome below the editable area.
	#[serde(default)]
	pub footer_height: Option<f64>,
	/// Host platform tag reported to the surface.
	#[serde(default)]
	pub platform: Platform,
	/// Query deadline in seconds.
	#[serde(default = "default_query_timeout")]
	pub query_timeout_secs: u64,
}

/// Returns the default query deadline in seconds.
fn default_query_timeout() -> u64 {
	5
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			initial_title_html: None,
			initial_content_html: None,
			title_placeholder: None,
			content_placeholder: None,
			custom_css: None,
			hidden_title: false,
			enable_on_change: false,
			footer_height: None,
			platform: Platform::default(),
			query_timeout_secs: default_query_timeout(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_config_fills_defaults() {
		let config: EditorConfig = serde_json::from_str("{}").expect("decode");
		assert_eq!(config.query_timeout_secs, 5);
		assert_eq!(config.platform, Platform::Ios);
		assert!(!config.hidden_title);
		assert!(!config.enable_on_change);
		assert!(config.initial_title_html.is_none());
		assert!(config.footer_height.is_none());
	}

	#[test]
	fn config_round_trips() {
		let config = EditorConfig {
			initial_content_html: Some("<p>draft</p>".into()),
			hidden_title: true,
			footer_height: Some(44.0),
			query_timeout_secs: 2,
			..EditorConfig::default()
		};
		let raw = serde_json::to_string(&config).expect("encode");
		let back: EditorConfig = serde_json::from_str(&raw).expect("decode");
		assert_eq!(back.initial_content_html.as_deref(), Some("<p>draft</p>"));
		assert!(back.hidden_title);
		assert_eq!(back.footer_height, Some(44.0));
		assert_eq!(back.query_timeout_secs, 2);
	}
}
