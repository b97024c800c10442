use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::*;

fn wire(command: &Command) -> Value {
	serde_json::to_value(command).expect("serialize")
}

#[test]
fn payload_less_command_omits_data() {
	assert_eq!(wire(&Command::SetBold), json!({"type": "setBold"}));
	assert_eq!(wire(&Command::Heading3), json!({"type": "heading3"}));
	assert_eq!(wire(&Command::RestoreSelection), json!({"type": "restoreSelection"}));
}

#[test]
fn string_payload_rides_in_data() {
	assert_eq!(
		wire(&Command::SetTitleHtml("<h1>hi</h1>".into())),
		json!({"type": "setTitleHtml", "data": "<h1>hi</h1>"})
	);
	assert_eq!(
		wire(&Command::SetBackgroundColor("#ffcc00".into())),
		json!({"type": "setBackgroundColor", "data": "#ffcc00"})
	);
}

#[test]
fn link_commands_carry_url_and_title() {
	assert_eq!(
		wire(&Command::InsertLink {
			url: "https://example.com".into(),
			title: "Example".into(),
		}),
		json!({"type": "insertLink", "data": {"url": "https://example.com", "title": "Example"}})
	);
	assert_eq!(
		wire(&Command::UpdateLink {
			url: "https://example.com".into(),
			title: "Example".into(),
		})["type"],
		json!("updateLink")
	);
}

#[test]
fn irregular_names_keep_their_wire_spelling() {
	assert_eq!(wire(&Command::SetHr), json!({"type": "setHR"}));
	assert_eq!(
		wire(&Command::SetCustomCss("p { color: red; }".into()))["type"],
		json!("setCustomCSS")
	);
	assert_eq!(
		wire(&Command::SetOnChangeEmptyOrNot),
		json!({"type": "setOnChangeEmptyOrNot"})
	);
}

#[test]
fn platform_serializes_lowercase() {
	assert_eq!(
		wire(&Command::SetPlatform(Platform::Ios)),
		json!({"type": "setPlatform", "data": "ios"})
	);
	assert_eq!(
		wire(&Command::SetPlatform(Platform::Android)),
		json!({"type": "setPlatform", "data": "android"})
	);
}

#[test]
fn numeric_payloads_are_plain_numbers() {
	assert_eq!(
		wire(&Command::SetEditorHeight(412.5)),
		json!({"type": "setEditorHeight", "data": 412.5})
	);
	assert_eq!(
		wire(&Command::SetFooterHeight(44.0)),
		json!({"type": "setFooterHeight", "data": 44.0})
	);
}

#[test]
fn script_wraps_body_and_returns_benign_value() {
	let script = Command::SetBold.to_script();
	assert_eq!(script, r#"window.__surfaceBridge.dispatch({"type":"setBold"}); true;"#);

	let script = Command::SetContentHtml("<p>a & b</p>".into()).to_script();
	assert!(script.starts_with("window.__surfaceBridge.dispatch({"));
	assert!(script.ends_with("; true;"));
	assert!(script.contains(r#""type":"setContentHtml""#));
}

#[test]
fn query_kinds_map_to_their_commands() {
	assert_eq!(QueryKind::TitleHtml.command(), Command::GetTitleHtml);
	assert_eq!(QueryKind::TitleText.command(), Command::GetTitleText);
	assert_eq!(QueryKind::ContentHtml.command(), Command::GetContentHtml);
	assert_eq!(QueryKind::SelectedText.command(), Command::GetSelectedText);
}
