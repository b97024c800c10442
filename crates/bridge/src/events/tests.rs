use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn listeners_fire_in_registration_order_with_the_same_payload() {
	let mut router = EventRouter::default();
	let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

	for tag in ["first", "second"] {
		let seen = seen.clone();
		router.add_selection_listener(Box::new(move |items| {
			seen.lock().push(format!("{tag}:{}", items.join("+")));
		}));
	}

	router.publish_selection_change(&["bold".into(), "italic".into()]);
	assert_eq!(*seen.lock(), vec!["first:bold+italic", "second:bold+italic"]);
}

#[test]
fn publish_without_listeners_is_a_noop() {
	let router = EventRouter::default();
	router.publish_selection_change(&["bold".into()]);
	router.publish_content_change("<p></p>");
	router.publish_selected_text_change("");
}

#[test]
fn listener_lists_are_independent_per_kind() {
	let mut router = EventRouter::default();
	let selections = Arc::new(AtomicUsize::new(0));
	let contents = Arc::new(AtomicUsize::new(0));

	{
		let selections = selections.clone();
		router.add_selection_listener(Box::new(move |_| {
			selections.fetch_add(1, Ordering::SeqCst);
		}));
	}
	{
		let contents = contents.clone();
		router.add_content_change_listener(Box::new(move |_| {
			contents.fetch_add(1, Ordering::SeqCst);
		}));
	}

	router.publish_content_change("<p>x</p>");
	router.publish_content_change("<p>y</p>");
	router.publish_selection_change(&[]);

	assert_eq!(selections.load(Ordering::SeqCst), 1);
	assert_eq!(contents.load(Ordering::SeqCst), 2);
}

#[test]
fn selected_text_listeners_receive_the_text() {
	let mut router = EventRouter::default();
	let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
	{
		let seen = seen.clone();
		router.add_selected_text_listener(Box::new(move |text| {
			seen.lock().push(text.to_owned());
		}));
	}

	router.publish_selected_text_change("quoted passage");
	assert_eq!(*seen.lock(), vec!["quoted passage"]);
}
