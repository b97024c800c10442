use pretty_assertions::assert_eq;

use super::*;

#[test]
fn resolve_fulfills_the_waiting_ticket() {
	let pending = PendingRequests::new();
	let mut ticket = pending.issue(QueryKind::ContentHtml);

	assert!(pending.resolve(QueryKind::ContentHtml, "<p>hi</p>".into()));
	let outcome = ticket.rx.try_recv().expect("slot resolved");
	assert_eq!(outcome.expect("payload"), "<p>hi</p>");
	assert_eq!(pending.outstanding(), 0);
}

#[test]
fn resolve_without_a_slot_is_a_noop() {
	let pending = PendingRequests::new();
	assert!(!pending.resolve(QueryKind::TitleText, "ignored".into()));
}

#[test]
fn kinds_do_not_cross_resolve() {
	let pending = PendingRequests::new();
	let mut ticket = pending.issue(QueryKind::TitleHtml);

	assert!(!pending.resolve(QueryKind::ContentHtml, "other".into()));
	assert!(ticket.rx.try_recv().is_err(), "titleHtml ticket must still be pending");
	assert_eq!(pending.outstanding(), 1);
}

#[test]
fn second_issue_supersedes_the_first() {
	let pending = PendingRequests::new();
	let mut first = pending.issue(QueryKind::SelectedText);
	let mut second = pending.issue(QueryKind::SelectedText);

	let outcome = first.rx.try_recv().expect("superseded immediately");
	assert!(matches!(outcome, Err(Error::Superseded(QueryKind::SelectedText))));
	assert_eq!(pending.outstanding(), 1);

	assert!(pending.resolve(QueryKind::SelectedText, "kept".into()));
	let outcome = second.rx.try_recv().expect("slot resolved");
	assert_eq!(outcome.expect("payload"), "kept");
}

#[test]
fn expire_clears_only_the_claimed_slot() {
	let pending = PendingRequests::new();
	let first = pending.issue(QueryKind::TitleHtml);
	let second = pending.issue(QueryKind::TitleHtml);

	// The first ticket's deadline fires after the slot was re-issued; the
	// successor must survive.
	pending.expire(first.kind, first.seq);
	assert_eq!(pending.outstanding(), 1);

	pending.expire(second.kind, second.seq);
	assert_eq!(pending.outstanding(), 0);
}

#[test]
fn expire_after_resolve_is_a_noop() {
	let pending = PendingRequests::new();
	let ticket = pending.issue(QueryKind::ContentHtml);
	assert!(pending.resolve(QueryKind::ContentHtml, "done".into()));

	pending.expire(ticket.kind, ticket.seq);
	assert_eq!(pending.outstanding(), 0);
}
