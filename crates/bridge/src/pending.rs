//! Pending-request registry: correlation slots for in-flight queries.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use vellum_protocol::QueryKind;

use crate::{Error, Result};

/// What a slot eventually delivers to its waiter.
type Outcome = Result<String>;

/// A single in-flight query.
struct Slot {
	/// Issue sequence number; guards expiry against clearing a successor.
	seq: u64,
	tx: oneshot::Sender<Outcome>,
}

/// A claim on a correlation slot, held by the issuing caller.
pub(crate) struct Ticket {
	pub(crate) kind: QueryKind,
	pub(crate) seq: u64,
	pub(crate) rx: oneshot::Receiver<Outcome>,
}

/// Correlation slots for outstanding queries, at most one per kind.
///
/// The registry owns no timers. Callers race the ticket's receiver against
/// their own deadline; resolution completes the oneshot, which cancels the
/// race deterministically, and an elapsed deadline calls [`Self::expire`]
/// with the ticket's sequence number so a successor slot is never cleared
/// by a stale timeout.
// TODO: echo a request identifier through the surface protocol so overlapping
// queries of the same kind stop superseding each other.
#[derive(Default)]
pub(crate) struct PendingRequests {
	slots: Mutex<Slots>,
}

#[derive(Default)]
struct Slots {
	next_seq: u64,
	by_kind: HashMap<QueryKind, Slot>,
}

impl PendingRequests {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Claims the slot for `kind`.
	///
	/// A previous claim of the same kind is superseded: its waiter completes
	/// with [`Error::Superseded`] instead of hanging until its deadline.
	pub(crate) fn issue(&self, kind: QueryKind) -> Ticket {
		let (tx, rx) = oneshot::channel();
		let mut slots = self.slots.lock();
		let seq = slots.next_seq;
		slots.next_seq += 1;
		if let Some(prev) = slots.by_kind.insert(kind, Slot { seq, tx }) {
			tracing::debug!(query = %kind, "superseding in-flight query of the same kind");
			let _ = prev.tx.send(Err(Error::Superseded(kind)));
		}
		Ticket { kind, seq, rx }
	}

	/// Fulfills the slot for `kind` with a response payload.
	///
	/// Returns false when no slot is waiting (already resolved, expired, or
	/// never issued); the caller drops the payload in that case.
	pub(crate) fn resolve(&self, kind: QueryKind, payload: String) -> bool {
		match self.slots.lock().by_kind.remove(&kind) {
			Some(slot) => {
				// The waiter may have given up; the result may be ignored.
				let _: Result<_, _> = slot.tx.send(Ok(payload));
				true
			}
			None => false,
		}
	}

	/// Clears the slot for an elapsed ticket.
	///
	/// No-op when the slot has been resolved or re-issued since the ticket
	/// was claimed.
	pub(crate) fn expire(&self, kind: QueryKind, seq: u64) {
		let mut slots = self.slots.lock();
		if slots.by_kind.get(&kind).is_some_and(|slot| slot.seq == seq) {
			slots.by_kind.remove(&kind);
		}
	}

	/// Number of outstanding slots.
	pub(crate) fn outstanding(&self) -> usize {
		self.slots.lock().by_kind.len()
	}
}

#[cfg(test)]
mod tests;
