// src/application/write_queue.rs
use std::collections::{HashMap, HashSet};

use crate::domain::NoteField;

/// A field write ready to be dispatched to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    pub id: i64,
    pub field: NoteField,
    pub value: String,
}

/// Edits for one note that arrived while a write for it was in flight.
/// Only the latest value per field is kept.
#[derive(Debug, Default)]
struct PendingEdits {
    title: Option<String>,
    body: Option<String>,
}

impl PendingEdits {
    fn set(&mut self, field: NoteField, value: String) {
        match field {
            NoteField::Title => self.title = Some(value),
            NoteField::Body => self.body = Some(value),
        }
    }

    fn get(&self, field: NoteField) -> Option<&String> {
        match field {
            NoteField::Title => self.title.as_ref(),
            NoteField::Body => self.body.as_ref(),
        }
    }

    fn take_next(&mut self) -> Option<(NoteField, String)> {
        if let Some(title) = self.title.take() {
            return Some((NoteField::Title, title));
        }
        self.body.take().map(|body| (NoteField::Body, body))
    }

    fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Serializes field writes so at most one request per note id is in flight.
///
/// Edits arriving while a note has an outstanding request are coalesced per
/// field; the latest value wins and is dispatched when the outstanding
/// request completes. An earlier write can therefore never overwrite a later
/// edit through out-of-order completion.
#[derive(Debug, Default)]
pub struct WriteQueue {
    in_flight: HashSet<i64>,
    pending: HashMap<i64, PendingEdits>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit. Returns the request to dispatch now, or `None` when a
    /// request for this note is already outstanding and the edit was queued.
    pub fn push(&mut self, id: i64, field: NoteField, value: String) -> Option<WriteRequest> {
        if self.in_flight.contains(&id) {
            self.pending.entry(id).or_default().set(field, value);
            return None;
        }
        self.in_flight.insert(id);
        Some(WriteRequest { id, field, value })
    }

    /// Mark the outstanding request for `id` finished. Returns the next
    /// coalesced request for that note, which is dispatched immediately and
    /// keeps the note in flight.
    pub fn complete(&mut self, id: i64) -> Option<WriteRequest> {
        let next = self.pending.get_mut(&id).and_then(PendingEdits::take_next);
        if self.pending.get(&id).is_some_and(PendingEdits::is_empty) {
            self.pending.remove(&id);
        }
        match next {
            Some((field, value)) => Some(WriteRequest { id, field, value }),
            None => {
                self.in_flight.remove(&id);
                None
            }
        }
    }

    /// Whether an edit for this field is still queued behind the in-flight
    /// request.
    pub fn has_queued(&self, id: i64, field: NoteField) -> bool {
        self.pending
            .get(&id)
            .is_some_and(|edits| edits.get(field).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_idle_note_when_pushing_then_dispatches_immediately() {
        let mut queue = WriteQueue::new();

        let request = queue.push(1, NoteField::Title, "a".to_string());

        assert_eq!(
            request,
            Some(WriteRequest {
                id: 1,
                field: NoteField::Title,
                value: "a".to_string()
            })
        );
    }

    #[test]
    fn given_in_flight_write_when_pushing_then_queues_instead_of_dispatching() {
        let mut queue = WriteQueue::new();
        queue.push(1, NoteField::Body, "a".to_string());

        let request = queue.push(1, NoteField::Body, "ab".to_string());

        assert_eq!(request, None);
        assert!(queue.has_queued(1, NoteField::Body));
    }

    #[test]
    fn given_rapid_edits_when_completing_then_only_latest_value_is_dispatched() {
        let mut queue = WriteQueue::new();
        queue.push(1, NoteField::Body, "a".to_string());
        queue.push(1, NoteField::Body, "ab".to_string());
        queue.push(1, NoteField::Body, "abc".to_string());

        let next = queue.complete(1);

        assert_eq!(
            next,
            Some(WriteRequest {
                id: 1,
                field: NoteField::Body,
                value: "abc".to_string()
            })
        );
        // The coalesced write is now the in-flight one.
        assert_eq!(queue.push(1, NoteField::Body, "abcd".to_string()), None);
    }

    #[test]
    fn given_no_queued_edits_when_completing_then_note_becomes_idle() {
        let mut queue = WriteQueue::new();
        queue.push(1, NoteField::Title, "a".to_string());

        assert_eq!(queue.complete(1), None);
        // Next push dispatches again.
        assert!(queue.push(1, NoteField::Title, "b".to_string()).is_some());
    }

    #[test]
    fn given_edits_to_both_fields_when_completing_then_title_then_body_dispatch() {
        let mut queue = WriteQueue::new();
        queue.push(1, NoteField::Title, "t0".to_string());
        queue.push(1, NoteField::Title, "t1".to_string());
        queue.push(1, NoteField::Body, "b1".to_string());

        let first = queue.complete(1).expect("queued title write");
        assert_eq!(first.field, NoteField::Title);
        assert_eq!(first.value, "t1");

        let second = queue.complete(1).expect("queued body write");
        assert_eq!(second.field, NoteField::Body);
        assert_eq!(second.value, "b1");

        assert_eq!(queue.complete(1), None);
    }

    #[test]
    fn given_writes_to_different_notes_when_pushing_then_both_dispatch() {
        let mut queue = WriteQueue::new();

        assert!(queue.push(1, NoteField::Title, "a".to_string()).is_some());
        assert!(queue.push(2, NoteField::Title, "b".to_string()).is_some());
    }
}
