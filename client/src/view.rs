//! Local view state and its reconciliation rules.
//!
//! # Design
//! `TodoView` never performs I/O. Callers take a [`Seq`] from
//! [`TodoView::issue`] before sending a request and hand it back together
//! with the outcome. Sequence numbers order requests by issue time, which
//! lets the view drop responses that arrive out of order:
//!
//! - A list snapshot is applied only if it was issued after both the last
//!   applied snapshot and the last applied create or update.
//! - A created item is appended at once. It is remembered until a snapshot
//!   issued after the create completed has been applied; a snapshot issued
//!   while the create was in flight gets it re-appended if missing.
//! - Failures are recorded as the visible error and never touch the items.

use crate::error::ApiError;
use crate::types::{TodoItem, UpdateAck};

/// Issue-order token attached to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seq(u64);

impl Seq {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Whether a response changed the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
    Failed,
}

#[derive(Debug, Clone)]
struct RecentCreate {
    /// First sequence number issued after the create was applied. Snapshots
    /// at or beyond it already contain the item.
    settled_at: u64,
    item: TodoItem,
}

#[derive(Debug, Default, Clone)]
pub struct TodoView {
    items: Vec<TodoItem>,
    input: String,
    error: Option<String>,
    next_seq: u64,
    last_snapshot: Option<Seq>,
    last_mutation: Option<Seq>,
    recent_creates: Vec<RecentCreate>,
}

impl TodoView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the next sequence number for an outgoing request.
    pub fn issue(&mut self) -> Seq {
        let seq = Seq(self.next_seq);
        self.next_seq += 1;
        seq
    }

    /// Replace the items with a list snapshot unless a newer one is already shown.
    pub fn apply_snapshot(
        &mut self,
        seq: Seq,
        result: Result<Vec<TodoItem>, ApiError>,
    ) -> Outcome {
        let items = match result {
            Ok(items) => items,
            Err(err) => return self.fail(seq, err),
        };
        let newest = self.last_snapshot.max(self.last_mutation);
        if newest.is_some_and(|last| seq <= last) {
            tracing::debug!(seq = seq.get(), "discarding stale list response");
            return Outcome::Stale;
        }

        self.items = items;
        self.recent_creates.retain(|recent| recent.settled_at > seq.0);
        for recent in &self.recent_creates {
            if !self.items.iter().any(|item| item.id == recent.item.id) {
                self.items.push(recent.item.clone());
            }
        }
        self.last_snapshot = Some(seq);
        self.error = None;
        Outcome::Applied
    }

    /// Append a server-confirmed item and clear the input field.
    pub fn apply_created(&mut self, seq: Seq, result: Result<TodoItem, ApiError>) -> Outcome {
        let item = match result {
            Ok(item) => item,
            Err(err) => return self.fail(seq, err),
        };
        if !self.items.iter().any(|existing| existing.id == item.id) {
            self.items.push(item.clone());
        }
        self.recent_creates.push(RecentCreate {
            settled_at: self.next_seq,
            item,
        });
        self.input.clear();
        self.mark_mutation(seq);
        self.error = None;
        Outcome::Applied
    }

    /// Record the outcome of an update. The ack carries no item data, so a
    /// success only clears the error; the caller resyncs with a fresh list.
    pub fn apply_updated(&mut self, seq: Seq, result: Result<UpdateAck, ApiError>) -> Outcome {
        match result {
            Ok(_) => {
                self.mark_mutation(seq);
                self.error = None;
                Outcome::Applied
            }
            Err(err) => self.fail(seq, err),
        }
    }

    /// Text lines for display: the error first, then one line per item.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        if let Some(error) = &self.error {
            lines.push(format!("error: {error}"));
        }
        for item in &self.items {
            let mark = if item.completed { 'x' } else { ' ' };
            lines.push(format!("[{mark}] {}", item.text));
        }
        lines
    }

    fn mark_mutation(&mut self, seq: Seq) {
        self.last_mutation = self.last_mutation.max(Some(seq));
    }

    fn fail(&mut self, seq: Seq, err: ApiError) -> Outcome {
        tracing::warn!(seq = seq.get(), error = %err, "request failed");
        self.error = Some(err.to_string());
        Outcome::Failed
    }
}
