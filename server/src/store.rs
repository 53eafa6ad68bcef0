//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` owns the item list and the id counter behind a single
//! `RwLock`. Create and update take the write lock, so mutations are
//! serialized and an id is never handed out without its item being appended
//! in the same critical section. List takes the read lock and clones the
//! whole vector, so readers see either all of a mutation or none of it.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::Error;

/// A single todo item as stored and served.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: u64,
}

/// Authoritative, insertion-ordered todo collection.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every item in insertion order.
    pub async fn list(&self) -> Vec<TodoItem> {
        self.inner.read().await.items.clone()
    }

    /// Append a new, uncompleted item and return it.
    ///
    /// Absent text and text that is empty or only whitespace are rejected.
    /// Accepted text is stored exactly as given.
    pub async fn create(&self, text: impl Into<Option<String>>) -> Result<TodoItem, Error> {
        let Some(text) = text.into() else {
            return Err(Error::InvalidInput("text is required".to_string()));
        };
        if text.trim().is_empty() {
            return Err(Error::InvalidInput("text must not be empty".to_string()));
        }
        let mut inner = self.inner.write().await;
        let item = TodoItem {
            id: inner.next_id,
            text,
            completed: false,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        Ok(item)
    }

    /// Set `completed` on the item with `id`. Returns whether an item matched;
    /// an unknown id leaves the collection untouched.
    pub async fn update(&self, id: u64, completed: bool) -> bool {
        let mut inner = self.inner.write().await;
        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = completed;
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
