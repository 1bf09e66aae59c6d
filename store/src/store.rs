//! The in-memory todo store.
//!
//! # Design
//! One `RwLock` guards the item sequence and the id counter as a single
//! unit, so two concurrent creates can never observe the same counter value
//! and a delete racing an update resolves in lock-acquisition order. Items
//! are kept in insertion order, which is also the listing order; lookups are
//! linear scans bounded by the item count. The lock is never held across
//! anything that could block.

use parking_lot::RwLock;

use crate::error::{Result, StoreError};
use crate::types::{TodoId, TodoItem, TodoPatch};

/// Maximum accepted text length in characters, counted after trimming.
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: TodoId,
}

/// In-memory authority for todo items.
///
/// All methods take `&self`; share the store behind an `Arc` to serve
/// concurrent callers.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl TodoStore {
    /// Create an empty store. The first item will get id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All current items in insertion order, as snapshots.
    pub fn list(&self) -> Vec<TodoItem> {
        self.inner.read().items.clone()
    }

    /// Look up a single item by id.
    pub fn get(&self, id: TodoId) -> Result<TodoItem> {
        self.inner
            .read()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Create a new item from `text`.
    ///
    /// The text is trimmed before validation and stored trimmed. On success
    /// the item gets the next id and starts out not completed. This is the
    /// only operation that advances the id counter.
    pub fn create(&self, text: &str) -> Result<TodoItem> {
        let text = validate_text(text)?;
        let mut inner = self.inner.write();
        let item = TodoItem {
            id: inner.next_id,
            text,
            completed: false,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());
        tracing::debug!(id = item.id, "created todo");
        Ok(item)
    }

    /// Apply a partial update to the item with `id`.
    ///
    /// Only fields present in `patch` change; omitted fields keep their
    /// current value. A supplied text obeys the same rule as [`create`], and
    /// is validated before the lookup, so an invalid text wins over a
    /// missing id. On any error the item is left untouched.
    ///
    /// [`create`]: TodoStore::create
    pub fn update(&self, id: TodoId, patch: TodoPatch) -> Result<TodoItem> {
        let text = patch.text.as_deref().map(validate_text).transpose()?;
        let mut inner = self.inner.write();
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(text) = text {
            item.text = text;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        tracing::debug!(id, "updated todo");
        Ok(item.clone())
    }

    /// Remove the item with `id`, reporting whether anything was removed.
    ///
    /// Deleting an absent id is not an error; it returns `false` and leaves
    /// the store unchanged, letting callers decide how to surface it.
    pub fn delete(&self, id: TodoId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        let removed = inner.items.len() != before;
        if removed {
            tracing::debug!(id, "deleted todo");
        }
        removed
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim `text` and enforce the non-empty and length rules.
fn validate_text(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StoreError::EmptyText);
    }
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(StoreError::TextTooLong {
            len,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(text.to_string())
}
