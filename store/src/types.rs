//! Domain types for the todo store.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Strictly increasing, never reused.
pub type TodoId = u64;

/// A single todo record.
///
/// Values returned by the store are snapshots: mutating one has no effect on
/// stored state. The only way to change a stored item is [`TodoStore::update`].
///
/// [`TodoStore::update`]: crate::store::TodoStore::update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Partial update for an existing todo.
///
/// `None` fields keep their current value. The id itself is never updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
