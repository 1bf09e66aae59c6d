//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined
//! independently, so this crate stands alone and schema drift between the
//! two is caught by the live integration test rather than hidden by a
//! shared definition.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id and
/// starts the item as not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub text: String,
}

/// Request payload for updating an existing todo. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
