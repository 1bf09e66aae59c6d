//! Concurrency-safe in-memory todo store.
//!
//! # Overview
//! Owns every todo record for the lifetime of the process: an insertion-
//! ordered sequence of items plus the monotonic id counter, guarded as a
//! single unit. Callers (an HTTP adapter, a test harness) translate their
//! requests into the five operations exposed by [`TodoStore`] and translate
//! the results back out.
//!
//! # Design
//! - Ids are assigned by the store only, strictly increasing from 1, and
//!   never reused — not even after a delete.
//! - Every operation returns owned snapshots; no reference into the guarded
//!   state ever escapes the lock, so callers cannot mutate store state by
//!   side channel.
//! - Mutations serialize on a write lock covering both the sequence and the
//!   counter; reads share a read lock and never observe a half-applied
//!   mutation.
//! - Text validation (non-empty, bounded length) lives here, not in the
//!   adapter: no external layer is trusted to enforce it.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{TodoStore, MAX_TEXT_LEN};
pub use types::{TodoId, TodoItem, TodoPatch};
