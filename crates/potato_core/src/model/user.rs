//! User domain model.
//!
//! # Invariants
//! - `id` is the storage primary key rendered as text and never changes.
//! - Uniqueness of `id` is enforced by storage, not by this type.

use serde::{Deserialize, Serialize};

/// Stable identifier of a user, stringified from the numeric storage key.
pub type UserId = String;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name, stored verbatim.
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
