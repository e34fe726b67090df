//! Read-only data access over relational storage.
//!
//! # Responsibility
//! - Declare storage-independent contracts consumed by services.
//! - Keep SQL and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - Repositories borrow connections; they never open or close them.
//! - Storage failures surface unchanged, with no retry and no partial data.

pub mod user_repo;
