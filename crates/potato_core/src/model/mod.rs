//! Domain records exposed to callers of the core.
//!
//! # Invariants
//! - Entities are plain values built per query row and never cached.

pub mod user;
