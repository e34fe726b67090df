//! Use-case services layered over repository contracts.
//!
//! # Responsibility
//! - Keep callers decoupled from storage details.

pub mod user_service;
