//! Read-only user data access for the Potato blog.
//!
//! Storage bootstrap, the `User` entity, the `UserRepository` contract with
//! its SQLite adapter, and the use-case service built on top.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId};
pub use repo::user_repo::{DataAccessError, RepoResult, SqliteUserRepository, UserRepository};
pub use service::user_service::UserService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
