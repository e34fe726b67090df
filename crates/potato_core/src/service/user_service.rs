//! User read use-cases.
//!
//! # Invariants
//! - Repository errors are returned unchanged.
//! - The service stays storage-agnostic.

use crate::model::user::User;
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case wrapper around a `UserRepository`.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every user in storage order.
    pub fn find_all(&self) -> RepoResult<Vec<User>> {
        self.repo.find_all()
    }

    /// Returns the first listed user, or `None` when there are no users.
    pub fn featured_user(&self) -> RepoResult<Option<User>> {
        Ok(self.repo.find_all()?.into_iter().next())
    }
}
