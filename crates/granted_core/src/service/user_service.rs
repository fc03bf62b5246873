//! Applicant use-case service.

use crate::model::score::ScoreId;
use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::service::degrade;
use log::{error, warn};

/// Use-case service wrapper for applicant records.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every user whose transcript resolves.
    pub fn get_all(&self) -> Vec<User> {
        degrade("user_get_all", self.repo.get_all(), Vec::new())
    }

    /// Looks up one user; missing rows, broken transcripts and failures
    /// are all absent.
    pub fn get_by_id(&self, id: UserId) -> Option<User> {
        degrade("user_get_by_id", self.repo.get_by_id(id), None)
    }

    /// Stores a new user, reporting only success or failure.
    ///
    /// Blank names are rejected without touching storage.
    pub fn create(&self, first_name: &str, last_name: &str, score_ids: &[ScoreId]) -> bool {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            warn!("event=user_create module=service status=rejected reason=blank_name");
            return false;
        }

        match self.repo.create(first_name, last_name, score_ids) {
            Ok(_) => true,
            Err(err) => {
                error!("event=user_create module=service status=error error={}", err);
                false
            }
        }
    }

    /// Returns the most recently created user, if any.
    pub fn get_last_created(&self) -> Option<User> {
        degrade("user_get_last_created", self.repo.get_last_created(), None)
    }
}
