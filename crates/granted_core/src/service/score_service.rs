//! Subject score use-case service.
//!
//! # Responsibility
//! - Expose score operations to the console menu.
//! - Degrade storage failures to empty/absent/`false` results.

use crate::model::score::{ScoreId, SubjectScore};
use crate::repo::score_repo::SubjectScoreRepository;
use crate::service::degrade;
use log::{error, warn};

/// Use-case service wrapper for subject score operations.
pub struct ScoreService<R: SubjectScoreRepository> {
    repo: R,
}

impl<R: SubjectScoreRepository> ScoreService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored score; failures degrade to an empty list.
    pub fn get_all(&self) -> Vec<SubjectScore> {
        degrade("score_get_all", self.repo.get_all(), Vec::new())
    }

    /// Looks up one score; missing rows and failures are both absent.
    pub fn get_by_id(&self, id: ScoreId) -> Option<SubjectScore> {
        degrade("score_get_by_id", self.repo.get_by_id(id), None)
    }

    /// Resolves a transcript batch; incomplete batches and failures are
    /// both absent.
    pub fn get_all_by_ids(&self, ids: &[ScoreId]) -> Option<Vec<SubjectScore>> {
        degrade("score_get_all_by_ids", self.repo.get_all_by_ids(ids), None)
    }

    /// Stores a new score, reporting only success or failure.
    ///
    /// A blank subject is rejected without touching storage.
    pub fn create(&self, subject: &str, score: i64) -> bool {
        if subject.trim().is_empty() {
            warn!("event=score_create module=service status=rejected reason=blank_subject");
            return false;
        }

        match self.repo.create(subject, score) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=score_create module=service status=error error={}",
                    err
                );
                false
            }
        }
    }

    /// Returns the most recently created score, if any.
    pub fn get_last_created(&self) -> Option<SubjectScore> {
        degrade("score_get_last_created", self.repo.get_last_created(), None)
    }
}
