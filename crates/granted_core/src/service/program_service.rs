//! Degree program use-case service.

use crate::model::program::{Program, ProgramId};
use crate::repo::program_repo::ProgramRepository;
use crate::service::degrade;
use log::{error, warn};

/// Use-case service wrapper for degree program operations.
pub struct ProgramService<R: ProgramRepository> {
    repo: R,
}

impl<R: ProgramRepository> ProgramService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored program; failures degrade to an empty list.
    pub fn get_all(&self) -> Vec<Program> {
        degrade("program_get_all", self.repo.get_all(), Vec::new())
    }

    /// Looks up one program; missing rows and failures are both absent.
    pub fn get_by_id(&self, id: ProgramId) -> Option<Program> {
        degrade("program_get_by_id", self.repo.get_by_id(id), None)
    }

    /// Resolves a program batch; it is absent unless every id was found.
    pub fn get_all_by_ids(&self, ids: &[ProgramId]) -> Option<Vec<Program>> {
        degrade("program_get_all_by_ids", self.repo.get_all_by_ids(ids), None)
    }

    /// Stores a new program, reporting only success or failure.
    ///
    /// A blank name is rejected without touching storage.
    pub fn create(&self, name: &str, min_score: i64) -> bool {
        if name.trim().is_empty() {
            warn!("event=program_create module=service status=rejected reason=blank_name");
            return false;
        }

        match self.repo.create(name, min_score) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=program_create module=service status=error error={}",
                    err
                );
                false
            }
        }
    }

    /// Returns the most recently created program, if any.
    pub fn get_last_created(&self) -> Option<Program> {
        degrade("program_get_last_created", self.repo.get_last_created(), None)
    }
}
