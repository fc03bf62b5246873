//! University use-case service.

use crate::model::program::ProgramId;
use crate::model::university::{University, UniversityId};
use crate::repo::university_repo::UniversityRepository;
use crate::service::degrade;
use log::{error, warn};

/// Use-case service wrapper for university records.
pub struct UniversityService<R: UniversityRepository> {
    repo: R,
}

impl<R: UniversityRepository> UniversityService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every university whose programs all resolve.
    pub fn get_all(&self) -> Vec<University> {
        degrade("university_get_all", self.repo.get_all(), Vec::new())
    }

    /// Looks up one university; missing rows, unresolvable programs and
    /// failures are all absent.
    pub fn get_by_id(&self, id: UniversityId) -> Option<University> {
        degrade("university_get_by_id", self.repo.get_by_id(id), None)
    }

    /// Stores a new university, reporting only success or failure.
    ///
    /// A blank name is rejected without touching storage.
    pub fn create(&self, name: &str, program_ids: &[ProgramId]) -> bool {
        if name.trim().is_empty() {
            warn!("event=university_create module=service status=rejected reason=blank_name");
            return false;
        }

        match self.repo.create(name, program_ids) {
            Ok(_) => true,
            Err(err) => {
                error!(
                    "event=university_create module=service status=error error={}",
                    err
                );
                false
            }
        }
    }

    /// Returns the most recently created university, if any.
    pub fn get_last_created(&self) -> Option<University> {
        degrade(
            "university_get_last_created",
            self.repo.get_last_created(),
            None,
        )
    }
}
