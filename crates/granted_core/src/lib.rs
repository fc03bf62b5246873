//! Core domain logic for GrantEd.
//! This crate is the single source of truth for academic-records invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{Database, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::program::{Program, ProgramId};
pub use model::question::{Choice, Question, QuestionId};
pub use model::score::{ScoreId, SubjectScore};
pub use model::university::{University, UniversityId};
pub use model::user::{User, UserId};
pub use repo::choice_repo::{ChoiceRepository, SqliteChoiceRepository};
pub use repo::program_repo::{ProgramRepository, SqliteProgramRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository, SubjectTable};
pub use repo::score_repo::{
    SqliteSubjectScoreRepository, SubjectScoreRepository, TRANSCRIPT_SCORE_COUNT,
};
pub use repo::university_repo::{SqliteUniversityRepository, UniversityRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::program_service::ProgramService;
pub use service::question_service::{QuestionService, QuestionServiceError};
pub use service::score_service::ScoreService;
pub use service::university_service::UniversityService;
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
