//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide the console-facing entry points for each entity.
//! - Apply the log-and-degrade policy: repository failures are logged and
//!   callers receive an empty, absent or `false` result instead of an
//!   error, so the menu loop keeps running.
//!
//! # Invariants
//! - Services never bypass repository contracts or touch SQL.
//! - Unknown subjects are the one failure that propagates
//!   (`QuestionServiceError::InvalidSubject`).

use crate::repo::RepoResult;
use log::error;

pub mod program_service;
pub mod question_service;
pub mod score_service;
pub mod university_service;
pub mod user_service;

/// Applies the degrade policy to one repository result.
pub(crate) fn degrade<T>(event: &str, result: RepoResult<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("event={} module=service status=error error={}", event, err);
            fallback
        }
    }
}
