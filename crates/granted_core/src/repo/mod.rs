//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define data access contracts for scores, questions, users, programs
//!   and universities.
//! - Keep SQL text, parameter binding and row mapping inside this layer.
//!
//! # Invariants
//! - Every operation acquires one fresh connection from the [`Database`]
//!   provider and releases it by scope exit.
//! - Absence of a row is `Ok(None)` / an empty vec, never an error.
//! - Failure classes stay distinguishable: connect, query, unknown
//!   subject, invalid persisted data.
//!
//! [`Database`]: crate::db::Database

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod choice_repo;
pub mod program_repo;
pub mod question_repo;
pub mod score_repo;
pub mod university_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every persistence implementation.
#[derive(Debug)]
pub enum RepoError {
    /// Could not obtain a connection from the provider.
    Connect(DbError),
    /// A statement failed to prepare or execute.
    Query(rusqlite::Error),
    /// The subject is not registered (or its name cannot form a table
    /// identifier), reported before any dynamic-table SQL is built.
    InvalidSubject(String),
    /// A stored value could not be decoded into its domain shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "{err}"),
            Self::Query(err) => write!(f, "query failed: {err}"),
            Self::InvalidSubject(subject) => write!(f, "unknown subject: {subject}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::InvalidSubject(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Connect(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

/// Decodes a JSON integer-array column (`score_ids`, `program_ids`,
/// `correct_choices`).
pub(crate) fn decode_id_array(column: &str, raw: &str) -> RepoResult<Vec<i64>> {
    serde_json::from_str(raw)
        .map_err(|err| RepoError::InvalidData(format!("{column} is not an integer array: {err}")))
}

/// Encodes an id array for storage in a JSON text column.
pub(crate) fn encode_id_array(ids: &[i64]) -> RepoResult<String> {
    serde_json::to_string(ids)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode id array: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_array_round_trip() {
        let encoded = encode_id_array(&[1, 2, 3]).unwrap();
        assert_eq!(encoded, "[1,2,3]");
        assert_eq!(decode_id_array("score_ids", &encoded).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_id_array() {
        assert_eq!(encode_id_array(&[]).unwrap(), "[]");
        assert!(decode_id_array("program_ids", "[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_id_array_is_invalid_data() {
        let err = decode_id_array("score_ids", "not json").unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
        assert!(err.to_string().contains("score_ids"));
    }
}
