//! Subject score domain model.
//!
//! # Responsibility
//! - Define the canonical record for one graded exam subject.
//!
//! # Invariants
//! - `id` is assigned by the database on insertion and never reused.
//! - A score value is immutable once the record is constructed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted subject score.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ScoreId = i64;

/// One graded subject of an applicant transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// Database-assigned row id (>= 1).
    pub id: ScoreId,
    /// Subject name as entered, e.g. `Math`.
    pub subject: String,
    /// Achieved points for the subject.
    pub score: i64,
}

impl Display for SubjectScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {}", self.id, self.subject, self.score)
    }
}
