//! Applicant (user) domain model.

use crate::model::score::SubjectScore;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted user.
pub type UserId = i64;

/// One applicant together with their resolved transcript.
///
/// A user only surfaces from the repository when the linked subject scores
/// resolve to a complete transcript; partially resolvable rows stay absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Resolved transcript entries, in the stored id order.
    pub scores: Vec<SubjectScore>,
}

impl User {
    /// Sums the transcript scores; the figure grant rankings are built on.
    pub fn total_score(&self) -> i64 {
        self.scores.iter().map(|entry| entry.score).sum()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} {}, total {}",
            self.id,
            self.first_name,
            self.last_name,
            self.total_score()
        )
    }
}
