//! Study program domain model.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted program.
pub type ProgramId = i64;

/// One study program an applicant can be granted a place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    /// Minimum transcript total required for admission.
    pub min_score: i64,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} (min score {})", self.id, self.name, self.min_score)
    }
}
