//! University domain model.

use crate::model::program::Program;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted university.
pub type UniversityId = i64;

/// One university together with its resolved study programs.
///
/// Like [`crate::model::user::User`], the aggregate only surfaces when all
/// referenced programs resolve; an empty program list is a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    /// Resolved programs, in the stored id order.
    pub programs: Vec<Program>,
}

impl Display for University {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {}: {} program(s)",
            self.id,
            self.name,
            self.programs.len()
        )
    }
}
