//! Question bank domain model.
//!
//! # Invariants
//! - A question carries its choices in stored position order.
//! - Choice correctness reflects membership of the choice position in the
//!   question row's `correct_choices` array at mapping time.

use serde::{Deserialize, Serialize};

/// Row id inside one subject's question-bank table.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type QuestionId = i64;

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub choice_text: String,
    /// Whether this option is listed in the question's correct set.
    pub is_correct: bool,
}

/// One exam question with its answer options.
///
/// The value object intentionally carries no id; questions are addressed
/// through `(subject, id)` at the repository boundary only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_text: String,
    /// Shown to the student after answering.
    pub explanation: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Returns how many choices are marked correct.
    pub fn correct_choice_count(&self) -> usize {
        self.choices.iter().filter(|choice| choice.is_correct).count()
    }

    /// Returns whether more than one choice is correct.
    pub fn is_multi_answer(&self) -> bool {
        self.correct_choice_count() > 1
    }
}
