//! Choice lookups for question-bank entries.
//!
//! Correctness is not stored on the choice rows themselves; it is resolved
//! from the owning question's `correct_choices` position array.

use super::question_repo::SubjectTable;
use super::{decode_id_array, RepoResult};
use crate::db::Database;
use crate::model::question::{Choice, QuestionId};
use rusqlite::{params, Row};

/// Repository interface for resolving a question's choices.
pub trait ChoiceRepository {
    /// Returns the ordered choices of one question, or `None` when the
    /// question has no choice rows (callers treat such questions as
    /// absent).
    fn get_choices(
        &self,
        table: &SubjectTable,
        question_id: QuestionId,
    ) -> RepoResult<Option<Vec<Choice>>>;
}

/// SQLite-backed choice repository.
pub struct SqliteChoiceRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteChoiceRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl ChoiceRepository for SqliteChoiceRepository<'_> {
    fn get_choices(
        &self,
        table: &SubjectTable,
        question_id: QuestionId,
    ) -> RepoResult<Option<Vec<Choice>>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT
                c.position,
                c.choice_text,
                q.correct_choices
             FROM choices c
             JOIN {} q ON q.id = c.question_id
             WHERE c.subject = ?1 AND c.question_id = ?2
             ORDER BY c.position ASC;",
            table.sql_ident()
        ))?;

        let mut rows = stmt.query(params![table.name(), question_id])?;

        // Every joined row repeats the question's correct_choices value;
        // decode it once from the first row.
        let (correct, mut choices) = match rows.next()? {
            Some(row) => {
                let raw: String = row.get("correct_choices")?;
                let correct = decode_id_array("correct_choices", &raw)?;
                let first = parse_choice_row(row, &correct)?;
                (correct, vec![first])
            }
            None => return Ok(None),
        };

        while let Some(row) = rows.next()? {
            choices.push(parse_choice_row(row, &correct)?);
        }

        Ok(Some(choices))
    }
}

fn parse_choice_row(row: &Row<'_>, correct: &[i64]) -> RepoResult<Choice> {
    let position: i64 = row.get("position")?;
    Ok(Choice {
        choice_text: row.get("choice_text")?,
        is_correct: correct.contains(&position),
    })
}
