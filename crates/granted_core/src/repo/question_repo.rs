//! Question-bank repository over per-subject tables.
//!
//! # Responsibility
//! - Register subjects and their question-bank tables.
//! - Look up questions (with resolved choices) from a subject's table.
//!
//! # Invariants
//! - Dynamic table names are never spliced from raw input: every read
//!   path goes through [`SubjectTable`], which normalizes the subject,
//!   checks the identifier shape, rejects core and SQLite-reserved table
//!   names and requires membership in the registered-subject allowlist.
//! - A question surfaces only when both its row and its choice rows
//!   exist.

use super::choice_repo::ChoiceRepository;
use super::{RepoError, RepoResult};
use crate::db::schema::CORE_TABLES;
use crate::db::Database;
use crate::model::question::{Question, QuestionId};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::params;

static TABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid table name regex"));

/// Lower-cases a subject name and replaces spaces with underscores, the
/// same form for registered names and caller input.
pub(crate) fn normalize_subject(subject: &str) -> String {
    subject.to_lowercase().replace(' ', "_")
}

/// A subject's question-bank table identifier, validated for direct use
/// in SQL.
///
/// Construction accepts only normalized names shaped like
/// `[a-z][a-z0-9_]*` that do not collide with a core table or the
/// reserved `sqlite_` namespace. Whether the subject is actually
/// registered is a separate check on read paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTable(String);

impl SubjectTable {
    pub fn new(subject: &str) -> RepoResult<Self> {
        let normalized = normalize_subject(subject);
        if !TABLE_NAME_RE.is_match(&normalized)
            || normalized.starts_with("sqlite_")
            || CORE_TABLES.contains(&normalized.as_str())
        {
            return Err(RepoError::InvalidSubject(subject.to_string()));
        }

        Ok(Self(normalized))
    }

    /// Normalized table name, also the value of `choices.subject` rows.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Quoted identifier for splicing into SQL text.
    pub(crate) fn sql_ident(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

/// Repository interface for the per-subject question bank.
pub trait QuestionRepository {
    fn get_question(&self, subject: &str, id: QuestionId) -> RepoResult<Option<Question>>;
    fn get_all_subject_questions(
        &self,
        subject: &str,
        multi_answer: bool,
    ) -> RepoResult<Vec<Question>>;
    fn get_subject_names(&self, elective: bool) -> RepoResult<Vec<String>>;
    fn add_subject(&self, subject: &str, elective: bool) -> RepoResult<()>;
}

/// SQLite-backed question repository, resolving choices through the
/// wired [`ChoiceRepository`].
pub struct SqliteQuestionRepository<'db, C> {
    db: &'db Database,
    choices: C,
}

impl<'db, C: ChoiceRepository> SqliteQuestionRepository<'db, C> {
    pub fn new(db: &'db Database, choices: C) -> Self {
        Self { db, choices }
    }

    /// Validates caller input against the registered-subject allowlist
    /// before any dynamic-table SQL is built.
    fn validated_table(&self, subject: &str) -> RepoResult<SubjectTable> {
        let table = SubjectTable::new(subject)?;

        let mut names = self.get_subject_names(true)?;
        names.extend(self.get_subject_names(false)?);
        let registered = names
            .iter()
            .any(|name| normalize_subject(name) == table.name());
        if !registered {
            return Err(RepoError::InvalidSubject(subject.to_string()));
        }

        Ok(table)
    }
}

impl<C: ChoiceRepository> QuestionRepository for SqliteQuestionRepository<'_, C> {
    fn get_question(&self, subject: &str, id: QuestionId) -> RepoResult<Option<Question>> {
        let table = self.validated_table(subject)?;

        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT question_text, explanation FROM {} WHERE id = ?1;",
            table.sql_ident()
        ))?;

        let mut rows = stmt.query(params![id])?;
        let (question_text, explanation): (String, String) = match rows.next()? {
            Some(row) => (row.get("question_text")?, row.get("explanation")?),
            None => return Ok(None),
        };

        match self.choices.get_choices(&table, id)? {
            Some(choices) => Ok(Some(Question {
                question_text,
                explanation,
                choices,
            })),
            None => Ok(None),
        }
    }

    fn get_all_subject_questions(
        &self,
        subject: &str,
        multi_answer: bool,
    ) -> RepoResult<Vec<Question>> {
        let table = self.validated_table(subject)?;

        let conn = self.db.connect()?;
        let comparator = if multi_answer { ">" } else { "=" };
        let mut stmt = conn.prepare(&format!(
            "SELECT id, question_text, explanation
             FROM {}
             WHERE json_array_length(correct_choices) {} 1;",
            table.sql_ident(),
            comparator
        ))?;

        let mut rows = stmt.query([])?;
        let mut found: Vec<(QuestionId, String, String)> = Vec::new();
        while let Some(row) = rows.next()? {
            let id: QuestionId = row.get("id")?;
            found.push((id, row.get("question_text")?, row.get("explanation")?));
        }

        let mut questions = Vec::new();
        for (id, question_text, explanation) in found {
            // Questions without choice rows are skipped rather than
            // surfaced half-built.
            if let Some(choices) = self.choices.get_choices(&table, id)? {
                questions.push(Question {
                    question_text,
                    explanation,
                    choices,
                });
            }
        }

        Ok(questions)
    }

    fn get_subject_names(&self, elective: bool) -> RepoResult<Vec<String>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT subject FROM subjects WHERE is_elective = ?1;")?;

        let mut rows = stmt.query(params![elective])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get("subject")?);
        }

        Ok(names)
    }

    fn add_subject(&self, subject: &str, elective: bool) -> RepoResult<()> {
        // Shape check only; registration is what puts the subject on the
        // allowlist.
        let table = SubjectTable::new(subject)?;

        let conn = self.db.connect()?;
        // The table must exist before the name becomes allowlisted.
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY,
                    question_text TEXT NOT NULL,
                    explanation TEXT NOT NULL,
                    correct_choices TEXT NOT NULL
                );",
                table.sql_ident()
            ),
            [],
        )?;
        conn.execute(
            "INSERT INTO subjects (subject, is_elective) VALUES (?1, ?2)
             ON CONFLICT(subject) DO UPDATE SET is_elective = excluded.is_elective;",
            params![subject, elective],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_display_names_to_table_names() {
        assert_eq!(normalize_subject("Computer Science"), "computer_science");
        assert_eq!(normalize_subject("math"), "math");
    }

    #[test]
    fn accepts_normalized_subject_names() {
        let table = SubjectTable::new("Computer Science").unwrap();
        assert_eq!(table.name(), "computer_science");
        assert_eq!(table.sql_ident(), "\"computer_science\"");
    }

    #[test]
    fn rejects_malformed_table_names() {
        for subject in ["", "1math", "math; DROP TABLE users", "math-2", "числа"] {
            assert!(matches!(
                SubjectTable::new(subject),
                Err(RepoError::InvalidSubject(_))
            ));
        }
    }

    #[test]
    fn rejects_core_table_collisions() {
        for subject in ["users", "Subjects", "subject scores"] {
            assert!(matches!(
                SubjectTable::new(subject),
                Err(RepoError::InvalidSubject(_))
            ));
        }
    }

    #[test]
    fn rejects_reserved_sqlite_prefix() {
        for subject in ["sqlite_stats", "SQLite Master"] {
            assert!(matches!(
                SubjectTable::new(subject),
                Err(RepoError::InvalidSubject(_))
            ));
        }
    }
}
