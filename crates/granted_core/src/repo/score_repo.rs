//! Subject score repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `subject_scores` table.
//! - Resolve transcript batches (an applicant transcript is exactly five
//!   subject results).
//!
//! # Invariants
//! - Every operation runs on one fresh connection, released on scope exit.
//! - `get_all_by_ids` performs one point lookup per id on that single
//!   connection and yields `Some` only for a complete transcript.

use super::RepoResult;
use crate::db::Database;
use crate::model::score::{ScoreId, SubjectScore};
use rusqlite::{params, Row};

const SCORE_SELECT_SQL: &str = "SELECT
    id,
    subject,
    score
FROM subject_scores";

/// Number of subject results in a complete applicant transcript.
pub const TRANSCRIPT_SCORE_COUNT: usize = 5;

/// Repository interface for subject score operations.
pub trait SubjectScoreRepository {
    fn create(&self, subject: &str, score: i64) -> RepoResult<ScoreId>;
    fn get_by_id(&self, id: ScoreId) -> RepoResult<Option<SubjectScore>>;
    fn get_all_by_ids(&self, ids: &[ScoreId]) -> RepoResult<Option<Vec<SubjectScore>>>;
    fn get_all(&self) -> RepoResult<Vec<SubjectScore>>;
    fn get_last_created(&self) -> RepoResult<Option<SubjectScore>>;
}

/// SQLite-backed subject score repository.
pub struct SqliteSubjectScoreRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteSubjectScoreRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl SubjectScoreRepository for SqliteSubjectScoreRepository<'_> {
    fn create(&self, subject: &str, score: i64) -> RepoResult<ScoreId> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO subject_scores (subject, score) VALUES (?1, ?2);",
            params![subject, score],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: ScoreId) -> RepoResult<Option<SubjectScore>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{SCORE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_score_row(row)?));
        }

        Ok(None)
    }

    fn get_all_by_ids(&self, ids: &[ScoreId]) -> RepoResult<Option<Vec<SubjectScore>>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{SCORE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut scores = Vec::new();
        for id in ids {
            let mut rows = stmt.query(params![id])?;
            if let Some(row) = rows.next()? {
                scores.push(parse_score_row(row)?);
            }
        }

        // A transcript holds exactly five results; anything else is absent,
        // not a partial batch.
        if scores.len() == TRANSCRIPT_SCORE_COUNT {
            Ok(Some(scores))
        } else {
            Ok(None)
        }
    }

    fn get_all(&self) -> RepoResult<Vec<SubjectScore>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{SCORE_SELECT_SQL};"))?;

        let mut rows = stmt.query([])?;
        let mut scores = Vec::new();
        while let Some(row) = rows.next()? {
            scores.push(parse_score_row(row)?);
        }

        Ok(scores)
    }

    fn get_last_created(&self) -> RepoResult<Option<SubjectScore>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{SCORE_SELECT_SQL} ORDER BY id DESC LIMIT 1;"))?;

        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_score_row(row)?));
        }

        Ok(None)
    }
}

fn parse_score_row(row: &Row<'_>) -> RepoResult<SubjectScore> {
    Ok(SubjectScore {
        id: row.get("id")?,
        subject: row.get("subject")?,
        score: row.get("score")?,
    })
}
