//! Applicant repository, composing subject scores into user aggregates.
//!
//! A user row stores its transcript as a `score_ids` JSON array; the
//! aggregate resolves those ids through the wired score repository and
//! inherits its exactly-five transcript rule. Users whose transcripts do
//! not resolve are absent, not errors.

use super::score_repo::SubjectScoreRepository;
use super::{decode_id_array, encode_id_array, RepoResult};
use crate::db::Database;
use crate::model::score::ScoreId;
use crate::model::user::{User, UserId};
use rusqlite::{params, Row};

const USER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    score_ids
FROM users";

/// Repository interface for applicant records.
pub trait UserRepository {
    fn create(
        &self,
        first_name: &str,
        last_name: &str,
        score_ids: &[ScoreId],
    ) -> RepoResult<UserId>;
    fn get_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    fn get_all(&self) -> RepoResult<Vec<User>>;
    fn get_last_created(&self) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'db, S> {
    db: &'db Database,
    scores: S,
}

impl<'db, S: SubjectScoreRepository> SqliteUserRepository<'db, S> {
    pub fn new(db: &'db Database, scores: S) -> Self {
        Self { db, scores }
    }

    fn resolve(&self, row: UserRow) -> RepoResult<Option<User>> {
        let scores = match self.scores.get_all_by_ids(&row.score_ids)? {
            Some(scores) => scores,
            None => return Ok(None),
        };

        Ok(Some(User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            scores,
        }))
    }
}

impl<S: SubjectScoreRepository> UserRepository for SqliteUserRepository<'_, S> {
    fn create(
        &self,
        first_name: &str,
        last_name: &str,
        score_ids: &[ScoreId],
    ) -> RepoResult<UserId> {
        let encoded = encode_id_array(score_ids)?;

        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO users (first_name, last_name, score_ids) VALUES (?1, ?2, ?3);",
            params![first_name, last_name, encoded],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let row = {
            let conn = self.db.connect()?;
            let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

            let mut rows = stmt.query(params![id])?;
            match rows.next()? {
                Some(row) => parse_user_row(row)?,
                None => return Ok(None),
            }
        };

        self.resolve(row)
    }

    fn get_all(&self) -> RepoResult<Vec<User>> {
        let found = {
            let conn = self.db.connect()?;
            let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL};"))?;

            let mut rows = stmt.query([])?;
            let mut found = Vec::new();
            while let Some(row) = rows.next()? {
                found.push(parse_user_row(row)?);
            }
            found
        };

        let mut users = Vec::new();
        for row in found {
            if let Some(user) = self.resolve(row)? {
                users.push(user);
            }
        }

        Ok(users)
    }

    fn get_last_created(&self) -> RepoResult<Option<User>> {
        let row = {
            let conn = self.db.connect()?;
            let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} ORDER BY id DESC LIMIT 1;"))?;

            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => parse_user_row(row)?,
                None => return Ok(None),
            }
        };

        self.resolve(row)
    }
}

struct UserRow {
    id: UserId,
    first_name: String,
    last_name: String,
    score_ids: Vec<ScoreId>,
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<UserRow> {
    let raw: String = row.get("score_ids")?;
    Ok(UserRow {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        score_ids: decode_id_array("score_ids", &raw)?,
    })
}
