//! Degree program repository contract and SQLite implementation.

use super::RepoResult;
use crate::db::Database;
use crate::model::program::{Program, ProgramId};
use rusqlite::{params, Row};

const PROGRAM_SELECT_SQL: &str = "SELECT
    id,
    name,
    min_score
FROM programs";

/// Repository interface for degree program operations.
pub trait ProgramRepository {
    fn create(&self, name: &str, min_score: i64) -> RepoResult<ProgramId>;
    fn get_by_id(&self, id: ProgramId) -> RepoResult<Option<Program>>;
    fn get_all_by_ids(&self, ids: &[ProgramId]) -> RepoResult<Option<Vec<Program>>>;
    fn get_all(&self) -> RepoResult<Vec<Program>>;
    fn get_last_created(&self) -> RepoResult<Option<Program>>;
}

/// SQLite-backed program repository.
pub struct SqliteProgramRepository<'db> {
    db: &'db Database,
}

impl<'db> SqliteProgramRepository<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self { db }
    }
}

impl ProgramRepository for SqliteProgramRepository<'_> {
    fn create(&self, name: &str, min_score: i64) -> RepoResult<ProgramId> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO programs (name, min_score) VALUES (?1, ?2);",
            params![name, min_score],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: ProgramId) -> RepoResult<Option<Program>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{PROGRAM_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_program_row(row)?));
        }

        Ok(None)
    }

    fn get_all_by_ids(&self, ids: &[ProgramId]) -> RepoResult<Option<Vec<Program>>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{PROGRAM_SELECT_SQL} WHERE id = ?1;"))?;

        let mut programs = Vec::new();
        for id in ids {
            let mut rows = stmt.query(params![id])?;
            if let Some(row) = rows.next()? {
                programs.push(parse_program_row(row)?);
            }
        }

        // The batch resolves only when every requested id was found.
        if programs.len() == ids.len() {
            Ok(Some(programs))
        } else {
            Ok(None)
        }
    }

    fn get_all(&self) -> RepoResult<Vec<Program>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{PROGRAM_SELECT_SQL};"))?;

        let mut rows = stmt.query([])?;
        let mut programs = Vec::new();
        while let Some(row) = rows.next()? {
            programs.push(parse_program_row(row)?);
        }

        Ok(programs)
    }

    fn get_last_created(&self) -> RepoResult<Option<Program>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(&format!("{PROGRAM_SELECT_SQL} ORDER BY id DESC LIMIT 1;"))?;

        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_program_row(row)?));
        }

        Ok(None)
    }
}

fn parse_program_row(row: &Row<'_>) -> RepoResult<Program> {
    Ok(Program {
        id: row.get("id")?,
        name: row.get("name")?,
        min_score: row.get("min_score")?,
    })
}
