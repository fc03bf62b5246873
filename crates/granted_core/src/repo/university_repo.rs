//! University repository, composing programs into university aggregates.
//!
//! Mirrors the user/score pairing: a university row stores a
//! `program_ids` JSON array resolved through the wired program
//! repository. A university surfaces only when every referenced program
//! exists; an empty array is a university with no programs.

use super::program_repo::ProgramRepository;
use super::{decode_id_array, encode_id_array, RepoResult};
use crate::db::Database;
use crate::model::program::ProgramId;
use crate::model::university::{University, UniversityId};
use rusqlite::{params, Row};

const UNIVERSITY_SELECT_SQL: &str = "SELECT
    id,
    name,
    program_ids
FROM universities";

/// Repository interface for university records.
pub trait UniversityRepository {
    fn create(&self, name: &str, program_ids: &[ProgramId]) -> RepoResult<UniversityId>;
    fn get_by_id(&self, id: UniversityId) -> RepoResult<Option<University>>;
    fn get_all(&self) -> RepoResult<Vec<University>>;
    fn get_last_created(&self) -> RepoResult<Option<University>>;
}

/// SQLite-backed university repository.
pub struct SqliteUniversityRepository<'db, P> {
    db: &'db Database,
    programs: P,
}

impl<'db, P: ProgramRepository> SqliteUniversityRepository<'db, P> {
    pub fn new(db: &'db Database, programs: P) -> Self {
        Self { db, programs }
    }

    fn resolve(&self, row: UniversityRow) -> RepoResult<Option<University>> {
        let programs = match self.programs.get_all_by_ids(&row.program_ids)? {
            Some(programs) => programs,
            None => return Ok(None),
        };

        Ok(Some(University {
            id: row.id,
            name: row.name,
            programs,
        }))
    }
}

impl<P: ProgramRepository> UniversityRepository for SqliteUniversityRepository<'_, P> {
    fn create(&self, name: &str, program_ids: &[ProgramId]) -> RepoResult<UniversityId> {
        let encoded = encode_id_array(program_ids)?;

        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO universities (name, program_ids) VALUES (?1, ?2);",
            params![name, encoded],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: UniversityId) -> RepoResult<Option<University>> {
        let row = {
            let conn = self.db.connect()?;
            let mut stmt = conn.prepare(&format!("{UNIVERSITY_SELECT_SQL} WHERE id = ?1;"))?;

            let mut rows = stmt.query(params![id])?;
            match rows.next()? {
                Some(row) => parse_university_row(row)?,
                None => return Ok(None),
            }
        };

        self.resolve(row)
    }

    fn get_all(&self) -> RepoResult<Vec<University>> {
        let found = {
            let conn = self.db.connect()?;
            let mut stmt = conn.prepare(&format!("{UNIVERSITY_SELECT_SQL};"))?;

            let mut rows = stmt.query([])?;
            let mut found = Vec::new();
            while let Some(row) = rows.next()? {
                found.push(parse_university_row(row)?);
            }
            found
        };

        let mut universities = Vec::new();
        for row in found {
            if let Some(university) = self.resolve(row)? {
                universities.push(university);
            }
        }

        Ok(universities)
    }

    fn get_last_created(&self) -> RepoResult<Option<University>> {
        let row = {
            let conn = self.db.connect()?;
            let mut stmt =
                conn.prepare(&format!("{UNIVERSITY_SELECT_SQL} ORDER BY id DESC LIMIT 1;"))?;

            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => parse_university_row(row)?,
                None => return Ok(None),
            }
        };

        self.resolve(row)
    }
}

struct UniversityRow {
    id: UniversityId,
    name: String,
    program_ids: Vec<ProgramId>,
}

fn parse_university_row(row: &Row<'_>) -> RepoResult<UniversityRow> {
    let raw: String = row.get("program_ids")?;
    Ok(UniversityRow {
        id: row.get("id")?,
        name: row.get("name")?,
        program_ids: decode_id_array("program_ids", &raw)?,
    })
}
