//! Canonical GrantEd schema definition.
//!
//! # Responsibility
//! - Create the fixed core tables on a fresh database.
//!
//! # Invariants
//! - The bootstrap is idempotent; re-running it on a populated database is
//!   a no-op.
//! - Question-bank tables are per subject and are not created here; they
//!   are provisioned through subject registration.

use rusqlite::Connection;

/// Fixed table names owned by the core schema.
///
/// Subject registration must refuse these as question-bank identifiers.
pub(crate) const CORE_TABLES: &[&str] = &[
    "subject_scores",
    "subjects",
    "choices",
    "users",
    "programs",
    "universities",
];

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS subject_scores (
    id INTEGER PRIMARY KEY,
    subject TEXT NOT NULL,
    score INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS subjects (
    subject TEXT PRIMARY KEY,
    is_elective INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS choices (
    subject TEXT NOT NULL,
    question_id INTEGER NOT NULL,
    position INTEGER NOT NULL,
    choice_text TEXT NOT NULL,
    PRIMARY KEY (subject, question_id, position)
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    score_ids TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS programs (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    min_score INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS universities (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    program_ids TEXT NOT NULL
);
";

/// Creates all core tables that are not present yet.
pub(crate) fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
