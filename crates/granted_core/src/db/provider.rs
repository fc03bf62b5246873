//! Connection provider for file and in-memory SQLite stores.
//!
//! # Responsibility
//! - Hold the storage target and hand out one fresh connection per call.
//! - Configure connection pragmas and run the schema bootstrap exactly
//!   once at construction time.
//!
//! # Invariants
//! - `connect` never reuses a connection; release happens by dropping the
//!   returned handle at the end of the caller's scope.
//! - Returned connections have `foreign_keys=ON` and a busy timeout set.
//! - No pooling and no retry; a failed connect is reported immediately.

use super::schema::ensure_schema;
use super::{DbError, DbResult};
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uuid::Uuid;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum Target {
    File(PathBuf),
    /// Named shared-cache store; the anchor connection keeps it alive
    /// between per-call connections.
    Memory { uri: String, _anchor: Connection },
}

/// Storage handle from which every repository call obtains its own
/// short-lived connection.
#[derive(Debug)]
pub struct Database {
    target: Target,
}

impl Database {
    /// Opens (creating if needed) a file-backed database and ensures the
    /// core schema exists.
    ///
    /// # Side effects
    /// - Emits `db_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start mode=file");

        let path = path.as_ref().to_path_buf();
        let conn = match Connection::open(&path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(DbError::Open(err));
            }
        };

        match bootstrap_connection(&conn) {
            Ok(()) => {
                info!(
                    "event=db_open module=db status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self {
                    target: Target::File(path),
                })
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Creates a uniquely named in-memory database and ensures the core
    /// schema exists.
    ///
    /// The store lives for as long as this `Database` value; connections
    /// produced by [`Database::connect`] all observe the same data.
    pub fn in_memory() -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start mode=memory");

        let uri = format!("file:granted-{}?mode=memory&cache=shared", Uuid::new_v4());
        let anchor = match Connection::open(&uri) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(DbError::Open(err));
            }
        };

        match bootstrap_connection(&anchor) {
            Ok(()) => {
                info!(
                    "event=db_open module=db status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self {
                    target: Target::Memory {
                        uri,
                        _anchor: anchor,
                    },
                })
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens one fresh connection to the configured store.
    ///
    /// The caller owns the connection for a single logical operation and
    /// releases it by letting it go out of scope.
    pub fn connect(&self) -> DbResult<Connection> {
        let started_at = Instant::now();
        let opened = match &self.target {
            Target::File(path) => Connection::open(path),
            Target::Memory { uri, .. } => Connection::open(uri),
        };

        let conn = match opened {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_connect module=db status=error duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(DbError::Open(err));
            }
        };

        if let Err(err) = configure_connection(&conn) {
            error!(
                "event=db_connect module=db status=error duration_ms={} error_code=db_configure_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(DbError::Bootstrap(err));
        }

        debug!(
            "event=db_connect module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(conn)
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    configure_connection(conn).map_err(DbError::Bootstrap)?;
    ensure_schema(conn).map_err(DbError::Bootstrap)?;
    Ok(())
}
