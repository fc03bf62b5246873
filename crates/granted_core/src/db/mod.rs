//! SQLite storage bootstrap and connection provisioning.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the GrantEd core.
//! - Apply the idempotent schema bootstrap before handing out connections.
//!
//! # Invariants
//! - Every connection handed out has pragmas applied and the core schema
//!   present.
//! - Repositories must never share a connection across logical calls.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod provider;
pub(crate) mod schema;

pub use provider::Database;

pub type DbResult<T> = Result<T, DbError>;

/// Failures raised while provisioning a database connection.
#[derive(Debug)]
pub enum DbError {
    /// The underlying store could not be opened at all.
    Open(rusqlite::Error),
    /// The store opened but configuring it or ensuring the schema failed.
    Bootstrap(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "cannot open database: {err}"),
            Self::Bootstrap(err) => write!(f, "database bootstrap failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) => Some(err),
            Self::Bootstrap(err) => Some(err),
        }
    }
}
