//! Domain value objects mapped from database rows.
//!
//! # Responsibility
//! - Define the immutable records produced by repository row mapping.
//! - Keep console rendering (`Display`) next to the data it presents.
//!
//! # Invariants
//! - Integer ids are assigned by the database and never mutated afterwards.
//! - Values are rebuilt from rows on every query; there is no identity map.

pub mod program;
pub mod question;
pub mod score;
pub mod university;
pub mod user;
