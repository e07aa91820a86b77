//! Error types for the family store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FamilyError>;

/// Faults a store backend can report.
///
/// A missing member is not an error: lookups return `Option` and deletes
/// return `bool`.
#[derive(Error, Debug)]
pub enum FamilyError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FamilyError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
