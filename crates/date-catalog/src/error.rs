//! Error types for date-catalog operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Rule not found: {0}")]
    NotFound(String),

    #[error("Weeks to add out of range: cannot add more than 4 weeks (expected 0-4, got {weeks_to_add})")]
    Range { weeks_to_add: u32 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
