//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Parse`] thrown when an amount text does not match the shorthand grammar.
//! - [`NotFound`] thrown when there is nothing to undo.
//! - [`InvalidScope`] thrown when a delete scope or a date is malformed.
//! - [`Database`] thrown when the underlying store fails.
//!
//!  [`Parse`]: EngineError::Parse
//!  [`NotFound`]: EngineError::NotFound
//!  [`InvalidScope`]: EngineError::InvalidScope
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount text: {0}")]
    Parse(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid scope: {0}")]
    InvalidScope(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Corrupted row: {0}")]
    Corrupted(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Parse(a), Self::Parse(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::InvalidScope(a), Self::InvalidScope(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Corrupted(a), Self::Corrupted(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
