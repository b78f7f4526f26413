//! Error types shared across the core crate.

use crate::entities::EntityId;
use thiserror::Error;

/// Errors raised by editor operations.
///
/// None of these are fatal: store mutators absorb them and leave state
/// unchanged, and the color picker reports them only as "no update occurred".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Unknown entity id: {0}")]
    UnknownEntityId(EntityId),
    #[error("Invalid text style: {0}")]
    InvalidStyle(String),
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
