//! Error types for the Chef actor.

use crate::error::{DomainError, ErrorKind};
use crate::model::ChefId;
use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChefError {
    /// The requested chef was not found.
    #[error("Chef not found: {0}")]
    NotFound(String),

    #[error("Chef name must not be blank")]
    InvalidName,

    /// The chef still has orders on their board.
    #[error("Chef {chef} still has {orders} assigned order(s)")]
    ChefBusy { chef: ChefId, orders: usize },

    /// The chef actor could not be reached.
    #[error("Chef storage error: {0}")]
    Storage(String),
}

impl DomainError for ChefError {
    fn kind(&self) -> ErrorKind {
        match self {
            ChefError::NotFound(_) => ErrorKind::NotFound,
            ChefError::InvalidName => ErrorKind::Validation,
            ChefError::ChefBusy { .. } => ErrorKind::Conflict,
            ChefError::Storage(_) => ErrorKind::Storage,
        }
    }
}
