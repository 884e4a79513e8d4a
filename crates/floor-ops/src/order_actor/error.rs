//! Error types for the Order actor.

use crate::chef_actor::ChefError;
use crate::error::{DomainError, ErrorKind};
use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order must contain at least one item")]
    EmptyItems,

    /// Item `index` (0-based) has a blank name or a zero quantity.
    #[error("Invalid item #{index}: {reason}")]
    InvalidItem { index: usize, reason: &'static str },

    /// No table currently carries this number.
    #[error("No table with number {0}")]
    TableNotFound(u32),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The roster refused the assignment change.
    #[error(transparent)]
    Assignment(#[from] ChefError),

    /// The order actor, or an actor it depends on, could not be reached.
    #[error("Order storage error: {0}")]
    Storage(String),
}

impl DomainError for OrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) | OrderError::TableNotFound(_) => ErrorKind::NotFound,
            OrderError::EmptyItems | OrderError::InvalidItem { .. } => ErrorKind::Validation,
            OrderError::InvalidTransition { .. } => ErrorKind::Conflict,
            OrderError::Assignment(reason) => reason.kind(),
            OrderError::Storage(_) => ErrorKind::Storage,
        }
    }
}
