//! Error types for the Table actor.

use crate::error::{DomainError, ErrorKind};
use crate::reservation::ReservationError;
use thiserror::Error;

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// The requested table was not found.
    #[error("Table not found: {0}")]
    NotFound(String),

    /// Capacity outside {2, 4, 6, 8}.
    #[error("Invalid capacity {0}: must be 2, 4, 6 or 8")]
    CapacityInvalid(u32),

    /// The floor already holds the maximum number of tables.
    #[error("Registry full: at most {max} tables")]
    RegistryFull { max: usize },

    /// The table is reserved and cannot be deleted or resized.
    #[error("Table {number} is reserved")]
    TableReserved { number: u32 },

    #[error("Table {number} is not reserved")]
    NotReserved { number: u32 },

    /// The reservation policy turned the request down.
    #[error(transparent)]
    Rejected(#[from] ReservationError),

    /// The table actor could not be reached.
    #[error("Table storage error: {0}")]
    Storage(String),
}

impl DomainError for TableError {
    fn kind(&self) -> ErrorKind {
        match self {
            TableError::NotFound(_) => ErrorKind::NotFound,
            TableError::CapacityInvalid(_) => ErrorKind::Validation,
            TableError::RegistryFull { .. }
            | TableError::TableReserved { .. }
            | TableError::NotReserved { .. } => ErrorKind::Conflict,
            TableError::Rejected(reason) => reason.kind(),
            TableError::Storage(_) => ErrorKind::Storage,
        }
    }
}
