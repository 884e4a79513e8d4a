//! # Error Classification
//!
//! Every aggregate has its own `thiserror` enum. They share one classification so a
//! transport layer can map any of them to a status code without knowing the variants.

use serde::Serialize;
use std::fmt;

/// Coarse category of a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request itself is malformed (bad capacity, empty items, ...).
    Validation,
    /// The request is well-formed but clashes with current state.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// The owning actor could not be reached.
    Storage,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Storage => 503,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Storage => "storage",
        };
        f.write_str(name)
    }
}

/// Implemented by every aggregate error.
pub trait DomainError: std::error::Error {
    fn kind(&self) -> ErrorKind;

    /// HTTP status the transport layer answers with.
    fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::Validation.status_code(), 400);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::Storage.status_code(), 503);
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(
            serde_json::to_string(&ErrorKind::NotFound).unwrap(),
            "\"not_found\""
        );
    }
}
