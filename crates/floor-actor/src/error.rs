//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity errors travel inside
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`], so callers never lose the specific reason
//! an operation was rejected.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type when this error wraps one.
    ///
    /// Anything else (including an entity error of a different type) is handed back
    /// unchanged in `Err`, so the caller can map it to its own storage variant.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("seat taken")]
    struct SeatTaken;

    #[test]
    fn test_downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(SeatTaken));
        assert_eq!(err.downcast_entity::<SeatTaken>().unwrap(), SeatTaken);
    }

    #[test]
    fn test_downcast_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.downcast_entity::<SeatTaken>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.downcast_entity::<SeatTaken>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
