//! # Reservation Policy
//!
//! Decides whether a table can be held for a party. Pure: it reads the table and the
//! party size and nothing else, so the registry can call it inside its actor turn and
//! tests can call it without any actor at all.

use crate::error::{DomainError, ErrorKind};
use crate::model::Table;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Table {number} is already reserved")]
    AlreadyReserved { number: u32 },

    #[error("Party size must be at least 1, got {0}")]
    InvalidPartySize(u32),

    #[error("Party of {party_size} exceeds table capacity {capacity}")]
    CapacityExceeded { party_size: u32, capacity: u32 },
}

impl DomainError for ReservationError {
    fn kind(&self) -> ErrorKind {
        match self {
            ReservationError::InvalidPartySize(_) => ErrorKind::Validation,
            ReservationError::AlreadyReserved { .. }
            | ReservationError::CapacityExceeded { .. } => ErrorKind::Conflict,
        }
    }
}

/// Checks, in order: already reserved, party size, capacity.
pub fn can_reserve(table: &Table, party_size: u32) -> Result<(), ReservationError> {
    if table.reserved {
        return Err(ReservationError::AlreadyReserved {
            number: table.number,
        });
    }
    validate_party_size(party_size)?;
    if !table.capacity.fits(party_size) {
        return Err(ReservationError::CapacityExceeded {
            party_size,
            capacity: table.capacity.seats(),
        });
    }
    Ok(())
}

pub fn validate_party_size(party_size: u32) -> Result<(), ReservationError> {
    if party_size == 0 {
        return Err(ReservationError::InvalidPartySize(party_size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Capacity, TableId};

    fn table(capacity: Capacity, reserved: bool) -> Table {
        let mut table = Table::new(TableId(1), capacity, None);
        table.number = 1;
        table.reserved = reserved;
        table
    }

    #[test]
    fn test_succeeds_iff_party_fits_and_table_is_free() {
        for capacity in Capacity::ALL {
            for reserved in [false, true] {
                let t = table(capacity, reserved);
                for party_size in 1..=100 {
                    let expected = party_size <= capacity.seats() && !reserved;
                    assert_eq!(
                        can_reserve(&t, party_size).is_ok(),
                        expected,
                        "capacity={capacity} reserved={reserved} party={party_size}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_reserved_is_reported_before_anything_else() {
        let t = table(Capacity::Two, true);
        assert_eq!(
            can_reserve(&t, 0),
            Err(ReservationError::AlreadyReserved { number: 1 })
        );
        assert_eq!(
            can_reserve(&t, 50),
            Err(ReservationError::AlreadyReserved { number: 1 })
        );
    }

    #[test]
    fn test_reasons_and_kinds() {
        let t = table(Capacity::Four, false);

        let zero = can_reserve(&t, 0).unwrap_err();
        assert_eq!(zero, ReservationError::InvalidPartySize(0));
        assert_eq!(zero.status_code(), 400);

        let big = can_reserve(&t, 5).unwrap_err();
        assert_eq!(
            big,
            ReservationError::CapacityExceeded {
                party_size: 5,
                capacity: 4
            }
        );
        assert_eq!(big.kind(), ErrorKind::Conflict);
        assert_eq!(big.status_code(), 409);
    }
}
