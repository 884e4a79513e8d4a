/// A dining table on the floor.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](floor_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](floor_actor::ResourceActor).
///
/// See [`impl ActorEntity for Table`](#impl-ActorEntity-for-Table) for details on:
/// - Creation parameters ([`TableCreate`])
/// - Update parameters ([`TableUpdate`])
/// - Custom actions ([`TableAction`](crate::table_actor::TableAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

/// Seat count of a table. Only these sizes exist on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Capacity {
    Two,
    Four,
    Six,
    Eight,
}

impl Capacity {
    pub const ALL: [Capacity; 4] = [Capacity::Two, Capacity::Four, Capacity::Six, Capacity::Eight];

    pub const fn seats(self) -> u32 {
        match self {
            Capacity::Two => 2,
            Capacity::Four => 4,
            Capacity::Six => 6,
            Capacity::Eight => 8,
        }
    }

    pub const fn fits(self, party_size: u32) -> bool {
        party_size <= self.seats()
    }
}

impl TryFrom<u32> for Capacity {
    type Error = InvalidCapacity;

    fn try_from(seats: u32) -> Result<Self, Self::Error> {
        match seats {
            2 => Ok(Capacity::Two),
            4 => Ok(Capacity::Four),
            6 => Ok(Capacity::Six),
            8 => Ok(Capacity::Eight),
            other => Err(InvalidCapacity(other)),
        }
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> Self {
        capacity.seats()
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.seats())
    }
}

/// A seat count outside {2, 4, 6, 8}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("capacity must be one of 2, 4, 6 or 8, got {0}")]
pub struct InvalidCapacity(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    /// Position on the floor plan. Numbers always form `1..=N`.
    pub number: u32,
    pub capacity: Capacity,
    pub name: Option<String>,
    pub reserved: bool,
}

impl Table {
    /// Creates an unreserved table. The number is assigned by the registry.
    pub fn new(id: TableId, capacity: Capacity, name: Option<String>) -> Self {
        Self {
            id,
            number: 0,
            capacity,
            name: normalize_name(name),
            reserved: false,
        }
    }

    /// Label shown on the floor plan: the name if set, else `Table <number>`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Table {}", self.number),
        }
    }
}

/// Blank labels are stored as no label.
pub(crate) fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Payload for adding a table. `capacity` is validated by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    #[serde(default)]
    pub name: Option<String>,
    pub capacity: u32,
}

impl TableCreate {
    pub fn new(capacity: u32) -> Self {
        Self {
            name: None,
            capacity,
        }
    }

    pub fn named(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: Some(name.into()),
            capacity,
        }
    }
}

/// Payload for editing a table. Number and reservation flag are not editable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_accepts_only_floor_sizes() {
        for seats in 0..=10 {
            let parsed = Capacity::try_from(seats);
            assert_eq!(parsed.is_ok(), [2, 4, 6, 8].contains(&seats), "seats={seats}");
        }
        assert_eq!(Capacity::try_from(6).unwrap().seats(), 6);
        assert_eq!(Capacity::try_from(5), Err(InvalidCapacity(5)));
    }

    #[test]
    fn test_blank_name_is_dropped() {
        let table = Table::new(TableId(1), Capacity::Two, Some("   ".into()));
        assert_eq!(table.name, None);
        assert_eq!(table.label(), "Table 0");

        let patio = Table::new(TableId(2), Capacity::Four, Some(" Patio ".into()));
        assert_eq!(patio.label(), "Patio");
    }

    #[test]
    fn test_wire_shape() {
        let mut table = Table::new(TableId(3), Capacity::Six, Some("Window".into()));
        table.number = 2;
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "number": 2,
                "capacity": 6,
                "name": "Window",
                "reserved": false
            })
        );

        let bad = serde_json::from_value::<Table>(serde_json::json!({
            "id": 1, "number": 1, "capacity": 3, "name": null, "reserved": false
        }));
        assert!(bad.is_err());
    }
}
