//! Runtime settings for the floor system.

/// Default cap on the number of tables on the floor.
pub const DEFAULT_MAX_TABLES: usize = 30;
pub const DEFAULT_ACTOR_BUFFER: usize = 32;
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorConfig {
    /// Adding a table fails once this many exist.
    pub max_tables: usize,
    /// Request channel capacity of each actor.
    pub actor_buffer: usize,
    /// Broadcast capacity of each actor's event stream.
    pub event_capacity: usize,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            max_tables: DEFAULT_MAX_TABLES,
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl FloorConfig {
    /// Reads `FLOOR_MAX_TABLES`, `FLOOR_ACTOR_BUFFER` and `FLOOR_EVENT_CAPACITY`.
    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            max_tables: read("FLOOR_MAX_TABLES", DEFAULT_MAX_TABLES),
            actor_buffer: read("FLOOR_ACTOR_BUFFER", DEFAULT_ACTOR_BUFFER),
            event_capacity: read("FLOOR_EVENT_CAPACITY", DEFAULT_EVENT_CAPACITY),
        }
    }
}
