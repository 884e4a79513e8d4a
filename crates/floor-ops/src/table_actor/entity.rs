//! Entity trait implementation for the Table domain type.
//!
//! The registry keeps table numbers dense: a new table takes `count + 1`, and
//! [`after_delete`](ActorEntity::after_delete) closes the gap a deleted table leaves.
//! Both run inside the table actor's turn, so no reader ever sees two tables sharing a
//! number or a hole in the sequence.

use super::actions::{TableAction, TableQuery};
use super::error::TableError;
use super::TableContext;
use crate::model::{normalize_name, Capacity, Table, TableCreate, TableId, TableUpdate};
use crate::reservation::{can_reserve, validate_party_size};
use async_trait::async_trait;
use floor_actor::{ActorEntity, EntityStore};
use tracing::debug;

fn parse_capacity(seats: u32) -> Result<Capacity, TableError> {
    Capacity::try_from(seats).map_err(|e| TableError::CapacityInvalid(e.0))
}

fn by_number<'a>(tables: impl Iterator<Item = &'a Table>) -> Vec<Table> {
    let mut tables: Vec<Table> = tables.cloned().collect();
    tables.sort_by_key(|t| t.number);
    tables
}

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = Table;
    type CollectionAction = TableQuery;
    type CollectionResult = Vec<Table>;
    type Context = TableContext;
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, Self::Error> {
        let capacity = parse_capacity(params.capacity)?;
        Ok(Table::new(id, capacity, params.name))
    }

    async fn on_create(
        &mut self,
        store: &EntityStore<Self>,
        ctx: &TableContext,
    ) -> Result<(), Self::Error> {
        if store.len() >= ctx.max_tables {
            return Err(TableError::RegistryFull {
                max: ctx.max_tables,
            });
        }
        self.number = store.len() as u32 + 1;
        Ok(())
    }

    /// Handles updates to the Table entity.
    ///
    /// # Fields Updated
    /// - `name`: a blank name clears the label
    /// - `capacity`: must be a floor size; frozen while the table is reserved
    async fn on_update(
        &mut self,
        update: TableUpdate,
        _ctx: &TableContext,
    ) -> Result<(), Self::Error> {
        if let Some(seats) = update.capacity {
            let capacity = parse_capacity(seats)?;
            if self.reserved && capacity != self.capacity {
                return Err(TableError::TableReserved {
                    number: self.number,
                });
            }
            self.capacity = capacity;
        }
        if let Some(name) = update.name {
            self.name = normalize_name(Some(name));
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &TableContext) -> Result<(), Self::Error> {
        if self.reserved {
            return Err(TableError::TableReserved {
                number: self.number,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TableAction,
        _ctx: &TableContext,
    ) -> Result<Table, Self::Error> {
        match action {
            TableAction::Reserve { party_size } => {
                can_reserve(self, party_size)?;
                self.reserved = true;
            }
            TableAction::Unreserve => {
                if !self.reserved {
                    return Err(TableError::NotReserved {
                        number: self.number,
                    });
                }
                self.reserved = false;
            }
        }
        Ok(self.clone())
    }

    fn after_delete(removed: &Self, store: &mut EntityStore<Self>) {
        let shifted: Vec<TableId> = store
            .values()
            .filter(|t| t.number > removed.number)
            .map(|t| t.id)
            .collect();
        debug!(removed = removed.number, shifted = shifted.len(), "Renumbering tables");
        for id in shifted {
            if let Some(table) = store.get_mut(&id) {
                table.number -= 1;
            }
        }
    }

    async fn handle_collection_action(
        store: &mut EntityStore<Self>,
        query: TableQuery,
        _ctx: &TableContext,
    ) -> Result<Vec<Table>, Self::Error> {
        match query {
            TableQuery::All => Ok(by_number(store.values())),
            TableQuery::ByNumber(number) => {
                Ok(by_number(store.values().filter(|t| t.number == number)))
            }
            TableQuery::Available { party_size } => {
                validate_party_size(party_size)?;
                Ok(by_number(store.values().filter(|t| {
                    !t.reserved && t.capacity.fits(party_size)
                })))
            }
        }
    }
}
