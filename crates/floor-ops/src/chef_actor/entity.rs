//! Entity trait implementation for the Chef domain type.
//!
//! Registration order is the store's id order, which is what the assignment
//! tie-break relies on.

use super::actions::{ChefAction, RosterCommand, RosterOutcome};
use super::error::ChefError;
use crate::assignment;
use crate::model::{Chef, ChefCreate, ChefId, ChefUpdate};
use async_trait::async_trait;
use floor_actor::{ActorEntity, EntityStore};

fn validate_name(name: &str) -> Result<String, ChefError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ChefError::InvalidName);
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for Chef {
    type Id = ChefId;
    type Create = ChefCreate;
    type Update = ChefUpdate;
    type Action = ChefAction;
    type ActionResult = ();
    type CollectionAction = RosterCommand;
    type CollectionResult = RosterOutcome;
    type Context = ();
    type Error = ChefError;

    fn from_create_params(id: ChefId, params: ChefCreate) -> Result<Self, Self::Error> {
        Ok(Chef::new(id, validate_name(&params.name)?))
    }

    async fn on_update(&mut self, update: ChefUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validate_name(&name)?;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.load() > 0 {
            return Err(ChefError::ChefBusy {
                chef: self.id,
                orders: self.load(),
            });
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ChefAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    async fn handle_collection_action(
        store: &mut EntityStore<Self>,
        command: RosterCommand,
        _ctx: &(),
    ) -> Result<RosterOutcome, Self::Error> {
        match command {
            RosterCommand::Assign(order) => {
                Ok(RosterOutcome::Assigned(assignment::assign(order, store)))
            }
            RosterCommand::Reassign { order, to } => {
                assignment::reassign(order, to, store).map(RosterOutcome::Reassigned)
            }
            RosterCommand::Release(order) => {
                Ok(RosterOutcome::Released(assignment::release(order, store)))
            }
        }
    }
}
