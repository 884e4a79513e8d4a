//! # Chef Client
//!
//! Roster CRUD for everyone. The three assignment commands are crate-private: orders only
//! reach a chef's board through the order actor, which keeps `Order::chef_id` in step.
use crate::assignment::Reassignment;
use crate::chef_actor::{ChefError, RosterCommand, RosterOutcome};
use crate::model::{Chef, ChefCreate, ChefId, ChefUpdate, OrderId};
use async_trait::async_trait;
use floor_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

/// Client for interacting with the Chef actor.
#[derive(Clone)]
pub struct ChefClient {
    inner: ResourceClient<Chef>,
}

impl ChefClient {
    pub fn new(inner: ResourceClient<Chef>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_chef(&self, params: ChefCreate) -> Result<Chef, ChefError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_chef(&self, id: ChefId) -> Result<Chef, ChefError> {
        self.get(id)
            .await?
            .ok_or_else(|| ChefError::NotFound(id.to_string()))
    }

    /// All chefs in registration order.
    #[instrument(skip(self))]
    pub async fn list_chefs(&self) -> Result<Vec<Chef>, ChefError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn rename_chef(&self, id: ChefId, name: String) -> Result<Chef, ChefError> {
        debug!("Sending request");
        self.inner
            .update(id, ChefUpdate { name: Some(name) })
            .await
            .map_err(Self::map_error)
    }

    /// Fails with [`ChefError::ChefBusy`] while the chef has orders on their board.
    #[instrument(skip(self))]
    pub async fn delete_chef(&self, id: ChefId) -> Result<(), ChefError> {
        self.delete(id).await
    }

    /// Puts the order on the least loaded chef's board. `None` on an empty roster.
    #[instrument(skip(self))]
    pub(crate) async fn assign(&self, order: OrderId) -> Result<Option<ChefId>, ChefError> {
        match self.command(RosterCommand::Assign(order)).await? {
            RosterOutcome::Assigned(chef) => Ok(chef),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub(crate) async fn reassign(
        &self,
        order: OrderId,
        to: ChefId,
    ) -> Result<Reassignment, ChefError> {
        match self.command(RosterCommand::Reassign { order, to }).await? {
            RosterOutcome::Reassigned(moved) => Ok(moved),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub(crate) async fn release(&self, order: OrderId) -> Result<Option<ChefId>, ChefError> {
        match self.command(RosterCommand::Release(order)).await? {
            RosterOutcome::Released(chef) => Ok(chef),
            other => Err(unexpected(other)),
        }
    }

    async fn command(&self, command: RosterCommand) -> Result<RosterOutcome, ChefError> {
        self.inner
            .perform_collection_action(command)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(outcome: RosterOutcome) -> ChefError {
    warn!(?outcome, "Roster answered with the wrong outcome");
    ChefError::Storage(format!("unexpected roster outcome: {outcome:?}"))
}

#[async_trait]
impl ActorClient<Chef> for ChefClient {
    type Error = ChefError;

    fn inner(&self) -> &ResourceClient<Chef> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ChefError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ChefError::NotFound(id),
            Err(other) => ChefError::Storage(other.to_string()),
        }
    }
}
