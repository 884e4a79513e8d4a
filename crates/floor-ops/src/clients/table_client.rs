//! # Table Client
//!
//! Typed API over the table registry. Every method returns [`TableError`]: rejections
//! raised by the registry come back as the exact variant, and a dead actor becomes
//! [`TableError::Storage`].
use crate::model::{Table, TableCreate, TableId, TableUpdate};
use crate::table_actor::{TableAction, TableError, TableQuery};
use async_trait::async_trait;
use floor_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Table actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_table(&self, params: TableCreate) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_table(&self, id: TableId) -> Result<Table, TableError> {
        self.get(id)
            .await?
            .ok_or_else(|| TableError::NotFound(id.to_string()))
    }

    /// Every table, ordered by number.
    #[instrument(skip(self))]
    pub async fn list_tables(&self) -> Result<Vec<Table>, TableError> {
        self.query(TableQuery::All).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_number(&self, number: u32) -> Result<Option<Table>, TableError> {
        Ok(self.query(TableQuery::ByNumber(number)).await?.into_iter().next())
    }

    /// Unreserved tables that seat `party_size`, ordered by number.
    #[instrument(skip(self))]
    pub async fn available_tables(&self, party_size: u32) -> Result<Vec<Table>, TableError> {
        self.query(TableQuery::Available { party_size }).await
    }

    #[instrument(skip(self))]
    pub async fn update_table(
        &self,
        id: TableId,
        update: TableUpdate,
    ) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn reserve(&self, id: TableId, party_size: u32) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TableAction::Reserve { party_size })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn unreserve(&self, id: TableId) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TableAction::Unreserve)
            .await
            .map_err(Self::map_error)
    }

    /// Removes the table and renumbers the ones after it.
    #[instrument(skip(self))]
    pub async fn delete_table(&self, id: TableId) -> Result<(), TableError> {
        self.delete(id).await
    }

    async fn query(&self, query: TableQuery) -> Result<Vec<Table>, TableError> {
        debug!(?query, "Sending query");
        self.inner
            .perform_collection_action(query)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::Storage(other.to_string()),
        }
    }
}
