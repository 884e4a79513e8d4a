//! # ActorClient Trait
//!
//! Common interface for resource-specific clients. Implementors supply the inner
//! `ResourceClient` and an error mapping; `get`, `list`, `delete` and `subscribe` come
//! for free.
use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceEvent};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Trait for resource-specific clients to inherit standard CRUD operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    ///
    /// Implementations usually try [`FrameworkError::downcast_entity`] first so the
    /// entity's own error reaches the caller unchanged.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every entity, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Push notifications for every mutation applied after this call.
    fn subscribe(&self) -> broadcast::Receiver<ResourceEvent<T>> {
        self.inner().subscribe()
    }
}
