//! # Generic Actor Server
//!
//! `ResourceActor` owns the [`EntityStore`] for one entity type and processes
//! `ResourceRequest`s one at a time. This sequential loop is the only lock an aggregate
//! needs: a request never observes another request half-applied.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::event::ResourceEvent;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Event channel capacity used by [`ResourceActor::new`].
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2. **Wire**: pass dependencies (other clients, settings) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// # Operations
///
/// * **Create**: `from_create_params`, then `on_create` with a view of the store. Only a
///   successful create consumes an id, so ids form a gap-free sequence starting at 1.
/// * **Update** / **Action**: the hook runs on a clone; the clone is committed on `Ok`.
/// * **Delete**: `on_delete` may veto; after removal `after_delete` runs in the same turn.
/// * **CollectionAction**: runs against the whole store.
///
/// Each successful mutation is published as a [`ResourceEvent`], including every entry a
/// collection hook touched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    events: broadcast::Sender<ResourceEvent<T>>,
    store: EntityStore<T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_event_capacity(buffer_size, DEFAULT_EVENT_CAPACITY)
    }

    /// Like [`ResourceActor::new`], with an explicit event channel capacity.
    pub fn with_event_capacity(
        buffer_size: usize,
        event_capacity: usize,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let (events, _) = broadcast::channel(event_capacity.max(1));
        let actor = Self {
            receiver,
            events: events.clone(),
            store: EntityStore::new(),
            next_id: 1,
        };
        let client = ResourceClient::with_events(sender, events);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to every hook.
    pub async fn run(mut self, context: T::Context) {
        // "Table" instead of "floor_ops::model::table::Table"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&self.store, &context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.next_id += 1;
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    self.publish(ResourceEvent::Created(item.clone()));
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut draft = current.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if draft == *current {
                        debug!(entity_type, %id, "Update changed nothing");
                    } else {
                        self.store.insert(id.clone(), draft.clone());
                        info!(entity_type, %id, "Updated");
                        self.publish(ResourceEvent::Updated(draft.clone()));
                    }
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(removed) = self.store.remove(&id) {
                        T::after_delete(&removed, &mut self.store);
                    }
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish(ResourceEvent::Deleted(id));
                    self.publish_touched();
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut draft = current.clone();
                    match draft.handle_action(action, &context).await {
                        Ok(result) if draft == *current => {
                            debug!(entity_type, %id, "Action changed nothing");
                            let _ = respond_to.send(Ok(result));
                        }
                        Ok(result) => {
                            self.store.insert(id.clone(), draft.clone());
                            info!(entity_type, %id, "Action ok");
                            self.publish(ResourceEvent::Updated(draft));
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::CollectionAction { action, respond_to } => {
                    debug!(entity_type, ?action, "Collection action");
                    let result =
                        T::handle_collection_action(&mut self.store, action, &context).await;
                    match result {
                        Ok(result) => {
                            info!(entity_type, size = self.store.len(), "Collection action ok");
                            self.publish_touched();
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Collection action failed");
                            self.store.take_touched();
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// A send error only means nobody is subscribed.
    fn publish(&self, event: ResourceEvent<T>) {
        let _ = self.events.send(event);
    }

    fn publish_touched(&mut self) {
        for id in self.store.take_touched() {
            if let Some(item) = self.store.get(&id) {
                self.publish(ResourceEvent::Updated(item.clone()));
            }
        }
    }
}
