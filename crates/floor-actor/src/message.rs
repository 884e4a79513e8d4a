//! # Generic Messages
//!
//! The message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants follow the resource lifecycle:
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns it.
/// - **Get** / **List**: read one entity by id, or a snapshot of all of them.
/// - **Update**: applies [`ActorEntity::Update`] to an existing entity.
/// - **Delete**: removes an entity, then runs the collection follow-up hook.
/// - **Action**: a custom [`ActorEntity::Action`] on one entity.
/// - **CollectionAction**: a custom [`ActorEntity::CollectionAction`] over the store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    CollectionAction {
        action: T::CollectionAction,
        respond_to: Response<T::CollectionResult>,
    },
}
