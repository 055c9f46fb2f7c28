//! # Generic Messages
//!
//! The request enum sent from `ResourceClient` to `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the persistence lifecycle of a single resource type:
///
/// - **Create**: builds, validates and writes a record from [`ActorEntity::Create`].
/// - **Get**: fetches a record by ID.
/// - **Update**: validates [`ActorEntity::Update`] against a working copy and commits it.
/// - **Delete**: removes a record.
/// - **Action**: runs an [`ActorEntity::Action`] on one record without validation.
/// - **Query**: returns every record matching an [`ActorEntity::Query`], in ID order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
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
    Query {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
