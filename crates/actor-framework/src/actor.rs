//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the committed records of
//! one entity type. It implements the "Server" side of the Actor Model, processing requests
//! sequentially so every validate-then-write runs without interleaving.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, Records};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// **Concurrency Model**:
/// Each actor processes its requests *sequentially* in a loop, so the records need no
/// `Mutex` or `RwLock`. Post-write hooks run inside the same request, which means a hook that
/// awaits another actor (e.g. a rating recomputing its store's average) completes before the
/// next request to this actor is looked at.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// # Write Semantics
///
/// * **Create**: next ID → [`ActorEntity::from_create_params`] → [`ActorEntity::on_create`] →
///   [`ActorEntity::check_unique`] → insert → [`ActorEntity::after_save`]. A failing
///   `after_save` removes the record again. IDs are never reused, even for failed creates.
/// * **Update**: clone → [`ActorEntity::on_update`] → `check_unique` → replace → `after_save`.
///   Any failure leaves the previously committed record in place.
/// * **Delete**: [`ActorEntity::on_delete`] → remove → [`ActorEntity::after_delete`]. A failing
///   `after_delete` restores the record.
/// * **Action**: runs [`ActorEntity::handle_action`] directly on the committed record.
/// * **Query**: clones every record for which [`ActorEntity::matches`] holds, in ID order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: Records<T>,
    next_id: u32,
}

fn entity_error<E>(e: E) -> FrameworkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Records::<T>::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Store" instead of "store_ratings::model::store::Store")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.records.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id.clone(), update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id.clone(), &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.records.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.records.get_mut(&id) {
                        Some(item) => item
                            .handle_action(action, &context)
                            .await
                            .map_err(entity_error),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Query { query, respond_to } => {
                    let matched: Vec<T> = self
                        .records
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = matched.len(), "Query");
                    let _ = respond_to.send(Ok(matched));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        {
            let others: Vec<&T> = self.records.values().collect();
            item.check_unique(&others).map_err(entity_error)?;
        }

        self.records.insert(id.clone(), item.clone());
        if let Err(e) = item.after_save(&self.records, context).await {
            warn!(%id, error = %e, "after_save failed, rolling back create");
            self.records.remove(&id);
            return Err(entity_error(e));
        }
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = self
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_update(update, context).await.map_err(entity_error)?;
        {
            let others: Vec<&T> = self
                .records
                .iter()
                .filter(|(other_id, _)| **other_id != id)
                .map(|(_, other)| other)
                .collect();
            item.check_unique(&others).map_err(entity_error)?;
        }

        let previous = self.records.insert(id.clone(), item.clone());
        if let Err(e) = item.after_save(&self.records, context).await {
            warn!(%id, error = %e, "after_save failed, rolling back update");
            if let Some(previous) = previous {
                self.records.insert(id, previous);
            }
            return Err(entity_error(e));
        }
        Ok(item)
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_delete(context).await.map_err(entity_error)?;
        self.records.remove(&id);

        if let Err(e) = item.after_delete(&self.records, context).await {
            warn!(%id, error = %e, "after_delete failed, restoring record");
            self.records.insert(id, item);
            return Err(entity_error(e));
        }
        Ok(())
    }
}
