//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type (User, Store, StoreRating, …) implements
//! to be owned by a `ResourceActor`. It names the ID, the create/update DTOs, custom actions,
//! the query filter, the injected context and the error type, and it exposes the persistence
//! lifecycle as hooks:
//!
//! | Stage | Hook | Runs | On error |
//! |-------|------|------|----------|
//! | build | [`ActorEntity::from_create_params`] | create | nothing written |
//! | validate | [`ActorEntity::on_create`] / [`ActorEntity::on_update`] | create / update | nothing written |
//! | constrain | [`ActorEntity::check_unique`] | create / update | nothing written |
//! | write | *(actor)* | | |
//! | callback | [`ActorEntity::after_save`] | create / update | write rolled back |
//! | guard | [`ActorEntity::on_delete`] | delete | nothing removed |
//! | callback | [`ActorEntity::after_delete`] | delete | record restored |
//!
//! Only `from_create_params`, `on_update` and `handle_action` are required; every other hook
//! defaults to `Ok(())` (or "matches everything" for [`ActorEntity::matches`]).

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The committed records owned by one actor, in ID order.
pub type Records<T> = BTreeMap<<T as ActorEntity>::Id, T>;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors (e.g. checking that a
/// referenced record exists). The `Context` type is injected into every async hook when the
/// actor is started, which lets actors be wired together after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Generated from a `u32` sequence; `Ord` keeps records and query
    /// results in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations that bypass validation (e.g. writing a cached column).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter criteria accepted by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor. Validation failures, missing references and
    /// communication failures all travel through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the record from its ID and payload. Pure field validation belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Validation hooks (Async) ---

    /// Called after construction, before the record is written.
    /// Use it for checks that need other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to a working copy of the record. The copy replaces the stored record
    /// only if this hook, [`ActorEntity::check_unique`] and [`ActorEntity::after_save`] succeed.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed. Returning an error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Uniqueness constraints, checked against every *other* committed record.
    fn check_unique(&self, _others: &[&Self]) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Callbacks (Async) ---

    /// Runs after a create or update has been written. `records` already contains `self`.
    async fn after_save(
        &self,
        _records: &Records<Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs after the record has been removed. `records` no longer contains `self`.
    async fn after_delete(
        &self,
        _records: &Records<Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Actions & Queries ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this record satisfies a query.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }
}
