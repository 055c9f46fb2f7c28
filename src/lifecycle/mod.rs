//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the rating system: starting the User, Store
//! and Rating actors, wiring them together, and shutting them down.
//!
//! ## Dependency Graph
//!
//! ```text
//! Rating ──▶ Store ──▶ User
//!    └────────────────▶ User
//! ```
//!
//! - **User**: no dependencies (`Context = ()`)
//! - **Store**: checks that its proprietor exists (`Context = UserClient`)
//! - **Rating**: checks both references, rejects self-ratings and writes the store average
//!   (`Context = (UserClient, StoreClient)`)
//!
//! Actors are created first and receive their dependencies when they are run, so the wiring
//! order is independent of construction order. The graph is acyclic, which means dropping
//! every client is enough to stop every actor.
//!
//! ## Cross-entity Operations
//!
//! Work that reads or writes more than one actor lives on [`RatingSystem`] rather than in an
//! actor, which keeps actors from calling back into each other:
//!
//! - [`RatingSystem::highly_rated_stores`] and [`RatingSystem::rating_statistics`]
//! - [`RatingSystem::owned_store`], [`RatingSystem::rated_stores`] and
//!   [`RatingSystem::rating_users`]
//! - [`RatingSystem::delete_user`] and [`RatingSystem::delete_store`], which remove dependent
//!   ratings first
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! ## Observability
//!
//! Call [`actor_framework::tracing::setup_tracing`] once at startup. `RUST_LOG=debug` shows
//! every request payload (passwords are filtered).

pub mod rating_system;

pub use rating_system::*;
