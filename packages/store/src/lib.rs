//! # replica-store
//!
//! Collection stores: the client-side mirror of one remote resource
//! collection.
//!
//! A [`CollectionStore`] holds the last successfully fetched collection, a
//! busy flag, and an error slot, and exposes the CRUD operations. Every
//! successful mutation re-fetches the whole collection so the visible items
//! always match server state ("reload-on-mutate"); items are never patched
//! locally.
//!
//! State is published through a `tokio::sync::watch` channel:
//! [`CollectionStore::subscribe`] hands out a receiver that observes every
//! [`Snapshot`] transition, and [`CollectionStore::snapshot`] reads the
//! current state synchronously.
//!
//! Operations report success as `bool`. Underlying client errors never
//! propagate past the store boundary: they are logged and collapsed into a
//! fixed, operation-specific message in the error slot. Every failure
//! leaves the store idle and ready for retry.

pub mod confirm;
pub mod messages;
pub mod snapshot;
pub mod store;

pub use confirm::{AlwaysConfirm, ConfirmAction};
pub use snapshot::Snapshot;
pub use store::{CollectionStore, ProductStore, UserStore};
