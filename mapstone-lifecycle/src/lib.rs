//! Entity lifecycle stages and listener dispatch.
//!
//! The persistence engine calls into this crate around each datastore
//! operation: listeners registered for the entity's type and the relevant
//! [`LifecycleStage`] run sequentially, in registration order, with
//! exclusive mutable access to the entity. "Pre" stages run strictly before
//! field serialization, so a listener's mutations are what gets persisted.
//!
//! Listeners are registered explicitly against a stage and an entity type —
//! there is no runtime discovery of callback methods. A listener error halts
//! the stage and propagates to the operation caller unchanged.

mod dispatch;
mod listener;
mod stage;

pub use dispatch::ListenerRegistry;
pub use listener::{EntityListener, ListenerError};
pub use stage::LifecycleStage;
