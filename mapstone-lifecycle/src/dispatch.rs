//! Listener registration and stage dispatch.

use crate::{EntityListener, LifecycleStage, ListenerError};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

/// Type-erased view over an [`EntityListener`], so listeners for different
/// entity types share one registry.
trait ErasedListener: Send + Sync {
    fn handle(&self, entity: &mut dyn Any) -> Result<(), ListenerError>;
}

struct Adapter<E, L> {
    listener: L,
    _marker: PhantomData<fn(&mut E)>,
}

impl<E, L> ErasedListener for Adapter<E, L>
where
    E: Any,
    L: EntityListener<E>,
{
    fn handle(&self, entity: &mut dyn Any) -> Result<(), ListenerError> {
        match entity.downcast_mut::<E>() {
            Some(entity) => self.listener.handle(entity),
            // buckets are keyed by E's TypeId, so this only fires on a
            // registry bug; surface it rather than skip the listener
            None => Err(format!(
                "listener for {} dispatched with a different entity type",
                type_name::<E>()
            )
            .into()),
        }
    }
}

/// Registry of lifecycle listeners, keyed by exact entity type and stage.
///
/// Built at setup time, then shared immutably: dispatch takes `&self` and
/// may run concurrently for different entities. Lookup does not walk any
/// type hierarchy — a listener registered for `E` runs only when dispatch
/// is invoked with exactly `E`.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<(TypeId, LifecycleStage), Vec<Box<dyn ErasedListener>>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for one entity type and one stage.
    ///
    /// Registration order is invocation order within a stage. A listener
    /// meant for several stages is registered once per stage.
    pub fn register<E, L>(&mut self, stage: LifecycleStage, listener: L)
    where
        E: Any,
        L: EntityListener<E> + 'static,
    {
        trace!("registering {} listener for {}", stage, type_name::<E>());
        self.listeners
            .entry((TypeId::of::<E>(), stage))
            .or_default()
            .push(Box::new(Adapter {
                listener,
                _marker: PhantomData,
            }));
    }

    /// Number of listeners registered for `E` at `stage`.
    #[must_use]
    pub fn listener_count<E: Any>(&self, stage: LifecycleStage) -> usize {
        self.listeners
            .get(&(TypeId::of::<E>(), stage))
            .map_or(0, Vec::len)
    }

    /// Invokes every listener registered for `E` at `stage`, sequentially,
    /// in registration order, on the calling thread.
    ///
    /// Each listener observes the entity state left by the previous one.
    /// The first error halts the stage — later listeners do not run — and
    /// is returned to the caller unchanged. No registrations is `Ok(())`.
    pub fn dispatch<E: Any>(
        &self,
        stage: LifecycleStage,
        entity: &mut E,
    ) -> Result<(), ListenerError> {
        let Some(bucket) = self.listeners.get(&(TypeId::of::<E>(), stage)) else {
            return Ok(());
        };
        debug!(
            "dispatching {} listeners for {} at {}",
            bucket.len(),
            type_name::<E>(),
            stage
        );
        for listener in bucket {
            if let Err(err) = listener.handle(entity) {
                warn!("listener aborted {} for {}: {}", stage, type_name::<E>(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}
