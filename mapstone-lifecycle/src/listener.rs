/// Error raised inside a listener.
///
/// Deliberately opaque: whatever the listener returns is propagated to the
/// caller of the persistence operation unchanged, never wrapped in a
/// library error type.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A callback invoked at a registered lifecycle stage with exclusive access
/// to the entity.
///
/// Listener instances may be invoked concurrently for different entities in
/// flight at the same time (hence `Send + Sync`); implementations must not
/// hold per-call mutable state. Within one operation, listeners for a stage
/// run sequentially and each observes the mutations of the previous one.
///
/// Any `Fn(&mut E) -> Result<(), ListenerError> + Send + Sync` closure is a
/// listener via the blanket impl.
pub trait EntityListener<E>: Send + Sync {
    /// Reads and/or mutates the entity at the registered stage. Returning
    /// an error aborts the stage and the surrounding operation.
    fn handle(&self, entity: &mut E) -> Result<(), ListenerError>;
}

impl<E, F> EntityListener<E> for F
where
    F: Fn(&mut E) -> Result<(), ListenerError> + Send + Sync,
{
    fn handle(&self, entity: &mut E) -> Result<(), ListenerError> {
        self(entity)
    }
}
