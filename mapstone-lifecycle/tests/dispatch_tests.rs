use mapstone_lifecycle::{EntityListener, LifecycleStage, ListenerError, ListenerRegistry};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct Animal {
    value: String,
}

fn make_animal(value: &str) -> Animal {
    Animal {
        value: value.to_string(),
    }
}

/// Stamps an audit marker onto the entity, separated from any existing
/// content by "->".
struct AuditStamp;

impl AuditStamp {
    fn marker() -> String {
        format!("AuditStamp.{}", LifecycleStage::PreInsert)
    }
}

impl EntityListener<Animal> for AuditStamp {
    fn handle(&self, animal: &mut Animal) -> Result<(), ListenerError> {
        let mut value = animal.value.clone();
        if !value.trim().is_empty() {
            value.push_str("->");
        }
        value.push_str(&Self::marker());
        animal.value = value;
        Ok(())
    }
}

// ── Stage names ──────────────────────────────────────────────────

#[test]
fn stage_display_names() {
    assert_eq!(LifecycleStage::PreInsert.to_string(), "PreInsert");
    assert_eq!(LifecycleStage::PostLoad.to_string(), "PostLoad");
    assert_eq!(LifecycleStage::PreUpsert.to_string(), "PreUpsert");
}

#[test]
fn pre_stages_are_pre() {
    assert!(LifecycleStage::PreInsert.is_pre());
    assert!(LifecycleStage::PreDelete.is_pre());
    assert!(!LifecycleStage::PostInsert.is_pre());
    assert!(!LifecycleStage::PostLoad.is_pre());
}

// ── Marker-stamping listener (read-mutate-write contract) ────────

#[test]
fn stamp_on_empty_value_has_no_leading_separator() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);

    let mut animal = make_animal("");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "AuditStamp.PreInsert");
}

#[test]
fn stamp_appends_with_separator_to_existing_value() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);

    let mut animal = make_animal("first");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "first->AuditStamp.PreInsert");
}

// ── Ordering & composition ───────────────────────────────────────

#[test]
fn listeners_run_in_registration_order_and_compose() {
    let mut registry = ListenerRegistry::new();
    registry.register(
        LifecycleStage::PreInsert,
        |animal: &mut Animal| -> Result<(), ListenerError> {
            animal.value.push('A');
            Ok(())
        },
    );
    registry.register(
        LifecycleStage::PreInsert,
        |animal: &mut Animal| -> Result<(), ListenerError> {
            // observes A's mutation, not a snapshot
            assert!(animal.value.ends_with('A'));
            animal.value.push('B');
            Ok(())
        },
    );

    let mut animal = make_animal("");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "AB");
}

#[test]
fn double_stamp_composes() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);
    registry.register(LifecycleStage::PreInsert, AuditStamp);

    let mut animal = make_animal("");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "AuditStamp.PreInsert->AuditStamp.PreInsert");
}

// ── Failure semantics ────────────────────────────────────────────

#[test]
fn listener_error_halts_the_stage() {
    let calls_after_failure = Arc::new(AtomicUsize::new(0));

    let mut registry = ListenerRegistry::new();
    registry.register(
        LifecycleStage::PreInsert,
        |_: &mut Animal| -> Result<(), ListenerError> { Err("first listener failed".into()) },
    );
    let counter = Arc::clone(&calls_after_failure);
    registry.register(
        LifecycleStage::PreInsert,
        move |_: &mut Animal| -> Result<(), ListenerError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    );

    let mut animal = make_animal("");
    let err = registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap_err();

    assert_eq!(err.to_string(), "first listener failed");
    assert_eq!(calls_after_failure.load(Ordering::SeqCst), 0);
}

#[test]
fn listener_error_propagates_verbatim() {
    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded for {plugin}")]
    struct QuotaError {
        plugin: String,
    }

    let mut registry = ListenerRegistry::new();
    registry.register(
        LifecycleStage::PreUpdate,
        |_: &mut Animal| -> Result<(), ListenerError> {
            Err(Box::new(QuotaError {
                plugin: "tasks".into(),
            }))
        },
    );

    let mut animal = make_animal("x");
    let err = registry
        .dispatch(LifecycleStage::PreUpdate, &mut animal)
        .unwrap_err();

    // the caller gets the listener's own error type back, not a wrapper
    let quota = err.downcast_ref::<QuotaError>().unwrap();
    assert_eq!(quota.plugin, "tasks");
}

#[test]
fn entity_keeps_mutations_made_before_the_failure() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);
    registry.register(
        LifecycleStage::PreInsert,
        |_: &mut Animal| -> Result<(), ListenerError> { Err("boom".into()) },
    );

    let mut animal = make_animal("");
    let result = registry.dispatch(LifecycleStage::PreInsert, &mut animal);
    assert!(result.is_err());
    assert_eq!(animal.value, "AuditStamp.PreInsert");
}

// ── Lookup is exact (type, stage) ────────────────────────────────

#[test]
fn dispatch_with_no_registrations_is_ok() {
    let registry = ListenerRegistry::new();
    let mut animal = make_animal("untouched");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "untouched");
}

#[test]
fn other_stages_do_not_run() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreUpdate, AuditStamp);

    let mut animal = make_animal("");
    registry
        .dispatch(LifecycleStage::PreInsert, &mut animal)
        .unwrap();
    assert_eq!(animal.value, "");
}

#[test]
fn other_entity_types_do_not_run() {
    #[derive(Debug)]
    struct Plant {
        value: String,
    }

    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);

    let mut plant = Plant { value: "".into() };
    registry
        .dispatch(LifecycleStage::PreInsert, &mut plant)
        .unwrap();
    assert_eq!(plant.value, "");
}

#[test]
fn listener_count_is_per_type_and_stage() {
    let mut registry = ListenerRegistry::new();
    assert_eq!(registry.listener_count::<Animal>(LifecycleStage::PreInsert), 0);

    registry.register(LifecycleStage::PreInsert, AuditStamp);
    registry.register(
        LifecycleStage::PreInsert,
        |_: &mut Animal| -> Result<(), ListenerError> { Ok(()) },
    );
    registry.register(LifecycleStage::PostLoad, AuditStamp);

    assert_eq!(registry.listener_count::<Animal>(LifecycleStage::PreInsert), 2);
    assert_eq!(registry.listener_count::<Animal>(LifecycleStage::PostLoad), 1);
    assert_eq!(registry.listener_count::<Animal>(LifecycleStage::PreDelete), 0);
}

// ── Concurrent dispatch ──────────────────────────────────────────

#[test]
fn same_listener_serves_different_entities_concurrently() {
    let mut registry = ListenerRegistry::new();
    registry.register(LifecycleStage::PreInsert, AuditStamp);
    let registry = Arc::new(registry);

    std::thread::scope(|scope| {
        for i in 0..4 {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                let mut animal = make_animal(&format!("e{i}"));
                registry
                    .dispatch(LifecycleStage::PreInsert, &mut animal)
                    .unwrap();
                assert_eq!(animal.value, format!("e{i}->AuditStamp.PreInsert"));
            });
        }
    });
}
