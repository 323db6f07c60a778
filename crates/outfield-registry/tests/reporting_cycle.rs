//! Integration test: registration, per-cycle updates, and the evaluation
//! pass with expressions compiled by `outfield-expr`.

use outfield_core::{EvalError, FieldType, ScreenFormat};
use outfield_registry::{
    CustomFieldDef, EvaluationPass, FieldCollection, HistoryField, HistoryFieldCollection,
    OutputField, RegistryError,
};
use outfield_test_utils::fixtures::{aero_history, solution_volume, synthetic_history, AERO_DIRECT};

fn direct(name: &str, group: &str, ty: FieldType) -> HistoryField {
    HistoryField::new(name, ScreenFormat::Fixed, group, ty, "").unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

// ── Derived values ──────────────────────────────────────────────────

#[test]
fn sum_of_two_direct_fields() {
    let mut history = HistoryFieldCollection::new();
    history.insert(direct("A", "G", FieldType::Default)).unwrap();
    history.insert(direct("B", "G", FieldType::Default)).unwrap();
    history
        .register_custom(&CustomFieldDef::new("C", "A + B"))
        .unwrap();

    history.set_value_by_key("A", 2.0).unwrap();
    history.set_value_by_key("B", 3.0).unwrap();
    history.evaluate_custom_fields().unwrap();
    assert_eq!(history.value_by_key("C"), Some(5.0));
}

#[test]
fn custom_field_cannot_read_another_custom_field() {
    let mut history = HistoryFieldCollection::new();
    history.insert(direct("A", "G", FieldType::Default)).unwrap();
    history.insert(direct("B", "G", FieldType::Default)).unwrap();
    history
        .register_custom(&CustomFieldDef::new("C", "A + B"))
        .unwrap();
    history.set_value_by_key("A", 2.0).unwrap();
    history.set_value_by_key("B", 3.0).unwrap();
    history.evaluate_custom_fields().unwrap();
    assert_eq!(history.value_by_key("C"), Some(5.0));

    // D reads C, but C is never published to the scope.
    history
        .register_custom(&CustomFieldDef::new("D", "C * 2"))
        .unwrap();
    history.set_value_by_key("A", 10.0).unwrap();
    let err = history.evaluate_custom_fields().unwrap_err();
    assert_eq!(
        err,
        RegistryError::ExpressionEvaluation {
            field: "D".into(),
            expression: "C * 2".into(),
            source: EvalError::UndefinedName { name: "C".into() },
        }
    );
    assert!(!history.scope().contains("C"));

    // C precedes D, so it already holds this cycle's value.
    assert_eq!(history.value_by_key("C"), Some(13.0));
    assert_eq!(history.value_by_key("D"), Some(0.0));
}

#[test]
fn failure_stops_the_pass_after_earlier_assignments() {
    let mut history = HistoryFieldCollection::new();
    history.insert(direct("A", "G", FieldType::Default)).unwrap();
    for (name, source) in [("C1", "A * 2"), ("C2", "NOPE + 1"), ("C3", "A + 1")] {
        history
            .register_custom(&CustomFieldDef::new(name, source))
            .unwrap();
    }
    history.set_value_by_key("A", 3.0).unwrap();

    let err = history.evaluate_custom_fields().unwrap_err();
    assert!(matches!(
        err,
        RegistryError::ExpressionEvaluation { ref field, .. } if field == "C2"
    ));
    assert_eq!(history.value_by_key("C1"), Some(6.0));
    assert_eq!(history.value_by_key("C2"), Some(0.0));
    assert_eq!(history.value_by_key("C3"), Some(0.0));
}

#[test]
fn scope_is_rebuilt_every_pass() {
    let mut history = HistoryFieldCollection::new();
    history.insert(direct("A", "G", FieldType::Default)).unwrap();
    history
        .register_custom(&CustomFieldDef::new("TWICE_A", "2 * A"))
        .unwrap();

    for cycle in 1..=3 {
        let a = cycle as f64;
        history.set_value_by_index(0, a).unwrap();
        history.evaluate_custom_fields().unwrap();
        assert_eq!(history.scope().get("A"), Some(a));
        assert_eq!(history.scope().len(), 1);
        assert_eq!(history.value_by_key("TWICE_A"), Some(2.0 * a));
    }
}

#[test]
fn division_by_zero_is_attributed_to_the_field() {
    let mut history = aero_history();
    let err = history.evaluate_custom_fields().unwrap_err();
    match err {
        RegistryError::ExpressionEvaluation {
            field,
            expression,
            source,
        } => {
            assert_eq!(field, "EFFICIENCY");
            assert_eq!(expression, "LIFT / DRAG");
            assert_eq!(source, EvalError::DivisionByZero);
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Full reporting cycle ────────────────────────────────────────────

#[test]
fn aero_reporting_cycle() {
    let mut history = aero_history();
    assert_eq!(history.len(), AERO_DIRECT.len() + 2);

    let cycles = [(0.30, 0.020), (0.31, 0.019), (0.32, 0.0185)];
    for (iter, (lift, drag)) in cycles.into_iter().enumerate() {
        history.set_value_by_key("INNER_ITER", iter as f64).unwrap();
        history.set_value_by_key("RMS_DENSITY", -3.0 - iter as f64).unwrap();
        history.set_value_by_key("LIFT", lift).unwrap();
        history.set_value_by_key("DRAG", drag).unwrap();
        history.evaluate_custom_fields().unwrap();

        let eff = history.value_by_key("EFFICIENCY").unwrap();
        let counts = history.value_by_key("DRAG_COUNTS").unwrap();
        assert!(close(eff, lift / drag), "{eff} != {}", lift / drag);
        assert!(close(counts, 1e4 * drag));
    }

    let coeffs = history.fields_by_groups(&["AERO_COEFF"]);
    let names: Vec<&str> = coeffs.matches.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["LIFT", "DRAG", "MOMENT_Z"]);

    let customs = history.fields_by_type(&[FieldType::Custom]);
    let names: Vec<&str> = customs.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["EFFICIENCY", "DRAG_COUNTS"]);
    assert!(customs.iter().all(|f| f.group() == "CUSTOM"));
}

#[test]
fn screen_selection_with_optional_fields() {
    let history = aero_history();
    let requested = ["INNER_ITER", "RMS_RES", "CAUCHY_DRAG", "EFFICIENCY"];
    let lookup = history.fields_by_keys(&requested, true);
    let names: Vec<&str> = lookup.matches.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["INNER_ITER", "RMS_DENSITY", "EFFICIENCY"]);
    assert_eq!(lookup.not_found, ["CAUCHY_DRAG"]);

    // Re-query the screen subset for residuals only.
    let residuals = FieldCollection::select_by_type(
        &[FieldType::Residual, FieldType::AutoResidual],
        &lookup.matches,
    );
    let names: Vec<&str> = residuals.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["RMS_DENSITY"]);
}

#[test]
fn generic_driver_runs_both_collections() {
    fn run_cycle(collections: &mut [&mut dyn EvaluationPass]) -> Result<(), RegistryError> {
        for c in collections.iter_mut() {
            c.evaluate()?;
        }
        Ok(())
    }

    let mut history = synthetic_history(4, 2);
    let mut volume = solution_volume();
    run_cycle(&mut [&mut history, &mut volume]).unwrap();

    // C0 = D0 + D1 = 1 + 2, C1 = D1 + D2 = 2 + 3.
    assert_eq!(history.value_by_key("C0"), Some(3.0));
    assert_eq!(history.value_by_key("C1"), Some(5.0));
    assert_eq!(volume.offset_by_key("Mach"), Some(6));
}

#[test]
fn invalid_definition_is_not_registered() {
    let mut history = aero_history();
    let before = history.len();
    let err = history
        .register_custom(&CustomFieldDef::new("BROKEN", "LIFT * (DRAG"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidExpression { .. }));
    assert_eq!(history.len(), before);
    assert!(!history.contains_key("BROKEN"));

    let err = history
        .register_custom(&CustomFieldDef::new("LIFT", "DRAG"))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateKey { key: "LIFT".into() });
    assert_eq!(history.get("LIFT").map(|f| f.field_type()), Some(FieldType::Coefficient));
}

// ── Properties ──────────────────────────────────────────────────────

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_and_key_mutation_agree(
            n in 1usize..16,
            pick in any::<prop::sample::Index>(),
            value in -1e9f64..1e9,
        ) {
            let i = pick.index(n);
            let mut by_index = synthetic_history(n, 0);
            let mut by_key = synthetic_history(n, 0);
            let key = by_key.get_index(i).map(|f| f.name().to_string()).unwrap();

            by_index.set_value_by_index(i, value).unwrap();
            by_key.set_value_by_key(&key, value).unwrap();
            prop_assert_eq!(by_index.values(), by_key.values());
        }

        #[test]
        fn out_of_range_index_is_rejected(n in 0usize..8, extra in 0usize..4) {
            let mut history = synthetic_history(n, 0);
            let before = history.values();
            prop_assert_eq!(
                history.set_value_by_index(n + extra, 1.0),
                Err(RegistryError::IndexOutOfRange { index: n + extra, len: n })
            );
            prop_assert_eq!(history.values(), before);
        }

        #[test]
        fn pass_is_idempotent_for_fixed_inputs(direct in 2usize..10, custom in 0usize..6) {
            let mut history = synthetic_history(direct, custom);
            history.evaluate_custom_fields().unwrap();
            let first = history.values();
            history.evaluate_custom_fields().unwrap();
            prop_assert_eq!(history.values(), first);
        }
    }
}
