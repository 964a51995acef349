//! Integration tests for the preference engine.
//!
//! These tests run complete computations through the public API:
//! 1. Reference scenarios with hand-computed results
//! 2. Feasibility failures abort the run
//! 3. Comparison modes, reinforced preference and discordance
//! 4. Determinism over repeated runs

use proptest::prelude::*;

use promethee_preference::domain::foundation::{CriterionId, EntityId, ErrorCode, DomainError};
use promethee_preference::domain::promethee::{
    ComparisonMode, CriterionSpec, FunctionSelection, GeneralisedCriterion, InputBundle,
    InputBundleBuilder, InteractionKind, InteractionSpec, OperatingMode, PreferenceDirection,
    PrometheeEngine, PrometheeError, Threshold, ZFunction,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn e(id: &str) -> EntityId {
    EntityId::new(id).unwrap()
}

fn c(id: &str) -> CriterionId {
    CriterionId::new(id).unwrap()
}

fn usual(id: &str, weight: f64) -> CriterionSpec {
    CriterionSpec::new(c(id), PreferenceDirection::Max, weight)
        .with_function(GeneralisedCriterion::Usual)
}

fn two_alternatives(spec: CriterionSpec, a: f64, b: f64) -> InputBundleBuilder {
    let id = spec.id.clone();
    InputBundle::builder()
        .criterion(spec)
        .alternative(e("A"), vec![(id.clone(), a)])
        .alternative(e("B"), vec![(id, b)])
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn usual_criterion_two_alternatives() {
    let inputs = two_alternatives(usual("g1", 1.0), 10.0, 6.0)
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    assert_eq!(result.partial_preferences.get("A", "B", "g1"), Some(1.0));
    assert_eq!(result.partial_preferences.get("B", "A", "g1"), Some(0.0));

    let totals: Vec<(String, String, f64)> = result
        .preferences
        .iter()
        .map(|(from, to, value)| (from.to_string(), to.to_string(), value))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("A".to_string(), "A".to_string(), 0.0),
            ("A".to_string(), "B".to_string(), 1.0),
            ("B".to_string(), "A".to_string(), 0.0),
            ("B".to_string(), "B".to_string(), 0.0),
        ]
    );
}

#[test]
fn v_shape_partial_preference() {
    let spec = CriterionSpec::new(c("g1"), PreferenceDirection::Max, 1.0)
        .with_function(GeneralisedCriterion::VShape)
        .with_preference(Threshold::constant(4.0));
    let inputs = two_alternatives(spec, 10.0, 7.0).build().validate().unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    assert_eq!(result.partial_preferences.get("A", "B", "g1"), Some(0.75));
    assert_eq!(result.preferences.get("A", "B"), Some(0.75));
}

#[test]
fn uniform_function_selection_applies_to_every_criterion() {
    let inputs = InputBundle::builder()
        .generalised_criterion(FunctionSelection::Uniform(GeneralisedCriterion::VShape))
        .criterion(
            CriterionSpec::new(c("g1"), PreferenceDirection::Max, 1.0)
                .with_preference(Threshold::constant(4.0)),
        )
        .criterion(
            CriterionSpec::new(c("g2"), PreferenceDirection::Min, 3.0)
                .with_preference(Threshold::constant(2.0)),
        )
        .alternative(e("A"), vec![(c("g1"), 10.0), (c("g2"), 4.0)])
        .alternative(e("B"), vec![(c("g1"), 7.0), (c("g2"), 5.0)])
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    // g1: 3/4 = 0.75; g2 (MIN): 1/2 = 0.5 → (0.75 + 1.5) / 4
    assert_eq!(result.preferences.get("A", "B"), Some(0.5625));
}

#[test]
fn interactions_adjust_total_preference() {
    let inputs = InputBundle::builder()
        .z_function(ZFunction::Minimum)
        .criterion(usual("g1", 1.0))
        .criterion(usual("g2", 1.0))
        .alternative(e("A"), vec![(c("g1"), 1.0), (c("g2"), 1.0)])
        .alternative(e("B"), vec![(c("g1"), 0.0), (c("g2"), 0.0)])
        .interaction(InteractionSpec::new(
            InteractionKind::Strengthening,
            c("g1"),
            c("g2"),
            0.5,
        ))
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    // (2 + 0.5) / (2 + 0.5)
    assert_eq!(result.preferences.get("A", "B"), Some(1.0));
    assert_eq!(result.preferences.get("B", "A"), Some(0.0));
}

// =============================================================================
// Feasibility and Validation Failures
// =============================================================================

#[test]
fn weakening_beyond_weight_fails_the_run() {
    let inputs = InputBundle::builder()
        .criterion(usual("g1", 1.0))
        .criterion(usual("g2", 2.0))
        .alternative(e("A"), vec![(c("g1"), 1.0), (c("g2"), 1.0)])
        .interaction(InteractionSpec::new(
            InteractionKind::Weakening,
            c("g1"),
            c("g2"),
            1.2,
        ))
        .build()
        .validate()
        .unwrap();

    let err = PrometheeEngine::compute(&inputs).unwrap_err();

    let domain: DomainError = err.into();
    assert_eq!(domain.code, ErrorCode::PositiveNetBalance);
    assert_eq!(domain.details.get("criterion"), Some(&"g1".to_string()));
}

#[test]
fn missing_threshold_fails_validation() {
    let spec = CriterionSpec::new(c("g1"), PreferenceDirection::Max, 1.0)
        .with_function(GeneralisedCriterion::Level)
        .with_indifference(Threshold::constant(1.0));

    let err = two_alternatives(spec, 1.0, 0.0).build().validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Level function specified on criterion g1 requires preference threshold"
    );
}

#[test]
fn unknown_labels_fail_to_parse() {
    assert_eq!(
        "average".parse::<ZFunction>(),
        Err(PrometheeError::InvalidCombinationFunction("average".to_string()))
    );
    assert!("UP".parse::<PreferenceDirection>().is_err());
    assert!("7".parse::<FunctionSelection>().is_err());
}

// =============================================================================
// Modes
// =============================================================================

#[test]
fn profiles_mode_compares_alternatives_with_profiles() {
    let inputs = InputBundle::builder()
        .comparison(ComparisonMode::Profiles)
        .criterion(usual("g1", 1.0))
        .alternative(e("A"), vec![(c("g1"), 10.0)])
        .alternative(e("B"), vec![(c("g1"), 2.0)])
        .profile(e("p1"), vec![(c("g1"), 5.0)])
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    let pairs: Vec<String> = result
        .preferences
        .iter()
        .map(|(from, to, _)| format!("{}>{}", from, to))
        .collect();
    assert_eq!(pairs, vec!["A>p1", "p1>A", "p1>B", "p1>p1", "B>p1"]);
    assert_eq!(result.preferences.get("A", "p1"), Some(1.0));
    assert_eq!(result.preferences.get("p1", "B"), Some(1.0));
    assert_eq!(result.preferences.get("A", "B"), None);
}

#[test]
fn profiles_mode_groups_output_by_row() {
    let inputs = InputBundle::builder()
        .comparison(ComparisonMode::Profiles)
        .criterion(usual("g1", 1.0))
        .alternative(e("a1"), vec![(c("g1"), 1.0)])
        .alternative(e("a2"), vec![(c("g1"), 2.0)])
        .profile(e("p1"), vec![(c("g1"), 0.0)])
        .profile(e("p2"), vec![(c("g1"), 3.0)])
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    let pairs: Vec<String> = result
        .preferences
        .iter()
        .map(|(from, to, _)| format!("{}>{}", from, to))
        .collect();
    assert_eq!(
        pairs,
        vec![
            "a1>p1", "a1>p2", "p1>a1", "p1>a2", "p1>p1", "p1>p2", "p2>a1", "p2>a2", "p2>p1",
            "p2>p2", "a2>p1", "a2>p2",
        ]
    );
    let partial_pairs: Vec<String> = result
        .partial_preferences
        .iter()
        .map(|(from, to, _)| format!("{}>{}", from, to))
        .collect();
    assert_eq!(partial_pairs, pairs);
}

#[test]
fn negative_linear_indifference_keeps_self_pairs_at_zero() {
    let spec = CriterionSpec::new(c("g1"), PreferenceDirection::Max, 1.0)
        .with_function(GeneralisedCriterion::UShape)
        .with_indifference(Threshold::linear(-1.0, 0.0));
    let inputs = two_alternatives(spec, 5.0, 3.0).build().validate().unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    assert_eq!(result.partial_preferences.get("A", "A", "g1"), Some(0.0));
    assert_eq!(result.preferences.get("A", "A"), Some(0.0));
    assert_eq!(result.preferences.get("B", "B"), Some(0.0));
    assert_eq!(result.preferences.get("A", "B"), Some(1.0));
}

#[test]
fn reinforced_mode_amplifies_large_gaps() {
    let inputs = InputBundle::builder()
        .operating_mode(OperatingMode::ReinforcedPreference)
        .criterion(usual("g1", 1.0).with_reinforcement(Threshold::constant(5.0), 4.0))
        .criterion(usual("g2", 1.0).with_reinforcement(Threshold::constant(5.0), 4.0))
        .alternative(e("A"), vec![(c("g1"), 10.0), (c("g2"), 0.0)])
        .alternative(e("B"), vec![(c("g1"), 0.0), (c("g2"), 1.0)])
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute(&inputs).unwrap();

    // g1 reinforced: 4 / 4; g2: 0 / 1 → 4 / 5
    assert_eq!(result.preferences.get("A", "B"), Some(0.8));
    // g2 not reinforced (gap 1): 1 / 2
    assert_eq!(result.preferences.get("B", "A"), Some(0.5));
}

#[test]
fn discordance_caps_preference() {
    let inputs = InputBundle::builder()
        .criterion(usual("g1", 3.0))
        .criterion(
            CriterionSpec::new(c("g2"), PreferenceDirection::Max, 1.0)
                .with_function(GeneralisedCriterion::VShape)
                .with_preference(Threshold::constant(4.0)),
        )
        .alternative(e("A"), vec![(c("g1"), 1.0), (c("g2"), 0.0)])
        .alternative(e("B"), vec![(c("g1"), 0.0), (c("g2"), 1.0)])
        .build()
        .validate()
        .unwrap();

    let result = PrometheeEngine::compute_with_discordance(&inputs).unwrap();
    let discordance = result.discordance.as_ref().unwrap();

    // P(A,B) = 3/4; D(A,B) = 1 − (1 − 0)(1 − 0.25) = 0.25
    assert_eq!(result.preferences.get("A", "B"), Some(0.75));
    assert_eq!(discordance.overall.get("A", "B"), Some(0.25));
    assert_eq!(discordance.preferences.get("A", "B"), Some(0.5625));
    assert_eq!(discordance.partial.get("A", "B", "g2"), Some(0.25));
}

// =============================================================================
// Determinism
// =============================================================================

fn bundle_from(values: &[(f64, f64, f64)]) -> InputBundle {
    let mut builder = InputBundle::builder()
        .criterion(
            CriterionSpec::new(c("g1"), PreferenceDirection::Max, 1.0)
                .with_function(GeneralisedCriterion::Gaussian)
                .with_sigma(Threshold::constant(2.0)),
        )
        .criterion(
            CriterionSpec::new(c("g2"), PreferenceDirection::Min, 2.0)
                .with_function(GeneralisedCriterion::VShapeIndifference)
                .with_indifference(Threshold::linear(0.1, 0.0))
                .with_preference(Threshold::linear(0.5, 1.0)),
        )
        .criterion(
            CriterionSpec::new(c("g3"), PreferenceDirection::Max, 0.5)
                .with_function(GeneralisedCriterion::Level)
                .with_indifference(Threshold::constant(1.0))
                .with_preference(Threshold::constant(3.0)),
        )
        .interaction(InteractionSpec::new(
            InteractionKind::Antagonistic,
            c("g2"),
            c("g3"),
            0.3,
        ));
    for (index, (g1, g2, g3)) in values.iter().enumerate() {
        builder = builder.alternative(
            e(&format!("a{}", index)),
            vec![(c("g1"), *g1), (c("g2"), *g2), (c("g3"), *g3)],
        );
    }
    builder.build()
}

proptest! {
    #[test]
    fn repeated_runs_are_bit_identical(
        values in prop::collection::vec((0.0f64..20.0, 0.0f64..20.0, 0.0f64..20.0), 1..5)
    ) {
        let inputs = bundle_from(&values).validate().unwrap();

        let first = PrometheeEngine::compute_with_discordance(&inputs).unwrap();
        let second = PrometheeEngine::compute_with_discordance(&inputs).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn partial_preferences_stay_in_unit_interval(
        values in prop::collection::vec((0.0f64..20.0, 0.0f64..20.0, 0.0f64..20.0), 1..5)
    ) {
        let inputs = bundle_from(&values).validate().unwrap();

        let result = PrometheeEngine::compute(&inputs).unwrap();

        for (_, _, degrees) in result.partial_preferences.iter() {
            for degree in degrees {
                prop_assert!((0.0..=1.0).contains(degree));
            }
        }
    }
}
