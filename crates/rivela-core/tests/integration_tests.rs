//! Integration tests for rivela-core
//!
//! These tests exercise the full ledger → context → analyze → history workflow.

use rivela_core::{
    analysis::{InsightKind, RecommendationSource},
    archetypes,
    conversions::{self, ImpactTag},
    test_utils::{at, reference_engine, SATURDAY, TUESDAY},
    EntryKind, Error, FinancialEngine, HealthTier, NewEntry, RivelaConfig,
};

fn ledger_json() -> &'static str {
    r#"[
        {"kind": "income", "amount": 1800, "category": "salary"},
        {"kind": "income", "amount": 400, "category": "tutoring"},
        {"kind": "fixedExpenses", "amount": 750, "category": "rent"},
        {"kind": "variable_expense", "amount": 420, "category": "eating out"},
        {"kind": "debts", "amount": 120, "category": "phone instalments"},
        {"kind": "goal", "amount": 200}
    ]"#
}

// =============================================================================
// Full workflow
// =============================================================================

#[test]
fn test_full_analysis_workflow() {
    let mut engine = reference_engine();

    let tiger = engine.set_emotional_context_at(8, 8, vec!["deadline".into()], at(TUESDAY, 23));
    assert_eq!(tiger.id, "tiger");
    assert_eq!(tiger.impulsivity_ratio, 1.68);

    let record = engine.analyze("Why can't I save anything at the end of the month?");

    // Plain equation
    assert_eq!(record.equation.available, 900.0);
    assert_eq!(record.equation.savings_rate, 30.0);

    // Emotional equation: 600 * 1.68 * 1.15
    let emotional = record.equation.emotional.as_ref().expect("context is set");
    assert!((emotional.adjusted_variable_expenses - 1159.2).abs() < 1e-9);
    assert!(emotional.impact.late_night);
    assert!(!emotional.impact.weekend);
    assert!((emotional.available - (3000.0 - 1200.0 - 1159.2 - 300.0)).abs() < 1e-9);

    assert_eq!(record.insights.len(), 3);
    assert!(record.insights.iter().all(|i| !i.evidence.is_empty()));

    assert!(!record.conversions.variable_expenses.is_empty());
    assert!(!record.conversions.available.is_empty());
    assert!(record.conversions.potential_savings.is_some());

    assert_eq!(record.scenarios.len(), 3);
    assert_eq!(record.next_steps.len(), 3);

    // savings 30, debt 15, diversification 5, stability 25 - 8*2.5 = 5
    assert_eq!(record.health.score, 55);
    assert_eq!(record.health.tier, HealthTier::Average);

    // Persona, archetype; no emergency fund at 55
    let sources: Vec<_> = record.recommendations.iter().map(|r| r.source).collect();
    assert_eq!(
        sources,
        vec![RecommendationSource::Persona, RecommendationSource::Archetype]
    );
}

#[test]
fn test_ledger_import_then_analyze() {
    let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 11);
    let batch: Vec<NewEntry> = serde_json::from_str(ledger_json()).unwrap();
    assert_eq!(engine.import_entries(&batch).unwrap(), 6);

    let totals = engine.totals();
    assert_eq!(totals.income, 2200.0);
    assert_eq!(totals.income_sources, 2);
    assert_eq!(totals.goals, 200.0);

    engine.set_age(Some(28));
    let record = engine.analyze("How much should I spend on rent?");
    assert_eq!(record.persona.id, "giulia");

    // Goals do not reduce available money
    assert_eq!(record.equation.available, 2200.0 - 750.0 - 420.0 - 120.0);
}

#[test]
fn test_weekend_evening_compounds() {
    let mut engine = reference_engine();
    engine.set_emotional_context_at(2, 9, vec![], at(SATURDAY, 22));
    let record = engine.analyze("Is it worth buying a car?");

    assert_eq!(record.archetype.unwrap().id, "koala");
    let impact = &record.equation.emotional.as_ref().unwrap().impact;
    assert!(impact.late_night && impact.weekend);
    assert!((impact.adjusted_amount - 600.0 * 1.45 * 1.15 * 1.08).abs() < 1e-9);
}

#[test]
fn test_history_records_are_independent() {
    let mut engine = reference_engine();

    let first = engine.analyze("first");
    engine.set_emotional_context_at(8, 8, vec![], at(TUESDAY, 23));
    let second = engine.analyze("second");
    engine.add(EntryKind::Debt, 600.0, "new loan").unwrap();
    let third = engine.analyze("third");

    assert_eq!(engine.history().len(), 3);
    assert!(engine.history_entry(first.id).unwrap().archetype.is_none());
    assert_eq!(
        engine.history_entry(second.id).unwrap().archetype.unwrap().id,
        "tiger"
    );
    assert_eq!(engine.history_entry(third.id).unwrap().equation.debt, 900.0);
    assert_eq!(engine.history_entry(first.id).unwrap().equation.debt, 300.0);
}

#[test]
fn test_rejected_entry_is_reported_not_recorded() {
    let mut engine = reference_engine();
    let before = engine.entries().len();

    match engine.add_entry("subscriptions", 12.99, "streaming") {
        Err(Error::InvalidCategory(kind)) => assert_eq!(kind, "subscriptions"),
        other => panic!("expected InvalidCategory, got {:?}", other),
    }
    assert_eq!(engine.entries().len(), before);
}

#[test]
fn test_empty_engine_analysis() {
    let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 0);
    let record = engine.analyze("Where do I start?");

    assert_eq!(record.equation.savings_rate, 0.0);
    assert!(record.conversions.variable_expenses.is_empty());
    assert!(record.conversions.available.is_empty());
    assert!(record.insights.is_empty());
    // debt 25 + stability 15
    assert_eq!(record.health.score, 40);
    assert!(record
        .recommendations
        .iter()
        .any(|r| r.source == RecommendationSource::Health));
}

// =============================================================================
// Classifier and conversion properties
// =============================================================================

#[test]
fn test_archetype_grid_is_total() {
    for energy in 1..=10 {
        for stress in 1..=10 {
            let archetype = archetypes::detect(energy, stress);
            let matching = archetypes::ARCHETYPES
                .iter()
                .filter(|a| a.matches(energy, stress))
                .count();
            if matching == 0 {
                assert_eq!(archetype.id, archetypes::DEFAULT_ARCHETYPE.id);
            } else {
                assert!(archetype.matches(energy, stress));
            }
        }
    }
}

#[test]
fn test_conversion_invariants_across_amounts() {
    let settings = RivelaConfig::default().conversions;
    let mut rng = rand::rngs::mock::StepRng::new(0, 1);

    for amount in [0.5, 1.2, 7.0, 42.0, 99.99, 250.0, 1337.0, 12_000.0] {
        for c in conversions::find_best_conversions(amount, &settings, &mut rng) {
            assert!(c.details.quantity > 0);
            assert!(c.details.unit_price * c.details.quantity as f64 <= amount + 1e-9);
            assert!(c.details.percent_used >= 70.0);
            assert!(!c.phrase.contains("{quantity}"));
            if c.details.item_id == "hour_of_work" {
                assert_eq!(c.impact_tag, ImpactTag::Revealing);
            }
        }
    }
}

#[test]
fn test_history_insight_kinds_follow_context() {
    let mut engine = reference_engine();
    engine.set_emotional_context_at(5, 5, vec![], at(TUESDAY, 21));
    let record = engine.analyze("q");

    let kinds: Vec<_> = record.insights.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![InsightKind::Archetype, InsightKind::EveningDecision]);
}
