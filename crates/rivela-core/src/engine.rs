//! Financial Engine - accumulates entries and produces analyses
//!
//! The engine is an ordinary owned value: construct one per user session
//! (or per test). It has three implicit phases, none enforced:
//! empty → accumulating entries → analysed (repeatable).

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::{
    equation, health, recommendations, scenarios, AnalysisRecord, InsightInput, InsightRules,
    PotentialSavings, VisualConversions,
};
use crate::archetypes::{self, Archetype};
use crate::config::RivelaConfig;
use crate::conversions::{self, Conversion};
use crate::error::{Error, Result};
use crate::models::{
    EmotionalContext, EntryKind, FinancialEntry, NewEntry, Totals, UserProfile,
};
use crate::personas;

pub struct FinancialEngine {
    config: RivelaConfig,
    rules: InsightRules,
    rng: StdRng,
    entries: Vec<FinancialEntry>,
    next_entry_id: u64,
    context: Option<EmotionalContext>,
    archetype: Option<&'static Archetype>,
    age: Option<u32>,
    questions: Vec<String>,
    history: Vec<Arc<AnalysisRecord>>,
    next_analysis_id: u64,
}

impl Default for FinancialEngine {
    fn default() -> Self {
        Self::new(RivelaConfig::default())
    }
}

impl FinancialEngine {
    /// Create an engine with an entropy-seeded phrase generator
    pub fn new(config: RivelaConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose phrase selection is reproducible
    pub fn with_seed(config: RivelaConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RivelaConfig, rng: StdRng) -> Self {
        Self {
            config,
            rules: InsightRules::new(),
            rng,
            entries: Vec::new(),
            next_entry_id: 1,
            context: None,
            archetype: None,
            age: None,
            questions: Vec::new(),
            history: Vec::new(),
            next_analysis_id: 1,
        }
    }

    /// Replace the insight rules
    pub fn with_rules(mut self, rules: InsightRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &RivelaConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Ledger
    // ---------------------------------------------------------------------

    /// Add an entry whose kind is given as free text. Unknown kinds are
    /// rejected with `Error::InvalidCategory` and leave the ledger untouched.
    pub fn add_entry(
        &mut self,
        kind: &str,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<FinancialEntry> {
        let kind = kind.parse::<EntryKind>().inspect_err(|_| {
            tracing::warn!(kind, amount, "Rejected entry with unknown category");
        })?;
        self.add(kind, amount, category)
    }

    /// Add a typed entry
    pub fn add(
        &mut self,
        kind: EntryKind,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<FinancialEntry> {
        if !amount.is_finite() {
            tracing::warn!(kind = kind.as_str(), "Rejected entry with non-finite amount");
            return Err(Error::InvalidData(format!(
                "amount must be a finite number, got {}",
                amount
            )));
        }

        let entry = FinancialEntry {
            id: self.next_entry_id,
            kind,
            amount,
            category: category.into(),
            created_at: Utc::now(),
        };
        self.next_entry_id += 1;

        tracing::debug!(
            id = entry.id,
            kind = entry.kind.as_str(),
            amount = entry.amount,
            "Entry recorded"
        );

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Add a batch of entries. The whole batch is validated first; on any
    /// error nothing is added.
    pub fn import_entries(&mut self, batch: &[NewEntry]) -> Result<usize> {
        let parsed = batch
            .iter()
            .map(|e| {
                let kind = e.kind.parse::<EntryKind>()?;
                if !e.amount.is_finite() {
                    return Err(Error::InvalidData(format!(
                        "amount must be a finite number, got {}",
                        e.amount
                    )));
                }
                Ok((kind, e))
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected ledger import"))?;

        for (kind, entry) in parsed {
            self.add(kind, entry.amount, entry.category.clone())?;
        }

        tracing::info!(count = batch.len(), "Ledger imported");
        Ok(batch.len())
    }

    pub fn entries(&self) -> &[FinancialEntry] {
        &self.entries
    }

    pub fn totals(&self) -> Totals {
        Totals::from_entries(&self.entries)
    }

    // ---------------------------------------------------------------------
    // Emotional state and profile
    // ---------------------------------------------------------------------

    /// Replace the emotional context, stamped with the local wall clock,
    /// and re-classify the archetype
    pub fn set_emotional_context(
        &mut self,
        energy: u8,
        stress: u8,
        tags: Vec<String>,
    ) -> &'static Archetype {
        self.set_context(EmotionalContext::now(energy, stress, tags))
    }

    /// Same as [`set_emotional_context`](Self::set_emotional_context) with an
    /// explicit capture time
    pub fn set_emotional_context_at(
        &mut self,
        energy: u8,
        stress: u8,
        tags: Vec<String>,
        at: NaiveDateTime,
    ) -> &'static Archetype {
        self.set_context(EmotionalContext::at(energy, stress, tags, at))
    }

    /// Replace the emotional context wholesale
    pub fn set_context(&mut self, context: EmotionalContext) -> &'static Archetype {
        let archetype = archetypes::detect(context.energy, context.stress);
        tracing::info!(
            energy = context.energy,
            stress = context.stress,
            hour = context.hour,
            archetype = archetype.id,
            "Emotional context updated"
        );
        self.context = Some(context);
        self.archetype = Some(archetype);
        archetype
    }

    pub fn context(&self) -> Option<&EmotionalContext> {
        self.context.as_ref()
    }

    pub fn archetype(&self) -> Option<&'static Archetype> {
        self.archetype
    }

    /// Set the user's age for persona detection
    pub fn set_age(&mut self, age: Option<u32>) {
        self.age = age;
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Profile used for persona detection: age, ledger income, the
    /// questions behind retained analyses and the current context
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            income: self.totals().income,
            asked_questions: self.questions.clone(),
            emotional_context: self.context.clone(),
        }
    }

    // ---------------------------------------------------------------------
    // Analysis
    // ---------------------------------------------------------------------

    /// Best conversions for an amount, using the engine's settings and
    /// phrase generator
    pub fn convert(&mut self, amount: f64) -> Vec<Conversion> {
        conversions::find_best_conversions(amount, &self.config.conversions, &mut self.rng)
    }

    /// Answer a question against the current ledger and emotional state.
    /// The record is appended to history and returned.
    pub fn analyze(&mut self, question: impl Into<String>) -> Arc<AnalysisRecord> {
        let question = question.into();
        self.questions.push(question.clone());

        let totals = self.totals();
        let persona = personas::detect(&self.profile());
        let archetype = self.archetype;
        let context = self.context.clone();

        let equation = equation::compute(
            &totals,
            archetype,
            context.as_ref(),
            &self.config.impact,
        );

        let insights = self.rules.evaluate(&InsightInput {
            archetype,
            context: context.as_ref(),
            equation: &equation,
            settings: &self.config.insights,
        });

        let potential_savings = archetype
            .map(|a| totals.variable_expenses * (a.impulsivity_ratio - 1.0))
            .filter(|amount| *amount > 0.0)
            .map(|amount| PotentialSavings {
                amount,
                conversions: self.convert(amount),
            });
        let conversions = VisualConversions {
            variable_expenses: self.convert(totals.variable_expenses),
            available: self.convert(equation.available),
            potential_savings,
        };

        let scenarios = scenarios::what_if(&equation);
        let health = health::compute(&equation, totals.income_sources, context.as_ref());
        let recommendations = recommendations::recommend(persona, archetype, &equation, &health);

        let record = Arc::new(AnalysisRecord {
            id: self.next_analysis_id,
            question,
            created_at: Utc::now(),
            persona,
            archetype,
            context,
            equation,
            insights,
            conversions,
            scenarios,
            health,
            recommendations,
            next_steps: recommendations::next_steps(),
        });
        self.next_analysis_id += 1;

        tracing::info!(
            id = record.id,
            persona = record.persona.id,
            archetype = record.archetype.map(|a| a.id).unwrap_or("none"),
            health = record.health.score,
            insights = record.insights.len(),
            "Analysis complete"
        );

        self.history.push(Arc::clone(&record));
        if let Some(limit) = self.config.history_limit {
            // The record just produced always survives
            let limit = limit.max(1);
            if self.history.len() > limit {
                let excess = self.history.len() - limit;
                self.history.drain(..excess);
                tracing::debug!(evicted = excess, "History trimmed");
            }
            if self.questions.len() > limit {
                let excess = self.questions.len() - limit;
                self.questions.drain(..excess);
            }
        }

        record
    }

    /// Every retained analysis, oldest first
    pub fn history(&self) -> &[Arc<AnalysisRecord>] {
        &self.history
    }

    pub fn history_entry(&self, id: u64) -> Result<Arc<AnalysisRecord>> {
        self.history
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("analysis {}", id)))
    }

    pub fn last_analysis(&self) -> Option<Arc<AnalysisRecord>> {
        self.history.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{InsightKind, RecommendationSource};
    use crate::test_utils::{at, reference_engine, TUESDAY};

    #[test]
    fn test_add_entry_assigns_sequential_ids() {
        let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 1);
        let a = engine.add_entry("income", 2000.0, "salary").unwrap();
        let b = engine.add_entry("fixedExpenses", 800.0, "rent").unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(b.kind, EntryKind::FixedExpense);
        assert_eq!(engine.entries().len(), 2);
    }

    #[test]
    fn test_unknown_category_does_not_mutate() {
        let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 1);
        engine.add_entry("income", 2000.0, "salary").unwrap();

        let err = engine.add_entry("crypto", 100.0, "").unwrap_err();
        assert!(matches!(err, Error::InvalidCategory(_)));
        assert_eq!(engine.entries().len(), 1);

        // The failed call must not consume an id
        let next = engine.add_entry("debt", 50.0, "card").unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let mut engine = FinancialEngine::default();
        assert!(matches!(
            engine.add(EntryKind::Income, f64::NAN, ""),
            Err(Error::InvalidData(_))
        ));
        assert!(engine.entries().is_empty());
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let mut engine = FinancialEngine::default();
        let batch: Vec<NewEntry> = serde_json::from_str(
            r#"[
                {"kind": "income", "amount": 2000, "category": "salary"},
                {"kind": "lottery", "amount": 5}
            ]"#,
        )
        .unwrap();
        assert!(engine.import_entries(&batch).is_err());
        assert!(engine.entries().is_empty());

        let imported = engine.import_entries(&batch[..1]).unwrap();
        assert_eq!(imported, 1);
        assert_eq!(engine.totals().income, 2000.0);
    }

    #[test]
    fn test_set_context_returns_archetype() {
        let mut engine = FinancialEngine::default();
        assert!(engine.archetype().is_none());

        let archetype = engine.set_emotional_context_at(8, 8, vec![], at(TUESDAY, 23));
        assert_eq!(archetype.id, "tiger");
        assert_eq!(engine.archetype().unwrap().id, "tiger");
        assert_eq!(engine.context().unwrap().hour, 23);

        // Replaced wholesale
        engine.set_emotional_context_at(2, 2, vec!["calm".into()], at(TUESDAY, 9));
        assert_eq!(engine.archetype().unwrap().id, "cat");
        assert_eq!(engine.context().unwrap().tags, vec!["calm".to_string()]);
    }

    #[test]
    fn test_analyze_reference_numbers() {
        let mut engine = reference_engine();
        let record = engine.analyze("Where does my money go?");

        assert_eq!(record.equation.available, 900.0);
        assert_eq!(record.equation.savings_rate, 30.0);
        assert!(record.archetype.is_none());
        assert!(record.insights.is_empty());
        assert!(record.conversions.potential_savings.is_none());
        assert_eq!(record.scenarios.len(), 3);
        assert_eq!(record.next_steps.len(), 3);
        assert!(record.health.score <= 100);
    }

    #[test]
    fn test_analyze_with_tiger_context() {
        let mut engine = reference_engine();
        engine.set_emotional_context_at(8, 8, vec![], at(TUESDAY, 23));
        let record = engine.analyze("Why can't I save?");

        let emotional = record.equation.emotional.as_ref().unwrap();
        assert!((emotional.adjusted_variable_expenses - 1159.2).abs() < 1e-9);

        let kinds: Vec<_> = record.insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::Archetype,
                InsightKind::EveningDecision,
                InsightKind::HighStress
            ]
        );

        let savings = record.conversions.potential_savings.as_ref().unwrap();
        assert!((savings.amount - 600.0 * 0.68).abs() < 1e-9);

        assert!(record
            .recommendations
            .iter()
            .any(|r| r.source == RecommendationSource::Archetype));
    }

    #[test]
    fn test_calm_archetype_has_no_potential_savings() {
        let mut engine = reference_engine();
        engine.set_emotional_context_at(5, 2, vec![], at(TUESDAY, 10));
        let record = engine.analyze("Am I doing ok?");
        assert_eq!(record.archetype.unwrap().id, "owl");
        assert!(record.conversions.potential_savings.is_none());
    }

    #[test]
    fn test_zero_income_analysis_is_finite() {
        let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 3);
        engine.add(EntryKind::FixedExpense, 500.0, "rent").unwrap();
        let record = engine.analyze("Help");

        assert_eq!(record.equation.savings_rate, 0.0);
        assert!(record.conversions.available.is_empty());
        assert!(record
            .scenarios
            .iter()
            .all(|s| s.new_savings_rate.is_finite()));
        assert!(record.health.score < 50);
        assert!(record
            .recommendations
            .iter()
            .any(|r| r.source == RecommendationSource::Health));
    }

    #[test]
    fn test_history_accumulates_and_is_retrievable() {
        let mut engine = reference_engine();
        let first = engine.analyze("one");
        engine.add(EntryKind::Income, 500.0, "side gig").unwrap();
        engine.analyze("two");
        engine.analyze("three");

        assert_eq!(engine.history().len(), 3);
        let ids: Vec<_> = engine.history().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Earlier records are unaffected by later ledger changes
        let retrieved = engine.history_entry(1).unwrap();
        assert!(Arc::ptr_eq(&first, &retrieved));
        assert_eq!(retrieved.equation.income, 3000.0);
        assert_eq!(engine.history_entry(2).unwrap().equation.income, 3500.0);
        assert_eq!(engine.last_analysis().unwrap().question, "three");

        assert!(matches!(engine.history_entry(9), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let config = RivelaConfig {
            history_limit: Some(2),
            ..Default::default()
        };
        let mut engine = FinancialEngine::with_seed(config, 7);
        for q in ["a", "b", "c"] {
            engine.analyze(q);
        }
        let ids: Vec<_> = engine.history().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(engine.profile().asked_questions, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_history_limit_keeps_latest() {
        let config = RivelaConfig {
            history_limit: Some(0),
            ..Default::default()
        };
        let mut engine = FinancialEngine::with_seed(config, 7);
        engine.analyze("a");
        let record = engine.analyze("b");

        assert_eq!(engine.history().len(), 1);
        assert!(Arc::ptr_eq(&engine.history_entry(record.id).unwrap(), &record));
        assert_eq!(engine.profile().asked_questions, vec!["b"]);
    }

    #[test]
    fn test_questions_feed_persona_detection() {
        let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), 1);
        engine.add(EntryKind::Income, 3000.0, "salary").unwrap();
        engine.set_age(Some(58));

        let record = engine.analyze("Will I have enough money for retirement?");
        assert_eq!(record.persona.id, "roberto");
        assert_eq!(engine.profile().asked_questions.len(), 1);
    }

    #[test]
    fn test_same_seed_same_phrases() {
        let mut a = reference_engine();
        let mut b = reference_engine();
        let ra = a.analyze("q");
        let rb = b.analyze("q");
        assert_eq!(ra.conversions, rb.conversions);
    }

    #[test]
    fn test_custom_rules() {
        let mut engine = reference_engine().with_rules(InsightRules::empty());
        engine.set_emotional_context_at(8, 8, vec![], at(TUESDAY, 23));
        assert!(engine.analyze("q").insights.is_empty());
    }
}
