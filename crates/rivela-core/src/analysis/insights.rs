//! Narrative insight rules
//!
//! Each rule looks at the current archetype, context and equation and may
//! produce one insight. Rules are evaluated in registration order.

use crate::archetypes::Archetype;
use crate::config::InsightSettings;
use crate::models::EmotionalContext;

use super::types::{Equation, Insight, InsightKind, Severity};

const ARCHETYPE_EVIDENCE: &str = "Lerner, Small & Loewenstein (2004), \"Heart Strings and Purse Strings\", Psychological Science: incidental emotions carry over into economic decisions.";
const EVENING_EVIDENCE: &str = "Baumeister et al. (1998), \"Ego Depletion\", Journal of Personality and Social Psychology: self-control weakens as the day wears on.";
const STRESS_EVIDENCE: &str = "Durante & Laran (2016), \"The Effect of Stress on Consumer Saving and Spending\", Journal of Marketing Research.";

/// What a rule gets to look at
pub struct InsightInput<'a> {
    pub archetype: Option<&'a Archetype>,
    pub context: Option<&'a EmotionalContext>,
    pub equation: &'a Equation,
    pub settings: &'a InsightSettings,
}

/// Trait for insight rules
pub trait InsightRule: Send + Sync {
    fn kind(&self) -> InsightKind;

    /// Produce an insight, or None when the rule does not apply
    fn evaluate(&self, input: &InsightInput<'_>) -> Option<Insight>;
}

/// Fires whenever an archetype has been detected
pub struct ArchetypeInsight;

impl InsightRule for ArchetypeInsight {
    fn kind(&self) -> InsightKind {
        InsightKind::Archetype
    }

    fn evaluate(&self, input: &InsightInput<'_>) -> Option<Insight> {
        let archetype = input.archetype?;
        let ratio_pct = ((archetype.impulsivity_ratio - 1.0) * 100.0).round() as i32;

        let mut message = if ratio_pct > 0 {
            format!(
                "In this state people tend to spend {}% more than planned.",
                ratio_pct
            )
        } else if ratio_pct < 0 {
            format!(
                "In this state people tend to spend {}% less than planned.",
                -ratio_pct
            )
        } else {
            "In this state your spending tends to match your plans.".to_string()
        };

        if let Some(ref emotional) = input.equation.emotional {
            if emotional.impact.delta > 0.0 {
                message.push_str(&format!(
                    " On your variable expenses that is about €{:.0} extra this month.",
                    emotional.impact.delta
                ));
            }
        }

        let severity = if archetype.impulsivity_ratio > 1.3 {
            Severity::Warning
        } else if archetype.impulsivity_ratio > 1.0 {
            Severity::Attention
        } else {
            Severity::Info
        };

        Some(Insight::new(
            InsightKind::Archetype,
            severity,
            format!("{} {}", archetype.emoji, archetype.name),
            message,
            ARCHETYPE_EVIDENCE,
        ))
    }
}

/// Fires when the context was captured in the evening
pub struct EveningDecisionInsight;

impl InsightRule for EveningDecisionInsight {
    fn kind(&self) -> InsightKind {
        InsightKind::EveningDecision
    }

    fn evaluate(&self, input: &InsightInput<'_>) -> Option<Insight> {
        let ctx = input.context?;
        if ctx.hour < input.settings.evening_hour {
            return None;
        }

        Some(Insight::new(
            InsightKind::EveningDecision,
            Severity::Attention,
            "Evening decisions",
            format!(
                "It's {:02}:00. Willpower runs lower at the end of the day: sleep on any purchase you are considering now.",
                ctx.hour
            ),
            EVENING_EVIDENCE,
        ))
    }
}

/// Fires when self-reported stress is high
pub struct HighStressInsight;

impl InsightRule for HighStressInsight {
    fn kind(&self) -> InsightKind {
        InsightKind::HighStress
    }

    fn evaluate(&self, input: &InsightInput<'_>) -> Option<Insight> {
        let ctx = input.context?;
        if ctx.stress < input.settings.high_stress {
            return None;
        }

        Some(Insight::new(
            InsightKind::HighStress,
            Severity::Warning,
            "Stress is holding the wallet",
            format!(
                "Your stress is at {}/10. Under stress, spending becomes a way to regain control; pick a non-monetary way to decompress first.",
                ctx.stress
            ),
            STRESS_EVIDENCE,
        ))
    }
}

/// Ordered collection of insight rules
pub struct InsightRules {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRules {
    /// Create a rule set with the built-in rules
    pub fn new() -> Self {
        let mut rules = Self { rules: vec![] };

        rules.register(Box::new(ArchetypeInsight));
        rules.register(Box::new(EveningDecisionInsight));
        rules.register(Box::new(HighStressInsight));

        rules
    }

    /// Create a rule set with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule in registration order
    pub fn evaluate(&self, input: &InsightInput<'_>) -> Vec<Insight> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let insight = rule.evaluate(input);
                tracing::debug!(
                    rule = rule.kind().as_str(),
                    fired = insight.is_some(),
                    "Insight rule evaluated"
                );
                insight
            })
            .collect()
    }

    /// Get list of registered insight kinds
    pub fn kinds(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }
}
