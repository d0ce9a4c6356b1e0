//! Analysis - turning a ledger and a mood into an answer
//!
//! Every piece of an [`AnalysisRecord`] is computed by a pure function in
//! one of these modules; the engine only gathers inputs and assembles the
//! result.
//!
//! - **Equation** - income minus outgoings, with an emotionally adjusted variant
//! - **Insights** - pluggable narrative rules with research citations
//! - **Scenarios** - three fixed what-if projections
//! - **Health** - 0-100 score with a qualitative tier
//! - **Recommendations** - persona, archetype and emergency-fund advice

pub mod equation;
pub mod health;
pub mod insights;
pub mod recommendations;
pub mod scenarios;
pub mod types;

pub use insights::{InsightInput, InsightRule, InsightRules};
pub use types::{
    AnalysisRecord, EmotionalEquation, Equation, HealthComponents, HealthIndex, HealthTier,
    Insight, InsightKind, PotentialSavings, Priority, Recommendation, RecommendationSource,
    Scenario, ScenarioKind, Severity, VisualConversions,
};
