//! Rivela Core Library
//!
//! Emotion-aware personal finance analysis:
//! - Ledger of income, expenses, debt and goals
//! - Emotional archetype classification and spending impact
//! - Tangible conversions ("that's 500 espressos")
//! - Persona detection from profile and questions
//! - Analyses with insights, what-if scenarios, health index and
//!   recommendations

pub mod analysis;
pub mod archetypes;
pub mod config;
pub mod conversions;
pub mod engine;
pub mod error;
pub mod models;
pub mod personas;

/// Fixed-clock helpers and sample ledgers
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analysis::{
    AnalysisRecord, Equation, HealthIndex, HealthTier, Insight, InsightKind, InsightRule,
    InsightRules, Recommendation, Scenario, Severity,
};
pub use archetypes::{Archetype, ImpactResult, ARCHETYPES, DEFAULT_ARCHETYPE};
pub use config::RivelaConfig;
pub use conversions::{Conversion, ConversionMatch, ImpactTag, CONVERSION_TABLE};
pub use engine::FinancialEngine;
pub use error::{Error, Result};
pub use models::{EmotionalContext, EntryKind, FinancialEntry, NewEntry, Totals, UserProfile};
pub use personas::{Persona, PERSONAS};
