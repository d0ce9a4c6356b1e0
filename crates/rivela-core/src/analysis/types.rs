//! Core types for analysis records

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::archetypes::{Archetype, ImpactResult};
use crate::conversions::Conversion;
use crate::models::EmotionalContext;
use crate::personas::Persona;

/// The "income minus outgoings" breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equation {
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub debt: f64,
    pub goals: f64,
    /// income - fixed - variable - debt
    pub available: f64,
    /// available / income * 100, or 0 without income
    pub savings_rate: f64,
    /// Same equation with variable expenses inflated by the current
    /// archetype; present only when an emotional context is set
    pub emotional: Option<EmotionalEquation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalEquation {
    pub impact: ImpactResult,
    pub adjusted_variable_expenses: f64,
    pub available: f64,
    pub savings_rate: f64,
}

/// Built-in insight kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Explains the current emotional archetype
    Archetype,
    /// Decision-making late in the day
    EveningDecision,
    /// High-stress spending
    HighStress,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archetype => "archetype",
            Self::EveningDecision => "evening_decision",
            Self::HighStress => "high_stress",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Attention => "attention",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A narrative insight with a fixed research citation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub evidence: &'static str,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        evidence: &'static str,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            evidence,
        }
    }
}

/// Conversions shown alongside an analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualConversions {
    pub variable_expenses: Vec<Conversion>,
    pub available: Vec<Conversion>,
    pub potential_savings: Option<PotentialSavings>,
}

/// What the user would keep by spending at a neutral emotional ratio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotentialSavings {
    pub amount: f64,
    pub conversions: Vec<Conversion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    CutVariableExpenses,
    RaiseIncome,
    EliminateDebt,
}

/// A what-if projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub title: &'static str,
    pub description: String,
    /// Monthly change in available money
    pub impact: f64,
    pub new_available: f64,
    pub new_savings_rate: f64,
}

/// Qualitative band of the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Critical,
    Fragile,
    Average,
    Good,
    Excellent,
}

impl HealthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Self::Critical,
            20..=39 => Self::Fragile,
            40..=59 => Self::Average,
            60..=79 => Self::Good,
            _ => Self::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Fragile => "Fragile",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "#dc2626",
            Self::Fragile => "#f97316",
            Self::Average => "#eab308",
            Self::Good => "#22c55e",
            Self::Excellent => "#10b981",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Health sub-scores before the total is clamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthComponents {
    /// At most 30, negative when spending exceeds income
    pub savings: f64,
    /// 0-25
    pub debt: f64,
    /// 0-20
    pub diversification: f64,
    /// 0-25
    pub stability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthIndex {
    /// 0-100
    pub score: u8,
    pub tier: HealthTier,
    pub components: HealthComponents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Persona,
    Archetype,
    Health,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub source: RecommendationSource,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// One complete answer to a user question. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub persona: &'static Persona,
    pub archetype: Option<&'static Archetype>,
    pub context: Option<EmotionalContext>,
    pub equation: Equation,
    pub insights: Vec<Insight>,
    pub conversions: VisualConversions,
    pub scenarios: Vec<Scenario>,
    pub health: HealthIndex,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_tier_boundaries() {
        assert_eq!(HealthTier::from_score(0), HealthTier::Critical);
        assert_eq!(HealthTier::from_score(19), HealthTier::Critical);
        assert_eq!(HealthTier::from_score(20), HealthTier::Fragile);
        assert_eq!(HealthTier::from_score(39), HealthTier::Fragile);
        assert_eq!(HealthTier::from_score(40), HealthTier::Average);
        assert_eq!(HealthTier::from_score(60), HealthTier::Good);
        assert_eq!(HealthTier::from_score(79), HealthTier::Good);
        assert_eq!(HealthTier::from_score(80), HealthTier::Excellent);
        assert_eq!(HealthTier::from_score(100), HealthTier::Excellent);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::High < Priority::Medium);
    }

    #[test]
    fn test_insight_kind_serialization() {
        assert_eq!(InsightKind::EveningDecision.as_str(), "evening_decision");
        assert_eq!(
            serde_json::to_value(InsightKind::HighStress).unwrap(),
            serde_json::json!("high_stress")
        );
    }
}
