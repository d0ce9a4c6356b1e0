//! Recommendations and next steps

use crate::archetypes::Archetype;
use crate::personas::Persona;

use super::types::{Equation, HealthIndex, Priority, Recommendation, RecommendationSource};

/// Below this score the emergency-fund recommendation is added
pub const EMERGENCY_FUND_THRESHOLD: u8 = 50;

/// Months of fixed costs an emergency fund should cover
const EMERGENCY_FUND_MONTHS: f64 = 3.0;

pub const NEXT_STEPS: &[&str] = &[
    "Record every variable expense for the next 7 days",
    "Check in with your mood before any purchase over €50",
    "Come back in a month and compare your health score",
];

pub fn recommend(
    persona: &Persona,
    archetype: Option<&Archetype>,
    eq: &Equation,
    health: &HealthIndex,
) -> Vec<Recommendation> {
    let mut recommendations = vec![Recommendation {
        source: RecommendationSource::Persona,
        priority: Priority::High,
        title: format!("For people like {}", persona.name),
        description: persona.recommendation.to_string(),
    }];

    if let Some(archetype) = archetype {
        recommendations.push(Recommendation {
            source: RecommendationSource::Archetype,
            priority: Priority::Medium,
            title: format!("{} {}", archetype.emoji, archetype.name),
            description: archetype.advice.to_string(),
        });
    }

    if health.score < EMERGENCY_FUND_THRESHOLD {
        let target = (eq.fixed_expenses + eq.debt) * EMERGENCY_FUND_MONTHS;
        recommendations.push(Recommendation {
            source: RecommendationSource::Health,
            priority: Priority::Critical,
            title: "Build an emergency fund".to_string(),
            description: format!(
                "Your financial health is {}/100 ({}). Before anything else, set aside €{:.0}: three months of fixed costs and debt payments.",
                health.score,
                health.tier.label(),
                target
            ),
        });
    }

    recommendations
}

pub fn next_steps() -> Vec<&'static str> {
    NEXT_STEPS.to_vec()
}
