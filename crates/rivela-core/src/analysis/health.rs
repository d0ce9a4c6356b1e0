//! Financial health index (0-100)
//!
//! Four sub-scores, with the total clamped to 0-100:
//! - savings rate, up to 30 (negative when overspending)
//! - debt burden, up to 25
//! - income diversification, up to 20
//! - emotional stability, up to 25 (flat 15 when no context is set)

use crate::models::EmotionalContext;

use super::types::{Equation, HealthComponents, HealthIndex, HealthTier};

const SAVINGS_MAX: f64 = 30.0;
const DEBT_MAX: f64 = 25.0;
const DIVERSIFICATION_MAX: f64 = 20.0;
const STABILITY_MAX: f64 = 25.0;
const STABILITY_UNKNOWN: f64 = 15.0;

/// Debt payments as a fraction of income. Without income any debt counts
/// as a full burden.
fn debt_ratio(debt: f64, income: f64) -> f64 {
    if income > 0.0 {
        debt / income
    } else if debt > 0.0 {
        1.0
    } else {
        0.0
    }
}

pub fn compute(
    eq: &Equation,
    income_sources: usize,
    context: Option<&EmotionalContext>,
) -> HealthIndex {
    let savings = (eq.savings_rate * 1.5).min(SAVINGS_MAX);
    let debt = (DEBT_MAX - debt_ratio(eq.debt, eq.income) * 100.0).clamp(0.0, DEBT_MAX);
    let diversification = (income_sources as f64 * 5.0).min(DIVERSIFICATION_MAX);
    let stability = context
        .map(|ctx| (STABILITY_MAX - ctx.stress as f64 * 2.5).clamp(0.0, STABILITY_MAX))
        .unwrap_or(STABILITY_UNKNOWN);

    let total = (savings + debt + diversification + stability).clamp(0.0, 100.0);
    let score = total.round() as u8;

    HealthIndex {
        score,
        tier: HealthTier::from_score(score),
        components: HealthComponents {
            savings,
            debt,
            diversification,
            stability,
        },
    }
}
