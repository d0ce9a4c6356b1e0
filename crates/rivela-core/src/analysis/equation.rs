//! Monthly equation: what is left after fixed costs, spending and debt

use crate::archetypes::{self, Archetype};
use crate::config::ImpactSettings;
use crate::models::{EmotionalContext, Totals};

use super::types::{EmotionalEquation, Equation};

/// available / income * 100, guarded against zero (or negative) income
pub fn savings_rate(available: f64, income: f64) -> f64 {
    if income > 0.0 {
        available / income * 100.0
    } else {
        0.0
    }
}

/// Build the equation. The emotional variant needs both an archetype and
/// a context.
pub fn compute(
    totals: &Totals,
    archetype: Option<&Archetype>,
    context: Option<&EmotionalContext>,
    settings: &ImpactSettings,
) -> Equation {
    let outgoings = totals.fixed_expenses + totals.debt;
    let available = totals.income - outgoings - totals.variable_expenses;

    let emotional = match (archetype, context) {
        (Some(archetype), Some(ctx)) => {
            let impact =
                archetypes::impact(archetype, totals.variable_expenses, Some(ctx), settings);
            let adjusted = impact.adjusted_amount;
            let available = totals.income - outgoings - adjusted;
            Some(EmotionalEquation {
                impact,
                adjusted_variable_expenses: adjusted,
                available,
                savings_rate: savings_rate(available, totals.income),
            })
        }
        _ => None,
    };

    Equation {
        income: totals.income,
        fixed_expenses: totals.fixed_expenses,
        variable_expenses: totals.variable_expenses,
        debt: totals.debt,
        goals: totals.goals,
        available,
        savings_rate: savings_rate(available, totals.income),
        emotional,
    }
}
