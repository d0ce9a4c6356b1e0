//! What-if scenarios

use super::equation::savings_rate;
use super::types::{Equation, Scenario, ScenarioKind};

const VARIABLE_CUT: f64 = 0.20;
const INCOME_RAISE: f64 = 0.10;

/// The three fixed projections: cut variable spending by 20%, raise income
/// by 10%, clear all debt
pub fn what_if(eq: &Equation) -> Vec<Scenario> {
    let cut = eq.variable_expenses * VARIABLE_CUT;
    let raise = eq.income * INCOME_RAISE;
    let debt = eq.debt;

    vec![
        Scenario {
            kind: ScenarioKind::CutVariableExpenses,
            title: "Spend 20% less on variable expenses",
            description: format!(
                "Trimming variable spending from €{:.0} to €{:.0} frees €{:.0} a month.",
                eq.variable_expenses,
                eq.variable_expenses - cut,
                cut
            ),
            impact: cut,
            new_available: eq.available + cut,
            new_savings_rate: savings_rate(eq.available + cut, eq.income),
        },
        Scenario {
            kind: ScenarioKind::RaiseIncome,
            title: "Earn 10% more",
            description: format!(
                "A raise from €{:.0} to €{:.0} adds €{:.0} a month.",
                eq.income,
                eq.income + raise,
                raise
            ),
            impact: raise,
            new_available: eq.available + raise,
            new_savings_rate: savings_rate(eq.available + raise, eq.income + raise),
        },
        Scenario {
            kind: ScenarioKind::EliminateDebt,
            title: "Become debt-free",
            description: format!(
                "Without €{:.0} of monthly debt payments you keep all of it.",
                debt
            ),
            impact: debt,
            new_available: eq.available + debt,
            new_savings_rate: savings_rate(eq.available + debt, eq.income),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::equation;
    use crate::config::ImpactSettings;
    use crate::models::Totals;

    fn reference() -> Equation {
        let totals = Totals {
            income: 3000.0,
            fixed_expenses: 1200.0,
            variable_expenses: 600.0,
            debt: 300.0,
            goals: 0.0,
            income_sources: 1,
        };
        equation::compute(&totals, None, None, &ImpactSettings::default())
    }

    #[test]
    fn test_exactly_three_scenarios() {
        let scenarios = what_if(&reference());
        let kinds: Vec<_> = scenarios.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScenarioKind::CutVariableExpenses,
                ScenarioKind::RaiseIncome,
                ScenarioKind::EliminateDebt
            ]
        );
    }

    #[test]
    fn test_scenario_numbers() {
        let scenarios = what_if(&reference());

        assert!((scenarios[0].impact - 120.0).abs() < 1e-9);
        assert!((scenarios[0].new_available - 1020.0).abs() < 1e-9);

        assert!((scenarios[1].impact - 300.0).abs() < 1e-9);
        assert!((scenarios[1].new_available - 1200.0).abs() < 1e-9);
        assert!((scenarios[1].new_savings_rate - 1200.0 / 3300.0 * 100.0).abs() < 1e-9);

        assert_eq!(scenarios[2].impact, 300.0);
        assert_eq!(scenarios[2].new_available, 1200.0);
        assert_eq!(scenarios[2].new_savings_rate, 40.0);
    }

    #[test]
    fn test_zero_income_scenarios_stay_finite() {
        let eq = equation::compute(&Totals::default(), None, None, &ImpactSettings::default());
        for scenario in what_if(&eq) {
            assert_eq!(scenario.impact, 0.0);
            assert!(scenario.new_savings_rate.is_finite());
        }
    }
}
