//! Domain models for Rivela

use chrono::{DateTime, Local, NaiveDateTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The five kinds of entry the engine's ledger accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    FixedExpense,
    VariableExpense,
    Debt,
    Goal,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::FixedExpense => "fixed_expense",
            Self::VariableExpense => "variable_expense",
            Self::Debt => "debt",
            Self::Goal => "goal",
        }
    }

    /// Get all entry kinds
    pub fn all() -> &'static [EntryKind] {
        &[
            Self::Income,
            Self::FixedExpense,
            Self::VariableExpense,
            Self::Debt,
            Self::Goal,
        ]
    }
}

impl std::str::FromStr for EntryKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // The front-end keys its ledger with plural camelCase names
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "fixed_expense" | "fixedexpense" | "fixedexpenses" => Ok(Self::FixedExpense),
            "variable_expense" | "variableexpense" | "variableexpenses" => {
                Ok(Self::VariableExpense)
            }
            "debt" | "debts" => Ok(Self::Debt),
            "goal" | "goals" => Ok(Self::Goal),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger entry, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: u64,
    pub kind: EntryKind,
    pub amount: f64,
    /// Free-form label ("salary", "rent", "groceries", ...)
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// For submitting entries (no id or timestamp yet)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    /// Entry kind as free text; validated by the engine
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
}

/// Ledger totals per entry kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub debt: f64,
    pub goals: f64,
    /// Number of income entries (used for diversification scoring)
    pub income_sources: usize,
}

impl Totals {
    /// Sum a ledger
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FinancialEntry>) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            match entry.kind {
                EntryKind::Income => {
                    totals.income += entry.amount;
                    totals.income_sources += 1;
                }
                EntryKind::FixedExpense => totals.fixed_expenses += entry.amount,
                EntryKind::VariableExpense => totals.variable_expenses += entry.amount,
                EntryKind::Debt => totals.debt += entry.amount,
                EntryKind::Goal => totals.goals += entry.amount,
            }
        }
        totals
    }
}

/// Snapshot of how the user feels right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalContext {
    /// 1 (exhausted) to 10 (wired)
    pub energy: u8,
    /// 1 (calm) to 10 (overwhelmed)
    pub stress: u8,
    pub tags: Vec<String>,
    /// Hour of day, 0-23
    pub hour: u32,
    pub weekday: Weekday,
    pub captured_at: NaiveDateTime,
}

impl EmotionalContext {
    /// Capture a context at an explicit local time
    pub fn at(energy: u8, stress: u8, tags: Vec<String>, at: NaiveDateTime) -> Self {
        use chrono::Datelike;

        Self {
            energy,
            stress,
            tags,
            hour: at.hour(),
            weekday: at.weekday(),
            captured_at: at,
        }
    }

    /// Capture a context at the current local wall-clock time
    pub fn now(energy: u8, stress: u8, tags: Vec<String>) -> Self {
        Self::at(energy, stress, tags, Local::now().naive_local())
    }

    /// Friday, Saturday and Sunday count as the weekend
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun)
    }
}

/// Inputs to persona detection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: Option<u32>,
    /// Monthly income
    pub income: f64,
    pub asked_questions: Vec<String>,
    pub emotional_context: Option<EmotionalContext>,
}
