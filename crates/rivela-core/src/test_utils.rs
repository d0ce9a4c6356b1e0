//! Test utilities for rivela-core
//!
//! Fixed-clock helpers and a reference ledger shared by this crate's tests
//! and by the server and CLI tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::RivelaConfig;
use crate::engine::FinancialEngine;
use crate::models::EntryKind;

/// 2026-10-13, a Tuesday
pub const TUESDAY: (i32, u32, u32) = (2026, 10, 13);

/// 2026-10-17, a Saturday
pub const SATURDAY: (i32, u32, u32) = (2026, 10, 17);

/// Seed used by [`reference_engine`]
pub const TEST_SEED: u64 = 42;

/// Local time on the given day at `hour:00`
pub fn at(day: (i32, u32, u32), hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(day.0, day.1, day.2)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Seeded engine holding the reference ledger:
/// income 3000, fixed 1200, variable 600, debt 300
pub fn reference_engine() -> FinancialEngine {
    let mut engine = FinancialEngine::with_seed(RivelaConfig::default(), TEST_SEED);
    engine.add(EntryKind::Income, 3000.0, "salary").unwrap();
    engine.add(EntryKind::FixedExpense, 1200.0, "rent").unwrap();
    engine.add(EntryKind::VariableExpense, 600.0, "going out").unwrap();
    engine.add(EntryKind::Debt, 300.0, "car loan").unwrap();
    engine
}
