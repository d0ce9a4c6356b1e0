//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - The analyze command and its text report
//! - `tables` - Archetype, conversion and persona lookups
//! - `serve` - Web server command
//! - `setup` - Engine construction, ledger files, config printing

pub mod analyze;
pub mod serve;
pub mod setup;
pub mod tables;

// Re-export command functions for main.rs
pub use analyze::*;
pub use serve::*;
pub use setup::*;
pub use tables::*;

/// Truncate a string to `max` characters, appending "..." when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a euro amount with thousands separators and no decimals
pub fn euros(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-€{}", grouped)
    } else {
        format!("€{}", grouped)
    }
}
