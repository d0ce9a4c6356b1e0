//! Shared command utilities (engine construction, ledger files) and the
//! config command

use std::path::Path;

use anyhow::{Context, Result};

use rivela_core::{FinancialEngine, NewEntry, RivelaConfig};

/// Load configuration and build an engine, seeded when requested
pub fn build_engine(config_path: Option<&Path>, seed: Option<u64>) -> Result<FinancialEngine> {
    let config = RivelaConfig::load(config_path).context("Failed to load configuration")?;
    let engine = match seed {
        Some(seed) => FinancialEngine::with_seed(config, seed),
        None => FinancialEngine::new(config),
    };
    Ok(engine)
}

/// Read a JSON ledger file: an array of `{kind, amount, category?}`
pub fn load_ledger(path: &Path) -> Result<Vec<NewEntry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledger {}", path.display()))?;
    let entries: Vec<NewEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse ledger {}", path.display()))?;
    Ok(entries)
}

pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = RivelaConfig::load(config_path).context("Failed to load configuration")?;

    match config_path {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => match rivela_core::config::default_config_path().filter(|p| p.exists()) {
            Some(path) => println!("# Loaded from {}", path.display()),
            None => println!("# Built-in defaults"),
        },
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
