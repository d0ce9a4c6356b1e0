//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use clap::Parser;
use rivela_core::{EntryKind, FinancialEngine, RivelaConfig};
use tempfile::NamedTempFile;

use crate::cli::{AnalyzeArgs, Cli, Commands};
use crate::commands::{self, euros, truncate};
use crate::env_log_level;

fn seeded_engine() -> FinancialEngine {
    FinancialEngine::with_seed(RivelaConfig::default(), 42)
}

fn reference_args(question: &str) -> AnalyzeArgs {
    AnalyzeArgs {
        question: question.to_string(),
        income: vec![3000.0],
        fixed: vec![1200.0],
        variable: vec![600.0],
        debt: vec![300.0],
        ..Default::default()
    }
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ========== Argument Parsing ==========

#[test]
fn test_parse_analyze_flags() {
    let cli = Cli::try_parse_from([
        "rivela",
        "analyze",
        "Why can't I save?",
        "--income",
        "2000",
        "--income",
        "500",
        "--variable",
        "400",
        "--energy",
        "8",
        "--stress",
        "9",
        "--tag",
        "tired",
        "--seed",
        "7",
    ])
    .unwrap();

    assert_eq!(cli.seed, Some(7));
    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.question, "Why can't I save?");
            assert_eq!(args.income, vec![2000.0, 500.0]);
            assert_eq!(args.energy, Some(8));
            assert_eq!(args.stress, Some(9));
            assert_eq!(args.tag, vec!["tired".to_string()]);
            assert!(!args.json);
        }
        _ => panic!("expected analyze"),
    }
}

#[test]
fn test_energy_requires_stress() {
    let result = Cli::try_parse_from(["rivela", "analyze", "q", "--energy", "5"]);
    assert!(result.is_err());
}

#[test]
fn test_scores_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["rivela", "archetype", "--energy", "11", "--stress", "5"]).is_err());
    assert!(Cli::try_parse_from(["rivela", "archetype", "--energy", "5", "--stress", "0"]).is_err());
    assert!(Cli::try_parse_from(["rivela", "archetype", "--energy", "5", "--stress", "5"]).is_ok());
}

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["rivela", "serve"]).unwrap();
    match cli.command {
        Commands::Serve {
            port,
            host,
            no_auth,
        } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
            assert!(!no_auth);
        }
        _ => panic!("expected serve"),
    }
}

#[test]
fn test_env_log_level() {
    assert_eq!(env_log_level(Some("development")), "debug");
    assert_eq!(env_log_level(Some("production")), "warn");
    assert_eq!(env_log_level(Some("staging")), "info");
    assert_eq!(env_log_level(None), "info");
}

// ========== Analyze ==========

#[test]
fn test_prepare_engine_from_flags() {
    let mut engine = seeded_engine();
    let mut args = reference_args("q");
    args.energy = Some(8);
    args.stress = Some(8);
    args.age = Some(30);

    commands::prepare_engine(&mut engine, &args).unwrap();

    let totals = engine.totals();
    assert_eq!(totals.income, 3000.0);
    assert_eq!(totals.variable_expenses, 600.0);
    assert_eq!(engine.entries().len(), 4);
    assert_eq!(engine.entries()[1].kind, EntryKind::FixedExpense);
    assert_eq!(engine.archetype().unwrap().id, "tiger");
    assert_eq!(engine.age(), Some(30));
}

#[test]
fn test_prepare_engine_without_context() {
    let mut engine = seeded_engine();
    commands::prepare_engine(&mut engine, &reference_args("q")).unwrap();
    assert!(engine.context().is_none());
    assert!(engine.archetype().is_none());
}

#[test]
fn test_prepare_engine_with_ledger_file() {
    let ledger = write_temp(
        r#"[
            {"kind": "income", "amount": 2200, "category": "salary"},
            {"kind": "fixedExpenses", "amount": 800, "category": "rent"}
        ]"#,
    );
    let mut engine = seeded_engine();
    let args = AnalyzeArgs {
        question: "q".to_string(),
        ledger: Some(ledger.path().to_path_buf()),
        variable: vec![150.0],
        ..Default::default()
    };

    commands::prepare_engine(&mut engine, &args).unwrap();

    let totals = engine.totals();
    assert_eq!(totals.income, 2200.0);
    assert_eq!(totals.fixed_expenses, 800.0);
    assert_eq!(totals.variable_expenses, 150.0);
}

#[test]
fn test_ledger_with_unknown_kind_fails_cleanly() {
    let ledger = write_temp(r#"[{"kind": "income", "amount": 100}, {"kind": "bitcoin", "amount": 5}]"#);
    let mut engine = seeded_engine();
    let args = AnalyzeArgs {
        question: "q".to_string(),
        ledger: Some(ledger.path().to_path_buf()),
        ..Default::default()
    };

    let err = commands::prepare_engine(&mut engine, &args).unwrap_err();
    assert!(format!("{:#}", err).contains("bitcoin"));
    assert!(engine.entries().is_empty());
}

#[test]
fn test_missing_ledger_file() {
    let mut engine = seeded_engine();
    let args = AnalyzeArgs {
        question: "q".to_string(),
        ledger: Some("/nonexistent/ledger.json".into()),
        ..Default::default()
    };
    assert!(commands::prepare_engine(&mut engine, &args).is_err());
}

#[test]
fn test_render_report() {
    let mut engine = seeded_engine();
    commands::prepare_engine(&mut engine, &reference_args("Where does my money go?")).unwrap();
    let record = engine.analyze("Where does my money go?");

    let report = commands::render_report(&record).unwrap();
    assert!(report.contains("Where does my money go?"));
    assert!(report.contains("€900"));
    assert!(report.contains("30.0% savings rate"));
    assert!(report.contains("Financial health: 65/100 (Good)"));
    assert!(report.contains("What if..."));
    assert!(report.contains("1. "));
    // No context: no insights section
    assert!(!report.contains("Insights"));
}

#[test]
fn test_cmd_analyze_json() {
    let mut engine = seeded_engine();
    let mut args = reference_args("q");
    args.json = true;
    assert!(commands::cmd_analyze(&mut engine, &args).is_ok());
    assert_eq!(engine.history().len(), 1);
}

// ========== Tables & Config ==========

#[test]
fn test_table_commands() {
    assert!(commands::cmd_archetype(8, 8).is_ok());
    assert!(commands::cmd_archetype(5, 5).is_ok());
    assert!(commands::cmd_archetypes().is_ok());
    assert!(commands::cmd_personas().is_ok());

    let mut engine = seeded_engine();
    assert!(commands::cmd_convert(&mut engine, 600.0, false).is_ok());
    assert!(commands::cmd_convert(&mut engine, 0.0, true).is_ok());
}

#[test]
fn test_build_engine_with_config_file() {
    let config = write_temp("[history]\nlimit = 1\n");
    let mut engine = commands::build_engine(Some(config.path()), Some(1)).unwrap();
    engine.analyze("a");
    engine.analyze("b");
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_build_engine_with_bad_config() {
    let config = write_temp("[impact\nbroken");
    assert!(commands::build_engine(Some(config.path()), None).is_err());
    assert!(commands::cmd_config(Some(config.path())).is_err());
}

#[test]
fn test_cmd_config() {
    let config = write_temp("[conversions]\nmax_results = 5\n");
    assert!(commands::cmd_config(Some(config.path())).is_ok());
}

// ========== Formatting ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
    assert_eq!(truncate("caffè latte", 6), "caf...");
}

#[test]
fn test_euros() {
    assert_eq!(euros(0.0), "€0");
    assert_eq!(euros(900.0), "€900");
    assert_eq!(euros(1159.2), "€1.159");
    assert_eq!(euros(-250.4), "-€250");
    assert_eq!(euros(1_234_567.0), "€1.234.567");
}
