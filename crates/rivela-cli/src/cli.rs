//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Rivela - See what your mood costs you
#[derive(Parser)]
#[command(name = "rivela")]
#[command(about = "Emotion-aware personal finance analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the per-user override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for narrative phrase selection (reproducible output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a question against a ledger and emotional state
    Analyze(AnalyzeArgs),

    /// Classify an energy/stress pair into an archetype
    Archetype {
        /// Energy level (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        energy: u8,

        /// Stress level (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        stress: u8,
    },

    /// List all archetypes
    Archetypes,

    /// Show what an amount of money buys
    Convert {
        /// Amount in euros
        #[arg(short, long)]
        amount: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List all personas
    Personas,

    /// Print the effective configuration as TOML
    Config,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// The question to answer
    pub question: String,

    /// Income entry (repeatable)
    #[arg(long)]
    pub income: Vec<f64>,

    /// Fixed expense entry (repeatable)
    #[arg(long)]
    pub fixed: Vec<f64>,

    /// Variable expense entry (repeatable)
    #[arg(long)]
    pub variable: Vec<f64>,

    /// Debt payment entry (repeatable)
    #[arg(long)]
    pub debt: Vec<f64>,

    /// Savings goal entry (repeatable)
    #[arg(long)]
    pub goal: Vec<f64>,

    /// JSON ledger file: [{"kind": "income", "amount": 2000, "category": "salary"}, ...]
    #[arg(long)]
    pub ledger: Option<PathBuf>,

    /// Current energy level (1-10)
    #[arg(long, requires = "stress", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub energy: Option<u8>,

    /// Current stress level (1-10)
    #[arg(long, requires = "energy", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub stress: Option<u8>,

    /// Mood tag (repeatable)
    #[arg(long)]
    pub tag: Vec<String>,

    /// Your age, for persona matching
    #[arg(long)]
    pub age: Option<u32>,

    /// Print the full analysis record as JSON
    #[arg(long)]
    pub json: bool,
}
