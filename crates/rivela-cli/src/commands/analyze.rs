//! Analyze command implementation

use std::fmt::Write;

use anyhow::{Context, Result};

use rivela_core::analysis::Priority;
use rivela_core::{AnalysisRecord, EntryKind, FinancialEngine};

use super::{euros, load_ledger, truncate};
use crate::cli::AnalyzeArgs;

/// Load the ledger file and flag entries, then the profile and context
pub fn prepare_engine(engine: &mut FinancialEngine, args: &AnalyzeArgs) -> Result<()> {
    if let Some(path) = &args.ledger {
        let batch = load_ledger(path)?;
        engine
            .import_entries(&batch)
            .with_context(|| format!("Invalid entry in ledger {}", path.display()))?;
    }

    let flagged = [
        ("income", EntryKind::Income, &args.income),
        ("fixed", EntryKind::FixedExpense, &args.fixed),
        ("variable", EntryKind::VariableExpense, &args.variable),
        ("debt", EntryKind::Debt, &args.debt),
        ("goal", EntryKind::Goal, &args.goal),
    ];
    for (flag, kind, amounts) in flagged {
        for &amount in amounts {
            engine
                .add(kind, amount, "cli")
                .with_context(|| format!("Invalid --{} amount", flag))?;
        }
    }

    engine.set_age(args.age);

    if let (Some(energy), Some(stress)) = (args.energy, args.stress) {
        engine.set_emotional_context(energy, stress, args.tag.clone());
    }

    Ok(())
}

pub fn cmd_analyze(engine: &mut FinancialEngine, args: &AnalyzeArgs) -> Result<()> {
    prepare_engine(engine, args)?;

    if engine.entries().is_empty() {
        tracing::warn!("Analyzing an empty ledger; pass --income/--fixed/... or --ledger");
    }

    let record = engine.analyze(args.question.trim());

    if args.json {
        println!("{}", serde_json::to_string_pretty(record.as_ref())?);
    } else {
        print!("{}", render_report(&record)?);
    }
    Ok(())
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "🚨",
        Priority::High => "⭐",
        Priority::Medium => "💡",
    }
}

/// Human-readable report for an analysis
pub fn render_report(record: &AnalysisRecord) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let eq = &record.equation;

    writeln!(out)?;
    writeln!(out, "🔍 {}", truncate(&record.question, 70))?;
    writeln!(
        out,
        "   ─────────────────────────────────────────────────────────────"
    )?;
    writeln!(
        out,
        "   Persona: {} ({})",
        record.persona.name, record.persona.label
    )?;
    if let Some(archetype) = record.archetype {
        writeln!(
            out,
            "   Mood:    {} {} (spending ×{:.2})",
            archetype.emoji, archetype.name, archetype.impulsivity_ratio
        )?;
    }

    writeln!(out)?;
    writeln!(out, "💶 Your equation")?;
    writeln!(out, "   Income              {:>10}", euros(eq.income))?;
    writeln!(out, "   Fixed expenses    - {:>10}", euros(eq.fixed_expenses))?;
    writeln!(
        out,
        "   Variable expenses - {:>10}",
        euros(eq.variable_expenses)
    )?;
    writeln!(out, "   Debt              - {:>10}", euros(eq.debt))?;
    writeln!(
        out,
        "   Available         = {:>10}  ({:.1}% savings rate)",
        euros(eq.available),
        eq.savings_rate
    )?;
    if eq.goals > 0.0 {
        writeln!(out, "   Goals                 {:>10}", euros(eq.goals))?;
    }
    if let Some(emotional) = &eq.emotional {
        writeln!(
            out,
            "   In this mood        {:>10}  variable, {} available",
            euros(emotional.adjusted_variable_expenses),
            euros(emotional.available)
        )?;
    }

    if !record.insights.is_empty() {
        writeln!(out)?;
        writeln!(out, "🧠 Insights")?;
        for insight in &record.insights {
            writeln!(out, "   [{}] {}", insight.severity, insight.title)?;
            writeln!(out, "      {}", insight.message)?;
            writeln!(out, "      Source: {}", truncate(insight.evidence, 90))?;
        }
    }

    let conversions = &record.conversions;
    if !conversions.variable_expenses.is_empty() || !conversions.available.is_empty() {
        writeln!(out)?;
        writeln!(out, "☕ In real terms")?;
        for c in &conversions.variable_expenses {
            writeln!(out, "   Variable spending: {} {}", c.details.emoji, c.phrase)?;
        }
        for c in &conversions.available {
            writeln!(out, "   Left over:         {} {}", c.details.emoji, c.phrase)?;
        }
        if let Some(savings) = &conversions.potential_savings {
            writeln!(
                out,
                "   Mood premium {}:",
                euros(savings.amount)
            )?;
            for c in &savings.conversions {
                writeln!(out, "      {} {}", c.details.emoji, c.phrase)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "🔮 What if...")?;
    for scenario in &record.scenarios {
        writeln!(
            out,
            "   {:<36} +{:>8}/month → {:.1}% savings rate",
            scenario.title,
            euros(scenario.impact),
            scenario.new_savings_rate
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "❤️  Financial health: {}/100 ({})",
        record.health.score, record.health.tier
    )?;

    writeln!(out)?;
    writeln!(out, "📋 Recommendations")?;
    for rec in &record.recommendations {
        writeln!(out, "   {} {}", priority_icon(rec.priority), rec.title)?;
        writeln!(out, "      {}", rec.description)?;
    }

    writeln!(out)?;
    writeln!(out, "👣 Next steps")?;
    for (i, step) in record.next_steps.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, step)?;
    }
    writeln!(out)?;

    Ok(out)
}
