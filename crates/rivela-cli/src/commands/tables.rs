//! Lookup commands: archetypes, conversions, personas

use anyhow::Result;

use rivela_core::{archetypes, FinancialEngine, ARCHETYPES, PERSONAS};

use super::{euros, truncate};

pub fn cmd_archetype(energy: u8, stress: u8) -> Result<()> {
    let archetype = archetypes::detect(energy, stress);

    println!();
    println!("{} {}", archetype.emoji, archetype.name);
    println!("   Energy {} / Stress {}", energy, stress);
    if !archetypes::covers(energy, stress) {
        println!("   (no specific archetype for this combination)");
    }
    println!(
        "   Spending multiplier: ×{:.2}",
        archetype.impulsivity_ratio
    );
    if !archetype.risk_categories.is_empty() {
        println!("   Watch out for: {}", archetype.risk_categories.join(", "));
    }
    println!("   💡 {}", archetype.advice);
    println!();
    Ok(())
}

pub fn cmd_archetypes() -> Result<()> {
    println!();
    println!(
        "   {:<24} {:>7} {:>7} {:>6}",
        "ARCHETYPE", "ENERGY", "STRESS", "RATIO"
    );
    println!("   ─────────────────────────────────────────────────");
    for a in ARCHETYPES.iter().chain(std::iter::once(&archetypes::DEFAULT_ARCHETYPE)) {
        println!(
            "   {} {:<21} {:>3}-{:<3} {:>3}-{:<3} {:>6.2}",
            a.emoji,
            a.name,
            a.energy.min,
            a.energy.max,
            a.stress.min,
            a.stress.max,
            a.impulsivity_ratio
        );
    }
    println!();
    Ok(())
}

pub fn cmd_convert(engine: &mut FinancialEngine, amount: f64, json: bool) -> Result<()> {
    let conversions = engine.convert(amount);

    if json {
        println!("{}", serde_json::to_string_pretty(&conversions)?);
        return Ok(());
    }

    println!();
    println!("💶 {} is...", euros(amount));
    if conversions.is_empty() {
        println!("   (nothing in the catalogue fits this amount)");
    }
    for c in &conversions {
        println!(
            "   {} {:<44} [{}] {:.0}% used",
            c.details.emoji,
            truncate(&c.phrase, 44),
            c.impact_tag,
            c.details.percent_used
        );
    }
    println!();
    Ok(())
}

pub fn cmd_personas() -> Result<()> {
    println!();
    for p in PERSONAS {
        println!("👤 {} ({}) - {}", p.name, p.age, p.label);
        println!(
            "   Income {}-{}, stress baseline {}/10",
            euros(p.income_min),
            euros(p.income_max),
            p.stress_baseline
        );
        for q in p.questions {
            println!("   ? {}", q);
        }
        println!();
    }
    Ok(())
}
