//! Emotional archetypes
//!
//! Maps an (energy, stress) reading to one of a fixed set of spending
//! archetypes, and computes how that archetype inflates a base spending
//! amount given the time the reading was taken.

use serde::Serialize;

use crate::config::ImpactSettings;
use crate::models::EmotionalContext;

/// Inclusive range on the 1-10 self-assessment scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A named emotional spending profile
#[derive(Debug, PartialEq, Serialize)]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub stress: ScoreRange,
    pub energy: ScoreRange,
    /// Multiplier applied to discretionary spending in this state
    pub impulsivity_ratio: f64,
    /// Spending categories this state tends to inflate
    pub risk_categories: &'static [&'static str],
    pub advice: &'static str,
    pub phrases: &'static [&'static str],
    /// Display color (hex)
    pub color: &'static str,
}

impl Archetype {
    pub fn matches(&self, energy: u8, stress: u8) -> bool {
        self.stress.contains(stress) && self.energy.contains(energy)
    }
}

/// Archetype table, scanned in declaration order
pub static ARCHETYPES: &[Archetype] = &[
    Archetype {
        id: "tiger",
        name: "The Stressed Tiger",
        emoji: "🐯",
        stress: ScoreRange::new(7, 10),
        energy: ScoreRange::new(7, 10),
        impulsivity_ratio: 1.68,
        risk_categories: &["shopping", "electronics", "fashion"],
        advice: "High stress and high energy make for fast purchases. Wait 24 hours before any non-essential buy over €50.",
        phrases: &[
            "You hunt for relief at the checkout",
            "Every purchase feels like a small victory",
            "Adrenaline is paying the bill",
        ],
        color: "#ef4444",
    },
    Archetype {
        id: "koala",
        name: "The Drained Koala",
        emoji: "🐨",
        stress: ScoreRange::new(7, 10),
        energy: ScoreRange::new(1, 3),
        impulsivity_ratio: 1.45,
        risk_categories: &["food delivery", "streaming", "comfort food"],
        advice: "When you are exhausted you pay for convenience. Keep a ready meal at home for the worst evenings.",
        phrases: &[
            "Convenience becomes a survival strategy",
            "The couch orders, the wallet pays",
            "Tiredness has a monthly fee",
        ],
        color: "#8b5cf6",
    },
    Archetype {
        id: "squirrel",
        name: "The Anxious Squirrel",
        emoji: "🐿️",
        stress: ScoreRange::new(7, 10),
        energy: ScoreRange::new(4, 6),
        impulsivity_ratio: 1.32,
        risk_categories: &["small purchases", "groceries", "subscriptions"],
        advice: "Anxiety turns into many small purchases. Set a weekly cap for small expenses and track it.",
        phrases: &[
            "Small purchases to quiet a big worry",
            "Stockpiling feels like control",
            "Many little leaks make a flood",
        ],
        color: "#f97316",
    },
    Archetype {
        id: "dolphin",
        name: "The Social Dolphin",
        emoji: "🐬",
        stress: ScoreRange::new(1, 4),
        energy: ScoreRange::new(8, 10),
        impulsivity_ratio: 1.25,
        risk_categories: &["restaurants", "nightlife", "travel"],
        advice: "A good mood spends generously with friends. Decide your evening budget before going out.",
        phrases: &[
            "Good company makes prices invisible",
            "The next round is always on you",
            "Joy is generous, and so is your card",
        ],
        color: "#06b6d4",
    },
    Archetype {
        id: "owl",
        name: "The Wise Owl",
        emoji: "🦉",
        stress: ScoreRange::new(1, 3),
        energy: ScoreRange::new(4, 7),
        impulsivity_ratio: 0.85,
        risk_categories: &[],
        advice: "You are in the best state to plan. Use it to review fixed costs and set up automatic savings.",
        phrases: &[
            "Clear head, clear numbers",
            "Today you spend with intention",
            "This is the moment to plan, not to buy",
        ],
        color: "#10b981",
    },
    Archetype {
        id: "cat",
        name: "The Sleepy Cat",
        emoji: "🐱",
        stress: ScoreRange::new(1, 4),
        energy: ScoreRange::new(1, 3),
        impulsivity_ratio: 0.95,
        risk_categories: &["home", "late-night browsing"],
        advice: "Low energy and low stress: a calm moment. Avoid scrolling shops out of boredom.",
        phrases: &[
            "Calm days are cheap days",
            "Boredom is the only risk",
            "A slow day keeps the wallet closed",
        ],
        color: "#64748b",
    },
];

/// Returned when no table range covers the reading. Its ranges span the
/// whole scale but it is never part of the table scan.
pub static DEFAULT_ARCHETYPE: Archetype = Archetype {
    id: "fox",
    name: "The Curious Fox",
    emoji: "🦊",
    stress: ScoreRange::new(1, 10),
    energy: ScoreRange::new(1, 10),
    impulsivity_ratio: 1.0,
    risk_categories: &[],
    advice: "Your spending is in balance today. Keep observing how your mood moves your money.",
    phrases: &[
        "Curiosity is your best financial tool",
        "Every number tells a story",
        "Balanced, for now",
    ],
    color: "#eab308",
};

/// Classify an emotional reading. First table match wins; anything
/// uncovered (including out-of-scale values) falls back to the default.
pub fn detect(energy: u8, stress: u8) -> &'static Archetype {
    let archetype = ARCHETYPES
        .iter()
        .find(|a| a.matches(energy, stress))
        .unwrap_or(&DEFAULT_ARCHETYPE);

    tracing::debug!(
        energy,
        stress,
        archetype = archetype.id,
        "Archetype detected"
    );

    archetype
}

/// Whether any table archetype covers the reading
pub fn covers(energy: u8, stress: u8) -> bool {
    ARCHETYPES.iter().any(|a| a.matches(energy, stress))
}

/// Look up an archetype by id (including the default)
pub fn by_id(id: &str) -> Option<&'static Archetype> {
    ARCHETYPES
        .iter()
        .chain(std::iter::once(&DEFAULT_ARCHETYPE))
        .find(|a| a.id == id)
}

/// How an archetype inflates a base spending amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactResult {
    pub base_amount: f64,
    pub adjusted_amount: f64,
    /// adjusted - base
    pub delta: f64,
    /// Rounded (ratio - 1) * 100; ignores time-of-day modifiers
    pub percent_delta: i32,
    pub risk_categories: Vec<String>,
    pub advice: String,
    pub late_night: bool,
    pub weekend: bool,
}

/// Apply an archetype's impulsivity ratio and the context's time modifiers
/// to a base amount. Late-night and weekend modifiers compound.
pub fn impact(
    archetype: &Archetype,
    base_amount: f64,
    context: Option<&EmotionalContext>,
    settings: &ImpactSettings,
) -> ImpactResult {
    let late_night = context.is_some_and(|c| c.hour >= settings.late_night_hour);
    let weekend = context.is_some_and(EmotionalContext::is_weekend);

    let mut adjusted_amount = base_amount * archetype.impulsivity_ratio;
    if late_night {
        adjusted_amount *= settings.late_night_multiplier;
    }
    if weekend {
        adjusted_amount *= settings.weekend_multiplier;
    }

    ImpactResult {
        base_amount,
        adjusted_amount,
        delta: adjusted_amount - base_amount,
        percent_delta: ((archetype.impulsivity_ratio - 1.0) * 100.0).round() as i32,
        risk_categories: archetype
            .risk_categories
            .iter()
            .map(|c| c.to_string())
            .collect(),
        advice: archetype.advice.to_string(),
        late_night,
        weekend,
    }
}
