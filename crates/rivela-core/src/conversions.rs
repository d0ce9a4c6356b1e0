//! Visual conversions
//!
//! Turns an amount of money into "N real-world items" (e.g. "600 € is 500
//! espressos"). Prices are held in integer cents so that the quantity and
//! remainder arithmetic is exact.
//!
//! Ranking is deterministic (`rank_conversions`); attaching a narrative
//! phrase needs a random source, which the caller injects
//! (`find_best_conversions`).

use rand::Rng;
use serde::Serialize;

use crate::config::ConversionSettings;

/// A priced real-world item
#[derive(Debug, PartialEq, Serialize)]
pub struct ConversionItem {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub price_cents: u64,
}

impl ConversionItem {
    pub fn price(&self) -> f64 {
        self.price_cents as f64 / 100.0
    }
}

/// A named group of items
#[derive(Debug, PartialEq, Serialize)]
pub struct ConversionCategory {
    pub id: &'static str,
    pub items: &'static [ConversionItem],
}

/// Conversion table, scanned in declaration order (which is also the
/// tie-break order when ranking)
pub static CONVERSION_TABLE: &[ConversionCategory] = &[
    ConversionCategory {
        id: "coffee",
        items: &[
            ConversionItem { id: "espresso", name: "espresso", emoji: "☕", price_cents: 120 },
            ConversionItem { id: "cappuccino", name: "cappuccino", emoji: "☕", price_cents: 150 },
        ],
    },
    ConversionCategory {
        id: "food",
        items: &[
            ConversionItem { id: "pizza", name: "pizza margherita", emoji: "🍕", price_cents: 800 },
            ConversionItem { id: "sushi_dinner", name: "sushi dinner", emoji: "🍣", price_cents: 3500 },
            ConversionItem { id: "grocery_shop", name: "weekly grocery shop", emoji: "🛒", price_cents: 8000 },
        ],
    },
    ConversionCategory {
        id: "entertainment",
        items: &[
            ConversionItem { id: "cinema_ticket", name: "cinema ticket", emoji: "🎬", price_cents: 900 },
            ConversionItem { id: "streaming_month", name: "month of streaming", emoji: "📺", price_cents: 1299 },
            ConversionItem { id: "concert_ticket", name: "concert ticket", emoji: "🎫", price_cents: 6000 },
        ],
    },
    ConversionCategory {
        id: "travel",
        items: &[
            ConversionItem { id: "lowcost_flight", name: "low-cost flight", emoji: "✈️", price_cents: 4900 },
            ConversionItem { id: "rome_weekend", name: "weekend in Rome", emoji: "🏛️", price_cents: 25000 },
            ConversionItem { id: "sea_week", name: "week by the sea", emoji: "🏖️", price_cents: 90000 },
        ],
    },
    ConversionCategory {
        id: "tech",
        items: &[
            ConversionItem { id: "earbuds", name: "pair of wireless earbuds", emoji: "🎧", price_cents: 27900 },
            ConversionItem { id: "smartphone", name: "flagship smartphone", emoji: "📱", price_cents: 99900 },
        ],
    },
    ConversionCategory {
        id: "time",
        items: &[
            ConversionItem { id: "hour_of_work", name: "hour of minimum-wage work", emoji: "⏱️", price_cents: 950 },
        ],
    },
];

/// Qualitative emotional weight of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTag {
    Revealing,
    Shocking,
    Motivating,
    Surprising,
    Neutral,
}

impl ImpactTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revealing => "revealing",
            Self::Shocking => "shocking",
            Self::Motivating => "motivating",
            Self::Surprising => "surprising",
            Self::Neutral => "neutral",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Revealing => "#8b5cf6",
            Self::Shocking => "#ef4444",
            Self::Motivating => "#10b981",
            Self::Surprising => "#f59e0b",
            Self::Neutral => "#64748b",
        }
    }

    /// Phrase templates; `{quantity}` and `{item}` are substituted
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Self::Revealing => &[
                "That is {quantity}× {item}. Now you see where it goes.",
                "Put another way: {quantity}× {item}.",
                "{quantity}× {item}. Numbers don't lie.",
            ],
            Self::Shocking => &[
                "{quantity}× {item}?! Yes, really.",
                "Picture {quantity}× {item} lined up on the table.",
                "{quantity}× {item}. Take a breath.",
            ],
            Self::Motivating => &[
                "Save this and it becomes {quantity}× {item}.",
                "{quantity}× {item} is within reach.",
                "Imagine {quantity}× {item} instead.",
            ],
            Self::Surprising => &[
                "Who knew? {quantity}× {item}.",
                "Plot twist: {quantity}× {item}.",
                "{quantity}× {item}, more than you'd guess.",
            ],
            Self::Neutral => &[
                "About {quantity}× {item}.",
                "Roughly {quantity}× {item}.",
                "Equivalent to {quantity}× {item}.",
            ],
        }
    }
}

impl std::fmt::Display for ImpactTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed pattern rules mapping (category, item, quantity) to a tag
pub fn classify_impact(category: &str, item: &str, quantity: u64) -> ImpactTag {
    match (category, item) {
        (_, "hour_of_work") => ImpactTag::Revealing,
        ("coffee", _) if quantity >= 100 => ImpactTag::Shocking,
        ("travel", _) => ImpactTag::Motivating,
        ("tech", _) => ImpactTag::Revealing,
        _ if quantity > 50 => ImpactTag::Surprising,
        _ => ImpactTag::Neutral,
    }
}

/// A ranked conversion before narration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionMatch {
    pub category: &'static str,
    pub item_id: &'static str,
    pub item: &'static str,
    pub emoji: &'static str,
    pub unit_price: f64,
    pub quantity: u64,
    /// quantity × unit price
    pub amount_used: f64,
    pub remainder: f64,
    pub percent_used: f64,
    pub score: f64,
}

/// A ranked conversion with its emotional framing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub details: ConversionMatch,
    pub impact_tag: ImpactTag,
    pub color: &'static str,
    pub phrase: String,
}

/// Convert a money amount to cents. Non-positive or non-finite amounts
/// have no conversions.
fn to_cents(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let cents = (amount * 100.0).round();
    if cents < 1.0 {
        return None;
    }
    Some(cents as u64)
}

/// Rank every table item against an amount and keep the best
pub fn rank_conversions(amount: f64, settings: &ConversionSettings) -> Vec<ConversionMatch> {
    let Some(cents) = to_cents(amount) else {
        return Vec::new();
    };

    let mut matches: Vec<ConversionMatch> = CONVERSION_TABLE
        .iter()
        .flat_map(|category| category.items.iter().map(move |item| (category, item)))
        .filter_map(|(category, item)| {
            let quantity = cents / item.price_cents;
            if quantity == 0 {
                return None;
            }
            let remainder = cents % item.price_cents;
            let used = cents - remainder;
            let percent_used = used as f64 / cents as f64 * 100.0;
            if percent_used < settings.min_percent_used {
                return None;
            }

            let bonus = if quantity <= 10 {
                quantity as f64 * 5.0
            } else {
                50.0
            };

            Some(ConversionMatch {
                category: category.id,
                item_id: item.id,
                item: item.name,
                emoji: item.emoji,
                unit_price: item.price(),
                quantity,
                amount_used: used as f64 / 100.0,
                remainder: remainder as f64 / 100.0,
                percent_used,
                score: percent_used + bonus,
            })
        })
        .collect();

    // Stable sort: equal scores keep table order
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(settings.max_results);
    matches
}

/// Attach the impact tag and a randomly chosen phrase to a match
pub fn narrate<R: Rng + ?Sized>(details: ConversionMatch, rng: &mut R) -> Conversion {
    let impact_tag = classify_impact(details.category, details.item_id, details.quantity);
    let pool = impact_tag.phrases();
    let template = pool[rng.gen_range(0..pool.len())];
    let phrase = template
        .replace("{quantity}", &details.quantity.to_string())
        .replace("{item}", details.item);

    Conversion {
        details,
        impact_tag,
        color: impact_tag.color(),
        phrase,
    }
}

/// Best conversions for an amount, narrated with the given random source
pub fn find_best_conversions<R: Rng + ?Sized>(
    amount: f64,
    settings: &ConversionSettings,
    rng: &mut R,
) -> Vec<Conversion> {
    let conversions: Vec<Conversion> = rank_conversions(amount, settings)
        .into_iter()
        .map(|m| narrate(m, rng))
        .collect();

    tracing::debug!(amount, count = conversions.len(), "Conversions found");
    conversions
}
