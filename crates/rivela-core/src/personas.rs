//! Persona detection
//!
//! Scores the user profile against a fixed set of personas and picks the
//! closest one. Ties go to the persona declared first in [`PERSONAS`].

use serde::Serialize;

use crate::models::UserProfile;

/// Number of leading characters of a canonical question used for matching
const QUESTION_PREFIX_LEN: usize = 10;

/// A demographic/behavioural profile with its scoring rubric
#[derive(Debug, PartialEq, Serialize)]
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u32,
    pub label: &'static str,
    /// Monthly income band, inclusive
    pub income_min: f64,
    pub income_max: f64,
    pub questions: &'static [&'static str],
    /// Typical stress level (1-10)
    pub stress_baseline: u8,
    pub recommendation: &'static str,
}

impl Persona {
    pub fn income_in_band(&self, income: f64) -> bool {
        self.income_min <= income && income <= self.income_max
    }
}

/// Persona table; declaration order is the tie-break order
pub static PERSONAS: &[Persona] = &[
    Persona {
        id: "giulia",
        name: "Giulia",
        age: 28,
        label: "Young professional in the city",
        income_min: 1400.0,
        income_max: 2500.0,
        questions: &[
            "Why can't I save anything at the end of the month?",
            "How much should I spend on rent?",
            "Is it worth buying a car?",
        ],
        stress_baseline: 6,
        recommendation: "Automate a 10% transfer to savings on payday, before you can spend it.",
    },
    Persona {
        id: "marco",
        name: "Marco",
        age: 35,
        label: "Parent managing a family budget",
        income_min: 2500.0,
        income_max: 4500.0,
        questions: &[
            "How much does raising a child really cost?",
            "How do I build an emergency fund for my family?",
            "Should I pay off the mortgage early?",
        ],
        stress_baseline: 7,
        recommendation: "Build a family emergency fund that covers six months of fixed expenses.",
    },
    Persona {
        id: "luca",
        name: "Luca",
        age: 22,
        label: "Student with a part-time job",
        income_min: 400.0,
        income_max: 1200.0,
        questions: &[
            "Can I afford to move out?",
            "How do I stop spending on food delivery?",
            "Is it too early to start investing?",
        ],
        stress_baseline: 5,
        recommendation: "Track every small expense for 30 days: on a tight budget the small leaks matter most.",
    },
    Persona {
        id: "elena",
        name: "Elena",
        age: 45,
        label: "Freelancer with irregular income",
        income_min: 1500.0,
        income_max: 6000.0,
        questions: &[
            "How do I handle months with no income?",
            "How much tax should I set aside?",
            "How do I plan for retirement as a freelancer?",
        ],
        stress_baseline: 8,
        recommendation: "Pay yourself a fixed monthly salary from a buffer account to smooth out irregular income.",
    },
    Persona {
        id: "roberto",
        name: "Roberto",
        age: 58,
        label: "Pre-retiree planning ahead",
        income_min: 2000.0,
        income_max: 5000.0,
        questions: &[
            "Will I have enough money for retirement?",
            "Should I help my children buy a house?",
            "How do I reduce my debts before retiring?",
        ],
        stress_baseline: 4,
        recommendation: "Clear remaining debts before retirement and review your pension projection once a year.",
    },
];

/// Score breakdown for one persona
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaScore {
    pub persona_id: &'static str,
    pub age: f64,
    pub income: f64,
    pub questions: f64,
    pub stress: f64,
    pub total: f64,
}

fn question_prefix(question: &str) -> String {
    question
        .chars()
        .take(QUESTION_PREFIX_LEN)
        .collect::<String>()
        .to_lowercase()
}

/// Score a single persona against a profile
pub fn score(persona: &'static Persona, profile: &UserProfile) -> PersonaScore {
    let age = profile
        .age
        .map(|age| (10.0 - (age as f64 - persona.age as f64).abs()).max(0.0))
        .unwrap_or(0.0);

    let income = if persona.income_in_band(profile.income) {
        15.0
    } else {
        0.0
    };

    let asked: Vec<String> = profile
        .asked_questions
        .iter()
        .map(|q| q.to_lowercase())
        .collect();
    let matches = persona
        .questions
        .iter()
        .map(|canonical| question_prefix(canonical))
        .map(|prefix| asked.iter().filter(|q| q.contains(&prefix)).count())
        .sum::<usize>();
    let questions = matches as f64 * 10.0;

    let stress = profile
        .emotional_context
        .as_ref()
        .map(|ctx| (5.0 - (ctx.stress as f64 - persona.stress_baseline as f64).abs()).max(0.0))
        .unwrap_or(0.0);

    PersonaScore {
        persona_id: persona.id,
        age,
        income,
        questions,
        stress,
        total: age + income + questions + stress,
    }
}

/// Scores for every persona, in table order
pub fn score_all(profile: &UserProfile) -> Vec<PersonaScore> {
    PERSONAS.iter().map(|p| score(p, profile)).collect()
}

/// Pick the best-matching persona
pub fn detect(profile: &UserProfile) -> &'static Persona {
    let mut best = &PERSONAS[0];
    let mut best_score = f64::NEG_INFINITY;

    for persona in PERSONAS {
        let s = score(persona, profile);
        // Strictly greater: earlier personas win ties
        if s.total > best_score {
            best = persona;
            best_score = s.total;
        }
    }

    tracing::debug!(persona = best.id, score = best_score, "Persona detected");
    best
}

/// Look up a persona by id
pub fn by_id(id: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.id == id)
}
