//! Simulated opponents: randomized attributes/skills scaled by a difficulty level.

use crate::models::player::{base_overall, Attributes, Gender, Skills};
use crate::models::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Hard cap on any generated attribute or skill.
pub const STAT_CAP: i32 = 95;

const ATP_NAMES: [&str; 20] = [
    "Djokovic", "Nadal", "Alcaraz", "Sinner", "Medvedev",
    "Rune", "Zverev", "Rublev", "Fritz", "Ruud",
    "Dimitrov", "Tsitsipas", "Paul", "Bublik", "Griekspoor",
    "Tabilo", "Korda", "Shelton", "Baez", "Cerundolo",
];

const WTA_NAMES: [&str; 20] = [
    "Swiatek", "Sabalenka", "Gauff", "Rybakina", "Pegula",
    "Vondrousova", "Collins", "Sakkari", "Zheng", "Ostapenko",
    "Kudermetova", "Kasatkina", "Garcia", "Bencic", "Badosa",
    "Maia", "Vekic", "Krejcikova", "Stephens", "Osaka",
];

/// A generated competitor. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub ranking: u32,
    pub level: i32,
    /// Display only; duplicates across a draw are expected.
    pub name: String,
    pub gender: Gender,
    pub attributes: Attributes,
    pub skills: Skills,
}

impl Opponent {
    /// Generate an opponent. Attribute rolls come first (strength..mentality),
    /// then skills (serve..return game), then the name.
    pub fn generate(ranking: u32, level: i32, gender: Gender, rng: &mut dyn RandomSource) -> Self {
        let attributes = generate_attributes(level, rng);
        let skills = generate_skills(level, rng);
        let name = generate_name(gender, rng);
        Self {
            ranking,
            level,
            name,
            gender,
            attributes,
            skills,
        }
    }

    /// floor((avg(attributes) * 6 + avg(skills) * 4) / 10)
    pub fn overall_skill(&self) -> i32 {
        base_overall(&self.attributes, &self.skills)
    }
}

fn roll_stat(base: i32, spread: u32, rng: &mut dyn RandomSource) -> i32 {
    (base + rng.below(spread) as i32).min(STAT_CAP)
}

fn generate_attributes(level: i32, rng: &mut dyn RandomSource) -> Attributes {
    let base = 50 + level * 5;
    Attributes {
        strength: roll_stat(base, 20, rng),
        speed: roll_stat(base, 20, rng),
        technique: roll_stat(base, 20, rng),
        endurance: roll_stat(base, 20, rng),
        mentality: roll_stat(base, 20, rng),
    }
}

fn generate_skills(level: i32, rng: &mut dyn RandomSource) -> Skills {
    let base = 45 + level * 5;
    Skills {
        serve: roll_stat(base, 25, rng),
        forehand: roll_stat(base, 25, rng),
        backhand: roll_stat(base, 25, rng),
        volley: roll_stat(base, 25, rng),
        return_game: roll_stat(base, 25, rng),
    }
}

fn generate_name(gender: Gender, rng: &mut dyn RandomSource) -> String {
    let pool: &[&str] = match gender {
        Gender::Male => &ATP_NAMES,
        Gender::Female => &WTA_NAMES,
    };
    pool[rng.below(pool.len() as u32) as usize].to_string()
}
