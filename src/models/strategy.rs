//! Match strategies and the win-probability / injury-chance model.

use crate::models::error::CareerError;
use crate::models::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MIN_WIN_PROBABILITY: f64 = 5.0;
pub const MAX_WIN_PROBABILITY: f64 = 95.0;

/// Risk profile chosen by the player for one match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Conservative,
    #[default]
    Normal,
    Aggressive,
    Desperate,
}

/// Fixed numbers behind a strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyProfile {
    /// Percentage points added to the win probability.
    pub win_rate_adjust: f64,
    /// Base chance (0..1) of picking up an injury in the match.
    pub injury_rate: f64,
    pub energy_cost: u32,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Conservative,
        Strategy::Normal,
        Strategy::Aggressive,
        Strategy::Desperate,
    ];

    pub fn profile(&self) -> StrategyProfile {
        match self {
            Strategy::Conservative => StrategyProfile {
                win_rate_adjust: -10.0,
                injury_rate: 0.05,
                energy_cost: 5,
            },
            Strategy::Normal => StrategyProfile {
                win_rate_adjust: 0.0,
                injury_rate: 0.15,
                energy_cost: 10,
            },
            Strategy::Aggressive => StrategyProfile {
                win_rate_adjust: 15.0,
                injury_rate: 0.30,
                energy_cost: 15,
            },
            Strategy::Desperate => StrategyProfile {
                win_rate_adjust: 25.0,
                injury_rate: 0.50,
                energy_cost: 20,
            },
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Strategy::Conservative => "conservative",
            Strategy::Normal => "normal",
            Strategy::Aggressive => "aggressive",
            Strategy::Desperate => "desperate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Conservative => "Conservative play",
            Strategy::Normal => "Normal play",
            Strategy::Aggressive => "Aggressive play",
            Strategy::Desperate => "All-out gamble",
        }
    }
}

impl FromStr for Strategy {
    type Err = CareerError;

    /// Accepts the lowercase key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CareerError::UnknownStrategy(s.to_string()))
    }
}

/// Form bonus; first matching band wins.
pub fn form_adjustment(form: u32) -> f64 {
    if form >= 90 {
        10.0
    } else if form >= 70 {
        5.0
    } else if form <= 30 {
        -10.0
    } else if form <= 20 {
        // Unreachable after the <= 30 band; kept to mirror the band table.
        -20.0
    } else {
        0.0
    }
}

/// Win probability in percent, clamped to `[5, 95]`.
pub fn win_probability(human_overall: i32, opponent_overall: i32, strategy: Strategy, human_form: u32) -> f64 {
    let base = 50.0 + (human_overall - opponent_overall) as f64 * 0.5;
    let total = base + form_adjustment(human_form) + strategy.profile().win_rate_adjust;
    total.clamp(MIN_WIN_PROBABILITY, MAX_WIN_PROBABILITY)
}

/// Chance (0..1) of an injury under `strategy`, scaled by form.
pub fn injury_chance(strategy: Strategy, form: u32) -> f64 {
    let base = strategy.profile().injury_rate;
    if form >= 80 {
        base * 0.7
    } else if form <= 40 {
        base * 1.3
    } else {
        base
    }
}

/// One fresh draw against `injury_chance`.
pub fn roll_strategy_injury(strategy: Strategy, form: u32, rng: &mut dyn RandomSource) -> bool {
    rng.next_f64() < injury_chance(strategy, form)
}
