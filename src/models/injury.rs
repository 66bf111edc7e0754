//! Injury table: weighted severity bands and the attribute penalties they carry.

use crate::models::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Cumulative upper bounds of each band, in table order.
pub const INJURY_BANDS: [(f64, InjuryType); 7] = [
    (0.60, InjuryType::None),
    (0.80, InjuryType::LightStrain),
    (0.90, InjuryType::MuscleSoreness),
    (0.95, InjuryType::Sprain),
    (0.98, InjuryType::TennisElbow),
    (0.995, InjuryType::Meniscus),
    (1.0, InjuryType::SeasonEnding),
];

/// Start of the first band that is an actual injury.
pub const FIRST_INJURY_BOUND: f64 = 0.60;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryType {
    None,
    /// 1 week, speed.
    LightStrain,
    /// 1 week, strength.
    MuscleSoreness,
    /// Minor joint, 2 weeks.
    Sprain,
    /// Tendon, 3 weeks.
    TennisElbow,
    /// Structural, 4 weeks, several attributes.
    Meniscus,
    /// 8 weeks, every attribute.
    SeasonEnding,
}

/// Per-attribute penalty (all values are <= 0).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InjuryPenalty {
    pub strength: i32,
    pub speed: i32,
    pub technique: i32,
    pub endurance: i32,
    pub mentality: i32,
}

impl InjuryPenalty {
    /// Sum of absolute penalties.
    pub fn magnitude(&self) -> i32 {
        self.strength.abs()
            + self.speed.abs()
            + self.technique.abs()
            + self.endurance.abs()
            + self.mentality.abs()
    }
}

impl InjuryType {
    /// Map a draw in `[0, 1)` to its band.
    pub fn from_draw(draw: f64) -> Self {
        INJURY_BANDS
            .iter()
            .find(|(bound, _)| draw < *bound)
            .map(|(_, kind)| *kind)
            .unwrap_or(InjuryType::SeasonEnding)
    }

    pub fn duration_weeks(&self) -> u32 {
        match self {
            InjuryType::None => 0,
            InjuryType::LightStrain | InjuryType::MuscleSoreness => 1,
            InjuryType::Sprain => 2,
            InjuryType::TennisElbow => 3,
            InjuryType::Meniscus => 4,
            InjuryType::SeasonEnding => 8,
        }
    }

    pub fn penalty(&self) -> InjuryPenalty {
        let none = InjuryPenalty::default();
        match self {
            InjuryType::None => none,
            InjuryType::LightStrain => InjuryPenalty { speed: -10, ..none },
            InjuryType::MuscleSoreness => InjuryPenalty { strength: -10, ..none },
            InjuryType::Sprain => InjuryPenalty { speed: -15, ..none },
            InjuryType::TennisElbow => InjuryPenalty { technique: -20, ..none },
            InjuryType::Meniscus => InjuryPenalty {
                strength: -15,
                speed: -15,
                technique: -10,
                ..none
            },
            InjuryType::SeasonEnding => InjuryPenalty {
                strength: -20,
                speed: -20,
                technique: -20,
                endurance: -20,
                mentality: -20,
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InjuryType::None => "None",
            InjuryType::LightStrain => "Light strain",
            InjuryType::MuscleSoreness => "Muscle soreness",
            InjuryType::Sprain => "Sprain",
            InjuryType::TennisElbow => "Tennis elbow",
            InjuryType::Meniscus => "Meniscus tear",
            InjuryType::SeasonEnding => "Season-ending injury",
        }
    }

    pub fn is_injury(&self) -> bool {
        *self != InjuryType::None
    }
}

/// One uniform draw mapped through the band table.
pub fn roll_injury(rng: &mut dyn RandomSource) -> InjuryType {
    InjuryType::from_draw(rng.next_f64())
}

/// Severity of an injury that is already known to have happened: the draw is
/// rescaled onto the non-`None` part of the table.
pub fn roll_injury_severity(rng: &mut dyn RandomSource) -> InjuryType {
    let draw = FIRST_INJURY_BOUND + rng.next_f64() * (1.0 - FIRST_INJURY_BOUND);
    InjuryType::from_draw(draw)
}
