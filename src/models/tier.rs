//! Tournament tiers: per-gender configuration tables, base opponent skill and ranking.

use crate::models::error::CareerError;
use crate::models::player::Gender;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tournament category code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierCode {
    Junior,
    Futures,
    Challenger,
    Atp125,
    Atp250,
    Atp500,
    Atp1000,
    Wta125,
    Wta250,
    Wta500,
    Wta1000,
    GrandSlam,
}

impl TierCode {
    pub const ALL: [TierCode; 12] = [
        TierCode::Junior,
        TierCode::Futures,
        TierCode::Challenger,
        TierCode::Atp125,
        TierCode::Atp250,
        TierCode::Atp500,
        TierCode::Atp1000,
        TierCode::Wta125,
        TierCode::Wta250,
        TierCode::Wta500,
        TierCode::Wta1000,
        TierCode::GrandSlam,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TierCode::Junior => "JUNIOR",
            TierCode::Futures => "FUTURES",
            TierCode::Challenger => "CHALLENGER",
            TierCode::Atp125 => "ATP125",
            TierCode::Atp250 => "ATP250",
            TierCode::Atp500 => "ATP500",
            TierCode::Atp1000 => "ATP1000",
            TierCode::Wta125 => "WTA125",
            TierCode::Wta250 => "WTA250",
            TierCode::Wta500 => "WTA500",
            TierCode::Wta1000 => "WTA1000",
            TierCode::GrandSlam => "GRAND_SLAM",
        }
    }

    /// Centre of the opponent level bands for this tier.
    pub fn base_skill(&self) -> i32 {
        match self {
            TierCode::Junior => 20,
            TierCode::Futures => 35,
            TierCode::Challenger => 45,
            TierCode::Atp125 | TierCode::Wta125 => 50,
            TierCode::Atp250 | TierCode::Wta250 => 55,
            TierCode::Atp500 | TierCode::Wta500 => 65,
            TierCode::Atp1000 | TierCode::Wta1000 => 75,
            TierCode::GrandSlam => 80,
        }
    }

    /// Ranking given to generated opponents before any spread.
    pub fn base_ranking(&self) -> u32 {
        match self {
            TierCode::Junior => 500,
            TierCode::Futures => 400,
            TierCode::Challenger => 200,
            TierCode::Atp125 | TierCode::Wta125 => 100,
            TierCode::Atp250 | TierCode::Wta250 => 100,
            TierCode::Atp500 | TierCode::Wta500 => 50,
            TierCode::Atp1000 | TierCode::Wta1000 => 20,
            TierCode::GrandSlam => 10,
        }
    }

    pub fn is_grand_slam(&self) -> bool {
        *self == TierCode::GrandSlam
    }
}

impl FromStr for TierCode {
    type Err = CareerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TierCode::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CareerError::UnknownTier(s.to_string()))
    }
}

/// Metadata for one tier on one tour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierConfig {
    pub tier: TierCode,
    pub name: String,
    pub gender: Gender,
    pub seed_count: u32,
    pub total_rounds: u32,
    pub prize_by_round: Vec<u64>,
    pub champion_prize: u64,
    pub points_by_round: Vec<u64>,
    pub champion_points: u64,
}

impl TierConfig {
    #[allow(clippy::too_many_arguments)]
    fn new(
        tier: TierCode,
        gender: Gender,
        name: &str,
        seed_count: u32,
        total_rounds: u32,
        prize_by_round: &[u64],
        champion_prize: u64,
        points_by_round: &[u64],
        champion_points: u64,
    ) -> Self {
        Self {
            tier,
            name: name.to_string(),
            gender,
            seed_count,
            total_rounds,
            prize_by_round: prize_by_round.to_vec(),
            champion_prize,
            points_by_round: points_by_round.to_vec(),
            champion_points,
        }
    }

    /// Out-of-range rounds pay nothing.
    pub fn prize_at(&self, index: usize) -> u64 {
        self.prize_by_round.get(index).copied().unwrap_or(0)
    }

    /// Out-of-range rounds earn nothing.
    pub fn points_at(&self, index: usize) -> u64 {
        self.points_by_round.get(index).copied().unwrap_or(0)
    }

    /// Entry fee: 2% of the champion's prize, floored.
    pub fn entry_cost(&self) -> u64 {
        self.champion_prize * 2 / 100
    }

    pub fn total_slots(&self) -> usize {
        1usize << self.total_rounds
    }
}

/// Config for `tier` on `gender`'s tour.
pub fn tier_config(gender: Gender, tier: TierCode) -> Result<TierConfig, CareerError> {
    let config = match gender {
        Gender::Male => atp_config(tier),
        Gender::Female => wta_config(tier),
    };
    config.ok_or(CareerError::TierNotOffered { tier, gender })
}

fn atp_config(tier: TierCode) -> Option<TierConfig> {
    use TierCode::*;
    let g = Gender::Male;
    let config = match tier {
        Junior => TierConfig::new(tier, g, "Junior Championships", 0, 3, &[0, 0, 50, 100, 200], 500, &[0, 0, 10, 20, 40], 100),
        Futures => TierConfig::new(tier, g, "Futures", 0, 4, &[0, 0, 50, 100, 200, 400], 1000, &[0, 0, 20, 40, 80, 150], 300),
        Challenger => TierConfig::new(tier, g, "Challenger", 4, 5, &[0, 0, 100, 200, 400, 800, 2000], 3000, &[0, 0, 50, 100, 200, 400, 800], 1500),
        Atp125 => TierConfig::new(tier, g, "ATP 125 Challenger", 4, 5, &[0, 0, 150, 300, 600, 1200, 2500], 5000, &[0, 0, 30, 60, 120, 240, 400], 250),
        Atp250 => TierConfig::new(tier, g, "ATP 250 Tour", 8, 5, &[0, 0, 200, 400, 800, 1500, 5000], 12000, &[0, 0, 20, 50, 100, 200, 500], 250),
        Atp500 => TierConfig::new(tier, g, "ATP 500 Tour", 8, 5, &[0, 0, 400, 800, 1600, 3000, 10000], 25000, &[0, 0, 50, 100, 200, 400, 500], 500),
        Atp1000 => TierConfig::new(tier, g, "ATP Masters 1000", 8, 5, &[0, 0, 800, 1600, 3200, 6000, 20000], 50000, &[0, 0, 100, 200, 400, 800, 1000], 1000),
        GrandSlam => TierConfig::new(tier, g, "Grand Slam", 16, 6, &[0, 0, 2000, 5000, 10000, 20000, 50000, 150000], 200000, &[0, 0, 500, 1000, 2000, 4000, 8000, 20000], 2000),
        Wta125 | Wta250 | Wta500 | Wta1000 => return None,
    };
    Some(config)
}

fn wta_config(tier: TierCode) -> Option<TierConfig> {
    use TierCode::*;
    let g = Gender::Female;
    let config = match tier {
        Junior => TierConfig::new(tier, g, "Junior Championships", 0, 3, &[0, 0, 50, 100, 200], 500, &[0, 0, 10, 20, 40], 100),
        Futures => TierConfig::new(tier, g, "Futures", 0, 4, &[0, 0, 50, 100, 200, 400], 1000, &[0, 0, 20, 40, 80, 150], 300),
        Challenger => TierConfig::new(tier, g, "Challenger", 4, 5, &[0, 0, 100, 200, 400, 800, 2000], 3000, &[0, 0, 50, 100, 200, 400, 800], 1500),
        Wta125 => TierConfig::new(tier, g, "WTA 125 Challenger", 4, 5, &[0, 0, 150, 300, 600, 1200, 2500], 5000, &[0, 0, 30, 60, 120, 240, 400], 250),
        Wta250 => TierConfig::new(tier, g, "WTA 250 Tour", 8, 5, &[0, 0, 200, 400, 800, 1500, 5000], 12000, &[0, 0, 20, 50, 100, 200, 500], 280),
        Wta500 => TierConfig::new(tier, g, "WTA 500 Tour", 8, 5, &[0, 0, 400, 800, 1600, 3000, 10000], 25000, &[0, 0, 50, 100, 200, 400, 500], 500),
        Wta1000 => TierConfig::new(tier, g, "WTA 1000", 8, 5, &[0, 0, 800, 1600, 3200, 6000, 20000], 50000, &[0, 0, 100, 200, 400, 800, 1000], 1000),
        GrandSlam => TierConfig::new(tier, g, "Grand Slam", 16, 6, &[0, 0, 2000, 5000, 10000, 20000, 50000, 150000], 200000, &[0, 0, 500, 1000, 2000, 4000, 8000, 20000], 2000),
        Atp125 | Atp250 | Atp500 | Atp1000 => return None,
    };
    Some(config)
}
