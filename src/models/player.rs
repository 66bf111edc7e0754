//! The human player's career profile and the stat blocks shared with opponents.

use crate::models::injury::{InjuryPenalty, InjuryType};
use crate::models::random::RandomSource;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Physical/mental attributes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub speed: i32,
    pub technique: i32,
    pub endurance: i32,
    pub mentality: i32,
}

impl Attributes {
    /// Floored mean.
    pub fn average(&self) -> i32 {
        (self.strength + self.speed + self.technique + self.endurance + self.mentality).div_euclid(5)
    }
}

/// Stroke skills.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub serve: i32,
    pub forehand: i32,
    pub backhand: i32,
    pub volley: i32,
    pub return_game: i32,
}

impl Skills {
    /// Floored mean.
    pub fn average(&self) -> i32 {
        (self.serve + self.forehand + self.backhand + self.volley + self.return_game).div_euclid(5)
    }
}

/// Shared overall formula: floor((avg(attributes) * 6 + avg(skills) * 4) / 10).
pub fn base_overall(attributes: &Attributes, skills: &Skills) -> i32 {
    (attributes.average() * 6 + skills.average() * 4).div_euclid(10)
}

/// Active injury, if any.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InjuryStatus {
    pub kind: Option<InjuryType>,
    pub weeks_remaining: u32,
}

impl InjuryStatus {
    pub fn is_injured(&self) -> bool {
        self.kind.is_some() && self.weeks_remaining > 0
    }
}

/// Minimum energy needed to enter a tournament or play a round.
pub const MIN_ENERGY_TO_PLAY: u32 = 10;
/// Unranked players start here.
pub const UNRANKED: u32 = 1000;
/// Fatigue above this costs form on every further match.
pub const FORM_DECAY_FATIGUE: u32 = 70;
/// Energy given back by a rest.
pub const REST_ENERGY: u32 = 30;

/// The human's career record. The engine never owns it; match play updates it
/// after each resolved round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub career_year: u32,
    /// 0..=100
    pub energy: u32,
    pub money: u64,
    pub ranking: u32,
    pub career_high_ranking: u32,
    pub ranking_points: u64,
    pub career_earnings: u64,
    pub titles: u32,
    pub grand_slams: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub attributes: Attributes,
    pub skills: Skills,
    /// 0..=100
    pub form: u32,
    /// 0..=100
    pub fatigue: u32,
    pub injury: InjuryStatus,
}

impl PlayerProfile {
    /// A 14-year-old newcomer with the starting stat line.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            age: 14,
            career_year: 0,
            energy: 100,
            money: 1000,
            ranking: UNRANKED,
            career_high_ranking: UNRANKED,
            ranking_points: 0,
            career_earnings: 0,
            titles: 0,
            grand_slams: 0,
            matches_played: 0,
            matches_won: 0,
            attributes: Attributes {
                strength: 30,
                speed: 40,
                technique: 35,
                endurance: 35,
                mentality: 30,
            },
            skills: Skills {
                serve: 30,
                forehand: 35,
                backhand: 30,
                volley: 25,
                return_game: 30,
            },
            form: 80,
            fatigue: 0,
            injury: InjuryStatus::default(),
        }
    }

    /// Penalty of the active injury (zero when healthy).
    pub fn injury_penalty(&self) -> InjuryPenalty {
        match self.injury.kind {
            Some(kind) if self.injury.is_injured() => kind.penalty(),
            _ => InjuryPenalty::default(),
        }
    }

    /// Base overall minus fatigue and injury penalties, clamped to 1..=100.
    pub fn overall_skill(&self) -> i32 {
        let mut overall = base_overall(&self.attributes, &self.skills);
        overall -= (self.fatigue / 10) as i32;
        overall -= self.injury_penalty().magnitude() / 2;
        overall.clamp(1, 100)
    }

    /// Percentage of matches won (0 when none played).
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            return 0.0;
        }
        self.matches_won as f64 / self.matches_played as f64 * 100.0
    }

    /// Pay the energy cost of a match; the same amount turns into fatigue.
    /// A worn-out player (fatigue over 70) also loses 5 form, down to 10.
    pub fn spend_energy(&mut self, cost: u32) {
        self.energy = self.energy.saturating_sub(cost);
        self.fatigue = (self.fatigue + cost).min(100);
        if self.fatigue > FORM_DECAY_FATIGUE {
            self.form = self.form.saturating_sub(5).max(10);
        }
    }

    /// Take time off: fatigue drops by 15..=25, energy comes back by 30, and
    /// half the time form picks up by 5..=15. Returns the fatigue recovered.
    pub fn rest(&mut self, rng: &mut dyn RandomSource) -> u32 {
        let recovery = 15 + rng.below(11);
        self.fatigue = self.fatigue.saturating_sub(recovery);
        self.energy = (self.energy + REST_ENERGY).min(100);
        if rng.next_f64() > 0.5 {
            self.form = (self.form + 5 + rng.below(11)).min(100);
        }
        recovery
    }

    pub fn add_win(&mut self) {
        self.matches_played += 1;
        self.matches_won += 1;
    }

    pub fn add_loss(&mut self) {
        self.matches_played += 1;
    }

    pub fn earn_prize(&mut self, amount: u64) {
        self.money += amount;
        self.career_earnings += amount;
    }

    /// Bank ranking points and climb `points / 10` places (never above 1).
    pub fn add_ranking_points(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.ranking_points += points;
        let climb = (points / 10).min(u32::MAX as u64) as u32;
        self.ranking = self.ranking.saturating_sub(climb).max(1);
        if self.ranking < self.career_high_ranking {
            self.career_high_ranking = self.ranking;
        }
    }

    pub fn record_title(&mut self, grand_slam: bool) {
        self.titles += 1;
        if grand_slam {
            self.grand_slams += 1;
        }
    }

    /// Start an injury; a `None` roll is ignored.
    pub fn suffer_injury(&mut self, kind: InjuryType) {
        if !kind.is_injury() {
            return;
        }
        self.injury = InjuryStatus {
            kind: Some(kind),
            weeks_remaining: kind.duration_weeks(),
        };
    }

    /// One week of recovery. Returns true when the injury just healed.
    pub fn recover_injury_week(&mut self) -> bool {
        if !self.injury.is_injured() {
            return false;
        }
        self.injury.weeks_remaining -= 1;
        if self.injury.weeks_remaining == 0 {
            self.injury = InjuryStatus::default();
            return true;
        }
        false
    }

    /// Birthday at the turn of the year.
    pub fn age_up(&mut self) {
        self.age += 1;
        self.career_year += 1;
    }
}
