//! Save-slot contents: profile, game clock and an optional in-flight tournament.

use crate::models::player::PlayerProfile;
use crate::models::tier::TierCode;
use crate::models::tournament::{MatchInfo, Tournament};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WEEKS_PER_MONTH: u32 = 4;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Calendar position of the career.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    pub year: i32,
    pub month: u32,
    /// Week within the month, 1..=4.
    pub week: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            year: 2024,
            month: 1,
            week: 1,
        }
    }
}

/// What changed when the clock moved on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WeekRollover {
    pub new_month: bool,
    pub new_year: bool,
}

impl GameClock {
    pub fn advance_week(&mut self) -> WeekRollover {
        let mut rollover = WeekRollover::default();
        self.week += 1;
        if self.week > WEEKS_PER_MONTH {
            self.week = 1;
            self.month += 1;
            rollover.new_month = true;
        }
        if self.month > MONTHS_PER_YEAR {
            self.month = 1;
            self.year += 1;
            rollover.new_year = true;
        }
        rollover
    }
}

/// Screen of the tournament flow the player was on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    #[default]
    Select,
    Bracket,
    Match,
    Result,
}

/// A tournament left mid-flight. Written on exit, consumed on the next entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedTournamentState {
    pub tournament: Tournament,
    pub match_info: MatchInfo,
    pub phase: TournamentPhase,
    pub tier: TierCode,
    pub event_name: String,
}

/// Everything stored in the single save slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedBlob {
    pub player: PlayerProfile,
    pub clock: GameClock,
    #[serde(default)]
    pub ongoing_tournament: Option<PersistedTournamentState>,
    pub saved_at: DateTime<Utc>,
}

impl SavedBlob {
    pub fn new(player: PlayerProfile) -> Self {
        Self {
            player,
            clock: GameClock::default(),
            ongoing_tournament: None,
            saved_at: Utc::now(),
        }
    }

    /// Move to next week: heal one injury week, and age the player at the new year.
    pub fn advance_week(&mut self) -> WeekRollover {
        let rollover = self.clock.advance_week();
        if self.player.recover_injury_week() {
            log::info!("{} has recovered from injury", self.player.name);
        }
        if rollover.new_year {
            self.player.age_up();
        }
        rollover
    }

    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }
}
