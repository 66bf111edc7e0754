//! Data structures for the career: profile, opponents, tiers, brackets, save data.

mod bracket;
mod error;
mod injury;
mod opponent;
mod player;
mod random;
mod save;
mod strategy;
mod tier;
mod tournament;

pub use bracket::{Competitor, HumanResult, Match, Round, Side};
pub use error::CareerError;
pub use injury::{roll_injury, roll_injury_severity, InjuryPenalty, InjuryType, INJURY_BANDS};
pub use opponent::{Opponent, STAT_CAP};
pub use player::{
    base_overall, Attributes, Gender, InjuryStatus, PlayerProfile, Skills, FORM_DECAY_FATIGUE, MIN_ENERGY_TO_PLAY,
    REST_ENERGY, UNRANKED,
};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use save::{GameClock, PersistedTournamentState, SavedBlob, TournamentPhase, WeekRollover};
pub use strategy::{
    form_adjustment, injury_chance, roll_strategy_injury, win_probability, Strategy, StrategyProfile,
    MAX_WIN_PROBABILITY, MIN_WIN_PROBABILITY,
};
pub use tier::{tier_config, TierCode, TierConfig};
pub use tournament::{
    BracketView, MatchInfo, MatchView, RoundView, Tournament, TournamentId, TournamentState,
    RANKING_SPREAD, ROUND_LEVEL_BANDS,
};
