//! Tennis career simulation: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    available_tournaments, catch_up_rounds, check_entry, current_match_info, current_opponent, entries_for_tier,
    list_entries, play_round, resolve_human_match, save_snapshot, simulate_remaining_matches, simulate_round,
    AvailableTournament, CalendarGender, EntryListing, HumanRoundOutcome, JsonFileStore, MemoryStore, RoundResult, SaveStore,
    TournamentSession, TournamentSummary,
};
pub use models::{
    tier_config, BracketView, CareerError, Competitor, GameClock, Gender, InjuryType, MatchInfo, Opponent,
    PlayerProfile, RandomSource, RngSource, SavedBlob, ScriptedSource, Side, Strategy, TierCode, TierConfig,
    Tournament, TournamentId, TournamentPhase, TournamentState,
};
