//! Career business logic: bracket engine, calendar, match play, tournament flow, saving.

mod bracket;
mod calendar;
mod match_play;
mod persistence;
mod session;

pub use bracket::{
    catch_up_rounds, current_match_info, current_opponent, resolve_human_match, simulate_remaining_matches,
    simulate_round, HumanRoundOutcome,
};
pub use calendar::{
    available_tournaments, week_in_month, AvailableTournament, CalendarEntry, CalendarEvent, CalendarGender,
    CALENDAR,
};
pub use match_play::{play_round, roll_match_injury, RoundResult};
pub use persistence::{JsonFileStore, MemoryStore, SaveStore, DEFAULT_SAVE_FILE};
pub use session::{
    check_entry, entries_for_tier, list_entries, save_snapshot, EntryListing, TournamentSession, TournamentSummary,
    MIN_ENTRY_SKILL,
};
