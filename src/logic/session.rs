//! Tournament flow around the engine: entry checks, phases, suspend/resume and wrap-up.

use crate::logic::bracket::{catch_up_rounds, current_match_info, simulate_remaining_matches};
use crate::logic::calendar::{available_tournaments, AvailableTournament, CalendarGender};
use crate::logic::match_play::{play_round, RoundResult};
use crate::models::{
    BracketView, CareerError, GameClock, Gender, MatchInfo, PersistedTournamentState, PlayerProfile,
    RandomSource, SavedBlob, Strategy, TierCode, Tournament, TournamentPhase, TournamentState,
    MIN_ENERGY_TO_PLAY,
};
use serde::{Deserialize, Serialize};

/// Minimum overall skill to enter any event.
pub const MIN_ENTRY_SKILL: i32 = 30;

/// One event on this week's entry list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryListing {
    /// `"{TIER}_{name}"`, unique within a week.
    pub id: String,
    pub tier: TierCode,
    pub name: String,
    pub entry_cost: u64,
    pub min_skill: i32,
    pub total_rounds: u32,
    pub champion_prize: u64,
    pub champion_points: u64,
}

impl From<&AvailableTournament> for EntryListing {
    fn from(t: &AvailableTournament) -> Self {
        Self {
            id: format!("{}_{}", t.tier.code(), t.name),
            tier: t.tier,
            name: t.name.clone(),
            entry_cost: t.config.entry_cost(),
            min_skill: MIN_ENTRY_SKILL,
            total_rounds: t.config.total_rounds,
            champion_prize: t.config.champion_prize,
            champion_points: t.config.champion_points,
        }
    }
}

/// Entries open at `clock` for a player on `gender`'s tour.
pub fn list_entries(clock: &GameClock, gender: Gender) -> Vec<EntryListing> {
    available_tournaments(clock.year, clock.month, CalendarGender::from(gender), clock.week)
        .iter()
        .map(EntryListing::from)
        .collect()
}

/// This week's entries of one tier, given by its code (e.g. `"ATP250"`).
pub fn entries_for_tier(clock: &GameClock, gender: Gender, tier_code: &str) -> Result<Vec<EntryListing>, CareerError> {
    let tier: TierCode = tier_code.parse()?;
    Ok(list_entries(clock, gender)
        .into_iter()
        .filter(|e| e.tier == tier)
        .collect())
}

/// What should go to the save slot: the blob itself, or with a live session
/// a copy that has the session parked in it, so a reload never sees the fee
/// paid without the tournament. `None` when the session cannot be parked yet.
pub fn save_snapshot(blob: &SavedBlob, session: Option<&TournamentSession>) -> Option<SavedBlob> {
    let mut snapshot = blob.clone();
    match session {
        Some(session) => session.clone().suspend(&mut snapshot).then_some(snapshot),
        None => Some(snapshot),
    }
}

/// Reject an entry the player cannot afford or is unfit for.
pub fn check_entry(profile: &PlayerProfile, listing: &EntryListing) -> Result<(), CareerError> {
    if profile.injury.is_injured() {
        return Err(CareerError::Injured {
            weeks_remaining: profile.injury.weeks_remaining,
        });
    }
    if profile.money < listing.entry_cost {
        return Err(CareerError::NotEnoughMoney {
            needed: listing.entry_cost,
            available: profile.money,
        });
    }
    if profile.energy < MIN_ENERGY_TO_PLAY {
        return Err(CareerError::NotEnoughEnergy {
            needed: MIN_ENERGY_TO_PLAY,
            available: profile.energy,
        });
    }
    let overall = profile.overall_skill();
    if overall < listing.min_skill {
        return Err(CareerError::SkillTooLow {
            required: listing.min_skill,
            actual: overall,
        });
    }
    Ok(())
}

/// How a finished tournament ended for the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub tier: TierCode,
    pub event_name: String,
    pub state: TournamentState,
    pub prize: u64,
    pub points: u64,
    pub champion_name: Option<String>,
}

/// A tournament the player is currently in, plus the screen they are on.
#[derive(Clone, Debug, PartialEq)]
pub struct TournamentSession {
    pub tournament: Tournament,
    pub tier: TierCode,
    pub event_name: String,
    pub phase: TournamentPhase,
    pub match_info: MatchInfo,
}

impl TournamentSession {
    /// Enter `entry_id` from this week's list: check, pay the fee, build the draw.
    pub fn join(
        profile: &mut PlayerProfile,
        clock: &GameClock,
        entry_id: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, CareerError> {
        let open = available_tournaments(clock.year, clock.month, CalendarGender::from(profile.gender), clock.week);
        let entry = open
            .into_iter()
            .find(|t| EntryListing::from(t).id == entry_id)
            .ok_or_else(|| CareerError::EntryNotFound(entry_id.to_string()))?;
        let listing = EntryListing::from(&entry);
        check_entry(profile, &listing)?;

        profile.money -= listing.entry_cost;
        let mut tournament = Tournament::new(entry.config, profile.gender, profile.name.clone(), rng);
        let match_info = current_match_info(&mut tournament, rng);
        log::info!(
            "{} entered {} ({}) for {}",
            profile.name,
            entry.name,
            entry.tier.code(),
            listing.entry_cost
        );
        Ok(Self {
            tournament,
            tier: entry.tier,
            event_name: entry.name,
            phase: TournamentPhase::Bracket,
            match_info,
        })
    }

    /// Go to the match screen and report who is next.
    pub fn enter_match(&mut self, rng: &mut dyn RandomSource) -> &MatchInfo {
        self.match_info = current_match_info(&mut self.tournament, rng);
        self.phase = TournamentPhase::Match;
        &self.match_info
    }

    /// Play the current round with `strategy`.
    pub fn play_round(
        &mut self,
        profile: &mut PlayerProfile,
        strategy: Strategy,
        rng: &mut dyn RandomSource,
    ) -> Result<RoundResult, CareerError> {
        if self.tournament.is_finished() {
            return Err(CareerError::TournamentFinished);
        }
        if profile.energy < MIN_ENERGY_TO_PLAY {
            return Err(CareerError::NotEnoughEnergy {
                needed: MIN_ENERGY_TO_PLAY,
                available: profile.energy,
            });
        }
        let result =
            play_round(&mut self.tournament, profile, strategy, rng).ok_or(CareerError::TournamentFinished)?;
        self.match_info = current_match_info(&mut self.tournament, rng);
        self.phase = TournamentPhase::Result;
        Ok(result)
    }

    /// Back to the draw after a result, with earlier rounds simulated for display.
    pub fn back_to_bracket(&mut self, rng: &mut dyn RandomSource) {
        catch_up_rounds(&mut self.tournament, rng);
        self.phase = TournamentPhase::Bracket;
    }

    pub fn bracket_view(&self) -> BracketView<'_> {
        self.tournament.bracket_view()
    }

    /// Leave mid-tournament: park the session in the save blob. Nothing is
    /// stored while still on the selection screen. Returns whether it was stored.
    pub fn suspend(self, blob: &mut SavedBlob) -> bool {
        if self.phase == TournamentPhase::Select {
            return false;
        }
        log::info!("Suspending {} in round {}", self.event_name, self.tournament.current_round);
        blob.ongoing_tournament = Some(PersistedTournamentState {
            tournament: self.tournament,
            match_info: self.match_info,
            phase: self.phase,
            tier: self.tier,
            event_name: self.event_name,
        });
        blob.touch();
        true
    }

    /// Take the parked session out of the blob. The slot is cleared, so a
    /// second call returns `None`.
    pub fn resume(blob: &mut SavedBlob) -> Option<Self> {
        let state = blob.ongoing_tournament.take()?;
        log::info!("Resuming {} at round {}", state.event_name, state.tournament.current_round);
        Some(Self {
            tournament: state.tournament,
            tier: state.tier,
            event_name: state.event_name,
            phase: state.phase,
            match_info: state.match_info,
        })
    }

    /// Wrap up a tournament that is over for the player. An eliminated
    /// player's draw is played out so it has a champion.
    pub fn finish(mut self, blob: &mut SavedBlob, rng: &mut dyn RandomSource) -> Result<TournamentSummary, CareerError> {
        if !self.tournament.is_finished() {
            return Err(CareerError::NoActiveTournament);
        }
        if self.tournament.is_eliminated {
            simulate_remaining_matches(&mut self.tournament, rng);
        }
        blob.ongoing_tournament = None;
        blob.touch();
        Ok(TournamentSummary {
            tier: self.tier,
            state: self.tournament.state(),
            prize: self.tournament.current_prize(),
            points: self.tournament.current_points(),
            champion_name: self.tournament.champion().map(|c| c.name().to_string()),
            event_name: self.event_name,
        })
    }

    /// Abandon the tournament. Money and results already banked stay.
    pub fn quit(self, blob: &mut SavedBlob) {
        log::info!("{} withdrew from {}", self.tournament.human_name, self.event_name);
        blob.ongoing_tournament = None;
        blob.touch();
    }
}
