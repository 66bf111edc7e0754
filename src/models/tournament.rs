//! Tournament: the single-elimination draw one human plays through, and its state queries.

use crate::models::bracket::{Competitor, HumanResult, Match, Round, Side};
use crate::models::error::CareerError;
use crate::models::opponent::Opponent;
use crate::models::player::Gender;
use crate::models::random::RandomSource;
use crate::models::tier::TierConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament instance.
pub type TournamentId = Uuid;

/// Level offsets `[min, max)` relative to the tier's base skill, by 0-based round.
/// Rounds past the table reuse the last band.
pub const ROUND_LEVEL_BANDS: [(i32, i32); 6] = [(-12, 3), (-8, 5), (-3, 10), (2, 15), (5, 20), (10, 25)];

/// Spread added to the base ranking of most generated opponents.
pub const RANKING_SPREAD: u32 = 50;

/// Where the human stands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TournamentState {
    /// Still in the draw; `round` is the next round to play.
    InProgress { round: u32 },
    Champion,
    Eliminated { round: u32 },
}

/// What the presentation layer shows before the next match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchInfo {
    Eliminated { round: u32 },
    Champion,
    Upcoming {
        round: u32,
        total_rounds: u32,
        opponent: Opponent,
    },
}

/// A bracket of `2^total_rounds` slots with one human competitor.
///
/// Matches are addressed by `(round_index, match_index)`. The human's match in
/// any round is derived from `human_slot_index` rather than stored as a flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub config: TierConfig,
    pub gender: Gender,
    pub human_name: String,
    pub rounds: Vec<Round>,
    /// Round-1 match index of the human (side A there). Fixed at creation.
    pub human_slot_index: usize,
    /// 1-indexed; only moves on a human win.
    pub current_round: u32,
    /// Never reset once true.
    pub is_eliminated: bool,
    pub eliminated_at_round: Option<u32>,
}

impl Tournament {
    /// Build the draw: empty rounds, the human at a random round-1 match, and
    /// generated opponents in every round-1 slot.
    pub fn new(
        config: TierConfig,
        gender: Gender,
        human_name: impl Into<String>,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let total_slots = config.total_slots();
        let rounds = (0..config.total_rounds)
            .map(|r| Round::empty(r + 1, total_slots >> (r + 1)))
            .collect();
        let human_slot_index = rng.below((total_slots / 2) as u32) as usize;

        let mut tournament = Self {
            id: Uuid::new_v4(),
            config,
            gender,
            human_name: human_name.into(),
            rounds,
            human_slot_index,
            current_round: 1,
            is_eliminated: false,
            eliminated_at_round: None,
        };
        tournament.fill_first_round(rng);
        log::info!(
            "New {} draw: {} slots, human at match {}",
            tournament.config.tier.code(),
            total_slots,
            human_slot_index
        );
        tournament
    }

    fn fill_first_round(&mut self, rng: &mut dyn RandomSource) {
        let human_opponent = self.generate_opponent(0, self.base_ranking(), rng);
        let human = self.human_marker();
        let human_index = self.human_slot_index;
        let match_count = self.rounds[0].matches.len();

        for i in 0..match_count {
            let m = if i == human_index {
                Match::new(human.clone(), Competitor::Npc(human_opponent.clone()))
            } else {
                let spread_a = rng.below(RANKING_SPREAD);
                let a = self.generate_opponent(0, self.base_ranking() + spread_a, rng);
                let spread_b = rng.below(RANKING_SPREAD);
                let b = self.generate_opponent(0, self.base_ranking() + spread_b, rng);
                Match::new(Competitor::Npc(a), Competitor::Npc(b))
            };
            self.rounds[0].matches[i] = m;
        }
    }

    pub fn human_marker(&self) -> Competitor {
        Competitor::Human {
            name: self.human_name.clone(),
        }
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    pub fn total_slots(&self) -> usize {
        self.config.total_slots()
    }

    pub fn base_skill(&self) -> i32 {
        self.config.tier.base_skill()
    }

    pub fn base_ranking(&self) -> u32 {
        self.config.tier.base_ranking()
    }

    /// Random opponent level for a 0-based round: `base + [min, max)` of its band.
    pub fn opponent_level(&self, round_index: usize, rng: &mut dyn RandomSource) -> i32 {
        let (min, max) = ROUND_LEVEL_BANDS[round_index.min(ROUND_LEVEL_BANDS.len() - 1)];
        self.base_skill() + rng.below((max - min) as u32) as i32 + min
    }

    /// Fresh opponent at the strength band of `round_index`.
    pub fn generate_opponent(&self, round_index: usize, ranking: u32, rng: &mut dyn RandomSource) -> Opponent {
        let level = self.opponent_level(round_index, rng);
        Opponent::generate(ranking, level, self.gender, rng)
    }

    pub fn is_champion(&self) -> bool {
        !self.is_eliminated && self.current_round > self.total_rounds()
    }

    pub fn is_finished(&self) -> bool {
        self.is_eliminated || self.is_champion()
    }

    pub fn state(&self) -> TournamentState {
        if self.is_eliminated {
            TournamentState::Eliminated {
                round: self.eliminated_at_round.unwrap_or(self.current_round),
            }
        } else if self.is_champion() {
            TournamentState::Champion
        } else {
            TournamentState::InProgress {
                round: self.current_round,
            }
        }
    }

    /// Deepest round (1-indexed) the human has appeared in.
    pub fn furthest_round(&self) -> u32 {
        match self.eliminated_at_round {
            Some(round) => round,
            None => self.current_round.min(self.total_rounds()),
        }
    }

    /// The human's match index in a 0-based round.
    pub fn human_match_index(&self, round_index: usize) -> usize {
        self.human_slot_index >> round_index
    }

    /// The human's side in a 0-based round.
    pub fn human_side(&self, round_index: usize) -> Side {
        if round_index == 0 {
            Side::A
        } else {
            Side::for_feeder(self.human_match_index(round_index - 1))
        }
    }

    pub fn human_reached(&self, round_index: usize) -> bool {
        (round_index as u32) < self.furthest_round()
    }

    pub fn is_human_match(&self, round_index: usize, match_index: usize) -> bool {
        self.human_reached(round_index) && self.human_match_index(round_index) == match_index
    }

    /// The human's match that still needs a result, if any.
    pub fn pending_human_match(&self) -> Option<(usize, usize)> {
        if self.is_finished() {
            return None;
        }
        let round_index = self.current_round.saturating_sub(1) as usize;
        Some((round_index, self.human_match_index(round_index)))
    }

    pub fn match_at(&self, round_index: usize, match_index: usize) -> Option<&Match> {
        self.rounds.get(round_index)?.matches.get(match_index)
    }

    pub fn match_at_mut(&mut self, round_index: usize, match_index: usize) -> Option<&mut Match> {
        self.rounds.get_mut(round_index)?.matches.get_mut(match_index)
    }

    /// Winner of the final, once decided.
    pub fn champion(&self) -> Option<&Competitor> {
        self.rounds.last()?.matches.first()?.winning_competitor()
    }

    /// Prize for the current placement: champion, round of elimination, or the
    /// round just reached. Out-of-range rounds give 0.
    pub fn current_prize(&self) -> u64 {
        if self.is_champion() {
            self.config.champion_prize
        } else if let Some(round) = self.eliminated_at_round {
            self.config.prize_at(round.saturating_sub(1) as usize)
        } else {
            self.config.prize_at(self.current_round.saturating_sub(1) as usize)
        }
    }

    /// Ranking points for the current placement; same indexing as `current_prize`.
    pub fn current_points(&self) -> u64 {
        if self.is_champion() {
            self.config.champion_points
        } else if let Some(round) = self.eliminated_at_round {
            self.config.points_at(round.saturating_sub(1) as usize)
        } else {
            self.config.points_at(self.current_round.saturating_sub(1) as usize)
        }
    }

    /// Payout for winning `round` (1-indexed): the final pays the champion prize.
    pub fn prize_for_round_won(&self, round: u32) -> u64 {
        if round >= self.total_rounds() {
            self.config.champion_prize
        } else {
            self.config.prize_at(round.saturating_sub(1) as usize)
        }
    }

    /// Ranking points for winning `round` (1-indexed).
    pub fn points_for_round_won(&self, round: u32) -> u64 {
        if round >= self.total_rounds() {
            self.config.champion_points
        } else {
            self.config.points_at(round.saturating_sub(1) as usize)
        }
    }

    /// Snapshot for rendering the draw.
    pub fn bracket_view(&self) -> BracketView<'_> {
        let rounds = self
            .rounds
            .iter()
            .enumerate()
            .map(|(r, round)| RoundView {
                number: round.number,
                matches: round
                    .matches
                    .iter()
                    .enumerate()
                    .map(|(i, m)| MatchView {
                        side_a: m.side_a.as_ref(),
                        side_b: m.side_b.as_ref(),
                        winner: m.winner,
                        is_human_match: self.is_human_match(r, i),
                        human_result: m.human_result,
                    })
                    .collect(),
            })
            .collect();
        BracketView {
            tournament_id: self.id,
            config: &self.config,
            rounds,
            current_round: self.current_round,
            human_slot_index: self.human_slot_index,
            state: self.state(),
        }
    }

    pub fn to_json(&self) -> Result<String, CareerError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from `to_json` output; no randomness is re-run.
    pub fn from_json(json: &str) -> Result<Self, CareerError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read-only bracket snapshot for the presentation layer.
#[derive(Debug, Serialize)]
pub struct BracketView<'a> {
    pub tournament_id: TournamentId,
    pub config: &'a TierConfig,
    pub rounds: Vec<RoundView<'a>>,
    pub current_round: u32,
    pub human_slot_index: usize,
    pub state: TournamentState,
}

#[derive(Debug, Serialize)]
pub struct RoundView<'a> {
    pub number: u32,
    pub matches: Vec<MatchView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct MatchView<'a> {
    pub side_a: Option<&'a Competitor>,
    pub side_b: Option<&'a Competitor>,
    pub winner: Option<Side>,
    pub is_human_match: bool,
    pub human_result: Option<HumanResult>,
}
