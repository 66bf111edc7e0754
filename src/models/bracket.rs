//! Bracket building blocks: competitors, matches and rounds.

use crate::models::opponent::Opponent;
use serde::{Deserialize, Serialize};

/// Which side of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Side a winner of match `match_index` takes in the next round.
    pub fn for_feeder(match_index: usize) -> Side {
        if match_index % 2 == 0 {
            Side::A
        } else {
            Side::B
        }
    }
}

/// Outcome of the human's own match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanResult {
    Win,
    Lose,
}

/// A bracket occupant. The human is a marker; the profile lives outside the bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Competitor {
    Human { name: String },
    Npc(Opponent),
}

impl Competitor {
    pub fn is_human(&self) -> bool {
        matches!(self, Competitor::Human { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Competitor::Human { name } => name,
            Competitor::Npc(o) => &o.name,
        }
    }

    pub fn as_opponent(&self) -> Option<&Opponent> {
        match self {
            Competitor::Npc(o) => Some(o),
            Competitor::Human { .. } => None,
        }
    }
}

/// One match slot. `winner` is written once and never changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub side_a: Option<Competitor>,
    pub side_b: Option<Competitor>,
    pub winner: Option<Side>,
    /// Set only on the human's matches once played.
    pub human_result: Option<HumanResult>,
}

impl Match {
    pub fn new(side_a: Competitor, side_b: Competitor) -> Self {
        Self {
            side_a: Some(side_a),
            side_b: Some(side_b),
            winner: None,
            human_result: None,
        }
    }

    pub fn competitor(&self, side: Side) -> Option<&Competitor> {
        match side {
            Side::A => self.side_a.as_ref(),
            Side::B => self.side_b.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, side: Side) -> &mut Option<Competitor> {
        match side {
            Side::A => &mut self.side_a,
            Side::B => &mut self.side_b,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.side_a.is_some() && self.side_b.is_some()
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Record the winner. Returns false (and changes nothing) if one is already set.
    pub fn set_winner(&mut self, side: Side) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(side);
        true
    }

    pub fn winning_competitor(&self) -> Option<&Competitor> {
        self.winner.and_then(|side| self.competitor(side))
    }
}

/// Matches of one round, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-indexed.
    pub number: u32,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn empty(number: u32, match_count: usize) -> Self {
        Self {
            number,
            matches: vec![Match::default(); match_count],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }
}
