//! Bracket engine: resolving the human's matches, coin-flip NPC rounds, opponent
//! backfill and bracket completion.
//!
//! Nothing here fails. Odd states (for example a restored save whose later rounds
//! were never filled in) are repaired by simulating or generating opponents.

use crate::models::{
    Competitor, HumanResult, MatchInfo, Opponent, RandomSource, Side, Tournament, RANKING_SPREAD,
};

/// What resolving one human match produced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HumanRoundOutcome {
    pub won: bool,
    /// Round (1-indexed) that was played.
    pub round: u32,
    /// `current_prize` after the result.
    pub prize: u64,
    /// `current_points` after the result.
    pub points: u64,
}

/// Set the winner of `(round_index, match_index)` and move them into the
/// corresponding slot of the next round. Occupied next-round slots are kept.
fn decide_and_propagate(t: &mut Tournament, round_index: usize, match_index: usize, side: Side) {
    let winner = {
        let Some(m) = t.match_at_mut(round_index, match_index) else {
            return;
        };
        if !m.set_winner(side) {
            return;
        }
        m.competitor(side).cloned()
    };
    let (Some(winner), Some(next)) = (winner, t.match_at_mut(round_index + 1, match_index / 2)) else {
        return;
    };
    let slot = next.slot_mut(Side::for_feeder(match_index));
    if slot.is_none() {
        *slot = Some(winner);
    }
}

/// Matches that must wait for the human: their pending match and every match
/// on their path after it.
fn on_pending_human_path(t: &Tournament, round_index: usize, match_index: usize) -> bool {
    match t.pending_human_match() {
        Some((pending_round, _)) => {
            round_index >= pending_round && t.human_match_index(round_index) == match_index
        }
        None => false,
    }
}

/// Coin-flip every ready, undecided match of a round and propagate winners.
/// Decided matches and the human's pending match are left alone, so calling
/// this twice is the same as calling it once.
pub fn simulate_round(t: &mut Tournament, round_index: usize, rng: &mut dyn RandomSource) {
    let Some(match_count) = t.rounds.get(round_index).map(|r| r.matches.len()) else {
        return;
    };
    for i in 0..match_count {
        if on_pending_human_path(t, round_index, i) {
            continue;
        }
        let m = &t.rounds[round_index].matches[i];
        if m.is_decided() || !m.is_ready() {
            continue;
        }
        let side = if rng.coin_flip() { Side::A } else { Side::B };
        decide_and_propagate(t, round_index, i, side);
    }
}

/// Simulate every round before the current one, e.g. before rendering the draw.
pub fn catch_up_rounds(t: &mut Tournament, rng: &mut dyn RandomSource) {
    let upto = (t.furthest_round() as usize).saturating_sub(1);
    for r in 0..upto {
        simulate_round(t, r, rng);
    }
}

/// Make sure the human's match in `round_index` has the human marker and an
/// opponent; returns the opponent.
///
/// Normal play always finds the opponent already propagated. Otherwise the
/// previous round is simulated and its matching winner pulled forward, and as
/// a last resort a fresh opponent is generated at this round's strength.
fn ensure_opponent(t: &mut Tournament, round_index: usize, rng: &mut dyn RandomSource) -> Opponent {
    let match_index = t.human_match_index(round_index);
    let human_side = t.human_side(round_index);
    let opponent_side = human_side.other();

    let marker = t.human_marker();
    if let Some(m) = t.match_at_mut(round_index, match_index) {
        let slot = m.slot_mut(human_side);
        if !slot.as_ref().is_some_and(Competitor::is_human) {
            *slot = Some(marker);
        }
        if let Some(Competitor::Npc(o)) = m.competitor(opponent_side) {
            return o.clone();
        }
    }

    log::warn!(
        "Opponent missing for human match (round {}, match {}); backfilling",
        round_index + 1,
        match_index
    );
    let mut opponent = None;
    if round_index > 0 {
        simulate_round(t, round_index - 1, rng);
        let feeder = match_index * 2 + usize::from(opponent_side == Side::B);
        if let Some(Competitor::Npc(o)) = t
            .match_at(round_index - 1, feeder)
            .and_then(|m| m.winning_competitor())
        {
            opponent = Some(o.clone());
        }
    }
    let opponent = match opponent {
        Some(o) => o,
        None => t.generate_opponent(round_index, t.base_ranking(), rng),
    };
    if let Some(m) = t.match_at_mut(round_index, match_index) {
        *m.slot_mut(opponent_side) = Some(Competitor::Npc(opponent.clone()));
    }
    opponent
}

/// The human's next opponent, or `None` once the tournament is over for them.
pub fn current_opponent(t: &mut Tournament, rng: &mut dyn RandomSource) -> Option<Opponent> {
    let (round_index, _) = t.pending_human_match()?;
    Some(ensure_opponent(t, round_index, rng))
}

/// Status for the screen before the next match.
pub fn current_match_info(t: &mut Tournament, rng: &mut dyn RandomSource) -> MatchInfo {
    if let Some(round) = t.eliminated_at_round {
        return MatchInfo::Eliminated { round };
    }
    match current_opponent(t, rng) {
        Some(opponent) => MatchInfo::Upcoming {
            round: t.current_round,
            total_rounds: t.total_rounds(),
            opponent,
        },
        None => MatchInfo::Champion,
    }
}

/// Apply the human's result for the current round, then simulate the rest of
/// that round. On a finished tournament this changes nothing and reports zero.
pub fn resolve_human_match(t: &mut Tournament, won: bool, rng: &mut dyn RandomSource) -> HumanRoundOutcome {
    let round = t.current_round;
    let Some((round_index, match_index)) = t.pending_human_match() else {
        return HumanRoundOutcome {
            won: false,
            round,
            ..Default::default()
        };
    };
    ensure_opponent(t, round_index, rng);
    if t.match_at(round_index, match_index).map_or(true, |m| m.is_decided()) {
        log::warn!("Human match in round {} already decided; ignoring result", round);
        return HumanRoundOutcome {
            won: false,
            round,
            ..Default::default()
        };
    }

    let human_side = t.human_side(round_index);
    let (winner_side, result) = if won {
        (human_side, HumanResult::Win)
    } else {
        (human_side.other(), HumanResult::Lose)
    };
    if let Some(m) = t.match_at_mut(round_index, match_index) {
        m.human_result = Some(result);
    }
    decide_and_propagate(t, round_index, match_index, winner_side);

    if won {
        t.current_round += 1;
        if t.is_champion() {
            log::info!("{} wins the {}", t.human_name, t.config.name);
        } else {
            log::debug!("{} advances to round {}", t.human_name, t.current_round);
        }
    } else {
        t.is_eliminated = true;
        t.eliminated_at_round = Some(round);
        log::info!("{} eliminated in round {} of the {}", t.human_name, round, t.config.name);
    }

    simulate_round(t, round_index, rng);

    HumanRoundOutcome {
        won,
        round,
        prize: t.current_prize(),
        points: t.current_points(),
    }
}

/// Fill any empty slots with generated opponents and coin-flip every
/// undecided match, round by round, so the draw ends with a champion.
/// Matches still waiting on the human are skipped. Idempotent.
pub fn simulate_remaining_matches(t: &mut Tournament, rng: &mut dyn RandomSource) {
    for r in 0..t.rounds.len() {
        for i in 0..t.rounds[r].matches.len() {
            if on_pending_human_path(t, r, i) {
                continue;
            }
            fill_missing_competitors(t, r, i, rng);
            let m = &t.rounds[r].matches[i];
            if m.is_decided() || !m.is_ready() {
                continue;
            }
            let side = if rng.coin_flip() { Side::A } else { Side::B };
            decide_and_propagate(t, r, i, side);
        }
    }
    if let Some(champion) = t.champion() {
        log::debug!("Draw complete, champion: {}", champion.name());
    }
}

fn fill_missing_competitors(t: &mut Tournament, round_index: usize, match_index: usize, rng: &mut dyn RandomSource) {
    let (need_a, need_b) = match t.match_at(round_index, match_index) {
        Some(m) => (m.side_a.is_none(), m.side_b.is_none()),
        None => return,
    };
    if !need_a && !need_b {
        return;
    }
    let level = t.opponent_level(round_index, rng);
    let base_ranking = t.base_ranking();
    let gender = t.gender;
    let a = if need_a {
        Some(Opponent::generate(base_ranking, level, gender, rng))
    } else {
        None
    };
    let b = if need_b {
        let spread = rng.below(RANKING_SPREAD);
        Some(Opponent::generate(base_ranking + spread, level, gender, rng))
    } else {
        None
    };
    if let Some(m) = t.match_at_mut(round_index, match_index) {
        if let Some(a) = a {
            m.side_a = Some(Competitor::Npc(a));
        }
        if let Some(b) = b {
            m.side_b = Some(Competitor::Npc(b));
        }
    }
}
