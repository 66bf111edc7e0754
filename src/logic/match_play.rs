//! Playing one round: odds, result, injury, and the profile update applied as one step.

use crate::logic::bracket::{current_opponent, resolve_human_match};
use crate::models::{
    roll_injury_severity, roll_strategy_injury, win_probability, InjuryType, PlayerProfile, RandomSource,
    Strategy, Tournament,
};
use serde::{Deserialize, Serialize};

/// Result record handed to the presentation layer after each round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub won: bool,
    /// Prize credited for this round.
    pub prize: u64,
    /// Ranking points credited for this round.
    pub points: u64,
    /// Win probability in percent used for the roll.
    pub win_rate: f64,
    pub strategy: Strategy,
    pub strategy_name: String,
    pub injury: Option<InjuryType>,
    /// Round (1-indexed) that was played.
    pub round: u32,
    pub opponent_name: String,
    pub champion: bool,
}

/// Everything a round does to the profile, gathered before anything is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ProfileUpdate {
    energy_cost: u32,
    won: bool,
    prize: u64,
    points: u64,
    injury: Option<InjuryType>,
    title: Option<bool>,
}

impl ProfileUpdate {
    fn apply(&self, profile: &mut PlayerProfile) {
        profile.spend_energy(self.energy_cost);
        if self.won {
            profile.add_win();
        } else {
            profile.add_loss();
        }
        profile.earn_prize(self.prize);
        profile.add_ranking_points(self.points);
        if let Some(injury) = self.injury {
            profile.suffer_injury(injury);
        }
        if let Some(grand_slam) = self.title {
            profile.record_title(grand_slam);
        }
    }
}

/// Injury under a strategy: the strategy/form roll decides whether one happens,
/// the severity table decides which.
pub fn roll_match_injury(strategy: Strategy, form: u32, rng: &mut dyn RandomSource) -> Option<InjuryType> {
    if roll_strategy_injury(strategy, form, rng) {
        Some(roll_injury_severity(rng))
    } else {
        None
    }
}

/// Play the human's current match. Returns `None` if the tournament is already
/// over for them. Entry/energy checks are the caller's job.
pub fn play_round(
    tournament: &mut Tournament,
    profile: &mut PlayerProfile,
    strategy: Strategy,
    rng: &mut dyn RandomSource,
) -> Option<RoundResult> {
    let opponent = current_opponent(tournament, rng)?;
    let win_rate = win_probability(profile.overall_skill(), opponent.overall_skill(), strategy, profile.form);
    let won = rng.next_f64() * 100.0 < win_rate;

    let outcome = resolve_human_match(tournament, won, rng);
    let injury = roll_match_injury(strategy, profile.form, rng);

    let champion = won && tournament.is_champion();
    let (prize, points) = if won {
        (
            tournament.prize_for_round_won(outcome.round),
            tournament.points_for_round_won(outcome.round),
        )
    } else {
        (0, 0)
    };
    let update = ProfileUpdate {
        energy_cost: strategy.profile().energy_cost,
        won,
        prize,
        points,
        injury,
        title: champion.then(|| tournament.config.tier.is_grand_slam()),
    };
    update.apply(profile);

    log::debug!(
        "Round {} vs {}: {} ({:.1}% with {}), prize {}, points {}",
        outcome.round,
        opponent.name,
        if won { "won" } else { "lost" },
        win_rate,
        strategy.key(),
        prize,
        points
    );

    Some(RoundResult {
        won,
        prize,
        points,
        win_rate,
        strategy,
        strategy_name: strategy.display_name().to_string(),
        injury,
        round: outcome.round,
        opponent_name: opponent.name,
        champion,
    })
}
