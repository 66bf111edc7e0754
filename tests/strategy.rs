//! Integration tests for strategies, win probability and injury chance.

use proptest::prelude::*;
use tennis_career::models::{form_adjustment, injury_chance, roll_strategy_injury, win_probability};
use tennis_career::{CareerError, ScriptedSource, Strategy};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn strategy_profiles() {
    let costs: Vec<u32> = Strategy::ALL.iter().map(|s| s.profile().energy_cost).collect();
    assert_eq!(costs, vec![5, 10, 15, 20]);
    assert!(close(Strategy::Conservative.profile().win_rate_adjust, -10.0));
    assert!(close(Strategy::Desperate.profile().injury_rate, 0.50));
    assert_eq!(Strategy::default(), Strategy::Normal);
}

#[test]
fn strategy_parses_from_key() {
    assert_eq!("aggressive".parse::<Strategy>().unwrap(), Strategy::Aggressive);
    assert_eq!(" Desperate ".parse::<Strategy>().unwrap(), Strategy::Desperate);
    assert!(matches!(
        "reckless".parse::<Strategy>(),
        Err(CareerError::UnknownStrategy(key)) if key == "reckless"
    ));
}

#[test]
fn form_bands_apply_in_order() {
    assert!(close(form_adjustment(95), 10.0));
    assert!(close(form_adjustment(90), 10.0));
    assert!(close(form_adjustment(70), 5.0));
    assert!(close(form_adjustment(50), 0.0));
    assert!(close(form_adjustment(30), -10.0));
    // The <= 30 band catches low form first.
    assert!(close(form_adjustment(10), -10.0));
}

#[test]
fn win_probability_examples() {
    assert!(close(win_probability(50, 50, Strategy::Normal, 50), 50.0));
    assert!(close(win_probability(60, 50, Strategy::Normal, 50), 55.0));
    assert!(close(win_probability(50, 50, Strategy::Aggressive, 95), 75.0));
    assert!(close(win_probability(32, 88, Strategy::Normal, 80), 27.0));
    assert!(close(win_probability(100, 1, Strategy::Desperate, 95), 95.0));
    assert!(close(win_probability(1, 100, Strategy::Conservative, 10), 5.0));
}

#[test]
fn injury_chance_scales_with_form() {
    assert!(close(injury_chance(Strategy::Normal, 85), 0.15 * 0.7));
    assert!(close(injury_chance(Strategy::Normal, 60), 0.15));
    assert!(close(injury_chance(Strategy::Normal, 40), 0.15 * 1.3));
    assert!(close(injury_chance(Strategy::Desperate, 20), 0.50 * 1.3));
}

#[test]
fn strategy_injury_roll_uses_one_draw() {
    let mut rng = ScriptedSource::new(vec![0.10, 0.11]);
    // chance 0.105 at form 80
    assert!(roll_strategy_injury(Strategy::Normal, 80, &mut rng));
    assert!(!roll_strategy_injury(Strategy::Normal, 80, &mut rng));
    assert_eq!(rng.draws(), 2);
}

proptest! {
    #[test]
    fn win_probability_is_clamped(
        human in 1i32..=100,
        opponent in 1i32..=100,
        form in 0u32..=100,
        idx in 0usize..4,
    ) {
        let p = win_probability(human, opponent, Strategy::ALL[idx], form);
        prop_assert!((5.0..=95.0).contains(&p));
    }

    #[test]
    fn win_probability_never_drops_with_skill(
        human in 1i32..100,
        opponent in 1i32..=100,
        form in 0u32..=100,
        idx in 0usize..4,
    ) {
        let strategy = Strategy::ALL[idx];
        prop_assert!(win_probability(human + 1, opponent, strategy, form) >= win_probability(human, opponent, strategy, form));
    }

    #[test]
    fn riskier_strategy_never_lowers_odds(
        human in 1i32..=100,
        opponent in 1i32..=100,
        form in 0u32..=100,
    ) {
        let odds: Vec<f64> = Strategy::ALL.iter().map(|s| win_probability(human, opponent, *s, form)).collect();
        prop_assert!(odds.windows(2).all(|w| w[0] <= w[1]));
    }
}
