//! Integration tests for playing rounds: odds, payouts and profile updates.

use tennis_career::{
    play_round, simulate_remaining_matches, tier_config, Gender, InjuryType, PlayerProfile, RngSource,
    ScriptedSource, Strategy, TierCode, Tournament,
};

fn setup(tier: TierCode, rng: &mut ScriptedSource) -> (Tournament, PlayerProfile) {
    let config = tier_config(Gender::Male, tier).unwrap();
    let tournament = Tournament::new(config, Gender::Male, "Player", rng);
    (tournament, PlayerProfile::new("Player", Gender::Male))
}

#[test]
fn junior_run_with_lowest_draws_wins_title() {
    let mut rng = ScriptedSource::constant(0.0);
    let (mut t, mut p) = setup(TierCode::Junior, &mut rng);

    let first = play_round(&mut t, &mut p, Strategy::Normal, &mut rng).unwrap();
    // overall 32 vs 88, form 80: 50 - 28 + 5
    assert_eq!(first.win_rate, 27.0);
    assert!(first.won);
    assert_eq!(first.round, 1);

    let mut total_prize = first.prize;
    let mut total_points = first.points;
    while let Some(result) = play_round(&mut t, &mut p, Strategy::Normal, &mut rng) {
        assert!(result.won);
        total_prize += result.prize;
        total_points += result.points;
    }

    let config = &t.config;
    assert_eq!(total_prize, config.prize_by_round[0] + config.prize_by_round[1] + config.champion_prize);
    assert_eq!(total_prize, 500);
    assert_eq!(total_points, 100);
    assert_eq!(t.current_round, 4);
    assert!(t.champion().unwrap().is_human());

    assert_eq!(p.money, 1500);
    assert_eq!(p.career_earnings, 500);
    assert_eq!(p.matches_played, 3);
    assert_eq!(p.matches_won, 3);
    assert_eq!(p.titles, 1);
    assert_eq!(p.grand_slams, 0);
    assert_eq!(p.energy, 70);
    assert_eq!(p.ranking, 990);
}

#[test]
fn loss_pays_nothing_and_eliminates() {
    let mut rng = ScriptedSource::constant(0.99);
    let (mut t, mut p) = setup(TierCode::Futures, &mut rng);
    let result = play_round(&mut t, &mut p, Strategy::Conservative, &mut rng).unwrap();
    assert!(!result.won);
    assert_eq!(result.prize, 0);
    assert_eq!(result.points, 0);
    assert_eq!(result.injury, None);
    assert!(!result.champion);
    assert_eq!(p.money, 1000);
    assert_eq!(p.matches_played, 1);
    assert_eq!(p.matches_won, 0);
    assert_eq!(p.energy, 95);
    assert_eq!(p.fatigue, 5);
    assert_eq!(t.eliminated_at_round, Some(1));

    assert!(play_round(&mut t, &mut p, Strategy::Normal, &mut rng).is_none());
    assert_eq!(p.matches_played, 1);
}

#[test]
fn strategy_injury_is_applied_to_profile() {
    let mut rng = ScriptedSource::constant(0.0);
    let (mut t, mut p) = setup(TierCode::Junior, &mut rng);
    let result = play_round(&mut t, &mut p, Strategy::Desperate, &mut rng).unwrap();
    assert_eq!(result.injury, Some(InjuryType::LightStrain));
    assert_eq!(result.strategy, Strategy::Desperate);
    assert!(p.injury.is_injured());
    assert_eq!(p.energy, 80);
}

#[test]
fn grand_slam_title_is_counted() {
    let mut rng = ScriptedSource::constant(0.0);
    let (mut t, mut p) = setup(TierCode::GrandSlam, &mut rng);
    let mut rounds = 0;
    while let Some(result) = play_round(&mut t, &mut p, Strategy::Conservative, &mut rng) {
        rounds += 1;
        assert_eq!(result.champion, rounds == 6);
    }
    assert_eq!(rounds, 6);
    assert_eq!(p.titles, 1);
    assert_eq!(p.grand_slams, 1);
    // rounds 3-5 from the table, the final pays champion points
    assert_eq!(p.ranking_points, 500 + 1000 + 2000 + 2000);
}

#[test]
fn seeded_runs_keep_profile_consistent() {
    let mut rng = RngSource::seeded(99);
    for _ in 0..50 {
        let config = tier_config(Gender::Female, TierCode::Wta250).unwrap();
        let mut t = Tournament::new(config, Gender::Female, "Player", &mut rng);
        let mut p = PlayerProfile::new("Player", Gender::Female);
        let mut earned = 0;
        while let Some(result) = play_round(&mut t, &mut p, Strategy::Aggressive, &mut rng) {
            earned += result.prize;
            assert!((5.0..=95.0).contains(&result.win_rate));
        }
        assert!(t.is_finished());
        assert_eq!(p.career_earnings, earned);
        assert_eq!(p.matches_played - p.matches_won, u32::from(t.is_eliminated));
        simulate_remaining_matches(&mut t, &mut rng);
        assert!(t.champion().is_some());
    }
}
