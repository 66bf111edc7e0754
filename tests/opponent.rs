//! Integration tests for opponent generation and the player profile.

use tennis_career::models::{GameClock, STAT_CAP, UNRANKED};
use tennis_career::{Gender, Opponent, PlayerProfile, RngSource, SavedBlob, ScriptedSource};

#[test]
fn generate_with_lowest_draws() {
    let mut rng = ScriptedSource::constant(0.0);
    let o = Opponent::generate(120, 0, Gender::Male, &mut rng);
    assert_eq!(o.ranking, 120);
    assert_eq!(o.attributes.strength, 50);
    assert_eq!(o.attributes.mentality, 50);
    assert_eq!(o.skills.serve, 45);
    assert_eq!(o.skills.return_game, 45);
    assert_eq!(o.name, "Djokovic");
    // (50 * 6 + 45 * 4) / 10
    assert_eq!(o.overall_skill(), 48);
    // five attributes, five skills, one name
    assert_eq!(rng.draws(), 11);
}

#[test]
fn names_come_from_the_gender_pool() {
    let mut rng = ScriptedSource::constant(0.0);
    let o = Opponent::generate(1, 3, Gender::Female, &mut rng);
    assert_eq!(o.name, "Swiatek");
    assert_eq!(o.gender, Gender::Female);
}

#[test]
fn stats_are_capped() {
    let mut rng = ScriptedSource::constant(0.99);
    let o = Opponent::generate(1, 12, Gender::Male, &mut rng);
    assert_eq!(o.attributes.speed, STAT_CAP);
    assert_eq!(o.skills.volley, STAT_CAP);
    assert_eq!(o.overall_skill(), STAT_CAP);
}

#[test]
fn stats_stay_in_band() {
    let mut rng = RngSource::seeded(3);
    for level in -10..=10 {
        let o = Opponent::generate(50, level, Gender::Male, &mut rng);
        let attr_base = 50 + level * 5;
        let skill_base = 45 + level * 5;
        for v in [o.attributes.strength, o.attributes.speed, o.attributes.technique] {
            assert!(v >= attr_base.min(STAT_CAP) && v < attr_base + 20 && v <= STAT_CAP);
        }
        for v in [o.skills.serve, o.skills.forehand, o.skills.backhand] {
            assert!(v >= skill_base.min(STAT_CAP) && v < skill_base + 25 && v <= STAT_CAP);
        }
    }
}

#[test]
fn new_profile_starting_line() {
    let p = PlayerProfile::new("Player", Gender::Male);
    assert_eq!(p.age, 14);
    assert_eq!(p.energy, 100);
    assert_eq!(p.money, 1000);
    assert_eq!(p.ranking, UNRANKED);
    assert_eq!(p.overall_skill(), 32);
    assert_eq!(p.win_rate(), 0.0);
}

#[test]
fn fatigue_lowers_overall_and_clamps() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.spend_energy(30);
    assert_eq!(p.energy, 70);
    assert_eq!(p.fatigue, 30);
    assert_eq!(p.overall_skill(), 29);

    p.spend_energy(200);
    assert_eq!(p.energy, 0);
    assert_eq!(p.fatigue, 100);
    assert_eq!(p.overall_skill(), 22);

    p.attributes.strength = -500;
    assert_eq!(p.overall_skill(), 1);
}

#[test]
fn heavy_fatigue_costs_form() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.spend_energy(70);
    assert_eq!(p.form, 80);
    p.spend_energy(5);
    assert_eq!(p.fatigue, 75);
    assert_eq!(p.form, 75);
}

#[test]
fn rest_recovers_fatigue_and_energy() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.fatigue = 40;
    p.energy = 50;
    // Lowest recovery, no form roll.
    let mut rng = ScriptedSource::new(vec![0.0, 0.4]);
    assert_eq!(p.rest(&mut rng), 15);
    assert_eq!(p.fatigue, 25);
    assert_eq!(p.energy, 80);
    assert_eq!(p.form, 80);

    p.fatigue = 10;
    p.energy = 90;
    let mut rng = ScriptedSource::constant(0.99);
    assert_eq!(p.rest(&mut rng), 25);
    assert_eq!(p.fatigue, 0);
    assert_eq!(p.energy, 100);
    // 80 + 5 + 10
    assert_eq!(p.form, 95);
}

#[test]
fn ranking_points_move_ranking() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.add_ranking_points(100);
    assert_eq!(p.ranking, 990);
    assert_eq!(p.career_high_ranking, 990);
    assert_eq!(p.ranking_points, 100);

    p.add_ranking_points(50_000);
    assert_eq!(p.ranking, 1);
    assert_eq!(p.career_high_ranking, 1);
}

#[test]
fn record_keeping() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.add_win();
    p.add_win();
    p.add_win();
    p.add_loss();
    assert_eq!(p.matches_played, 4);
    assert_eq!(p.win_rate(), 75.0);
    p.earn_prize(250);
    assert_eq!(p.money, 1250);
    assert_eq!(p.career_earnings, 250);
    p.record_title(false);
    p.record_title(true);
    assert_eq!(p.titles, 2);
    assert_eq!(p.grand_slams, 1);
}

#[test]
fn clock_rolls_months_and_years() {
    let mut clock = GameClock::default();
    for _ in 0..3 {
        assert!(!clock.advance_week().new_month);
    }
    let rollover = clock.advance_week();
    assert!(rollover.new_month);
    assert_eq!((clock.month, clock.week), (2, 1));

    let mut clock = GameClock {
        year: 2024,
        month: 12,
        week: 4,
    };
    let rollover = clock.advance_week();
    assert!(rollover.new_year);
    assert_eq!(clock, GameClock { year: 2025, month: 1, week: 1 });
}

#[test]
fn new_year_ages_player() {
    let mut blob = SavedBlob::new(PlayerProfile::new("Player", Gender::Male));
    blob.clock = GameClock {
        year: 2024,
        month: 12,
        week: 4,
    };
    blob.advance_week();
    assert_eq!(blob.player.age, 15);
    assert_eq!(blob.player.career_year, 1);
    assert_eq!(blob.clock.year, 2025);
}
