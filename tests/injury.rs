//! Integration tests for the injury table and profile injury handling.

use tennis_career::models::{roll_injury, roll_injury_severity, InjuryPenalty};
use tennis_career::{Gender, InjuryType, PlayerProfile, ScriptedSource};

#[test]
fn draws_map_to_bands() {
    let draws = vec![0.59, 0.60, 0.79, 0.80, 0.89, 0.90, 0.94, 0.95, 0.97, 0.98, 0.994, 0.995, 0.999];
    let mut rng = ScriptedSource::new(draws.clone());
    let rolled: Vec<InjuryType> = (0..draws.len()).map(|_| roll_injury(&mut rng)).collect();
    assert_eq!(
        rolled,
        vec![
            InjuryType::None,
            InjuryType::LightStrain,
            InjuryType::LightStrain,
            InjuryType::MuscleSoreness,
            InjuryType::MuscleSoreness,
            InjuryType::Sprain,
            InjuryType::Sprain,
            InjuryType::TennisElbow,
            InjuryType::TennisElbow,
            InjuryType::Meniscus,
            InjuryType::Meniscus,
            InjuryType::SeasonEnding,
            InjuryType::SeasonEnding,
        ]
    );
}

#[test]
fn durations_and_penalties() {
    assert_eq!(InjuryType::None.duration_weeks(), 0);
    assert_eq!(InjuryType::Sprain.duration_weeks(), 2);
    assert_eq!(InjuryType::SeasonEnding.duration_weeks(), 8);
    assert_eq!(InjuryType::None.penalty(), InjuryPenalty::default());
    assert_eq!(InjuryType::LightStrain.penalty().speed, -10);
    assert_eq!(InjuryType::Meniscus.penalty().magnitude(), 40);
    assert_eq!(InjuryType::SeasonEnding.penalty().magnitude(), 100);
}

#[test]
fn severity_roll_is_always_an_injury() {
    let mut rng = ScriptedSource::new(vec![0.0, 0.6, 0.999]);
    assert_eq!(roll_injury_severity(&mut rng), InjuryType::LightStrain);
    // 0.60 + 0.6 * 0.40 = 0.84
    assert_eq!(roll_injury_severity(&mut rng), InjuryType::MuscleSoreness);
    assert_eq!(roll_injury_severity(&mut rng), InjuryType::SeasonEnding);
}

#[test]
fn injury_lowers_overall_until_healed() {
    let mut p = PlayerProfile::new("Player", Gender::Female);
    assert_eq!(p.overall_skill(), 32);

    p.suffer_injury(InjuryType::Sprain);
    assert!(p.injury.is_injured());
    // -15 speed -> -7
    assert_eq!(p.overall_skill(), 25);

    assert!(!p.recover_injury_week());
    assert_eq!(p.injury.weeks_remaining, 1);
    assert!(p.recover_injury_week());
    assert!(!p.injury.is_injured());
    assert_eq!(p.overall_skill(), 32);
}

#[test]
fn none_roll_does_not_injure() {
    let mut p = PlayerProfile::new("Player", Gender::Male);
    p.suffer_injury(InjuryType::None);
    assert!(!p.injury.is_injured());
    assert!(!p.recover_injury_week());
}
