//! Integration tests for the season calendar lookup.

use tennis_career::logic::{week_in_month, CALENDAR};
use tennis_career::{available_tournaments, CalendarGender, Gender, TierCode};

#[test]
fn french_open_is_the_only_joint_event_in_early_june() {
    let open = available_tournaments(2024, 6, CalendarGender::Both, 1);
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].tier, TierCode::GrandSlam);
    assert_eq!(open[0].name, "French Open");
    assert_eq!(open[0].config.total_rounds, 6);
    assert_eq!(open[0].gender, CalendarGender::Both);
    // Joint events are priced from the women's table.
    assert_eq!(open[0].config.gender, Gender::Female);
}

#[test]
fn december_is_off_season() {
    for week in 1..=4 {
        assert!(available_tournaments(2024, 12, CalendarGender::Male, week).is_empty());
        assert!(available_tournaments(2024, 12, CalendarGender::Female, week).is_empty());
    }
}

#[test]
fn joint_events_are_open_to_both_tours() {
    let men = available_tournaments(2024, 7, CalendarGender::Male, 3);
    let women = available_tournaments(2024, 7, CalendarGender::Female, 3);
    assert_eq!(men.len(), 1);
    assert_eq!(women.len(), 1);
    assert_eq!(men[0].config.gender, Gender::Male);
    assert_eq!(women[0].config.gender, Gender::Female);
}

#[test]
fn single_tour_weeks_filter_by_gender() {
    let men = available_tournaments(2024, 1, CalendarGender::Male, 1);
    let names: Vec<&str> = men.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Brisbane International", "Pune Open"]);
    assert!(men.iter().all(|t| t.tier == TierCode::Atp250));

    assert!(available_tournaments(2024, 1, CalendarGender::Female, 1).is_empty());
    // A joint request only matches joint weeks.
    assert!(available_tournaments(2024, 1, CalendarGender::Both, 1).is_empty());
}

#[test]
fn week_is_clamped() {
    assert_eq!(week_in_month(0), 1);
    assert_eq!(week_in_month(9), 4);
    assert_eq!(
        available_tournaments(2024, 1, CalendarGender::Male, 0),
        available_tournaments(2024, 1, CalendarGender::Male, 1)
    );
    let women = available_tournaments(2024, 2, CalendarGender::Female, 9);
    let tiers: Vec<TierCode> = women.iter().map(|t| t.tier).collect();
    assert_eq!(tiers, vec![TierCode::Wta500, TierCode::Wta250]);
}

#[test]
fn year_does_not_change_the_season() {
    assert_eq!(
        available_tournaments(2024, 3, CalendarGender::Male, 1),
        available_tournaments(2031, 3, CalendarGender::Male, 1)
    );
}

#[test]
fn calendar_covers_every_week_once() {
    for month in 1..=12 {
        for week in 1..=4 {
            let count = CALENDAR
                .iter()
                .filter(|e| e.month == month && e.week_in_month == week)
                .count();
            assert_eq!(count, 1, "month {month} week {week}");
        }
    }
    // Every scheduled event resolves on its own tour.
    for entry in CALENDAR.iter().filter(|e| e.gender.is_some()) {
        for gender in [CalendarGender::Male, CalendarGender::Female] {
            let open = available_tournaments(2024, entry.month, gender, entry.week_in_month);
            if entry.gender == Some(gender) {
                assert_eq!(open.len(), entry.events.len());
            }
        }
    }
}
