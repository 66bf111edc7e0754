//! Season calendar: which events are open in a given week.

use crate::models::{tier_config, Gender, TierCode, TierConfig};
use serde::{Deserialize, Serialize};

/// Tour filter for a calendar lookup. `Both` only matches joint events.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarGender {
    Male,
    Female,
    Both,
}

impl From<Gender> for CalendarGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => CalendarGender::Male,
            Gender::Female => CalendarGender::Female,
        }
    }
}

impl CalendarGender {
    /// Tour whose tier table prices the event. Only a men's request uses the
    /// men's table; women's and joint requests use the women's.
    fn table(self) -> Gender {
        match self {
            CalendarGender::Male => Gender::Male,
            CalendarGender::Female | CalendarGender::Both => Gender::Female,
        }
    }
}

pub struct CalendarEvent {
    pub tier: TierCode,
    pub name: &'static str,
}

/// One week of the fixed season. `gender: None` means nothing is scheduled.
pub struct CalendarEntry {
    pub month: u32,
    pub week_in_month: u32,
    pub events: &'static [CalendarEvent],
    pub gender: Option<CalendarGender>,
}

macro_rules! ev {
    ($tier:ident, $name:literal) => {
        CalendarEvent {
            tier: TierCode::$tier,
            name: $name,
        }
    };
}

const fn week(
    month: u32,
    week_in_month: u32,
    events: &'static [CalendarEvent],
    gender: Option<CalendarGender>,
) -> CalendarEntry {
    CalendarEntry {
        month,
        week_in_month,
        events,
        gender,
    }
}

const MALE: Option<CalendarGender> = Some(CalendarGender::Male);
const FEMALE: Option<CalendarGender> = Some(CalendarGender::Female);
const BOTH: Option<CalendarGender> = Some(CalendarGender::Both);
const OFF: Option<CalendarGender> = None;

pub static CALENDAR: [CalendarEntry; 48] = [
    // January: Australian swing
    week(1, 1, &[ev!(Atp250, "Brisbane International"), ev!(Atp250, "Pune Open")], MALE),
    week(1, 2, &[ev!(Atp250, "Auckland Open")], MALE),
    week(1, 3, &[ev!(Wta250, "Auckland Open"), ev!(Wta250, "Brisbane International")], FEMALE),
    week(1, 4, &[], OFF),
    // February
    week(2, 1, &[ev!(GrandSlam, "Australian Open")], BOTH),
    week(2, 2, &[], OFF),
    week(2, 3, &[ev!(Atp500, "Rotterdam Open"), ev!(Atp250, "Buenos Aires Open")], MALE),
    week(2, 4, &[ev!(Wta500, "Dubai Championships"), ev!(Wta250, "Qatar Open")], FEMALE),
    // March: Sunshine double
    week(3, 1, &[ev!(Atp1000, "Indian Wells Masters")], MALE),
    week(3, 2, &[ev!(Wta1000, "Indian Wells Open")], FEMALE),
    week(3, 3, &[ev!(Atp1000, "Miami Open")], MALE),
    week(3, 4, &[ev!(Wta1000, "Miami Open")], FEMALE),
    // April: clay
    week(4, 1, &[ev!(Atp250, "Monte Carlo Masters"), ev!(Atp250, "Houston Open")], MALE),
    week(4, 2, &[ev!(Wta250, "Bogota Open"), ev!(Wta250, "Stuttgart Open")], FEMALE),
    week(4, 3, &[ev!(Atp500, "Barcelona Open"), ev!(Atp250, "Munich Open")], MALE),
    week(4, 4, &[ev!(Wta500, "Stuttgart Grand Prix"), ev!(Wta250, "Istanbul Cup")], FEMALE),
    // May
    week(5, 1, &[ev!(Atp250, "Madrid Open"), ev!(Atp250, "Geneva Open")], MALE),
    week(5, 2, &[ev!(Wta250, "Rabat Grand Prix"), ev!(Wta250, "Strasbourg Open")], FEMALE),
    week(5, 3, &[ev!(Atp1000, "Rome Masters")], MALE),
    week(5, 4, &[ev!(Wta1000, "Italian Open")], FEMALE),
    // June
    week(6, 1, &[ev!(GrandSlam, "French Open")], BOTH),
    week(6, 2, &[], OFF),
    week(6, 3, &[ev!(Atp250, "'s-Hertogenbosch Open"), ev!(Atp250, "Mallorca Championships")], MALE),
    week(6, 4, &[ev!(Wta250, "Berlin Open"), ev!(Wta250, "Birmingham Classic")], FEMALE),
    // July: grass
    week(7, 1, &[ev!(Atp500, "Queen's Club Championships"), ev!(Atp250, "Eastbourne International")], MALE),
    week(7, 2, &[ev!(Wta500, "Eastbourne International"), ev!(Wta250, "Bad Homburg Open")], FEMALE),
    week(7, 3, &[ev!(GrandSlam, "Wimbledon")], BOTH),
    week(7, 4, &[], OFF),
    // August: North American hard courts
    week(8, 1, &[ev!(Atp1000, "Canadian Open")], MALE),
    week(8, 2, &[ev!(Wta1000, "Canadian Open")], FEMALE),
    week(8, 3, &[ev!(Atp1000, "Cincinnati Open")], MALE),
    week(8, 4, &[ev!(Wta1000, "Cincinnati Open")], FEMALE),
    // September
    week(9, 1, &[ev!(GrandSlam, "US Open")], BOTH),
    week(9, 2, &[], OFF),
    week(9, 3, &[ev!(Atp250, "Chengdu Open"), ev!(Atp250, "Zhuhai Championships")], MALE),
    week(9, 4, &[ev!(Wta500, "China Open"), ev!(Wta250, "Guangzhou Open")], FEMALE),
    // October: Asia and indoor Europe
    week(10, 1, &[ev!(Atp500, "Shanghai Masters")], MALE),
    week(10, 2, &[ev!(Wta1000, "China Open")], FEMALE),
    week(10, 3, &[ev!(Atp1000, "Paris Masters")], MALE),
    week(10, 4, &[ev!(Wta500, "Kremlin Cup"), ev!(Wta250, "Tianjin Open")], FEMALE),
    // November: season finals
    week(11, 1, &[ev!(Atp1000, "ATP Finals")], MALE),
    week(11, 2, &[ev!(Wta1000, "WTA Finals")], FEMALE),
    week(11, 3, &[], OFF),
    week(11, 4, &[], OFF),
    // December: off-season
    week(12, 1, &[], OFF),
    week(12, 2, &[], OFF),
    week(12, 3, &[], OFF),
    week(12, 4, &[], OFF),
];

/// An event the player may enter this week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableTournament {
    pub tier: TierCode,
    pub name: String,
    pub config: TierConfig,
    pub gender: CalendarGender,
}

/// Clamp a week-of-month to 1..=4 (0 counts as the first week).
pub fn week_in_month(week_of_month: u32) -> u32 {
    week_of_month.clamp(1, 4)
}

/// Events open in `month`/`week_of_month` for `gender`. Weeks with nothing
/// scheduled give an empty list. `_year` is accepted for callers that track
/// it; the season is the same every year.
pub fn available_tournaments(
    _year: i32,
    month: u32,
    gender: CalendarGender,
    week_of_month: u32,
) -> Vec<AvailableTournament> {
    let wanted_week = week_in_month(week_of_month);
    CALENDAR
        .iter()
        .filter(|entry| entry.month == month && entry.week_in_month == wanted_week)
        .filter(|entry| matches!(entry.gender, Some(g) if g == CalendarGender::Both || g == gender))
        .flat_map(|entry| entry.events.iter())
        .filter_map(|event| {
            // Events missing from the tour's table are skipped, not errors.
            let config = tier_config(gender.table(), event.tier).ok()?;
            Some(AvailableTournament {
                tier: event.tier,
                name: event.name.to_string(),
                config,
                gender,
            })
        })
        .collect()
}
