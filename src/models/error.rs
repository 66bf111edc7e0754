//! Crate error type.

use crate::models::player::Gender;
use crate::models::tier::TierCode;

/// Errors from configuration lookups, caller-side entry checks and persistence.
/// The bracket engine itself never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum CareerError {
    /// Strategy key is not one of the four known keys.
    UnknownStrategy(String),
    /// Tier code string is not recognised.
    UnknownTier(String),
    /// Tier exists but is not on this gender's tour.
    TierNotOffered { tier: TierCode, gender: Gender },
    /// Player is injured and cannot enter.
    Injured { weeks_remaining: u32 },
    NotEnoughMoney { needed: u64, available: u64 },
    NotEnoughEnergy { needed: u32, available: u32 },
    SkillTooLow { required: i32, actual: i32 },
    /// No round left to play (champion or eliminated).
    TournamentFinished,
    /// No tournament in progress.
    NoActiveTournament,
    /// Entry id not offered this week.
    EntryNotFound(String),
    Io(String),
    Serialization(String),
}

impl std::fmt::Display for CareerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CareerError::UnknownStrategy(key) => write!(f, "Unknown strategy '{}'", key),
            CareerError::UnknownTier(code) => write!(f, "Unknown tournament tier '{}'", code),
            CareerError::TierNotOffered { tier, gender } => {
                write!(f, "Tier {} is not offered on the {:?} tour", tier.code(), gender)
            }
            CareerError::Injured { weeks_remaining } => {
                write!(f, "Injured: needs {} more week(s) of rest", weeks_remaining)
            }
            CareerError::NotEnoughMoney { needed, available } => {
                write!(f, "Not enough money for the entry fee (need {}, have {})", needed, available)
            }
            CareerError::NotEnoughEnergy { needed, available } => {
                write!(f, "Not enough energy (need {}, have {})", needed, available)
            }
            CareerError::SkillTooLow { required, actual } => {
                write!(f, "Overall skill {} is below the required {}", actual, required)
            }
            CareerError::TournamentFinished => write!(f, "Tournament is already over"),
            CareerError::NoActiveTournament => write!(f, "No tournament in progress"),
            CareerError::EntryNotFound(id) => write!(f, "Tournament '{}' is not open this week", id),
            CareerError::Io(msg) => write!(f, "Save store I/O error: {}", msg),
            CareerError::Serialization(msg) => write!(f, "Save data error: {}", msg),
        }
    }
}

impl std::error::Error for CareerError {}

impl From<std::io::Error> for CareerError {
    fn from(e: std::io::Error) -> Self {
        CareerError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CareerError {
    fn from(e: serde_json::Error) -> Self {
        CareerError::Serialization(e.to_string())
    }
}
