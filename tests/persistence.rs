//! Integration tests for the save slot stores.

use tennis_career::models::{MatchInfo, PersistedTournamentState, TournamentPhase};
use tennis_career::{
    tier_config, CareerError, Gender, JsonFileStore, MemoryStore, PlayerProfile, SaveStore, SavedBlob,
    ScriptedSource, TierCode, Tournament,
};

fn blob_with_tournament() -> SavedBlob {
    let mut rng = ScriptedSource::constant(0.0);
    let config = tier_config(Gender::Male, TierCode::Futures).unwrap();
    let tournament = Tournament::new(config, Gender::Male, "Player", &mut rng);
    let mut blob = SavedBlob::new(PlayerProfile::new("Player", Gender::Male));
    blob.ongoing_tournament = Some(PersistedTournamentState {
        tournament,
        match_info: MatchInfo::Champion,
        phase: TournamentPhase::Match,
        tier: TierCode::Futures,
        event_name: "Futures".to_string(),
    });
    blob
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("save.json"));
    assert!(store.load().unwrap().is_none());

    let blob = blob_with_tournament();
    store.save(&blob).unwrap();
    assert_eq!(store.load().unwrap(), Some(blob));
}

#[test]
fn file_store_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("save.json"));
    store.save(&SavedBlob::new(PlayerProfile::new("Player", Gender::Female))).unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    store.clear().unwrap();
}

#[test]
fn file_store_overwrites_single_slot() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("save.json"));
    let mut blob = SavedBlob::new(PlayerProfile::new("First", Gender::Male));
    store.save(&blob).unwrap();
    blob.player.name = "Second".to_string();
    store.save(&blob).unwrap();
    assert_eq!(store.load().unwrap().unwrap().player.name, "Second");
}

#[test]
fn corrupt_save_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(CareerError::Serialization(_))));
}

#[test]
fn blob_without_ongoing_field_loads() {
    let blob = SavedBlob::new(PlayerProfile::new("Player", Gender::Male));
    let mut value = serde_json::to_value(&blob).unwrap();
    value.as_object_mut().unwrap().remove("ongoing_tournament");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, value.to_string()).unwrap();
    let loaded = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert!(loaded.ongoing_tournament.is_none());
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryStore::new();
    assert!(store.load().unwrap().is_none());
    let blob = blob_with_tournament();
    store.save(&blob).unwrap();
    assert_eq!(store.load().unwrap(), Some(blob));
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}
