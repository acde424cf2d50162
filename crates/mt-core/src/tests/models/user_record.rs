use crate::{CardVersion, Kiosk, TrailId, UserRecord};

use std::str::FromStr;

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

fn sample_user() -> UserRecord {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    UserRecord::new(
        "Alice Smith".to_string(),
        "alice@example.com".to_string(),
        TrailId::from_str("MT-ABCDEF").unwrap(),
        "alice1234".to_string(),
        now,
    )
}

#[test]
fn given_new_user_when_created_then_starts_empty_at_version_one() {
    let user = sample_user();

    assert_that!(user.card_version, eq(CardVersion::MIN));
    assert_that!(user.points, eq(0));
    assert_that!(user.completed_games, is_empty());
    assert_that!(user.completed_quizzes, is_empty());
    assert_that!(user.achievements, is_empty());
    assert_that!(user.registered_at, eq(user.last_active));
    assert_that!(user.first_name(), eq("Alice"));
}

#[test]
fn given_user_when_serialized_then_uses_camel_case_field_names() {
    let json = serde_json::to_value(sample_user()).unwrap();

    for field in [
        "fullName",
        "email",
        "trailId",
        "username",
        "cardVersion",
        "points",
        "completedQuizzes",
        "completedGames",
        "achievements",
        "registeredAt",
        "lastActive",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert_that!(json["trailId"].as_str(), some(eq("MT-ABCDEF")));
    assert_that!(json["cardVersion"].as_u64(), some(eq(1)));
}

#[test]
fn given_minimal_stored_record_when_deserialized_then_defaults_fill_in() {
    let json = r#"{
        "fullName": "Bob",
        "email": "bob@example.com",
        "trailId": "MT-ZZZZZZ",
        "username": "bob5555",
        "registeredAt": "2024-01-01T00:00:00.000Z",
        "lastActive": "2024-01-01T00:00:00.000Z"
    }"#;

    let user: UserRecord = serde_json::from_str(json).unwrap();

    assert_that!(user.card_version, eq(CardVersion::MIN));
    assert_that!(user.points, eq(0));
    assert_that!(user.completed_games, is_empty());
}

#[test]
fn given_null_counters_and_lists_when_deserialized_then_read_as_empty() {
    // Given: Fields another kiosk wrote as explicit nulls
    let json = r#"{
        "fullName": "Bob",
        "email": "bob@example.com",
        "trailId": "MT-ZZZZZZ",
        "username": "bob5555",
        "cardVersion": null,
        "points": null,
        "completedQuizzes": null,
        "completedGames": null,
        "achievements": null,
        "registeredAt": "2024-01-01T00:00:00.000Z",
        "lastActive": "2024-01-01T00:00:00.000Z"
    }"#;

    // When
    let user: UserRecord = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(user.card_version, eq(CardVersion::MIN));
    assert_that!(user.points, eq(0));
    assert_that!(user.completed_quizzes, is_empty());
    assert_that!(user.completed_games, is_empty());
    assert_that!(user.achievements, is_empty());
}

#[test]
fn given_new_kiosk_when_record_completion_then_adds_and_upgrades_card() {
    let mut user = sample_user();

    assert_that!(user.record_completion(Kiosk::NpTrivia), eq(true));

    assert_that!(user.completed_games, elements_are![eq("kiosk3-np-trivia")]);
    assert_that!(user.card_version.get(), eq(2));
    assert_that!(user.has_completed(Kiosk::NpTrivia), eq(true));
}

#[test]
fn given_repeat_kiosk_when_record_completion_then_no_duplicate() {
    let mut user = sample_user();
    user.record_completion(Kiosk::GuessTheEra);

    assert_that!(user.record_completion(Kiosk::GuessTheEra), eq(false));
    assert_that!(user.completed_games.len(), eq(1));
}

#[test]
fn given_higher_stored_version_when_record_completion_then_version_not_lowered() {
    let mut user = sample_user();
    user.card_version = CardVersion::new(4);

    user.record_completion(Kiosk::TimeCapsule);

    assert_that!(user.card_version.get(), eq(4));
}

#[test]
fn given_unknown_and_repeated_ids_when_completed_kiosks_then_skipped() {
    let mut user = sample_user();
    user.completed_games = vec![
        "kiosk2-rebuilding-np".to_string(),
        "arcade-cabinet".to_string(),
        "kiosk2-rebuilding-np".to_string(),
        "kiosk1-guess-the-era".to_string(),
    ];

    assert_that!(
        user.completed_kiosks(),
        elements_are![eq(&Kiosk::RebuildingNp), eq(&Kiosk::GuessTheEra)]
    );
}

#[test]
fn given_user_when_touch_then_last_active_moves() {
    let mut user = sample_user();
    let later = user.last_active + Duration::minutes(5);

    user.touch(later);

    assert_that!(user.last_active, eq(later));
    assert_that!(user.registered_at, lt(later));
}
