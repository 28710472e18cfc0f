//! Unit tests for types module.

use super::*;

// ============================================================================
// PlayerResponse Tests
// ============================================================================

#[test]
fn test_player_response_deserialization() {
    let json = r#"{
        "id": 874,
        "player_name": "Mohamed Salah",
        "age": 32,
        "position": "Attacker",
        "jersey_number": 11,
        "photo_url": null,
        "team": {
            "id": 40,
            "team_name": "Liverpool",
            "team_code": "LIV",
            "team_country": "England",
            "team_logo": null
        }
    }"#;

    let player: PlayerResponse = serde_json::from_str(json).unwrap();
    assert_eq!(player.id, 874);
    assert_eq!(player.player_name, "Mohamed Salah");
    assert_eq!(player.jersey_number, Some(11));

    let team = player.team.expect("team should be present");
    assert_eq!(team.id, 40);
    assert_eq!(team.team_code.as_deref(), Some("LIV"));
}

#[test]
fn test_player_response_deserialization_without_team() {
    let json = r#"{
        "id": 1,
        "player_name": "Free Agent",
        "age": null,
        "position": null,
        "jersey_number": null,
        "photo_url": null,
        "team": null
    }"#;

    let player: PlayerResponse = serde_json::from_str(json).unwrap();
    assert!(player.team.is_none());
}

// ============================================================================
// TeamResponse Tests
// ============================================================================

#[test]
fn test_team_response_deserialization() {
    let json = r#"{
        "id": 42,
        "team_name": "Arsenal",
        "team_code": "ARS",
        "team_country": "England",
        "team_founded": 1886,
        "is_national_team": false,
        "team_logo": null,
        "venue": {
            "venue_id": 494,
            "venue_name": "Emirates Stadium",
            "venue_address": "Hornsey Road",
            "venue_city": "London",
            "venue_capacity": 60383,
            "venue_surface": "grass"
        }
    }"#;

    let team: TeamResponse = serde_json::from_str(json).unwrap();
    assert_eq!(team.id, 42);
    assert_eq!(team.team_founded, Some(1886));

    let venue = team.venue.expect("venue should be present");
    assert_eq!(venue.venue_capacity, Some(60383));
}

// ============================================================================
// FixtureResponse Tests
// ============================================================================

#[test]
fn test_fixture_response_deserialization() {
    let json = r#"{
        "id": 1035037,
        "fixture_datetime": "2024-12-07T15:00:00Z",
        "fixture_date": "2024-12-07",
        "season": 2024,
        "status": "FT",
        "status_long": "Match Finished",
        "minutes_elapsed": 90,
        "league": {
            "league_id": 39,
            "league_name": "Premier League",
            "league_type": "League",
            "league_country": "England",
            "league_round": "Regular Season - 15"
        },
        "venue": null,
        "home_team": {
            "team_id": 40,
            "team_name": "Liverpool",
            "team_code": "LIV",
            "winner": true
        },
        "away_team": {
            "team_id": 42,
            "team_name": "Arsenal",
            "team_code": "ARS",
            "winner": false
        },
        "score": {
            "goals_home": 2,
            "goals_away": 1,
            "halftime_home": 1,
            "halftime_away": 0,
            "fulltime_home": 2,
            "fulltime_away": 1,
            "total_goals": 3,
            "goal_difference": 1
        },
        "result": "home_win",
        "referee": "M. Oliver",
        "is_live": false,
        "is_finished": true,
        "is_scheduled": false
    }"#;

    let fixture: FixtureResponse = serde_json::from_str(json).unwrap();
    assert_eq!(fixture.id, 1035037);
    assert_eq!(fixture.status, "FT");
    assert!(fixture.is_finished);
    assert!(!fixture.is_live);
    assert_eq!(
        fixture.fixture_date,
        NaiveDate::from_ymd_opt(2024, 12, 7).unwrap()
    );

    let score = fixture.score.expect("score should be present");
    assert_eq!(score.total_goals, Some(3));
}

#[test]
fn test_fixture_response_round_trip() {
    let json = r#"{
        "id": 1,
        "fixture_datetime": "2025-03-01T20:00:00Z",
        "fixture_date": "2025-03-01",
        "season": 2024,
        "status": "NS",
        "status_long": null,
        "minutes_elapsed": null,
        "league": {
            "league_id": 61,
            "league_name": "Ligue 1",
            "league_type": null,
            "league_country": null,
            "league_round": null
        },
        "venue": null,
        "home_team": {"team_id": 85, "team_name": "PSG", "team_code": null, "winner": null},
        "away_team": {"team_id": 91, "team_name": "Monaco", "team_code": null, "winner": null},
        "score": null,
        "result": null,
        "referee": null,
        "is_live": false,
        "is_finished": false,
        "is_scheduled": true
    }"#;

    let fixture: FixtureResponse = serde_json::from_str(json).unwrap();
    let serialized = serde_json::to_string(&fixture).unwrap();
    let reparsed: FixtureResponse = serde_json::from_str(&serialized).unwrap();

    assert_eq!(fixture, reparsed);
}

// ============================================================================
// HealthResponse Tests
// ============================================================================

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status": "ok", "version": "0.1.0"}"#;

    let health: HealthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "0.1.0");
}
