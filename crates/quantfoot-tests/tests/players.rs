//! Player endpoint tests.

use quantfoot_client::Error;
use quantfoot_tests::create_test_client;

#[tokio::test]
#[ignore = "requires a running API server and seeded marts schema"]
async fn test_list_players_is_capped() {
    let client = create_test_client().expect("Failed to create client");

    let players = client.list_players().await.expect("Failed to list players");

    assert!(players.len() <= 100);
}

#[tokio::test]
#[ignore = "requires a running API server and seeded marts schema"]
async fn test_get_player_embeds_team() {
    let client = create_test_client().expect("Failed to create client");

    let players = client.list_players().await.expect("Failed to list players");
    let with_team = players
        .iter()
        .find(|p| p.team.is_some())
        .expect("seed data should contain a player with a team");

    let fetched = client
        .get_player(with_team.id)
        .await
        .expect("Failed to get player");

    assert_eq!(fetched.id, with_team.id);
    let team = fetched.team.expect("team should be embedded");
    assert!(!team.team_name.is_empty());
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_get_missing_player_is_not_found() {
    let client = create_test_client().expect("Failed to create client");

    let err = client
        .get_player(i64::MAX)
        .await
        .expect_err("lookup should fail");

    match err {
        Error::NotFound(message) => {
            assert!(message.contains(&i64::MAX.to_string()));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a running API server and seeded marts schema"]
async fn test_players_by_team_is_ordered_by_position() {
    let client = create_test_client().expect("Failed to create client");

    let players = client.list_players().await.expect("Failed to list players");
    let team_id = players
        .iter()
        .find_map(|p| p.team.as_ref().map(|t| t.id))
        .expect("seed data should contain a player with a team");

    let squad = client
        .players_by_team(team_id)
        .await
        .expect("Failed to list squad");

    let positions: Vec<&str> = squad
        .iter()
        .filter_map(|p| p.position.as_deref())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_players_of_unknown_team_is_empty_not_404() {
    let client = create_test_client().expect("Failed to create client");

    let squad = client
        .players_by_team(i64::MAX)
        .await
        .expect("empty squad should still be a success");

    assert!(squad.is_empty());
}

#[tokio::test]
#[ignore = "requires a running API server and seeded marts schema"]
async fn test_repeated_reads_are_identical() {
    let client = create_test_client().expect("Failed to create client");

    let first = client.list_players().await.expect("Failed to list players");
    let second = client.list_players().await.expect("Failed to list players");

    assert_eq!(first, second);
}
