//! Page loaders driven end-to-end against fixture gateways, including
//! the RPC-to-direct-read fallback paths.

use futures::executor::block_on;

use gateway::fixtures::{FixtureGateway, FixtureRow};
use ui::core::projection::{sort_by_metric_desc, RateMetric};
use ui::queries;

fn race(horse_id: &str, horse_name: &str, race_id: &str) -> FixtureRow {
    let mut row = FixtureRow::sample(horse_id, horse_name);
    row.race_id = race_id.to_string();
    row
}

#[test]
fn search_uses_the_distinct_rpc_first() {
    let gateway = FixtureGateway::with_rows(vec![
        race("h1", "Spark Plug", "race-1"),
        race("h1", "Spark Plug", "race-2"),
        race("h2", "Night Mare", "race-3"),
    ]);

    let horses = block_on(queries::search_horses(&gateway, "spark")).unwrap();
    assert_eq!(horses.len(), 1);
    assert_eq!(horses[0].horse_name, "Spark Plug");
}

#[test]
fn search_falls_back_to_direct_read_and_dedups() {
    let gateway = FixtureGateway::with_rows(vec![
        race("h1", "Spark Plug", "race-1"),
        race("h1", "Spark Plug", "race-2"),
        race("h2", "Dark Sparkle", "race-3"),
    ])
    .fail("search_horses");

    let horses = block_on(queries::search_horses(&gateway, "spark")).unwrap();
    assert_eq!(horses.len(), 2);
    assert_eq!(horses[0].horse_id, "h1");
    assert_eq!(horses[1].horse_id, "h2");
}

#[test]
fn search_surfaces_an_error_when_both_paths_fail() {
    let gateway = FixtureGateway::default()
        .fail("search_horses")
        .fail("horses_matching");

    let outcome = block_on(queries::search_horses(&gateway, "spark"));
    let message = outcome.unwrap_err();
    assert!(message.starts_with("Couldn't search horses"), "{message}");
}

#[test]
fn horse_bundle_orders_races_chronologically_and_summarizes() {
    let mut newest = race("h1", "Spark Plug", "race-newest");
    newest.race_date = Some("2026-03-01".to_string());
    newest.finish_position = 4;
    newest.earnings = 10.0;
    newest.finish_time = 64.0;

    let mut oldest = race("h1", "Spark Plug", "race-oldest");
    oldest.race_date = Some("2026-01-01".to_string());
    oldest.finish_position = 1;
    oldest.earnings = 200.0;
    oldest.finish_time = 61.5;

    let mut middle = race("h1", "Spark Plug", "race-middle");
    middle.race_date = Some("2026-02-01".to_string());
    middle.finish_position = 1;
    middle.earnings = 150.0;
    middle.finish_time = 62.0;

    let gateway = FixtureGateway::with_rows(vec![newest, oldest, middle]);

    let bundle = block_on(queries::load_horse(&gateway, "h1"))
        .unwrap()
        .expect("known horse");

    let order: Vec<&str> = bundle
        .races
        .iter()
        .map(|race| race.race_id.as_str())
        .collect();
    assert_eq!(order, vec!["race-oldest", "race-middle", "race-newest"]);

    assert_eq!(bundle.summary.races, 3);
    assert_eq!(bundle.summary.wins, 2);
    let win_rate = bundle.summary.win_rate.expect("three races ran");
    assert!((win_rate - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(bundle.summary.average_finish, Some(2.0));
    assert_eq!(bundle.summary.total_earnings, 360.0);
    assert_eq!(bundle.profile.horse_name, "Spark Plug");
}

#[test]
fn unknown_horse_is_none_not_an_error() {
    let gateway = FixtureGateway::with_rows(vec![race("h1", "Spark Plug", "race-1")]);
    let bundle = block_on(queries::load_horse(&gateway, "missing")).unwrap();
    assert!(bundle.is_none());
}

#[test]
fn augment_board_falls_back_to_client_aggregation() {
    // The §8 shape: (A,B,C) goes 4 for 10, (D,E,F) goes 5 for 5.
    let mut rows = Vec::new();
    for i in 0..10 {
        let mut row = race("h1", "Spark Plug", &format!("abc-{i}"));
        row.cpu_augment = "A".to_string();
        row.ram_augment = "B".to_string();
        row.hydraulic_augment = "C".to_string();
        row.finish_position = if i < 4 { 1 } else { 6 };
        rows.push(row);
    }
    for i in 0..5 {
        let mut row = race("h2", "Night Mare", &format!("def-{i}"));
        row.cpu_augment = "D".to_string();
        row.ram_augment = "E".to_string();
        row.hydraulic_augment = "F".to_string();
        row.finish_position = 1;
        rows.push(row);
    }

    let gateway = FixtureGateway::with_rows(rows).fail("augment_stats");

    let mut board = block_on(queries::load_augment_board(&gateway, None)).unwrap();
    sort_by_metric_desc(&mut board, RateMetric::Win);

    assert_eq!(board.len(), 2);
    assert_eq!(board[0].cpu_augment, "D");
    assert_eq!(board[0].win_rate, Some(100.0));
    assert_eq!(board[1].cpu_augment, "A");
    assert_eq!(board[1].win_rate, Some(40.0));
}

#[test]
fn augment_board_scopes_to_a_bloodline() {
    let mut szabo = race("h1", "Spark Plug", "race-1");
    szabo.bloodline = "Szabo".to_string();
    let mut finney = race("h2", "Night Mare", "race-2");
    finney.bloodline = "Finney".to_string();
    finney.cpu_augment = "Other".to_string();

    let gateway = FixtureGateway::with_rows(vec![szabo, finney]);

    let board = block_on(queries::load_augment_board(&gateway, Some("Finney"))).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].cpu_augment, "Other");
    assert_eq!(board[0].races, 1);
}

#[test]
fn bloodlines_fall_back_to_the_distinct_read() {
    let mut second = race("h2", "Night Mare", "race-2");
    second.bloodline = "Finney".to_string();
    let gateway = FixtureGateway::with_rows(vec![race("h1", "Spark Plug", "race-1"), second])
        .fail("bloodlines");

    let names = block_on(queries::load_bloodlines(&gateway)).unwrap();
    assert_eq!(names, vec!["Szabo".to_string(), "Finney".to_string()]);
}

#[test]
fn stable_roster_collapses_duplicate_horses_keeping_first_seen() {
    let mut first = race("7", "Spark Plug", "race-1");
    first.earnings = 120.0;
    let mut second = race("7", "Renamed Later", "race-2");
    second.earnings = 999.0;
    second.bloodline = "Finney".to_string();

    let gateway = FixtureGateway::with_rows(vec![first, second]);

    let roster = block_on(queries::load_stable_roster(&gateway, "Iron Paddock")).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].horse_id, "7");
    assert_eq!(roster[0].horse_name, "Spark Plug");
    assert_eq!(roster[0].bloodline, "Szabo");
    assert_eq!(roster[0].earnings, 120.0);
}

#[test]
fn stable_search_dedups_names() {
    let gateway = FixtureGateway::with_rows(vec![
        race("h1", "Spark Plug", "race-1"),
        race("h2", "Night Mare", "race-2"),
    ]);

    let stables = block_on(queries::search_stables(&gateway, "iron")).unwrap();
    assert_eq!(stables, vec!["Iron Paddock".to_string()]);
}

#[test]
fn stable_search_surfaces_failures() {
    let gateway = FixtureGateway::default().fail("stables_matching");
    let outcome = block_on(queries::search_stables(&gateway, "iron"));
    assert!(outcome.is_err());
}
