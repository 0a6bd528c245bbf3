use std::collections::HashSet;

use nba_h2h_lambda_rust::error::StatsError;
use nba_h2h_lambda_rust::h2h::{reconcile, reconcile_raw};
use nba_h2h_lambda_rust::model::result_set::RawRow;
use nba_h2h_lambda_rust::model::rows::{GameLog, GameRow, StatLine};
use nba_h2h_lambda_rust::model::stat_field::StatField;
use nba_h2h_lambda_rust::model::stat_value::StatValue;
use nba_h2h_lambda_rust::nba_stats::NbaStats;

fn load_log(path: &str) -> Vec<RawRow> {
    let body = std::fs::read_to_string(path).expect("failed to read game log fixture");
    NbaStats::parse_game_log(&body).expect("parse_game_log failed")
}

fn game(id: &str, pairs: &[(StatField, i64)]) -> GameRow {
    let pairs: Vec<(StatField, StatValue)> = pairs.iter().map(|(f, v)| (*f, StatValue::Int(*v))).collect();
    GameRow::new(id, StatLine::from_pairs(&pairs))
}

fn log(rows: Vec<GameRow>) -> GameLog {
    GameLog::new(rows).expect("unique game ids")
}

#[test]
fn reconciles_fixture_logs_on_common_games() {
    let a = load_log("tests/sample_gamelog_a.json");
    let b = load_log("tests/sample_gamelog_b.json");

    let h2h = reconcile_raw(&a, &b);

    // Common games: 0022300002 and 0022300003
    assert_eq!(h2h.player_a.game_count, 2);
    assert_eq!(h2h.player_b.game_count, 2);
    assert_eq!(h2h.player_a.total_stats[&StatField::Pts], StatValue::Int(52));
    assert_eq!(h2h.player_b.total_stats[&StatField::Pts], StatValue::Int(49));
    assert_eq!(h2h.player_a.avg_stats[&StatField::Pts], 26.0);
    assert_eq!(h2h.player_a.avg_stats[&StatField::Ast], 9.0);
    assert_eq!(h2h.player_b.avg_stats[&StatField::Pts], 24.5);
    assert_eq!(h2h.player_b.avg_stats[&StatField::Reb], 4.0);
    assert_eq!(h2h.player_a.advanced_stats.efg_pct, 0.595);
    assert_eq!(h2h.player_a.advanced_stats.tsp_pct, 0.635);
    assert_eq!(h2h.player_b.advanced_stats.efg_pct, 0.554);
    assert_eq!(h2h.player_b.advanced_stats.tsp_pct, 0.598);
    assert!(h2h.player_a.error.is_none() && h2h.player_b.error.is_none());
}

#[test]
fn single_common_game_matches_that_row() {
    use StatField::*;
    let g1_a = game("G1", &[(Pts, 20), (Fgm, 8), (Fga, 15), (Fg3m, 2), (Fta, 4), (Ftm, 3)]);
    let log_a = log(vec![g1_a.clone(), game("G2", &[(Pts, 30), (Fga, 20), (Fgm, 12)])]);
    let log_b = log(vec![game("G1", &[(Pts, 18), (Fga, 14), (Fgm, 7)]), game("G3", &[(Pts, 5)])]);

    let h2h = reconcile(&log_a, &log_b);

    assert_eq!(h2h.player_a.game_count, 1);
    assert_eq!(h2h.player_b.game_count, 1);
    for (field, value) in g1_a.stats.iter() {
        assert_eq!(h2h.player_a.total_stats[&field], value, "total for {}", field);
    }
    assert_eq!(h2h.player_b.total_stats[&Pts], StatValue::Int(18));
    assert_eq!(h2h.player_a.advanced_stats.efg_pct, 0.6);
    assert_eq!(h2h.player_a.advanced_stats.tsp_pct, 0.597);
}

#[test]
fn disjoint_logs_return_sentinel() {
    let log_a = log(vec![game("G1", &[(StatField::Pts, 10)])]);
    let log_b = log(vec![game("G2", &[(StatField::Pts, 12)])]);

    let h2h = reconcile(&log_a, &log_b);

    for side in [&h2h.player_a, &h2h.player_b] {
        assert_eq!(side.game_count, 0);
        assert_eq!(side.error.as_deref(), Some("No common games found between the two players"));
        assert!(side.avg_stats.values().all(|v| *v == 0.0));
    }
}

#[test]
fn empty_log_returns_sentinel() {
    let log_a = log(vec![game("G1", &[(StatField::Pts, 10)])]);
    let h2h = reconcile(&log_a, &GameLog::default());
    assert_eq!(h2h.player_a.game_count, 0);
    assert_eq!(h2h.player_b.game_count, 0);
    assert!(h2h.player_a.is_error() && h2h.player_b.is_error());

    let h2h = reconcile_raw(&[], &load_log("tests/sample_gamelog_b.json"));
    assert_eq!(h2h.player_a, h2h.player_b);
    assert_eq!(h2h.player_a.game_count, 0);
}

#[test]
fn both_sides_cover_the_same_games() {
    let a = load_log("tests/sample_gamelog_a.json");
    let b = load_log("tests/sample_gamelog_b.json");
    let log_a = GameLog::from_raw(&a).expect("valid log a");
    let log_b = GameLog::from_raw(&b).expect("valid log b");

    let ab = reconcile(&log_a, &log_b);
    let ba = reconcile(&log_b, &log_a);

    assert_eq!(ab.player_a.game_count, ab.player_b.game_count);
    assert_eq!(ab.player_a, ba.player_b);
    assert_eq!(ab.player_b, ba.player_a);

    let ids_a: HashSet<&str> = log_a.game_ids();
    let ids_b: HashSet<&str> = log_b.game_ids();
    let common: HashSet<&str> = ids_a.intersection(&ids_b).copied().collect();
    assert_eq!(common.len() as i64, ab.player_a.game_count);
}

#[test]
fn typed_and_raw_paths_agree() {
    let a = load_log("tests/sample_gamelog_a.json");
    let b = load_log("tests/sample_gamelog_b.json");
    let typed = reconcile(&GameLog::from_raw(&a).expect("log a"), &GameLog::from_raw(&b).expect("log b"));
    assert_eq!(typed, reconcile_raw(&a, &b));
}

#[test]
fn duplicate_game_ids_are_rejected() {
    let rows = vec![game("G1", &[(StatField::Pts, 10)]), game("G1", &[(StatField::Pts, 12)])];
    match GameLog::new(rows) {
        Err(StatsError::DuplicateGame(id)) => assert_eq!(id, "G1"),
        other => panic!("expected DuplicateGame, got {:?}", other),
    }

    let mut a = load_log("tests/sample_gamelog_a.json");
    a.push(a[0].clone());
    let b = load_log("tests/sample_gamelog_b.json");
    let h2h = reconcile_raw(&a, &b);
    let err = h2h.player_a.error.expect("player a should carry the duplicate error");
    assert!(err.contains("more than once"), "error was: {}", err);
    assert!(h2h.player_b.is_error());
}

#[test]
fn bad_cell_on_one_side_keeps_other_side() {
    let a = load_log("tests/sample_gamelog_a.json");
    let b = load_log("tests/sample_gamelog_b.json");
    let mut map = serde_json::Map::new();
    map.insert("Game_ID".to_string(), serde_json::json!("0022300002"));
    map.insert("PTS".to_string(), serde_json::json!("n/a"));
    // Replace player A's 0022300002 row with a broken one
    let mut a: Vec<RawRow> = a
        .into_iter()
        .filter(|r| r.text("GAME_ID").as_deref() != Some("0022300002"))
        .collect();
    a.push(RawRow::from(map));

    let h2h = reconcile_raw(&a, &b);

    assert!(h2h.player_a.is_error(), "player a: {:?}", h2h.player_a);
    assert_eq!(h2h.player_b.game_count, 2);
    assert!(h2h.player_b.error.is_none());
}
