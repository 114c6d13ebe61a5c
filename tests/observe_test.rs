use matrix_tetris::engine::EngineConfig;
use matrix_tetris::observe::{parse_observe_args, run, ObserveOptions};
use serde_json::Value;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_parse_observe_args() {
    assert_eq!(parse_observe_args(&args(&[])).unwrap(), None);
    assert_eq!(parse_observe_args(&args(&["play"])).unwrap(), None);
    assert_eq!(
        parse_observe_args(&args(&["observe"])).unwrap(),
        Some(ObserveOptions { limit: None })
    );
    assert_eq!(
        parse_observe_args(&args(&["observe", "--limit", "7"])).unwrap(),
        Some(ObserveOptions { limit: Some(7) })
    );
    assert!(parse_observe_args(&args(&["observe", "--limit"])).is_err());
    assert!(parse_observe_args(&args(&["observe", "--limit", "x"])).is_err());
    assert!(parse_observe_args(&args(&["observe", "--host", "a"])).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_limit_caps_output() {
    let mut out = Vec::new();
    let options = ObserveOptions { limit: Some(3) };
    run(&EngineConfig::default().with_seed(5), options, &mut out)
        .await
        .unwrap();

    let records = lines(&out);
    assert_eq!(records.len(), 3);
    let commits: Vec<u64> = records.iter().map(|r| r["commit"].as_u64().unwrap()).collect();
    assert_eq!(commits, vec![0, 1, 2]);

    let board = records[0]["board"].as_array().unwrap();
    assert_eq!(board.len(), 22);
    assert_eq!(board[0].as_str().unwrap().len(), 10);
    assert_eq!(records[0]["fall_interval_ms"], 1000);
}

#[tokio::test(start_paused = true)]
async fn test_unattended_game_runs_to_game_over() {
    let config = EngineConfig {
        seed: 9,
        board_width: 4,
        board_height: 6,
        min_fall_ms: 50,
    };
    let mut out = Vec::new();
    let state = run(&config, ObserveOptions::default(), &mut out).await.unwrap();

    assert!(state.game_over());
    let records = lines(&out);
    let last = records.last().unwrap();
    assert_eq!(last["game_over"], true);
    assert!(records[..records.len() - 1]
        .iter()
        .all(|r| r["game_over"] == false));

    let commits: Vec<u64> = records.iter().map(|r| r["commit"].as_u64().unwrap()).collect();
    assert_eq!(commits[0], 0);
    assert!(commits.windows(2).all(|w| w[0] < w[1]), "{commits:?}");
    assert_eq!(*commits.last().unwrap(), last["commit"].as_u64().unwrap());
}
