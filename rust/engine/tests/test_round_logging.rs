mod helpers;

use std::fs;

use helpers::ScriptedPlayer;
use twentyone_engine::cards::{Card, Rank as R, Suit as S};
use twentyone_engine::engine::{Session, SessionConfig};
use twentyone_engine::logger::{format_round_id, RoundLogger, RoundRecord};
use twentyone_engine::payout::{Outcome, SettledHand};

fn sample() -> RoundRecord {
    RoundRecord {
        round_id: None,
        round: 1,
        shuffled: true,
        hands: vec![SettledHand {
            cards: vec![
                Card {
                    suit: S::Clubs,
                    rank: R::Ace,
                },
                Card {
                    suit: S::Hearts,
                    rank: R::King,
                },
            ],
            wager: 100,
            outcome: Outcome::Blackjack,
            payout: 150,
        }],
        dealer: vec![
            Card {
                suit: S::Spades,
                rank: R::Ten,
            },
            Card {
                suit: S::Spades,
                rank: R::Nine,
            },
        ],
        dealer_blackjack: false,
        net: 150,
        balance: 150,
        rejected_moves: 0,
        ts: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
    assert_eq!(format_round_id("20251231", 42), "20251231-000042");
}

#[test]
fn id_and_ts_are_injected_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    logger.write(&sample()).expect("write");
    let preset = RoundRecord {
        round_id: Some("custom-id".into()),
        ts: Some("2030-01-01T00:00:00Z".into()),
        ..sample()
    };
    logger.write(&preset).expect("write2");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: RoundRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(first.round_id.as_deref().unwrap().ends_with("-000001"));
    assert!(first.ts.is_some());
    let second: RoundRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.round_id.as_deref(), Some("custom-id"));
    assert_eq!(second.ts.as_deref(), Some("2030-01-01T00:00:00Z"));
}

#[test]
fn record_uses_lowercase_outcomes() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert!(json.contains("\"outcome\":\"blackjack\""));
    let back: RoundRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn session_logs_one_line_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    let config = SessionConfig {
        rounds: 4,
        seed: Some(11),
        ..SessionConfig::default()
    };
    let mut session = Session::new(config).unwrap();
    session.set_logger(RoundLogger::create(&path).unwrap());
    let balance = session.play(&mut ScriptedPlayer::standing(100)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records.last().unwrap().balance, balance);
    let summed: i64 = records.iter().map(|r| r.net).sum();
    assert_eq!(summed, balance);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.round, i as u32 + 1);
    }
}
