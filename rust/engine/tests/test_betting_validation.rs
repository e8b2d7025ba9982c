use twentyone_engine::cards::{Card, Rank as R, Suit as S};
use twentyone_engine::errors::GameError;
use twentyone_engine::player::Move;
use twentyone_engine::rules::{validate_bet, validate_move, HouseRules};

fn c(r: R) -> Card {
    Card { suit: S::Hearts, rank: r }
}

#[test]
fn bet_under_house_minimum_is_invalid() {
    let err = validate_bet(50, &HouseRules::default()).unwrap_err();
    match err {
        GameError::InvalidBetAmount { amount, minimum } => {
            assert_eq!(amount, 50);
            assert_eq!(minimum, 100);
        }
        _ => panic!("expected InvalidBetAmount"),
    }
    assert!(!err.is_recoverable());
}

#[test]
fn hit_and_stand_are_always_valid() {
    let rules = HouseRules::default();
    let busted = [c(R::King), c(R::Queen), c(R::Five)];
    assert!(validate_move(&busted, Move::Hit, &rules).is_ok());
    assert!(validate_move(&busted, Move::Stand, &rules).is_ok());
}

#[test]
fn split_needs_same_rank_not_same_value() {
    let rules = HouseRules::default();
    assert_eq!(
        validate_move(&[c(R::King), c(R::Jack)], Move::Split, &rules),
        Err(GameError::SplitRankMismatch)
    );
    assert!(validate_move(&[c(R::Ace), c(R::Ace)], Move::Split, &rules).is_ok());
}

#[test]
fn single_card_split_hand_cannot_double_or_split() {
    let rules = HouseRules::default();
    let one = [c(R::Eight)];
    assert_eq!(
        validate_move(&one, Move::Double, &rules),
        Err(GameError::InvalidDouble { cards: 1 })
    );
    assert_eq!(
        validate_move(&one, Move::Split, &rules),
        Err(GameError::InvalidSplit { cards: 1 })
    );
}

#[test]
fn every_move_rejection_is_recoverable() {
    let rules = HouseRules {
        min_bet: 0,
        allow_double: false,
        allow_split: true,
    };
    let three = [c(R::Two), c(R::Two), c(R::Two)];
    for mv in [Move::Double, Move::Split] {
        let err = validate_move(&three, mv, &rules).unwrap_err();
        assert!(err.is_recoverable(), "{:?}", err);
    }
}
