use twentyone_engine::cards::{Card, Rank as R, Suit as S};
use twentyone_engine::hand::Hand;
use twentyone_engine::payout::{settle_hand, DealerResult, Outcome};

fn cards(ranks: &[R]) -> Vec<Card> {
    ranks.iter().map(|&r| Card { suit: S::Spades, rank: r }).collect()
}

fn hand(ranks: &[R], wager: u32) -> Hand {
    Hand {
        cards: cards(ranks),
        wager,
    }
}

fn settle(player: &[R], dealer: &[R]) -> (Outcome, i64) {
    let s = settle_hand(&hand(player, 100), DealerResult::of(&cards(dealer)), 1.5);
    (s.outcome, s.payout)
}

#[test]
fn blackjack_against_blackjack_pushes() {
    assert_eq!(settle(&[R::Ace, R::King], &[R::Queen, R::Ace]), (Outcome::Push, 0));
}

#[test]
fn dealer_blackjack_beats_three_card_twenty_one() {
    assert_eq!(
        settle(&[R::Seven, R::Seven, R::Seven], &[R::Ace, R::Jack]),
        (Outcome::Loss, -100)
    );
}

#[test]
fn player_blackjack_pays_multiplier() {
    assert_eq!(
        settle(&[R::Ace, R::Queen], &[R::Ten, R::Nine]),
        (Outcome::Blackjack, 150)
    );
    let six_to_five = settle_hand(
        &hand(&[R::Ace, R::Queen], 25),
        DealerResult::of(&cards(&[R::Ten, R::Nine, R::Two])),
        1.2,
    );
    assert_eq!(six_to_five.payout, 30);
}

#[test]
fn player_bust_loses_even_when_dealer_busts() {
    assert_eq!(
        settle(&[R::Ten, R::Six, R::King], &[R::Ten, R::Six, R::Nine]),
        (Outcome::Loss, -100)
    );
}

#[test]
fn dealer_bust_pays_standing_hand() {
    assert_eq!(
        settle(&[R::Ten, R::Two], &[R::Ten, R::Six, R::Nine]),
        (Outcome::Win, 100)
    );
}

#[test]
fn higher_total_wins_lower_loses_equal_pushes() {
    assert_eq!(settle(&[R::Ten, R::Nine], &[R::Ten, R::Eight]), (Outcome::Win, 100));
    assert_eq!(settle(&[R::Ten, R::Seven], &[R::Ten, R::Eight]), (Outcome::Loss, -100));
    assert_eq!(settle(&[R::Ten, R::Eight], &[R::Nine, R::Nine]), (Outcome::Push, 0));
}

#[test]
fn payout_follows_the_hands_own_wager() {
    let doubled = settle_hand(
        &hand(&[R::Five, R::Six, R::Ten], 200),
        DealerResult::of(&cards(&[R::Ten, R::Seven])),
        1.5,
    );
    assert_eq!(doubled.outcome, Outcome::Win);
    assert_eq!(doubled.payout, 200);
    assert_eq!(doubled.wager, 200);
}

#[test]
fn payout_is_zero_or_plus_minus_wager_outside_blackjack() {
    let ranks = [R::Two, R::Five, R::Seven, R::Nine, R::Ten, R::Ace];
    for &a in &ranks {
        for &b in &ranks {
            for &d in &ranks {
                let player = [a, b, R::Three];
                let dealer = [R::Ten, d];
                let (outcome, payout) = settle(&player, &dealer);
                if outcome == Outcome::Blackjack {
                    continue;
                }
                assert!(
                    payout == 0 || payout == 100 || payout == -100,
                    "{:?} vs {:?} -> {}",
                    player,
                    dealer,
                    payout
                );
            }
        }
    }
}
