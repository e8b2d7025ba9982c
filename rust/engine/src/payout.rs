use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{is_blackjack, score, Hand, BLACKJACK};

/// How a single player hand finished against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Natural 21 against a dealer without one
    Blackjack,
    Win,
    Push,
    Loss,
}

/// A player hand after settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettledHand {
    pub cards: Vec<Card>,
    pub wager: u32,
    pub outcome: Outcome,
    /// Signed change to the balance
    pub payout: i64,
}

/// Dealer's final position, computed once per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerResult {
    pub score: u32,
    pub blackjack: bool,
}

impl DealerResult {
    pub fn of(dealer: &[Card]) -> Self {
        Self {
            score: score(dealer),
            blackjack: is_blackjack(dealer),
        }
    }
}

/// Blackjack bonus: `wager × multiplier`, rounded half away from zero.
pub fn blackjack_payout(wager: u32, multiplier: f64) -> i64 {
    (f64::from(wager) * multiplier).round() as i64
}

/// Settles one hand. Checks run in table order: blackjacks first, then the
/// player's bust, then the dealer's bust, then the plain comparison.
///
/// ```
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// use twentyone_engine::hand::Hand;
/// use twentyone_engine::payout::{settle_hand, DealerResult, Outcome};
///
/// let mut hand = Hand::new(100);
/// hand.cards = vec![
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ];
/// let dealer = [
///     Card::new(Rank::Ten, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Hearts),
/// ];
/// let settled = settle_hand(&hand, DealerResult::of(&dealer), 1.5);
/// assert_eq!(settled.outcome, Outcome::Blackjack);
/// assert_eq!(settled.payout, 150);
/// ```
pub fn settle_hand(hand: &Hand, dealer: DealerResult, multiplier: f64) -> SettledHand {
    let wager = i64::from(hand.wager);
    let player_score = hand.score();
    let player_blackjack = hand.is_blackjack();

    let (outcome, payout) = if player_blackjack && dealer.blackjack {
        (Outcome::Push, 0)
    } else if dealer.blackjack {
        (Outcome::Loss, -wager)
    } else if player_blackjack {
        (
            Outcome::Blackjack,
            blackjack_payout(hand.wager, multiplier),
        )
    } else if player_score > BLACKJACK {
        (Outcome::Loss, -wager)
    } else if dealer.score > BLACKJACK || player_score > dealer.score {
        (Outcome::Win, wager)
    } else if dealer.score > player_score {
        (Outcome::Loss, -wager)
    } else {
        (Outcome::Push, 0)
    };

    SettledHand {
        cards: hand.cards.clone(),
        wager: hand.wager,
        outcome,
        payout,
    }
}
