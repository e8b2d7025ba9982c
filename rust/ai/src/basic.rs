//! Multi-deck basic strategy.
//!
//! Decisions come from three charts checked in order: pair splitting,
//! doubling, then the hard/soft hit-stand table. A chart entry only
//! applies when the move is legal for the hand (two cards for a double,
//! a same-rank pair for a split) and the table has not refused it.

use std::collections::HashSet;

use twentyone_engine::cards::{Card, Rank};
use twentyone_engine::errors::GameError;
use twentyone_engine::hand::{is_pair, is_soft, score};
use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};

/// Bets a flat amount and plays the basic strategy chart.
#[derive(Debug, Clone)]
pub struct BasicStrategyAI {
    bet: u32,
    /// Moves the table turned down; not offered again this session
    refused: HashSet<Move>,
}

impl BasicStrategyAI {
    pub fn new(bet: u32) -> Self {
        Self {
            bet,
            refused: HashSet::new(),
        }
    }

    fn allows(&self, mv: Move) -> bool {
        !self.refused.contains(&mv)
    }
}

/// Up-card value as the charts use it: Ace is 11.
fn up_value(card: Card) -> u32 {
    if card.is_ace() { 11 } else { card.value() }
}

fn split_pair(rank: Rank, up: u32) -> bool {
    match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Nine => !matches!(up, 7 | 10 | 11),
        Rank::Seven | Rank::Six | Rank::Three | Rank::Two => (2..=7).contains(&up),
        _ => false,
    }
}

fn double_down(total: u32, soft: bool, up: u32) -> bool {
    if soft {
        match total {
            19 => up == 6,
            18 => (2..=6).contains(&up),
            17 => (3..=6).contains(&up),
            15 | 16 => (4..=6).contains(&up),
            13 | 14 => (5..=6).contains(&up),
            _ => false,
        }
    } else {
        match total {
            11 => true,
            10 => up <= 9,
            9 => (3..=6).contains(&up),
            _ => false,
        }
    }
}

fn hit_or_stand(total: u32, soft: bool, up: u32) -> Move {
    let stand = if soft {
        total >= 19 || (total == 18 && up <= 8)
    } else {
        match total {
            17.. => true,
            13..=16 => up <= 6,
            12 => (4..=6).contains(&up),
            _ => false,
        }
    };
    if stand { Move::Stand } else { Move::Hit }
}

/// The chart's move for `hand` against `dealer_up`, assuming every move
/// the hand is eligible for is allowed.
pub fn chart_move(hand: &[Card], dealer_up: Card) -> Move {
    suggest(hand, dealer_up, true, true)
}

fn suggest(hand: &[Card], dealer_up: Card, can_double: bool, can_split: bool) -> Move {
    let up = up_value(dealer_up);
    let total = score(hand);
    let soft = is_soft(hand);
    let two_cards = hand.len() == 2;

    if can_split && two_cards && is_pair(hand) && split_pair(hand[0].rank, up) {
        return Move::Split;
    }
    if can_double && two_cards && double_down(total, soft, up) {
        return Move::Double;
    }
    hit_or_stand(total, soft, up)
}

impl ResultsSink for BasicStrategyAI {
    fn report(&mut self, _player_hands: &[Vec<Card>], _dealer: &[Card]) {}
}

impl DecisionProvider for BasicStrategyAI {
    fn bet(&mut self, _shuffled: bool) -> Result<u32, GameError> {
        Ok(self.bet)
    }

    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Result<Move, GameError> {
        Ok(suggest(
            hand,
            dealer_up,
            self.allows(Move::Double),
            self.allows(Move::Split),
        ))
    }

    fn rejected(&mut self, mv: Move, _reason: &GameError) {
        self.refused.insert(mv);
    }
}
