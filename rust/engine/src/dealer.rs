use crate::cards::Card;
use crate::hand::{is_soft, score};
use crate::player::Move;

/// Whether the house must draw to `cards`: on 16 or less, and on soft 17.
pub fn dealer_should_hit(cards: &[Card]) -> bool {
    let total = score(cards);
    total <= 16 || (total == 17 && is_soft(cards))
}

/// The dealer's fixed drawing rule. Never splits, doubles or bets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerPolicy;

impl DealerPolicy {
    pub fn play(&self, cards: &[Card]) -> Move {
        if dealer_should_hit(cards) {
            Move::Hit
        } else {
            Move::Stand
        }
    }
}
