use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Highest total a hand may reach without busting.
pub const BLACKJACK: u32 = 21;

/// Sum of card values with every Ace counted as 1.
pub fn min_score(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).sum()
}

/// Best blackjack total for `cards`.
///
/// At most one Ace is ever promoted to 11, and only when that cannot bust
/// the hand (a second promoted Ace would already total 22).
///
/// ```
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// use twentyone_engine::hand::score;
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let six = Card::new(Rank::Six, Suit::Hearts);
/// let nine = Card::new(Rank::Nine, Suit::Clubs);
/// assert_eq!(score(&[ace, six]), 17);
/// assert_eq!(score(&[ace, six, nine]), 16);
/// ```
pub fn score(cards: &[Card]) -> u32 {
    let min = min_score(cards);
    if min > 11 {
        return min;
    }
    if cards.iter().any(Card::is_ace) {
        min + 10
    } else {
        min
    }
}

/// True when the best total counts an Ace as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    score(cards) != min_score(cards)
}

/// Two cards totalling 21.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Exactly two cards of the same rank.
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [a, b] if a.rank == b.rank)
}

/// A player hand: its cards and the wager riding on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub wager: u32,
}

impl Hand {
    pub fn new(wager: u32) -> Self {
        Self {
            cards: Vec::with_capacity(5),
            wager,
        }
    }

    pub fn score(&self) -> u32 {
        score(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds)
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert!(!is_soft(&[]));
        assert!(!is_blackjack(&[]));
    }

    #[test]
    fn two_aces_count_as_twelve() {
        let cards = [c(Rank::Ace), c(Rank::Ace)];
        assert_eq!(min_score(&cards), 2);
        assert_eq!(score(&cards), 12);
        assert!(is_soft(&cards));
    }

    #[test]
    fn twenty_two_aces_do_not_overflow() {
        let cards = vec![c(Rank::Ace); 22];
        assert_eq!(score(&cards), 22);
        assert!(is_bust(&cards));
    }

    #[test]
    fn pair_requires_equal_rank_not_value() {
        assert!(is_pair(&[c(Rank::Eight), c(Rank::Eight)]));
        assert!(!is_pair(&[c(Rank::King), c(Rank::Queen)]));
        assert!(!is_pair(&[c(Rank::Eight), c(Rank::Eight), c(Rank::Eight)]));
    }

    #[test]
    fn hand_delegates_to_evaluator() {
        let mut h = Hand::new(100);
        h.cards.push(c(Rank::Ace));
        h.cards.push(c(Rank::King));
        assert_eq!(h.score(), 21);
        assert!(h.is_blackjack());
        assert!(h.is_soft());
        assert!(!h.is_bust());
    }
}
