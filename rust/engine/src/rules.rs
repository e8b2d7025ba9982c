use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::is_pair;
use crate::player::Move;

/// Table limits and which optional moves the house offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseRules {
    /// Smallest accepted wager; `0` means no floor
    pub min_bet: u32,
    /// Player may double down on two cards
    pub allow_double: bool,
    /// Player may split a pair
    pub allow_split: bool,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            min_bet: 100,
            allow_double: true,
            allow_split: true,
        }
    }
}

/// Checks a wager against the table minimum.
///
/// # Errors
///
/// [`GameError::InvalidBetAmount`] when `amount` is below `rules.min_bet`.
/// The session treats this as fatal.
pub fn validate_bet(amount: u32, rules: &HouseRules) -> Result<u32, GameError> {
    if amount < rules.min_bet {
        return Err(GameError::InvalidBetAmount {
            amount,
            minimum: rules.min_bet,
        });
    }
    Ok(amount)
}

/// Validates a player move against the hand it would be applied to.
///
/// Hit and Stand are always legal. Double needs exactly two cards; Split
/// needs exactly two cards of the same rank. Either is refused outright when
/// the house has disabled it.
///
/// # Errors
///
/// Every error returned here is recoverable (see
/// [`GameError::is_recoverable`]): the engine reports it to the provider and
/// asks again without touching the round.
///
/// # Examples
///
/// ```
/// use twentyone_engine::cards::{Card, Rank, Suit};
/// use twentyone_engine::errors::GameError;
/// use twentyone_engine::player::Move;
/// use twentyone_engine::rules::{validate_move, HouseRules};
///
/// let rules = HouseRules::default();
/// let eights = [
///     Card::new(Rank::Eight, Suit::Hearts),
///     Card::new(Rank::Eight, Suit::Spades),
/// ];
/// assert!(validate_move(&eights, Move::Split, &rules).is_ok());
///
/// let mixed = [
///     Card::new(Rank::Eight, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Spades),
/// ];
/// assert_eq!(
///     validate_move(&mixed, Move::Split, &rules),
///     Err(GameError::SplitRankMismatch)
/// );
/// ```
pub fn validate_move(cards: &[Card], mv: Move, rules: &HouseRules) -> Result<(), GameError> {
    match mv {
        Move::Hit | Move::Stand => Ok(()),
        Move::Double => {
            if !rules.allow_double {
                return Err(GameError::MoveNotAllowed(mv));
            }
            if cards.len() != 2 {
                return Err(GameError::InvalidDouble { cards: cards.len() });
            }
            Ok(())
        }
        Move::Split => {
            if !rules.allow_split {
                return Err(GameError::MoveNotAllowed(mv));
            }
            if cards.len() != 2 {
                return Err(GameError::InvalidSplit { cards: cards.len() });
            }
            if !is_pair(cards) {
                return Err(GameError::SplitRankMismatch);
            }
            Ok(())
        }
    }
}
