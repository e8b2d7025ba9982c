use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// A decision at one of the player's hands.
/// The round engine interprets every move in a single dispatch routine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Take one more card
    Hit,
    /// End this hand's turn
    Stand,
    /// Double the wager, take exactly one card, then stand
    Double,
    /// Split a pair into two hands carrying the same wager
    Split,
}

/// Receives the final hands once a round has been settled.
pub trait ResultsSink {
    fn report(&mut self, player_hands: &[Vec<Card>], dealer: &[Card]);
}

/// Supplies bets and moves for the player's seat.
///
/// The engine hands out copies of the cards, never its own state. Moves the
/// house rules reject are passed back through [`rejected`](Self::rejected)
/// and the same decision point is asked again.
///
/// # Example Implementation
///
/// ```rust
/// use twentyone_engine::cards::Card;
/// use twentyone_engine::errors::GameError;
/// use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};
///
/// struct AlwaysStand;
///
/// impl ResultsSink for AlwaysStand {
///     fn report(&mut self, _hands: &[Vec<Card>], _dealer: &[Card]) {}
/// }
///
/// impl DecisionProvider for AlwaysStand {
///     fn bet(&mut self, _shuffled: bool) -> Result<u32, GameError> {
///         Ok(100)
///     }
///
///     fn play(&mut self, _hand: &[Card], _dealer_up: Card) -> Result<Move, GameError> {
///         Ok(Move::Stand)
///     }
/// }
/// ```
pub trait DecisionProvider: ResultsSink {
    /// Wager for the next round. `shuffled` is set when a fresh shoe was
    /// just brought in.
    fn bet(&mut self, shuffled: bool) -> Result<u32, GameError>;

    /// Next move for `hand`, given only the dealer's up-card.
    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Result<Move, GameError>;

    /// Called when `mv` broke a table rule; the provider will be asked again.
    fn rejected(&mut self, _mv: Move, _reason: &GameError) {}
}

impl<T: ResultsSink + ?Sized> ResultsSink for Box<T> {
    fn report(&mut self, player_hands: &[Vec<Card>], dealer: &[Card]) {
        (**self).report(player_hands, dealer)
    }
}

impl<T: DecisionProvider + ?Sized> DecisionProvider for Box<T> {
    fn bet(&mut self, shuffled: bool) -> Result<u32, GameError> {
        (**self).bet(shuffled)
    }

    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Result<Move, GameError> {
        (**self).play(hand, dealer_up)
    }

    fn rejected(&mut self, mv: Move, reason: &GameError) {
        (**self).rejected(mv, reason)
    }
}
