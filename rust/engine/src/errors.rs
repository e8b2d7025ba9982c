use thiserror::Error;

use crate::player::Move;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Can only double on a hand with 2 cards (hand has {cards})")]
    InvalidDouble { cards: usize },
    #[error("Can only split with two cards in your hand (hand has {cards})")]
    InvalidSplit { cards: usize },
    #[error("Both cards must have the same rank to split")]
    SplitRankMismatch,
    #[error("{0:?} is not allowed at this table")]
    MoveNotAllowed(Move),
    #[error("It isn't currently any hand's turn")]
    NoActiveHand,
    #[error("Shoe is empty")]
    ShoeExhausted,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Decision provider aborted: {0}")]
    ProviderAborted(String),
    #[error("Round log write failed: {0}")]
    Log(String),
}

impl GameError {
    /// Rule violations the provider may retry at the same decision point.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidDouble { .. }
                | GameError::InvalidSplit { .. }
                | GameError::SplitRankMismatch
                | GameError::MoveNotAllowed(_)
        )
    }
}
