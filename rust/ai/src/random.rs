//! A player choosing moves at random, used to exercise rule enforcement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twentyone_engine::cards::Card;
use twentyone_engine::errors::GameError;
use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};

const MOVES: [Move; 4] = [Move::Hit, Move::Stand, Move::Double, Move::Split];

/// Bets a flat amount and picks any of the four moves with equal odds.
/// Illegal picks are refused by the table and simply drawn again.
#[derive(Debug, Clone)]
pub struct RandomAI {
    bet: u32,
    rng: StdRng,
    rejections: u32,
}

impl RandomAI {
    pub fn new(bet: u32, seed: u64) -> Self {
        Self {
            bet,
            rng: StdRng::seed_from_u64(seed),
            rejections: 0,
        }
    }

    /// Moves the table has turned down so far.
    pub fn rejections(&self) -> u32 {
        self.rejections
    }
}

impl ResultsSink for RandomAI {
    fn report(&mut self, _player_hands: &[Vec<Card>], _dealer: &[Card]) {}
}

impl DecisionProvider for RandomAI {
    fn bet(&mut self, _shuffled: bool) -> Result<u32, GameError> {
        Ok(self.bet)
    }

    fn play(&mut self, _hand: &[Card], _dealer_up: Card) -> Result<Move, GameError> {
        Ok(MOVES[self.rng.random_range(0..MOVES.len())])
    }

    fn rejected(&mut self, _mv: Move, _reason: &GameError) {
        self.rejections += 1;
    }
}
