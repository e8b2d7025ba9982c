use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_shoe, Card};
use crate::errors::GameError;

/// The drawable card supply for a session: an ordered run of cards with a
/// draw cursor. A shoe is never refilled in place; the session swaps in a
/// fresh one from its [`ShoeSource`] when it runs low.
///
/// # Examples
///
/// ```
/// use twentyone_engine::deck::{ShoeSource, ShuffledShoes};
///
/// let mut source = ShuffledShoes::new_with_seed(42);
/// let mut shoe = source.fresh_shoe(2);
/// assert_eq!(shoe.remaining(), 104);
/// let _card = shoe.draw().expect("full shoe");
/// assert_eq!(shoe.remaining(), 103);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
}

impl Shoe {
    /// A shoe that deals `cards` front to back.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::ShoeExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Builds replacement shoes. Called once per refill.
pub trait ShoeSource {
    fn fresh_shoe(&mut self, decks: usize) -> Shoe;
}

/// Shuffled multi-deck shoes from a seeded ChaCha20 stream, so a session
/// seed reproduces every shoe it uses.
#[derive(Debug)]
pub struct ShuffledShoes {
    rng: ChaCha20Rng,
}

impl ShuffledShoes {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ShoeSource for ShuffledShoes {
    fn fresh_shoe(&mut self, decks: usize) -> Shoe {
        let mut cards = standard_shoe(decks);
        cards.shuffle(&mut self.rng);
        Shoe::from_cards(cards)
    }
}

/// Always yields the same card order regardless of deck count.
#[derive(Debug, Clone)]
pub struct StackedShoe {
    cards: Vec<Card>,
}

impl StackedShoe {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl ShoeSource for StackedShoe {
    fn fresh_shoe(&mut self, _decks: usize) -> Shoe {
        Shoe::from_cards(self.cards.clone())
    }
}
