use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{is_pair, Hand};

/// Whose turn it is within a round. Only ever advances forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    PlayerTurn,
    DealerTurn,
    HandOver,
}

/// Per-round table state: the player's hands (more than one after a split),
/// which of them is acting, and the dealer's hand.
///
/// Owned by one [`Session`](crate::engine::Session); nothing here is shared.
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    hands: Vec<Hand>,
    /// Index of the acting player hand
    active: usize,
    dealer: Vec<Card>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            state: RoundState::PlayerTurn,
            hands: Vec::new(),
            active: 0,
            dealer: Vec::with_capacity(5),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn dealer(&self) -> &[Card] {
        &self.dealer
    }

    /// The dealer's face-up card, if dealt.
    pub fn dealer_up(&self) -> Option<Card> {
        self.dealer.first().copied()
    }

    /// Clears the table and seats a single empty hand carrying `wager`.
    pub fn begin(&mut self, wager: u32) {
        self.hands = vec![Hand::new(wager)];
        self.dealer.clear();
        self.active = 0;
        self.state = RoundState::PlayerTurn;
    }

    pub fn deal_player(&mut self, card: Card) {
        if let Some(hand) = self.hands.first_mut() {
            hand.cards.push(card);
        }
    }

    pub fn deal_dealer(&mut self, card: Card) {
        self.dealer.push(card);
    }

    /// Cards of whichever hand is acting.
    ///
    /// # Errors
    ///
    /// [`GameError::NoActiveHand`] once the round is over.
    pub fn current_cards(&self) -> Result<&[Card], GameError> {
        match self.state {
            RoundState::PlayerTurn => self
                .hands
                .get(self.active)
                .map(|h| h.cards.as_slice())
                .ok_or(GameError::NoActiveHand),
            RoundState::DealerTurn => Ok(&self.dealer),
            RoundState::HandOver => Err(GameError::NoActiveHand),
        }
    }

    fn current_cards_mut(&mut self) -> Result<&mut Vec<Card>, GameError> {
        match self.state {
            RoundState::PlayerTurn => self
                .hands
                .get_mut(self.active)
                .map(|h| &mut h.cards)
                .ok_or(GameError::NoActiveHand),
            RoundState::DealerTurn => Ok(&mut self.dealer),
            RoundState::HandOver => Err(GameError::NoActiveHand),
        }
    }

    /// Adds `card` to the acting hand and returns its new cards.
    pub fn hit(&mut self, card: Card) -> Result<&[Card], GameError> {
        let cards = self.current_cards_mut()?;
        cards.push(card);
        Ok(cards.as_slice())
    }

    /// Ends the acting hand's turn. After the last player hand the dealer
    /// acts; after the dealer the round is over.
    pub fn stand(&mut self) -> Result<(), GameError> {
        match self.state {
            RoundState::PlayerTurn => {
                self.active += 1;
                if self.active >= self.hands.len() {
                    self.state = RoundState::DealerTurn;
                }
                Ok(())
            }
            RoundState::DealerTurn => {
                self.state = RoundState::HandOver;
                Ok(())
            }
            RoundState::HandOver => Err(GameError::NoActiveHand),
        }
    }

    /// Doubles the acting player hand's wager. Legality is checked by
    /// [`validate_move`](crate::rules::validate_move) beforehand.
    pub fn double_wager(&mut self) -> Result<u32, GameError> {
        if self.state != RoundState::PlayerTurn {
            return Err(GameError::NoActiveHand);
        }
        let hand = self
            .hands
            .get_mut(self.active)
            .ok_or(GameError::NoActiveHand)?;
        hand.wager = hand.wager.saturating_mul(2);
        Ok(hand.wager)
    }

    /// Moves the acting hand's second card into a new hand at the end of the
    /// line, carrying the same wager. The acting hand keeps its first card.
    pub fn split(&mut self) -> Result<(), GameError> {
        if self.state != RoundState::PlayerTurn {
            return Err(GameError::NoActiveHand);
        }
        let hand = self
            .hands
            .get_mut(self.active)
            .ok_or(GameError::NoActiveHand)?;
        if hand.cards.len() != 2 {
            return Err(GameError::InvalidSplit {
                cards: hand.cards.len(),
            });
        }
        if !is_pair(&hand.cards) {
            return Err(GameError::SplitRankMismatch);
        }
        let second = hand.cards.pop().ok_or(GameError::NoActiveHand)?;
        let mut new_hand = Hand::new(hand.wager);
        new_hand.cards.push(second);
        self.hands.push(new_hand);
        Ok(())
    }

    /// Marks the round over without playing further turns.
    pub fn end(&mut self) {
        self.state = RoundState::HandOver;
    }

    /// Takes the finished hands and resets for the next round.
    pub fn finish(&mut self) -> (Vec<Hand>, Vec<Card>) {
        let hands = std::mem::take(&mut self.hands);
        let dealer = std::mem::take(&mut self.dealer);
        self.active = 0;
        self.state = RoundState::PlayerTurn;
        (hands, dealer)
    }
}
