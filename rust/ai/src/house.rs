//! A player that copies the dealer's drawing rule.

use twentyone_engine::cards::Card;
use twentyone_engine::dealer::DealerPolicy;
use twentyone_engine::errors::GameError;
use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};

/// Bets a flat amount and plays exactly like the house: hit on 16 or less
/// and on soft 17, otherwise stand. Never doubles or splits.
#[derive(Debug, Clone)]
pub struct HouseAI {
    bet: u32,
    policy: DealerPolicy,
}

impl HouseAI {
    pub fn new(bet: u32) -> Self {
        Self {
            bet,
            policy: DealerPolicy,
        }
    }
}

impl ResultsSink for HouseAI {
    fn report(&mut self, _player_hands: &[Vec<Card>], _dealer: &[Card]) {}
}

impl DecisionProvider for HouseAI {
    fn bet(&mut self, _shuffled: bool) -> Result<u32, GameError> {
        Ok(self.bet)
    }

    fn play(&mut self, hand: &[Card], _dealer_up: Card) -> Result<Move, GameError> {
        Ok(self.policy.play(hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyone_engine::cards::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect()
    }

    #[test]
    fn follows_dealer_rule() {
        let mut ai = HouseAI::new(100);
        let up = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!(ai.play(&hand(&[Rank::Ten, Rank::Six]), up), Ok(Move::Hit));
        assert_eq!(ai.play(&hand(&[Rank::Ace, Rank::Six]), up), Ok(Move::Hit));
        assert_eq!(ai.play(&hand(&[Rank::Ten, Rank::Seven]), up), Ok(Move::Stand));
        assert_eq!(ai.bet(true), Ok(100));
    }
}
