#![allow(dead_code)]

use std::collections::VecDeque;

use twentyone_engine::cards::{all_suits, Card, Rank};
use twentyone_engine::deck::StackedShoe;
use twentyone_engine::engine::{Session, SessionConfig};
use twentyone_engine::errors::GameError;
use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};

/// Cards in draw order; suits cycle so repeated ranks stay distinct.
pub fn cards(ranks: &[Rank]) -> Vec<Card> {
    let suits = all_suits();
    ranks
        .iter()
        .enumerate()
        .map(|(i, &r)| Card::new(r, suits[i % 4]))
        .collect()
}

/// One-deck, one-round session over a stacked shoe.
pub fn stacked_session(ranks: &[Rank]) -> Session {
    let config = SessionConfig {
        decks: 1,
        rounds: 1,
        ..SessionConfig::default()
    };
    Session::with_shoe_source(config, StackedShoe::new(cards(ranks))).expect("valid config")
}

/// Plays a fixed list of moves, then stands.
#[derive(Debug, Default)]
pub struct ScriptedPlayer {
    pub wager: u32,
    pub moves: VecDeque<Move>,
    pub seen: Vec<Vec<Card>>,
    pub shuffles: Vec<bool>,
    pub rejections: Vec<(Move, GameError)>,
    pub reports: Vec<(Vec<Vec<Card>>, Vec<Card>)>,
}

impl ScriptedPlayer {
    pub fn new(wager: u32, moves: &[Move]) -> Self {
        Self {
            wager,
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn standing(wager: u32) -> Self {
        Self::new(wager, &[])
    }
}

impl ResultsSink for ScriptedPlayer {
    fn report(&mut self, player_hands: &[Vec<Card>], dealer: &[Card]) {
        self.reports.push((player_hands.to_vec(), dealer.to_vec()));
    }
}

impl DecisionProvider for ScriptedPlayer {
    fn bet(&mut self, shuffled: bool) -> Result<u32, GameError> {
        self.shuffles.push(shuffled);
        Ok(self.wager)
    }

    fn play(&mut self, hand: &[Card], _dealer_up: Card) -> Result<Move, GameError> {
        self.seen.push(hand.to_vec());
        Ok(self.moves.pop_front().unwrap_or(Move::Stand))
    }

    fn rejected(&mut self, mv: Move, reason: &GameError) {
        self.rejections.push((mv, reason.clone()));
    }
}
