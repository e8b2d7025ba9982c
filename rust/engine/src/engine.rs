use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::dealer::DealerPolicy;
use crate::deck::{Shoe, ShoeSource, ShuffledShoes};
use crate::errors::GameError;
use crate::game::{Round, RoundState};
use crate::hand::{is_blackjack, is_bust};
use crate::logger::{RoundLogger, RoundRecord};
use crate::payout::{settle_hand, DealerResult, SettledHand};
use crate::player::{DecisionProvider, Move};
use crate::rules::{validate_bet, validate_move, HouseRules};

/// Largest shoe a session accepts, in decks.
pub const MAX_DECKS: usize = 16;

/// Session settings. Missing fields take the defaults: 3 decks, 10 rounds,
/// blackjack paying 1.5× and the default [`HouseRules`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Standard decks per shoe
    pub decks: usize,
    /// Rounds played by [`Session::play`]
    pub rounds: u32,
    /// Multiplier applied to the wager on a player blackjack
    pub blackjack_payout: f64,
    /// Shuffle seed; a random one is drawn when unset
    pub seed: Option<u64>,
    pub rules: HouseRules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            decks: 3,
            rounds: 10,
            blackjack_payout: 1.5,
            seed: None,
            rules: HouseRules::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.decks == 0 || self.decks > MAX_DECKS {
            return Err(GameError::InvalidConfig(format!(
                "decks must be between 1 and {}",
                MAX_DECKS
            )));
        }
        if self.rounds == 0 {
            return Err(GameError::InvalidConfig("rounds must be >= 1".into()));
        }
        if !self.blackjack_payout.is_finite() || self.blackjack_payout <= 0.0 {
            return Err(GameError::InvalidConfig(
                "blackjack_payout must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// A shoe with fewer cards than this is replaced before the next bet.
pub fn reshuffle_threshold(decks: usize) -> usize {
    52 * decks / 3
}

/// Runs blackjack rounds for one player seat against the house.
/// Owns the shoe, the round in progress and the running balance.
///
/// # Examples
///
/// ```
/// use twentyone_engine::cards::Card;
/// use twentyone_engine::engine::{Session, SessionConfig};
/// use twentyone_engine::errors::GameError;
/// use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};
///
/// struct Stander;
/// impl ResultsSink for Stander {
///     fn report(&mut self, _hands: &[Vec<Card>], _dealer: &[Card]) {}
/// }
/// impl DecisionProvider for Stander {
///     fn bet(&mut self, _shuffled: bool) -> Result<u32, GameError> {
///         Ok(100)
///     }
///     fn play(&mut self, _hand: &[Card], _up: Card) -> Result<Move, GameError> {
///         Ok(Move::Stand)
///     }
/// }
///
/// let config = SessionConfig {
///     rounds: 5,
///     seed: Some(7),
///     ..SessionConfig::default()
/// };
/// let mut session = Session::new(config).expect("valid config");
/// let balance = session.play(&mut Stander).expect("session runs");
/// assert_eq!(session.rounds_played(), 5);
/// assert_eq!(balance, session.balance());
/// ```
pub struct Session {
    config: SessionConfig,
    dealer: DealerPolicy,
    source: Box<dyn ShoeSource + Send>,
    shoe: Shoe,
    round: Round,
    balance: i64,
    rounds_played: u32,
    logger: Option<RoundLogger>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_shoe_source(config, ShuffledShoes::new_with_seed(seed))
    }

    pub fn with_shoe_source<S>(config: SessionConfig, source: S) -> Result<Self, GameError>
    where
        S: ShoeSource + Send + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            dealer: DealerPolicy,
            source: Box::new(source),
            shoe: Shoe::default(),
            round: Round::new(),
            balance: 0,
            rounds_played: 0,
            logger: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Appends every settled round to `logger`.
    pub fn set_logger(&mut self, logger: RoundLogger) {
        self.logger = Some(logger);
    }

    /// Plays the configured number of rounds and returns the final balance.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error: a bet under the table minimum, a
    /// provider that aborts, an exhausted shoe or a failed log write.
    pub fn play(&mut self, provider: &mut dyn DecisionProvider) -> Result<i64, GameError> {
        for _ in 0..self.config.rounds {
            self.play_round(provider)?;
        }
        info!(
            rounds = self.rounds_played,
            balance = self.balance,
            "session complete"
        );
        Ok(self.balance)
    }

    /// One full round: shoe check, bet, deal, player turn, dealer turn,
    /// settlement.
    pub fn play_round(
        &mut self,
        provider: &mut dyn DecisionProvider,
    ) -> Result<RoundRecord, GameError> {
        let shuffled = self.refill_shoe();
        let wager = validate_bet(provider.bet(shuffled)?, &self.config.rules)?;
        debug!(wager, shuffled, "bet accepted");

        self.deal(wager)?;

        let mut rejected = 0;
        if is_blackjack(self.round.dealer()) {
            debug!("dealer blackjack, turns skipped");
            self.round.end();
        } else {
            rejected = self.player_turn(provider)?;
            self.dealer_turn()?;
        }

        self.settle(provider, shuffled, rejected)
    }

    fn refill_shoe(&mut self) -> bool {
        if self.shoe.remaining() >= reshuffle_threshold(self.config.decks) {
            return false;
        }
        self.shoe = self.source.fresh_shoe(self.config.decks);
        info!(
            decks = self.config.decks,
            cards = self.shoe.remaining(),
            "new shoe"
        );
        true
    }

    fn deal(&mut self, wager: u32) -> Result<(), GameError> {
        self.round.begin(wager);
        for _ in 0..2 {
            let c = self.shoe.draw()?;
            self.round.deal_player(c);
            let c = self.shoe.draw()?;
            self.round.deal_dealer(c);
        }
        Ok(())
    }

    fn player_turn(&mut self, provider: &mut dyn DecisionProvider) -> Result<u32, GameError> {
        let up = self.round.dealer_up().ok_or(GameError::NoActiveHand)?;
        let mut rejected = 0;
        while self.round.state() == RoundState::PlayerTurn {
            let hand = self.round.current_cards()?.to_vec();
            let mv = provider.play(&hand, up)?;
            match self.apply_move(mv) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!(mv = ?mv, error = %e, "move rejected");
                    rejected += 1;
                    provider.rejected(mv, &e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(rejected)
    }

    fn dealer_turn(&mut self) -> Result<(), GameError> {
        while self.round.state() == RoundState::DealerTurn {
            let mv = self.dealer.play(self.round.current_cards()?);
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Applies `mv` to whichever hand is acting. Rule checks happen before
    /// anything is drawn, so a rejected move leaves the round as it was.
    fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        match self.round.state() {
            RoundState::PlayerTurn => {
                validate_move(self.round.current_cards()?, mv, &self.config.rules)?
            }
            RoundState::DealerTurn => {
                if matches!(mv, Move::Double | Move::Split) {
                    return Err(GameError::MoveNotAllowed(mv));
                }
            }
            RoundState::HandOver => return Err(GameError::NoActiveHand),
        }

        match mv {
            Move::Hit => {
                let card = self.shoe.draw()?;
                let cards = self.round.hit(card)?;
                if is_bust(cards) {
                    self.round.stand()?;
                }
            }
            Move::Stand => self.round.stand()?,
            Move::Double => {
                let wager = self.round.double_wager()?;
                let card = self.shoe.draw()?;
                self.round.hit(card)?;
                self.round.stand()?;
                debug!(wager, card = %card, "doubled");
            }
            Move::Split => {
                self.round.split()?;
                debug!(hands = self.round.hands().len(), "split");
            }
        }
        Ok(())
    }

    fn settle(
        &mut self,
        provider: &mut dyn DecisionProvider,
        shuffled: bool,
        rejected_moves: u32,
    ) -> Result<RoundRecord, GameError> {
        self.round.end();
        let (hands, dealer) = self.round.finish();
        let dealer_result = DealerResult::of(&dealer);

        let settled: Vec<SettledHand> = hands
            .iter()
            .map(|h| settle_hand(h, dealer_result, self.config.blackjack_payout))
            .collect();
        let net: i64 = settled.iter().map(|h| h.payout).sum();
        self.balance += net;
        self.rounds_played += 1;
        info!(
            round = self.rounds_played,
            hands = settled.len(),
            net,
            balance = self.balance,
            "round settled"
        );

        let player_cards: Vec<Vec<Card>> = hands.into_iter().map(|h| h.cards).collect();
        provider.report(&player_cards, &dealer);

        let record = RoundRecord {
            round_id: None,
            round: self.rounds_played,
            shuffled,
            hands: settled,
            dealer,
            dealer_blackjack: dealer_result.blackjack,
            net,
            balance: self.balance,
            rejected_moves,
            ts: None,
        };
        if let Some(logger) = &mut self.logger {
            logger
                .write(&record)
                .map_err(|e| GameError::Log(e.to_string()))?;
        }
        Ok(record)
    }
}
