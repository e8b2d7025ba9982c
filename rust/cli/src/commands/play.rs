//! # Play Command
//!
//! Interactive blackjack at the terminal. Each round asks for a bet (an
//! empty line bets the table minimum), then for a move at every decision
//! point: `h` hit, `s` stand, `d` double, `p` split, `q` quit. Moves the
//! table refuses are reported on stderr and asked again.
//!
//! Quitting or closing stdin ends the session normally after the last
//! settled round.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_hand, format_move, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{BetInput, ParseResult, parse_bet, parse_move};
use std::io::{self, BufRead, Write};
use twentyone_engine::cards::Card;
use twentyone_engine::engine::Session;
use twentyone_engine::errors::GameError;
use twentyone_engine::logger::RoundRecord;
use twentyone_engine::player::{DecisionProvider, Move, ResultsSink};

const QUIT: &str = "player quit";
const END_OF_INPUT: &str = "end of input";

/// The player's seat, driven from a terminal.
pub struct HumanPlayer<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    min_bet: u32,
    /// First write failure; the session is aborted when one occurs
    io_error: Option<io::Error>,
}

impl<'a> HumanPlayer<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        min_bet: u32,
    ) -> Self {
        Self {
            input,
            out,
            err,
            min_bet,
            io_error: None,
        }
    }

    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    pub fn announce_round(&mut self, round: u32) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Round {}", round)
    }

    pub fn show_settlement(&mut self, record: &RoundRecord) -> io::Result<()> {
        for (i, hand) in record.hands.iter().enumerate() {
            writeln!(
                self.out,
                "Hand {}: {} {} (bet {})",
                i + 1,
                format_outcome(hand.outcome),
                ui::format_net(hand.payout),
                hand.wager
            )?;
        }
        writeln!(
            self.out,
            "Round net: {}  Balance: {}",
            ui::format_net(record.net),
            ui::format_net(record.balance)
        )
    }

    /// Records a failed write and turns it into an abort for the engine.
    fn check<T>(&mut self, result: io::Result<T>) -> Result<T, GameError> {
        result.map_err(|e| {
            let msg = e.to_string();
            self.io_error.get_or_insert(e);
            GameError::ProviderAborted(msg)
        })
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, GameError> {
        let written = write!(self.out, "{}", text).and_then(|_| self.out.flush());
        self.check(written)?;
        let line = read_stdin_line(&mut *self.input);
        self.check(line)
    }
}

impl ResultsSink for HumanPlayer<'_> {
    fn report(&mut self, player_hands: &[Vec<Card>], dealer: &[Card]) {
        let mut show = || -> io::Result<()> {
            writeln!(self.out, "Dealer: {}", format_hand(dealer))?;
            for (i, cards) in player_hands.iter().enumerate() {
                writeln!(self.out, "Hand {}: {}", i + 1, format_hand(cards))?;
            }
            Ok(())
        };
        if let Err(e) = show() {
            self.io_error.get_or_insert(e);
        }
    }
}

impl DecisionProvider for HumanPlayer<'_> {
    fn bet(&mut self, shuffled: bool) -> Result<u32, GameError> {
        if shuffled {
            let written = writeln!(self.out, "The dealer shuffles a fresh shoe.");
            self.check(written)?;
        }
        let text = format!("Bet (min {}, Enter for min, q to quit): ", self.min_bet);
        loop {
            let Some(line) = self.prompt(&text)? else {
                return Err(GameError::ProviderAborted(END_OF_INPUT.into()));
            };
            match parse_bet(&line, self.min_bet) {
                BetInput::Amount(amount) => return Ok(amount),
                BetInput::Quit => return Err(GameError::ProviderAborted(QUIT.into())),
                BetInput::Invalid(msg) => {
                    let written = ui::write_error(&mut *self.err, &msg);
                    self.check(written)?;
                }
            }
        }
    }

    fn play(&mut self, hand: &[Card], dealer_up: Card) -> Result<Move, GameError> {
        let shown = writeln!(
            self.out,
            "Dealer shows {}. Your hand: {}",
            format_card(&dealer_up),
            format_hand(hand)
        );
        self.check(shown)?;
        loop {
            let Some(line) = self.prompt("[h]it [s]tand [d]ouble s[p]lit [q]uit: ")? else {
                return Err(GameError::ProviderAborted(END_OF_INPUT.into()));
            };
            match parse_move(&line) {
                ParseResult::Move(mv) => return Ok(mv),
                ParseResult::Quit => return Err(GameError::ProviderAborted(QUIT.into())),
                ParseResult::Invalid(msg) => {
                    let written = ui::write_error(&mut *self.err, &msg);
                    self.check(written)?;
                }
            }
        }
    }

    fn rejected(&mut self, mv: Move, reason: &GameError) {
        let msg = format!("cannot {}: {}", format_move(mv), reason);
        if let Err(e) = ui::display_warning(&mut *self.err, &msg) {
            self.io_error.get_or_insert(e);
        }
    }
}

/// Handle the play command.
///
/// Flags override the configured value of the same name. Without a seed
/// from either, a random one is drawn and printed so the session can be
/// replayed.
pub fn handle_play_command(
    rounds: Option<u32>,
    decks: Option<u32>,
    seed: Option<u64>,
    min_bet: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(r) = rounds {
        cfg.rounds = r;
    }
    if let Some(d) = decks {
        cfg.decks = d as usize;
    }
    if let Some(b) = min_bet {
        cfg.min_bet = b;
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    cfg.seed = Some(seed);
    config::validate(&cfg)?;

    let mut session = Session::new(cfg.session_config())?;
    let settings = session.config();
    writeln!(
        out,
        "play: rounds={} decks={} min_bet={} seed={}",
        settings.rounds, settings.decks, settings.rules.min_bet, seed
    )?;
    let mut quit = false;
    let stopped = {
        let mut table = HumanPlayer::new(stdin, out, err, cfg.min_bet);
        let mut stopped = None;
        for round in 1..=cfg.rounds {
            table.announce_round(round)?;
            match session.play_round(&mut table) {
                Ok(record) => table.show_settlement(&record)?,
                Err(e) => {
                    if let Some(io_err) = table.take_io_error() {
                        return Err(CliError::Io(io_err));
                    }
                    if matches!(e, GameError::ProviderAborted(_)) {
                        quit = true;
                    } else {
                        stopped = Some(e);
                    }
                    break;
                }
            }
            if let Some(io_err) = table.take_io_error() {
                return Err(CliError::Io(io_err));
            }
        }
        stopped
    };

    writeln!(out)?;
    if quit {
        writeln!(out, "Quit after {} round(s).", session.rounds_played())?;
    }
    writeln!(out, "Rounds played: {}", session.rounds_played())?;
    writeln!(out, "Final balance: {}", ui::format_net(session.balance()))?;

    match stopped {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
