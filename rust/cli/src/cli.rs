//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use twentyone_engine::engine::MAX_DECKS;

#[derive(Parser, Debug)]
#[command(name = "twentyone", version, about = "Blackjack against the house")]
pub struct TwentyoneCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively
    Play {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DECKS as i64))]
        decks: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        min_bet: Option<u32>,
    },
    /// Run a non-interactive session with a built-in player
    Sim {
        #[arg(long, value_enum)]
        ai: AiKind,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Flat bet per round (defaults to the table minimum)
        #[arg(long)]
        bet: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the round history as JSONL
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Built-in player for the `sim` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AiKind {
    /// Plays the dealer's own drawing rule
    House,
    /// Multi-deck basic strategy
    Basic,
    /// Random moves
    Random,
}

impl AiKind {
    /// Name accepted by `twentyone_ai::create_ai`.
    ///
    /// ```
    /// # use twentyone_cli::cli::AiKind;
    /// assert_eq!(AiKind::Basic.as_str(), "basic");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AiKind::House => "house",
            AiKind::Basic => "basic",
            AiKind::Random => "random",
        }
    }
}
