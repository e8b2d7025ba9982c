//! # twentyone CLI Library
//!
//! Command-line front end for the twentyone blackjack engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand handler and
//! returns the process exit code. Output streams are injected so the
//! whole CLI can be driven from tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["twentyone", "play", "--rounds", "5"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively on stdin/stdout
//! - `sim`: Let a built-in player (house, basic, random) play a session
//! - `cfg`: Display the resolved configuration and its sources
//!
//! ## Configuration
//!
//! Defaults, then the TOML file named by `TWENTYONE_CONFIG`, then
//! `TWENTYONE_DECKS`, `TWENTYONE_ROUNDS`, `TWENTYONE_PAYOUT`,
//! `TWENTYONE_MIN_BET` and `TWENTYONE_SEED`, then command-line flags.

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TwentyoneCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use commands::play::HumanPlayer;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Parses `args` and runs the chosen subcommand.
///
/// Returns `0` on success and `2` on any error. Help and version output go
/// to `out` with exit code `0`.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = ["twentyone", "sim", "--ai", "house", "--rounds", "3", "--seed", "42"];
/// let code = twentyone_cli::run(args, &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TwentyoneCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: twentyone <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: twentyone --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            rounds,
            decks,
            seed,
            min_bet,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(rounds, decks, seed, min_bet, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            ai,
            rounds,
            bet,
            seed,
            output,
        } => handle_sim_command(ai, rounds, bet, seed, output, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Runs `play` with an injected input stream, for driving interactive
/// sessions from tests and scripts.
pub fn run_play_with_input(
    rounds: Option<u32>,
    decks: Option<u32>,
    seed: Option<u64>,
    min_bet: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn std::io::BufRead,
) -> i32 {
    match handle_play_command(rounds, decks, seed, min_bet, out, err, input) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
