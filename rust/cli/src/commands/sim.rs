//! Simulation command: a full session played by a built-in player.
//!
//! ```no_run
//! use std::io;
//! let args = ["twentyone", "sim", "--ai", "basic", "--rounds", "1000", "--seed", "7"];
//! let code = twentyone_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use crate::cli::AiKind;
use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;
use twentyone_ai::create_seeded_ai;
use twentyone_engine::engine::Session;
use twentyone_engine::logger::RoundLogger;

/// Handle the sim command.
///
/// # Arguments
///
/// * `ai` - Built-in player
/// * `rounds` - Rounds to play (configured value when `None`)
/// * `bet` - Flat bet (table minimum when `None`)
/// * `seed` - Seed for the shoe and the player (configured or random when `None`)
/// * `output` - JSONL file receiving one record per settled round
pub fn handle_sim_command(
    ai: AiKind,
    rounds: Option<u32>,
    bet: Option<u32>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(r) = rounds {
        cfg.rounds = r;
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    cfg.seed = Some(seed);
    let bet = bet.unwrap_or(cfg.min_bet);
    if bet < cfg.min_bet {
        return Err(CliError::InvalidInput(format!(
            "bet {} is below the table minimum of {}",
            bet, cfg.min_bet
        )));
    }

    let mut session = Session::new(cfg.session_config())?;
    if let Some(path) = &output {
        session.set_logger(RoundLogger::create(path)?);
    }
    let mut player = create_seeded_ai(ai.as_str(), bet, seed)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", ai.as_str())))?;

    let settings = session.config();
    writeln!(
        out,
        "sim: ai={} rounds={} decks={} bet={} seed={}",
        ai.as_str(),
        settings.rounds,
        settings.decks,
        bet,
        seed
    )?;

    let result = session.play(player.as_mut());
    writeln!(out, "Rounds played: {}", session.rounds_played())?;
    if let Some(path) = &output {
        if session.rounds_played() < cfg.rounds {
            ui::display_warning(err, &format!("{} holds a partial history", path))?;
        }
        writeln!(out, "History: {}", path)?;
    }
    let balance = result?;
    writeln!(out, "Final balance: {}", ui::format_net(balance))?;
    Ok(())
}
