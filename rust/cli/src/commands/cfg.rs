//! `cfg`: shows the resolved configuration as pretty JSON, each value paired
//! with where it came from (`default`, `file` or `env`).
//!
//! ```json
//! {
//!   "decks": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "blackjack_payout": {
            "value": config.blackjack_payout,
            "source": sources.blackjack_payout,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
