//! Layered configuration: built-in defaults, then an optional TOML file
//! named by `TWENTYONE_CONFIG`, then `TWENTYONE_*` environment variables.
//! Command-line flags are applied on top by each command.

use serde::{Deserialize, Serialize};
use std::fs;

use twentyone_engine::engine::SessionConfig;
use twentyone_engine::rules::HouseRules;

pub const CONFIG_ENV: &str = "TWENTYONE_CONFIG";
pub const DECKS_ENV: &str = "TWENTYONE_DECKS";
pub const ROUNDS_ENV: &str = "TWENTYONE_ROUNDS";
pub const PAYOUT_ENV: &str = "TWENTYONE_PAYOUT";
pub const MIN_BET_ENV: &str = "TWENTYONE_MIN_BET";
pub const SEED_ENV: &str = "TWENTYONE_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: usize,
    pub rounds: u32,
    pub blackjack_payout: f64,
    pub min_bet: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            decks: session.decks,
            rounds: session.rounds,
            blackjack_payout: session.blackjack_payout,
            min_bet: session.rules.min_bet,
            seed: None,
        }
    }
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            decks: self.decks,
            rounds: self.rounds,
            blackjack_payout: self.blackjack_payout,
            seed: self.seed,
            rules: HouseRules {
                min_bet: self.min_bet,
                ..HouseRules::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub decks: ValueSource,
    pub rounds: ValueSource,
    pub blackjack_payout: ValueSource,
    pub min_bet: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            rounds: ValueSource::Default,
            blackjack_payout: ValueSource::Default,
            min_bet: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.blackjack_payout {
            cfg.blackjack_payout = v;
            sources.blackjack_payout = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_value(DECKS_ENV, "decks")? {
        cfg.decks = v;
        sources.decks = ValueSource::Env;
    }
    if let Some(v) = env_value(ROUNDS_ENV, "rounds")? {
        cfg.rounds = v;
        sources.rounds = ValueSource::Env;
    }
    if let Some(v) = env_value(PAYOUT_ENV, "blackjack_payout")? {
        cfg.blackjack_payout = v;
        sources.blackjack_payout = ValueSource::Env;
    }
    if let Some(v) = env_value(MIN_BET_ENV, "min_bet")? {
        cfg.min_bet = v;
        sources.min_bet = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_ENV, "seed")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parses `var` when it is set and non-empty.
fn env_value<T: std::str::FromStr>(var: &str, name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    blackjack_payout: Option<f64>,
    #[serde(default)]
    min_bet: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Checks the values the engine would refuse, so `cfg` reports them too.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.session_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
