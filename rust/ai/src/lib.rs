//! # twentyone-ai: Built-in Blackjack Players
//!
//! Non-interactive [`DecisionProvider`] implementations for simulations and
//! tests. Every built-in player bets a flat amount each round.
//!
//! ## Core Components
//!
//! - [`house::HouseAI`] - Mirrors the dealer: hits 16 or less and soft 17
//! - [`basic::BasicStrategyAI`] - Multi-deck basic strategy chart
//! - [`random::RandomAI`] - Uniformly random moves from a seeded RNG
//! - [`create_ai`] - Factory by kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_ai::create_ai;
//! use twentyone_engine::engine::{Session, SessionConfig};
//!
//! let mut ai = create_ai("basic", 100).expect("known kind");
//! let config = SessionConfig {
//!     rounds: 20,
//!     seed: Some(42),
//!     ..SessionConfig::default()
//! };
//! let mut session = Session::new(config).expect("valid config");
//! let balance = session.play(ai.as_mut()).expect("session runs");
//! println!("basic strategy finished at {balance}");
//! ```
//!
//! ## AI Kinds
//!
//! - `"house"` - [`house::HouseAI`]
//! - `"basic"` - [`basic::BasicStrategyAI`]
//! - `"random"` - [`random::RandomAI`]

use twentyone_engine::player::DecisionProvider;

pub mod basic;
pub mod house;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 3] = ["house", "basic", "random"];

/// Creates a built-in player betting `flat_bet` every round, or `None` for
/// an unknown kind. A `"random"` player gets a random seed.
///
/// # Example
///
/// ```rust
/// use twentyone_ai::create_ai;
///
/// assert!(create_ai("house", 100).is_some());
/// assert!(create_ai("martingale", 100).is_none());
/// ```
pub fn create_ai(kind: &str, flat_bet: u32) -> Option<Box<dyn DecisionProvider>> {
    create_seeded_ai(kind, flat_bet, rand::random())
}

/// Like [`create_ai`], with a fixed seed for players that draw randomness.
pub fn create_seeded_ai(kind: &str, flat_bet: u32, seed: u64) -> Option<Box<dyn DecisionProvider>> {
    match kind {
        "house" => Some(Box::new(house::HouseAI::new(flat_bet))),
        "basic" => Some(Box::new(basic::BasicStrategyAI::new(flat_bet))),
        "random" => Some(Box::new(random::RandomAI::new(flat_bet, seed))),
        _ => None,
    }
}
