//! # twentyone-engine: Blackjack Round Engine
//!
//! A blackjack engine for one player seat against the house. Manages a
//! multi-deck shoe, deals and plays rounds (splits and doubles included),
//! drives the dealer's fixed policy and settles wagers into a running
//! balance. Bets and moves come from a [`player::DecisionProvider`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shoe and shoe sources (seeded ChaCha20 shuffles, stacked shoes)
//! - [`hand`] - Blackjack scoring: totals, soft hands, naturals
//! - [`rules`] - House rules, bet and move validation
//! - [`payout`] - Per-hand settlement against the dealer
//! - [`game`] - Round state machine (player hands, dealer hand, turn order)
//! - [`dealer`] - The dealer's drawing rule
//! - [`engine`] - Session driver: round lifecycle and balance
//! - [`player`] - Moves and the decision-provider / results-sink traits
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_engine::hand::{is_blackjack, is_soft, score};
//!
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! assert_eq!(score(&hand), 21);
//! assert!(is_soft(&hand));
//! assert!(is_blackjack(&hand));
//! ```
//!
//! ## Deterministic Shoes
//!
//! ```rust
//! use twentyone_engine::deck::{ShoeSource, ShuffledShoes};
//!
//! // Same seed produces the same shoe
//! let mut a = ShuffledShoes::new_with_seed(42);
//! let mut b = ShuffledShoes::new_with_seed(42);
//! let (mut s1, mut s2) = (a.fresh_shoe(1), b.fresh_shoe(1));
//! assert_eq!(s1.draw(), s2.draw());
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod payout;
pub mod player;
pub mod rules;
