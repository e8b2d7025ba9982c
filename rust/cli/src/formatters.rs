//! Card, hand and result formatting for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to handle
//! Unicode and as h d c s otherwise (older Windows consoles).
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_cli::formatters::{format_card, format_hand};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! let ten = Card::new(Rank::Ten, Suit::Hearts);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert!(format_hand(&[ace, ten]).ends_with("(blackjack)"));
//! ```

use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::hand::{is_blackjack, is_bust, is_soft, score};
use twentyone_engine::payout::Outcome;
use twentyone_engine::player::Move;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        pip => (*pip as u8).to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards followed by the hand's total, e.g. `A♠ 6♥ (soft 17)`.
pub fn format_hand(cards: &[Card]) -> String {
    let shown: Vec<String> = cards.iter().map(format_card).collect();
    let total = score(cards);
    let label = if is_blackjack(cards) {
        "blackjack".to_string()
    } else if is_bust(cards) {
        format!("{} bust", total)
    } else if is_soft(cards) {
        format!("soft {}", total)
    } else {
        total.to_string()
    };
    format!("{} ({})", shown.join(" "), label)
}

pub fn format_move(mv: Move) -> &'static str {
    match mv {
        Move::Hit => "hit",
        Move::Stand => "stand",
        Move::Double => "double",
        Move::Split => "split",
    }
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "Blackjack",
        Outcome::Win => "Win",
        Outcome::Push => "Push",
        Outcome::Loss => "Loss",
    }
}
