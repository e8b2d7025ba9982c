//! Parsing of interactive input: move choices and bets.

use twentyone_engine::player::Move;

/// What the player typed at a move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Move(Move),
    /// `q` or `quit`
    Quit,
    Invalid(String),
}

/// Parses a move, case-insensitive: `h`/`hit`, `s`/`stand`, `d`/`double`,
/// `p`/`split`, `q`/`quit`.
///
/// ```rust
/// # use twentyone_cli::validation::{parse_move, ParseResult};
/// use twentyone_engine::player::Move;
///
/// assert_eq!(parse_move("H"), ParseResult::Move(Move::Hit));
/// assert_eq!(parse_move("split"), ParseResult::Move(Move::Split));
/// assert_eq!(parse_move("q"), ParseResult::Quit);
/// assert!(matches!(parse_move("fold"), ParseResult::Invalid(_)));
/// ```
pub fn parse_move(input: &str) -> ParseResult {
    match input.trim().to_lowercase().as_str() {
        "h" | "hit" => ParseResult::Move(Move::Hit),
        "s" | "stand" => ParseResult::Move(Move::Stand),
        "d" | "double" => ParseResult::Move(Move::Double),
        "p" | "split" => ParseResult::Move(Move::Split),
        "q" | "quit" => ParseResult::Quit,
        "" => ParseResult::Invalid("Empty input".to_string()),
        other => ParseResult::Invalid(format!(
            "Unrecognized move '{}'. Use h, s, d, p or q.",
            other
        )),
    }
}

/// What the player typed at a bet prompt.
#[derive(Debug, PartialEq)]
pub enum BetInput {
    Amount(u32),
    Quit,
    Invalid(String),
}

/// Parses a bet. An empty line takes `default`. The amount is not checked
/// against the table minimum here; the table does that.
///
/// ```rust
/// # use twentyone_cli::validation::{parse_bet, BetInput};
/// assert_eq!(parse_bet("", 100), BetInput::Amount(100));
/// assert_eq!(parse_bet("250", 100), BetInput::Amount(250));
/// assert_eq!(parse_bet("quit", 100), BetInput::Quit);
/// ```
pub fn parse_bet(input: &str, default: u32) -> BetInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => BetInput::Amount(default),
        "q" | "quit" => BetInput::Quit,
        s => match s.parse::<u32>() {
            Ok(v) => BetInput::Amount(v),
            Err(_) => BetInput::Invalid(format!("Invalid bet '{}': enter a whole amount", s)),
        },
    }
}
