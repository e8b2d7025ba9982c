#![allow(dead_code)]

use std::io::Cursor;

/// Every variable the CLI reads; cleared around each test.
pub const CONFIG_VARS: [&str; 6] = [
    "TWENTYONE_CONFIG",
    "TWENTYONE_DECKS",
    "TWENTYONE_ROUNDS",
    "TWENTYONE_PAYOUT",
    "TWENTYONE_MIN_BET",
    "TWENTYONE_SEED",
];

#[derive(Debug)]
pub struct CliResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut argv = vec!["twentyone"];
    argv.extend_from_slice(args);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = twentyone_cli::run(argv, &mut out, &mut err);
    CliResult {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

pub fn play_with_input(
    rounds: u32,
    seed: u64,
    min_bet: Option<u32>,
    input: &str,
) -> CliResult {
    play_with_bytes(rounds, seed, min_bet, input.as_bytes())
}

pub fn play_with_bytes(rounds: u32, seed: u64, min_bet: Option<u32>, input: &[u8]) -> CliResult {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let mut stdin = Cursor::new(input);
    let code = twentyone_cli::run_play_with_input(
        Some(rounds),
        None,
        Some(seed),
        min_bet,
        &mut out,
        &mut err,
        &mut stdin,
    );
    CliResult {
        code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

/// Sets variables for the guard's lifetime and clears every other CLI
/// variable; the previous environment comes back on drop. Tests using it
/// must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: callers are #[serial]; no other thread touches the environment.
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// `"Final balance: +150"` → `150`.
pub fn final_balance(stdout: &str) -> i64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Final balance:"))
        .expect("final balance line");
    line.trim_start_matches("Final balance:")
        .trim()
        .trim_start_matches('+')
        .parse()
        .expect("numeric balance")
}
