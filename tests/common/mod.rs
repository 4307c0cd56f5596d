//! Shared test helpers.

#![allow(dead_code)]

use indigo::Card;
use tracing_subscriber::EnvFilter;

/// Parses a single card such as `10♥`.
pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

/// Parses space-separated cards.
pub fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace().map(card).collect()
}

/// Routes library logs through the test harness. `TEST_LOG` or `RUST_LOG`
/// picks the level, default `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
