//! Shuffle demo: one default shuffle, a thousand more in a row, then a sort.

#![allow(clippy::missing_docs_in_private_items)]

use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

use handshuffle::{Dealer, Deck, ShuffleError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ShuffleError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dealer = Dealer::new(seed);

    let mut deck = Deck::new();
    dealer.shuffle(&mut deck)?;
    dealer.shuffle_times(&mut deck, 1000)?;

    println!("size: {}", deck.len());
    for card in &deck {
        println!("{card}");
    }

    let unique: BTreeSet<_> = deck.iter().copied().collect();
    println!("set count: {}", unique.len());

    deck.sort();
    for card in &deck {
        println!("sorted: {card}");
    }

    Ok(())
}
