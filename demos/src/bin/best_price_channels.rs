//! Example demonstrating venue notifications over channels.
//!
//! This example shows how to:
//! 1. Wire a `ChannelListener` to a venue and drain events on a thread
//! 2. Track best-price changes across multiple symbols
//! 3. Export a checksummed snapshot of a book as JSON

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use tracing::info;
use venue_rs::prelude::*;

/// Drain venue events on a separate thread until the channel closes.
fn start_event_processor(receiver: mpsc::Receiver<MarketEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        info!("Event processor started");

        while let Ok(event) = receiver.recv() {
            process_event(event);
        }

        info!("Event processor stopped");
    })
}

/// Process a single venue event (this is where you'd implement your
/// business logic).
fn process_event(event: MarketEvent) {
    match event {
        MarketEvent::OrderInserted {
            user_reference,
            status,
            order_id,
        } => info!(
            "Order {} inserted (reference {}): {}",
            order_id, user_reference, status
        ),
        MarketEvent::OrderDeleted { order_id, status } => {
            info!("Order {} deleted: {}", order_id, status)
        }
        MarketEvent::BestPriceChanged {
            symbol,
            info,
            timestamp,
        } => info!(
            "{} top of book at {}: bid {}x{} / ask {}x{}",
            symbol,
            timestamp,
            info.best_bid,
            info.total_bid_volume,
            info.best_ask,
            info.total_ask_volume
        ),
    }
}

/// Rest a ladder of bids and asks on a symbol.
fn add_liquidity(venue: &Venue, symbol: &str, reference_base: UserReference) {
    info!("Adding liquidity to {}", symbol);

    for i in 1..=5u64 {
        let price = 50_000 + i * 10; // Asks: 50010, 50020, ...
        venue.insert_order(symbol, Side::Sell, price, 100, reference_base + i);
    }

    for i in 1..=5u64 {
        let price = 49_990 - i * 10; // Bids: 49980, 49970, ...
        venue.insert_order(symbol, Side::Buy, price, 100, reference_base + 100 + i);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting best price channels example");

    let (listener, receiver) = ChannelListener::new();
    let symbols = ["BTC/USD", "ETH/USD", "SOL/USD"];
    let venue = Venue::with_listener(symbols, Arc::new(listener));

    let processor_handle = start_event_processor(receiver);

    for (idx, symbol) in symbols.iter().enumerate() {
        add_liquidity(&venue, symbol, (idx as UserReference + 1) * 1_000);
    }
    info!("Liquidity added to all books");

    // Tighten the BTC book: a new best bid, then extra volume at it.
    venue.insert_order("BTC/USD", Side::Buy, 49_995, 50, 42);
    venue.insert_order("BTC/USD", Side::Buy, 49_995, 25, 43);

    // A deletion at the top of book re-publishes the best price.
    venue.delete_order(1);

    for symbol in &symbols {
        if let Some(book) = venue.book(symbol) {
            info!(
                "{} - Best Bid: {:?}, Best Ask: {:?}, Spread: {:?}",
                symbol,
                book.best_bid(),
                book.best_ask(),
                book.spread()
            );
        }
    }

    if let Some(book) = venue.book("BTC/USD") {
        let json = book.snapshot_to_json(3)?;
        info!("BTC/USD snapshot package: {}", json);
    }

    info!("Example completed, {} orders resting", venue.resting_orders());

    drop(venue);
    processor_handle.join().expect("event processor panicked");

    Ok(())
}
