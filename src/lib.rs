//! # venue-rs
//!
//! A single-venue, in-memory limit order book engine.
//!
//! The engine accepts order insertions and deletions for a fixed set of
//! tradable symbols, maintains aggregated volume at each price level and
//! reports best bid/ask changes through listener notifications. It performs
//! no matching: orders rest in the book until they are deleted.
//!
//! ## Architecture
//!
//! - [`PriceLevel`](orderbook::PriceLevel): per-order volume contributions
//!   at one exact price, with an overflow-checked running total.
//! - [`BookSide`](orderbook::BookSide): ordered price levels for one side,
//!   best price in O(1), levels created and dropped on demand.
//! - [`OrderBook`](orderbook::OrderBook): the two sides of one symbol, with
//!   validation and top-of-book queries.
//! - [`Venue`](venue::Venue): routes operations to per-symbol books,
//!   assigns unique order ids, tracks per-order metadata and notifies the
//!   injected [`MarketListener`](venue::MarketListener).
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs to completion — including its
//! notifications — before returning. The storage uses concurrent containers
//! so all operations take `&self`, but consistency of the accounting is
//! only promised when mutations are serialized by the caller; the engine
//! takes no internal locks of its own.
//!
//! ## Example
//!
//! ```
//! use venue_rs::prelude::*;
//!
//! let venue = Venue::new(["AAPL", "MSFT", "GOOG"]);
//! venue.insert_order("AAPL", Side::Buy, 100, 10, 1);
//!
//! let info = venue.best_price_info("AAPL").unwrap();
//! assert_eq!((info.best_bid, info.total_bid_volume), (100, 10));
//! ```

pub mod orderbook;
pub mod types;
pub mod utils;
pub mod venue;

/// Commonly used types, re-exported for callers.
pub mod prelude {
    pub use crate::orderbook::{
        BestPriceInfo, BookSide, BookSnapshot, BookSnapshotPackage, OrderBook, OrderBookError,
        PriceLevel, PriceLevelSnapshot,
    };
    pub use crate::types::{
        DeleteStatus, InsertStatus, OrderId, Price, Side, UserReference, Volume,
    };
    pub use crate::venue::{ChannelListener, MarketEvent, MarketListener, NoopListener, Venue};
}
