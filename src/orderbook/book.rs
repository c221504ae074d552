//! Core OrderBook implementation for managing price levels on both sides
//! of a single symbol.

use super::error::OrderBookError;
use super::side::BookSide;
use super::snapshot::{BestPriceInfo, BookSnapshot, BookSnapshotPackage};
use crate::types::{OrderId, Price, Side, Volume};
use crate::utils::current_time_millis;
use std::collections::HashMap;
use tracing::trace;

/// The OrderBook manages the price levels for both sides of one symbol.
///
/// It validates incoming orders, delegates volume accounting to the
/// addressed side and reports whether a mutation affected the top of book.
/// It performs no matching: orders rest until deleted.
pub struct OrderBook {
    /// The symbol or identifier for this order book.
    pub(super) symbol: String,

    /// Bid side price levels (buy orders), best price is the highest.
    pub(super) bids: BookSide,

    /// Ask side price levels (sell orders), best price is the lowest.
    pub(super) asks: BookSide,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
        }
    }

    /// Get the symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    fn book_side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Rest an order in the book.
    ///
    /// Validation order: a zero price is rejected before a zero volume;
    /// otherwise the side's price level accounts the volume, creating the
    /// level if this is the first order at that price. Every rejection
    /// leaves the book exactly as it was.
    ///
    /// On success the payload reports whether the best price was affected,
    /// i.e. the order rests at the side's head — either a new head price or
    /// additional volume at the existing one.
    pub fn place_order(
        &self,
        side: Side,
        price: Price,
        volume: Volume,
        order_id: OrderId,
    ) -> Result<bool, OrderBookError> {
        if price == 0 {
            return Err(OrderBookError::InvalidPrice);
        }
        if volume == 0 {
            return Err(OrderBookError::InvalidVolume);
        }

        trace!(
            "Order book {}: placing order {} {} {}@{}",
            self.symbol, order_id, side, volume, price
        );
        self.book_side(side).add_volume(price, order_id, volume)
    }

    /// Remove a resting order from the book.
    ///
    /// The side and price come from the caller's metadata; an id the
    /// addressed level does not hold is an internal-consistency fault and
    /// mutates nothing. On success the payload reports whether the removed
    /// order's price was the side's best price before the removal.
    pub fn remove_order(
        &self,
        order_id: OrderId,
        side: Side,
        price: Price,
    ) -> Result<bool, OrderBookError> {
        trace!(
            "Order book {}: removing order {} {} @{}",
            self.symbol, order_id, side, price
        );
        self.book_side(side).remove_volume(price, order_id)
    }

    /// Get the best bid price, if any.
    ///
    /// # Performance
    /// O(1): the bid side keeps its highest price at the end of its
    /// ordered level map.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any.
    ///
    /// # Performance
    /// O(1): the ask side keeps its lowest price at the front of its
    /// ordered level map.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// Top-of-book view of both sides: best price and the aggregated
    /// volume resting at it, zero/zero for an empty side. O(1).
    pub fn best_price_info(&self) -> BestPriceInfo {
        let (best_bid, total_bid_volume) = self.bids.best_quote();
        let (best_ask, total_ask_volume) = self.asks.best_quote();

        BestPriceInfo {
            best_bid,
            total_bid_volume,
            best_ask,
            total_ask_volume,
        }
    }

    /// Get the total volume resting at each active price level.
    pub fn volume_by_price(&self) -> (HashMap<Price, Volume>, HashMap<Price, Volume>) {
        let collect = |side: &BookSide| {
            side.depth(usize::MAX)
                .into_iter()
                .map(|level| (level.price, level.total_volume))
                .collect::<HashMap<Price, Volume>>()
        };

        (collect(&self.bids), collect(&self.asks))
    }

    /// Create a snapshot of the most aggressive `depth` levels per side.
    pub fn create_snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: self.bids.depth(depth),
            asks: self.asks.depth(depth),
        }
    }

    /// Create a checksum-protected snapshot package of the book.
    pub fn create_snapshot_package(
        &self,
        depth: usize,
    ) -> Result<BookSnapshotPackage, OrderBookError> {
        BookSnapshotPackage::new(self.create_snapshot(depth))
    }

    /// Serialize a checksum-protected snapshot package to JSON.
    pub fn snapshot_to_json(&self, depth: usize) -> Result<String, OrderBookError> {
        self.create_snapshot_package(depth)?.to_json()
    }
}
