//! One half of an order book: the ordered price levels for a single side,
//! with O(1) access to the best (most aggressive) price.

use super::error::OrderBookError;
use super::level::PriceLevel;
use super::snapshot::PriceLevelSnapshot;
use crate::types::{OrderId, Price, Side, Volume};
use crossbeam_skiplist::SkipMap;
use std::sync::Arc;
use tracing::trace;

/// Price levels for one side of a symbol's book, ordered by trading
/// priority.
///
/// Levels are stored in a skip list keyed by price, so the best price sits
/// at a fixed end of the map: the back for bids (highest first), the front
/// for asks (lowest first). A price is present iff a non-empty level exists
/// for it — levels are created by the first resting order and removed
/// within the same operation that empties them.
pub struct BookSide {
    /// Which side this is; fixes the priority direction.
    side: Side,

    /// Active price levels keyed by price.
    levels: SkipMap<Price, Arc<PriceLevel>>,
}

impl BookSide {
    /// Create an empty side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: SkipMap::new(),
        }
    }

    /// Which side of the book this is.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The best price on this side, if any orders rest here.
    ///
    /// O(1): the skip list keeps prices sorted, so the head is the back
    /// entry for bids and the front entry for asks.
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.iter().next_back().map(|entry| *entry.key()),
            Side::Sell => self.levels.iter().next().map(|entry| *entry.key()),
        }
    }

    /// True iff `price` is the current best price on this side.
    pub fn is_best(&self, price: Price) -> bool {
        self.best_price() == Some(price)
    }

    /// The level resting at the best price, if any.
    pub fn best_level(&self) -> Option<Arc<PriceLevel>> {
        match self.side {
            Side::Buy => self.levels.iter().next_back().map(|entry| entry.value().clone()),
            Side::Sell => self.levels.iter().next().map(|entry| entry.value().clone()),
        }
    }

    /// Best price and the total volume resting at it, or zero/zero when the
    /// side is empty.
    pub fn best_quote(&self) -> (Price, Volume) {
        match self.best_level() {
            Some(level) => (level.price(), level.total_volume()),
            None => (0, 0),
        }
    }

    /// The level at an exact price, if one is active.
    pub fn level(&self, price: Price) -> Option<Arc<PriceLevel>> {
        self.levels.get(&price).map(|entry| entry.value().clone())
    }

    /// Number of active price levels on this side.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// True when no orders rest on this side.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Rest an order's volume at `price`, creating the level on demand.
    ///
    /// Returns whether the best price was affected: true iff the order now
    /// rests at this side's head, which covers both a new head price and
    /// added volume at the existing head. A rejected add (overflow) leaves
    /// the side unchanged.
    pub fn add_volume(
        &self,
        price: Price,
        order_id: OrderId,
        volume: Volume,
    ) -> Result<bool, OrderBookError> {
        let entry = self
            .levels
            .get_or_insert_with(price, || Arc::new(PriceLevel::new(price)));
        entry.value().add_volume(order_id, volume)?;

        trace!(
            "side {}: order {} resting {} at {}",
            self.side, order_id, volume, price
        );
        Ok(self.is_best(price))
    }

    /// Remove an order's volume from the level at `price`, dropping the
    /// level if it empties.
    ///
    /// Returns whether `price` was this side's best price *before* the
    /// removal — the signal callers use to re-publish the top of book. A
    /// price with no active level, or a level that does not hold the order,
    /// is an [`OrderBookError::UnknownOrder`] fault and mutates nothing.
    pub fn remove_volume(&self, price: Price, order_id: OrderId) -> Result<bool, OrderBookError> {
        let Some(entry) = self.levels.get(&price) else {
            return Err(OrderBookError::UnknownOrder { order_id });
        };

        let was_best = self.is_best(price);
        let level = entry.value();
        let removed = level.remove_volume(order_id)?;

        if level.is_empty() {
            entry.remove();
        }

        trace!(
            "side {}: order {} released {} at {}",
            self.side, order_id, removed, price
        );
        Ok(was_best)
    }

    /// Snapshots of the most aggressive `depth` levels, in priority order.
    pub fn depth(&self, depth: usize) -> Vec<PriceLevelSnapshot> {
        match self.side {
            Side::Buy => self
                .levels
                .iter()
                .rev()
                .take(depth)
                .map(|entry| entry.value().snapshot())
                .collect(),
            Side::Sell => self
                .levels
                .iter()
                .take(depth)
                .map(|entry| entry.value().snapshot())
                .collect(),
        }
    }
}
