//! A single price level: the per-order volume contributions resting at one
//! exact price, plus their incrementally maintained total.

use super::error::OrderBookError;
use super::snapshot::PriceLevelSnapshot;
use crate::types::{OrderId, Price, Volume};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Aggregated volume at one price on one side of a book.
///
/// The total is maintained incrementally on every mutation; it is never
/// recomputed by rescanning the contribution map. Overflow of the total is
/// checked before any state is touched, so a rejected add leaves the level
/// exactly as it was.
pub struct PriceLevel {
    /// The price this level aggregates.
    price: Price,

    /// Per-order volume contributions keyed by order id.
    volumes: DashMap<OrderId, Volume>,

    /// Running total of all contributions.
    total_volume: AtomicU64,
}

impl PriceLevel {
    /// Create an empty level at the given price.
    pub fn new(price: Price) -> Self {
        Self {
            price,
            volumes: DashMap::new(),
            total_volume: AtomicU64::new(0),
        }
    }

    /// The price this level aggregates.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Record an order's volume contribution.
    ///
    /// Fails with [`OrderBookError::VolumeOverflow`] if the new total would
    /// exceed [`Volume::MAX`]; neither the contribution map nor the total is
    /// changed in that case.
    pub fn add_volume(&self, order_id: OrderId, volume: Volume) -> Result<(), OrderBookError> {
        let resting = self.total_volume.load(Ordering::Acquire);
        let updated = resting
            .checked_add(volume)
            .ok_or(OrderBookError::VolumeOverflow {
                price: self.price,
                resting,
                incoming: volume,
            })?;

        self.volumes.insert(order_id, volume);
        self.total_volume.store(updated, Ordering::Release);
        Ok(())
    }

    /// Remove an order's contribution, returning the volume it held.
    ///
    /// Fails with [`OrderBookError::UnknownOrder`] if the id has no
    /// contribution recorded here.
    pub fn remove_volume(&self, order_id: OrderId) -> Result<Volume, OrderBookError> {
        let (_, volume) = self
            .volumes
            .remove(&order_id)
            .ok_or(OrderBookError::UnknownOrder { order_id })?;

        self.total_volume.fetch_sub(volume, Ordering::AcqRel);
        Ok(volume)
    }

    /// Total volume resting at this level.
    pub fn total_volume(&self) -> Volume {
        self.total_volume.load(Ordering::Acquire)
    }

    /// Number of orders contributing to this level.
    pub fn order_count(&self) -> usize {
        self.volumes.len()
    }

    /// True when no orders rest at this level.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// True when the given order contributes to this level.
    pub fn contains(&self, order_id: OrderId) -> bool {
        self.volumes.contains_key(&order_id)
    }

    /// Aggregate view of this level for market data export.
    pub fn snapshot(&self) -> PriceLevelSnapshot {
        PriceLevelSnapshot {
            price: self.price,
            total_volume: self.total_volume(),
            order_count: self.order_count(),
        }
    }
}
