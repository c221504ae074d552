//! Order book snapshots for market data export.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

use super::error::OrderBookError;
use crate::types::{Price, Volume};

/// Top-of-book view of one symbol: best price and the aggregated volume
/// resting at it, per side.
///
/// An empty side reports zero for both fields, so a `best_bid` of zero
/// means "no bids" — zero is never a valid resting price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPriceInfo {
    /// Highest resting bid price, or zero when the bid side is empty.
    pub best_bid: Price,

    /// Total volume resting at the best bid.
    pub total_bid_volume: Volume,

    /// Lowest resting ask price, or zero when the ask side is empty.
    pub best_ask: Price,

    /// Total volume resting at the best ask.
    pub total_ask_volume: Volume,
}

impl BestPriceInfo {
    /// True when the bid side holds at least one order.
    pub fn has_bid(&self) -> bool {
        self.best_bid != 0
    }

    /// True when the ask side holds at least one order.
    pub fn has_ask(&self) -> bool {
        self.best_ask != 0
    }
}

/// Aggregate view of one price level at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevelSnapshot {
    /// The level's price.
    pub price: Price,

    /// Total volume resting at the level.
    pub total_volume: Volume,

    /// Number of orders contributing to the level.
    pub order_count: usize,
}

/// A snapshot of the order book state at a specific point in time.
///
/// Level vectors are ordered by trading priority: bids descending, asks
/// ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// The symbol or identifier for this order book.
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch).
    pub timestamp: u64,

    /// Snapshot of bid price levels.
    pub bids: Vec<PriceLevelSnapshot>,

    /// Snapshot of ask price levels.
    pub asks: Vec<PriceLevelSnapshot>,
}

impl BookSnapshot {
    /// Get the best bid price and its total volume.
    pub fn best_bid(&self) -> Option<(Price, Volume)> {
        let bid = self
            .bids
            .iter()
            .map(|level| (level.price, level.total_volume))
            .max_by_key(|&(price, _)| price);
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and its total volume.
    pub fn best_ask(&self) -> Option<(Price, Volume)> {
        let ask = self
            .asks
            .iter()
            .map(|level| (level.price, level.total_volume))
            .min_by_key(|&(price, _)| price);
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(ask_price.saturating_sub(bid_price))
            }
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Calculate the total volume across the included bid levels.
    pub fn total_bid_volume(&self) -> Volume {
        self.bids.iter().map(|level| level.total_volume).sum()
    }

    /// Calculate the total volume across the included ask levels.
    pub fn total_ask_volume(&self) -> Volume {
        self.asks.iter().map(|level| level.total_volume).sum()
    }
}

/// Format version used for checksum-enabled order book snapshots.
pub const BOOK_SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Wrapper that provides checksum validation for [`BookSnapshot`] instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshotPackage {
    /// Version of the snapshot schema for forward compatibility.
    pub version: u32,
    /// Snapshot payload.
    pub snapshot: BookSnapshot,
    /// Hex-encoded checksum of the serialized snapshot.
    pub checksum: String,
}

impl BookSnapshotPackage {
    /// Creates a new snapshot package computing the checksum of the
    /// snapshot contents.
    pub fn new(snapshot: BookSnapshot) -> Result<Self, OrderBookError> {
        let checksum = Self::compute_checksum(&snapshot)?;

        Ok(Self {
            version: BOOK_SNAPSHOT_FORMAT_VERSION,
            snapshot,
            checksum,
        })
    }

    /// Serializes the package to JSON.
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|error| OrderBookError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes the package from JSON.
    pub fn from_json(data: &str) -> Result<Self, OrderBookError> {
        serde_json::from_str(data).map_err(|error| OrderBookError::DeserializationError {
            message: error.to_string(),
        })
    }

    /// Validates the checksum and version.
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.version != BOOK_SNAPSHOT_FORMAT_VERSION {
            return Err(OrderBookError::UnsupportedVersion {
                found: self.version,
                supported: BOOK_SNAPSHOT_FORMAT_VERSION,
            });
        }

        let computed = Self::compute_checksum(&self.snapshot)?;
        if computed != self.checksum {
            return Err(OrderBookError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual: computed,
            });
        }

        Ok(())
    }

    /// Consumes the package and returns the validated snapshot.
    pub fn into_snapshot(self) -> Result<BookSnapshot, OrderBookError> {
        self.validate()?;
        Ok(self.snapshot)
    }

    fn compute_checksum(snapshot: &BookSnapshot) -> Result<String, OrderBookError> {
        let payload =
            serde_json::to_vec(snapshot).map_err(|error| OrderBookError::SerializationError {
                message: error.to_string(),
            })?;

        let mut hasher = Sha256::new();
        hasher.update(payload);

        let checksum_bytes = hasher.finalize();
        Ok(format!("{:x}", checksum_bytes))
    }
}
