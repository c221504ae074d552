//! Shared primitives for the venue engine: sides, integer price/volume
//! units, order identity and the public result taxonomies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price of an order, pre-scaled to an integer by the caller (no implicit
/// decimal scaling). Zero is never a valid order price.
pub type Price = u64;

/// Resting volume of an order or the aggregated volume of a price level.
/// Zero is never a valid order volume.
pub type Volume = u64;

/// Process-unique order identifier assigned by the venue. Strictly
/// increasing and never reused, including ids consumed by rejected
/// insertions.
pub type OrderId = u64;

/// Opaque caller-supplied token echoed back on insertion results.
pub type UserReference = u64;

/// Which half of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side: best price is the highest.
    Buy,
    /// Ask side: best price is the lowest.
    Sell,
}

impl Side {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Outcome of an insertion attempt, delivered through
/// [`MarketListener::order_inserted`](crate::venue::MarketListener::order_inserted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertStatus {
    /// The order was accepted and is resting in the book.
    Ok,
    /// The symbol is not part of the venue's registry.
    SymbolNotFound,
    /// The order carried a zero price.
    InvalidPrice,
    /// The order carried a zero volume.
    InvalidVolume,
    /// An internal accounting fault, e.g. the price level's aggregated
    /// volume would overflow.
    SystemError,
}

impl InsertStatus {
    /// True for [`InsertStatus::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, InsertStatus::Ok)
    }
}

impl fmt::Display for InsertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertStatus::Ok => write!(f, "OK"),
            InsertStatus::SymbolNotFound => write!(f, "SymbolNotFound"),
            InsertStatus::InvalidPrice => write!(f, "InvalidPrice"),
            InsertStatus::InvalidVolume => write!(f, "InvalidVolume"),
            InsertStatus::SystemError => write!(f, "SystemError"),
        }
    }
}

/// Outcome of a deletion attempt, delivered through
/// [`MarketListener::order_deleted`](crate::venue::MarketListener::order_deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeleteStatus {
    /// The order was removed from the book.
    Ok,
    /// No resting order with this id is known to the venue.
    OrderNotFound,
    /// An internal consistency fault: the venue's metadata pointed at a
    /// price level that does not hold the order.
    SystemError,
}

impl DeleteStatus {
    /// True for [`DeleteStatus::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, DeleteStatus::Ok)
    }
}

impl fmt::Display for DeleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteStatus::Ok => write!(f, "OK"),
            DeleteStatus::OrderNotFound => write!(f, "OrderNotFound"),
            DeleteStatus::SystemError => write!(f, "SystemError"),
        }
    }
}
