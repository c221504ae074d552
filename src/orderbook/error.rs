//! Error types for order book operations.

use crate::types::{DeleteStatus, InsertStatus, OrderId, Price, Volume};
use std::fmt;

/// Errors reported by order book mutations and snapshot handling.
///
/// These are values, never panics: the venue converts them to the public
/// [`InsertStatus`]/[`DeleteStatus`] taxonomy before notifying listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// The order carried a zero price.
    InvalidPrice,

    /// The order carried a zero volume.
    InvalidVolume,

    /// Adding the order would wrap the price level's aggregated volume.
    VolumeOverflow {
        /// Price level that rejected the order.
        price: Price,
        /// Volume already resting at the level.
        resting: Volume,
        /// Volume of the rejected order.
        incoming: Volume,
    },

    /// The order id has no contribution at the addressed price level.
    UnknownOrder {
        /// The id that could not be resolved.
        order_id: OrderId,
    },

    /// A snapshot could not be serialized.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// A snapshot payload could not be deserialized.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },

    /// A snapshot package failed checksum validation.
    ChecksumMismatch {
        /// Checksum carried by the package.
        expected: String,
        /// Checksum recomputed from the payload.
        actual: String,
    },

    /// A snapshot package carried an unsupported format version.
    UnsupportedVersion {
        /// Version found in the package.
        found: u32,
        /// Version this build understands.
        supported: u32,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidPrice => write!(f, "order price must be non-zero"),
            OrderBookError::InvalidVolume => write!(f, "order volume must be non-zero"),
            OrderBookError::VolumeOverflow {
                price,
                resting,
                incoming,
            } => write!(
                f,
                "volume overflow at price {price}: {resting} resting + {incoming} incoming"
            ),
            OrderBookError::UnknownOrder { order_id } => {
                write!(f, "order {order_id} has no contribution at this level")
            }
            OrderBookError::SerializationError { message } => {
                write!(f, "snapshot serialization failed: {message}")
            }
            OrderBookError::DeserializationError { message } => {
                write!(f, "snapshot deserialization failed: {message}")
            }
            OrderBookError::ChecksumMismatch { expected, actual } => {
                write!(f, "snapshot checksum mismatch: expected {expected}, got {actual}")
            }
            OrderBookError::UnsupportedVersion { found, supported } => {
                write!(f, "unsupported snapshot version {found} (supported: {supported})")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<&OrderBookError> for InsertStatus {
    fn from(error: &OrderBookError) -> Self {
        match error {
            OrderBookError::InvalidPrice => InsertStatus::InvalidPrice,
            OrderBookError::InvalidVolume => InsertStatus::InvalidVolume,
            _ => InsertStatus::SystemError,
        }
    }
}

impl From<&OrderBookError> for DeleteStatus {
    fn from(_: &OrderBookError) -> Self {
        // Any book-level fault on a delete the venue believed valid is an
        // internal inconsistency, not a caller error.
        DeleteStatus::SystemError
    }
}
