//! Listener interfaces for venue notifications.
//!
//! The venue notifies synchronously, in a fixed order per operation: the
//! insertion/deletion result first, then at most one best-price change. A
//! listener that does not care about an event keeps the default no-op body,
//! so "no handler installed" can never fault.

use crate::orderbook::BestPriceInfo;
use crate::types::{DeleteStatus, InsertStatus, OrderId, UserReference};
use crate::utils::current_time_millis;
use std::sync::mpsc;
use tracing::error;

/// Receives venue notifications.
///
/// All methods default to no-ops; implement only the ones you consume.
/// Notifications are delivered on the caller's thread before the mutating
/// call returns.
pub trait MarketListener: Send + Sync {
    /// Result of an insertion attempt. Fires exactly once per
    /// [`Venue::insert_order`](crate::venue::Venue::insert_order) call,
    /// whatever the outcome.
    fn order_inserted(
        &self,
        _user_reference: UserReference,
        _status: InsertStatus,
        _order_id: OrderId,
    ) {
    }

    /// Result of a deletion attempt. Fires exactly once per
    /// [`Venue::delete_order`](crate::venue::Venue::delete_order) call.
    fn order_deleted(&self, _order_id: OrderId, _status: DeleteStatus) {}

    /// The best price or the volume resting at it changed on `symbol`.
    /// Fires at most once per mutating call, after the operation's result
    /// notification.
    fn best_price_changed(&self, _symbol: &str, _info: &BestPriceInfo) {}
}

/// Listener that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl MarketListener for NoopListener {}

/// A venue notification as a value, for channel-based consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketEvent {
    /// An insertion attempt finished.
    OrderInserted {
        /// Caller-supplied token from the insertion.
        user_reference: UserReference,
        /// Outcome of the attempt.
        status: InsertStatus,
        /// Id consumed by the attempt.
        order_id: OrderId,
    },
    /// A deletion attempt finished.
    OrderDeleted {
        /// Id the deletion addressed.
        order_id: OrderId,
        /// Outcome of the attempt.
        status: DeleteStatus,
    },
    /// The top of book moved.
    BestPriceChanged {
        /// Symbol whose book changed.
        symbol: String,
        /// The new top of book.
        info: BestPriceInfo,
        /// Wall-clock time the event was produced (ms since epoch).
        timestamp: u64,
    },
}

/// Listener that forwards every notification into an mpsc channel, for
/// consumers that drain events on their own thread.
pub struct ChannelListener {
    sender: mpsc::Sender<MarketEvent>,
}

impl ChannelListener {
    /// Create a listener plus the receiving end of its channel.
    pub fn new() -> (Self, mpsc::Receiver<MarketEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    fn forward(&self, event: MarketEvent) {
        if let Err(e) = self.sender.send(event) {
            error!("Failed to forward market event: {}", e);
        }
    }
}

impl MarketListener for ChannelListener {
    fn order_inserted(
        &self,
        user_reference: UserReference,
        status: InsertStatus,
        order_id: OrderId,
    ) {
        self.forward(MarketEvent::OrderInserted {
            user_reference,
            status,
            order_id,
        });
    }

    fn order_deleted(&self, order_id: OrderId, status: DeleteStatus) {
        self.forward(MarketEvent::OrderDeleted { order_id, status });
    }

    fn best_price_changed(&self, symbol: &str, info: &BestPriceInfo) {
        self.forward(MarketEvent::BestPriceChanged {
            symbol: symbol.to_string(),
            info: *info,
            timestamp: current_time_millis(),
        });
    }
}
