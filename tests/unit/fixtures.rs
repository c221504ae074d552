//! Shared test fixtures: a venue wired to a listener that records every
//! notification for later inspection.

use std::sync::{Arc, Mutex};
use venue_rs::prelude::*;

/// Symbols registered on every test venue.
pub const SYMBOLS: [&str; 3] = ["AAPL", "MSFT", "GOOG"];

/// Default order used as the starting point of most scenarios.
pub const DEFAULT_SYMBOL: &str = "AAPL";
pub const DEFAULT_SIDE: Side = Side::Buy;
pub const DEFAULT_PRICE: Price = 100;
pub const DEFAULT_VOLUME: Volume = 10;

/// An `order_inserted` notification as recorded.
pub type InsertedEvent = (UserReference, InsertStatus, OrderId);

/// An `order_deleted` notification as recorded.
pub type DeletedEvent = (OrderId, DeleteStatus);

/// A `best_price_changed` notification as recorded.
pub type BestPriceEvent = (String, BestPriceInfo);

/// Listener that appends every notification to a vector.
#[derive(Default)]
pub struct RecordingListener {
    inserted: Mutex<Vec<InsertedEvent>>,
    deleted: Mutex<Vec<DeletedEvent>>,
    best_prices: Mutex<Vec<BestPriceEvent>>,
}

impl MarketListener for RecordingListener {
    fn order_inserted(
        &self,
        user_reference: UserReference,
        status: InsertStatus,
        order_id: OrderId,
    ) {
        self.inserted
            .lock()
            .unwrap()
            .push((user_reference, status, order_id));
    }

    fn order_deleted(&self, order_id: OrderId, status: DeleteStatus) {
        self.deleted.lock().unwrap().push((order_id, status));
    }

    fn best_price_changed(&self, symbol: &str, info: &BestPriceInfo) {
        self.best_prices
            .lock()
            .unwrap()
            .push((symbol.to_string(), *info));
    }
}

impl RecordingListener {
    pub fn inserted(&self) -> Vec<InsertedEvent> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<DeletedEvent> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn best_prices(&self) -> Vec<BestPriceEvent> {
        self.best_prices.lock().unwrap().clone()
    }

    /// Order id carried by the most recent insertion notification.
    pub fn last_order_id(&self) -> OrderId {
        self.inserted
            .lock()
            .unwrap()
            .last()
            .expect("no insertion recorded")
            .2
    }

    /// Asserts every recorded insertion carries `status`, that all order
    /// ids are unique and that the given references came back exactly once.
    pub fn assert_all_inserted(&self, status: InsertStatus, references: &[UserReference]) {
        let events = self.inserted();
        assert_eq!(events.len(), references.len());

        let mut ids = std::collections::HashSet::new();
        let mut refs: Vec<_> = references.to_vec();
        for (user_reference, event_status, order_id) in events {
            assert!(ids.insert(order_id), "order id {order_id} reused");
            assert_eq!(event_status, status);
            let pos = refs
                .iter()
                .position(|r| *r == user_reference)
                .expect("unexpected user reference delivered");
            refs.swap_remove(pos);
        }
        assert!(refs.is_empty());
    }
}

/// A fresh venue over [`SYMBOLS`] plus its recording listener.
pub fn recording_venue() -> (Venue, Arc<RecordingListener>) {
    let listener = Arc::new(RecordingListener::default());
    let venue = Venue::with_listener(SYMBOLS, listener.clone());
    (venue, listener)
}

/// Inserts the default order, returning the id it consumed.
pub fn insert_default(venue: &Venue, listener: &RecordingListener, reference: UserReference) -> OrderId {
    venue.insert_order(
        DEFAULT_SYMBOL,
        DEFAULT_SIDE,
        DEFAULT_PRICE,
        DEFAULT_VOLUME,
        reference,
    );
    listener.last_order_id()
}

/// Every (symbol, side) combination, for matrix-style scenarios.
pub fn symbol_side_matrix() -> Vec<(&'static str, Side)> {
    SYMBOLS
        .iter()
        .flat_map(|symbol| [(*symbol, Side::Buy), (*symbol, Side::Sell)])
        .collect()
}
