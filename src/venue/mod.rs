//! The venue: top-level coordinator routing insertions and deletions to
//! per-symbol order books and emitting listener notifications.

/// Listener trait, event values and the channel-forwarding listener.
pub mod listener;

pub use listener::{ChannelListener, MarketEvent, MarketListener, NoopListener};

use crate::orderbook::{BestPriceInfo, OrderBook};
use crate::types::{DeleteStatus, InsertStatus, OrderId, Price, Side, UserReference, Volume};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, trace};

/// Per-order bookkeeping needed to route a deletion: which book, which
/// side, which price level. Created on successful insertion only; a failed
/// deletion leaves it in place, so the order keeps resting.
#[derive(Debug, Clone)]
struct OrderMetadata {
    symbol: String,
    side: Side,
    price: Price,
}

/// A single trading venue over a fixed set of symbols.
///
/// The venue owns one [`OrderBook`] per registered symbol, assigns
/// process-unique order ids, records per-order metadata for deletion
/// routing and notifies the injected [`MarketListener`]. Operations are
/// synchronous: all notifications fire on the caller's thread before the
/// call returns, the operation result always before any best-price change
/// it triggered. Mutations must be serialized by the caller.
pub struct Venue {
    /// One order book per registered symbol. The registry is fixed for the
    /// venue's lifetime.
    books: HashMap<String, OrderBook>,

    /// Metadata for every resting order, keyed by order id.
    metadata: DashMap<OrderId, OrderMetadata>,

    /// Source of order ids: strictly increasing, never reused. Ids are
    /// consumed by failed insertions too, so every insertion result can
    /// carry one.
    next_order_id: AtomicU64,

    /// Notification sink.
    listener: Arc<dyn MarketListener>,
}

impl Venue {
    /// Create a venue for the given symbols, dropping all notifications.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_listener(symbols, Arc::new(NoopListener))
    }

    /// Create a venue for the given symbols with a notification listener.
    pub fn with_listener<I, S>(symbols: I, listener: Arc<dyn MarketListener>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut books = HashMap::new();
        for symbol in symbols {
            let symbol = symbol.into();
            books.insert(symbol.clone(), OrderBook::new(&symbol));
            info!("Added order book for symbol: {}", symbol);
        }

        Self {
            books,
            metadata: DashMap::new(),
            next_order_id: AtomicU64::new(1),
            listener,
        }
    }

    /// The list of all registered symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.books.keys().cloned().collect()
    }

    /// Check if a book exists for a specific symbol.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.books.contains_key(symbol)
    }

    /// Get a reference to an order book by symbol.
    pub fn book(&self, symbol: &str) -> Option<&OrderBook> {
        self.books.get(symbol)
    }

    /// Number of orders currently resting across all books.
    pub fn resting_orders(&self) -> usize {
        self.metadata.len()
    }

    /// Top-of-book view for a registered symbol.
    pub fn best_price_info(&self, symbol: &str) -> Option<BestPriceInfo> {
        self.books.get(symbol).map(OrderBook::best_price_info)
    }

    /// Submit an order for insertion.
    ///
    /// No direct return: the outcome arrives through
    /// [`MarketListener::order_inserted`] with the consumed order id, then
    /// — on success, when the top of book was affected —
    /// [`MarketListener::best_price_changed`].
    pub fn insert_order(
        &self,
        symbol: &str,
        side: Side,
        price: Price,
        volume: Volume,
        user_reference: UserReference,
    ) {
        let order_id = self.allocate_order_id();

        let Some(book) = self.books.get(symbol) else {
            trace!("insert {}: unknown symbol {}", order_id, symbol);
            self.listener
                .order_inserted(user_reference, InsertStatus::SymbolNotFound, order_id);
            return;
        };

        match book.place_order(side, price, volume, order_id) {
            Ok(best_affected) => {
                self.listener
                    .order_inserted(user_reference, InsertStatus::Ok, order_id);
                self.metadata.insert(
                    order_id,
                    OrderMetadata {
                        symbol: symbol.to_string(),
                        side,
                        price,
                    },
                );
                if best_affected {
                    self.listener
                        .best_price_changed(symbol, &book.best_price_info());
                }
            }
            Err(error) => {
                trace!("insert {} rejected: {}", order_id, error);
                self.listener
                    .order_inserted(user_reference, InsertStatus::from(&error), order_id);
            }
        }
    }

    /// Submit a deletion for a previously inserted order.
    ///
    /// The outcome arrives through [`MarketListener::order_deleted`], then
    /// — on success, when the removed order's price was the best price —
    /// [`MarketListener::best_price_changed`]. A failed deletion leaves the
    /// order resting.
    pub fn delete_order(&self, order_id: OrderId) {
        let Some(meta) = self
            .metadata
            .get(&order_id)
            .map(|entry| entry.value().clone())
        else {
            trace!("delete {}: no such order", order_id);
            self.listener
                .order_deleted(order_id, DeleteStatus::OrderNotFound);
            return;
        };

        let Some(book) = self.books.get(&meta.symbol) else {
            self.listener
                .order_deleted(order_id, DeleteStatus::SystemError);
            return;
        };

        match book.remove_order(order_id, meta.side, meta.price) {
            Ok(was_best) => {
                self.listener.order_deleted(order_id, DeleteStatus::Ok);
                self.metadata.remove(&order_id);
                if was_best {
                    self.listener
                        .best_price_changed(&meta.symbol, &book.best_price_info());
                }
            }
            Err(error) => {
                trace!("delete {} rejected: {}", order_id, error);
                self.listener
                    .order_deleted(order_id, DeleteStatus::from(&error));
            }
        }
    }

    fn allocate_order_id(&self) -> OrderId {
        self.next_order_id.fetch_add(1, Ordering::Relaxed)
    }
}
