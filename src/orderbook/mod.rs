//! OrderBook implementation: per-symbol price level management with
//! incremental best-price tracking.

pub mod book;
pub mod error;
/// Per-price volume aggregation with overflow-checked accounting.
pub mod level;
/// One side of a book: directioned price level index and storage.
pub mod side;
pub mod snapshot;


pub use book::OrderBook;
pub use error::OrderBookError;
pub use level::PriceLevel;
pub use side::BookSide;
pub use snapshot::{
    BOOK_SNAPSHOT_FORMAT_VERSION, BestPriceInfo, BookSnapshot, BookSnapshotPackage,
    PriceLevelSnapshot,
};
