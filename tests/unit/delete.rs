use crate::fixtures::*;
use venue_rs::prelude::*;

#[test]
fn delete_on_an_empty_venue_reports_order_not_found() {
    let (venue, listener) = recording_venue();

    venue.delete_order(1);

    assert!(listener.inserted().is_empty());
    assert_eq!(listener.deleted(), vec![(1, DeleteStatus::OrderNotFound)]);
    assert!(listener.best_prices().is_empty());
}

#[test]
fn delete_with_a_wrong_id_leaves_the_order_resting() {
    let (venue, listener) = recording_venue();
    let order_id = insert_default(&venue, &listener, 1);

    let wrong_id = order_id + 1;
    venue.delete_order(wrong_id);

    assert_eq!(listener.deleted(), vec![(wrong_id, DeleteStatus::OrderNotFound)]);
    assert_eq!(venue.resting_orders(), 1);
    let info = venue.best_price_info(DEFAULT_SYMBOL).unwrap();
    assert_eq!((info.best_bid, info.total_bid_volume), (DEFAULT_PRICE, DEFAULT_VOLUME));
}

#[test]
fn repeated_wrong_id_deletes_report_order_not_found_each_time() {
    let (venue, listener) = recording_venue();
    let order_id = insert_default(&venue, &listener, 1);

    let wrong_id = order_id + 1;
    venue.delete_order(wrong_id);
    venue.delete_order(wrong_id);

    assert_eq!(
        listener.deleted(),
        vec![
            (wrong_id, DeleteStatus::OrderNotFound),
            (wrong_id, DeleteStatus::OrderNotFound),
        ]
    );
    assert_eq!(venue.resting_orders(), 1);
}

#[test]
fn every_valid_order_deletes_exactly_once() {
    let (venue, listener) = recording_venue();

    for (reference, (symbol, side)) in symbol_side_matrix().into_iter().enumerate() {
        venue.insert_order(
            symbol,
            side,
            DEFAULT_PRICE,
            DEFAULT_VOLUME,
            reference as UserReference + 1,
        );
    }

    let inserted = listener.inserted();
    for (_, _, order_id) in &inserted {
        venue.delete_order(*order_id);
    }

    let deleted = listener.deleted();
    assert_eq!(deleted.len(), inserted.len());
    for ((_, _, inserted_id), (deleted_id, status)) in inserted.iter().zip(&deleted) {
        assert_eq!(inserted_id, deleted_id);
        assert!(status.is_ok());
    }

    assert_eq!(venue.resting_orders(), 0);
    for symbol in SYMBOLS {
        assert_eq!(venue.best_price_info(symbol), Some(BestPriceInfo::default()));
    }
}

#[test]
fn deleting_the_same_order_twice_reports_order_not_found_the_second_time() {
    let (venue, listener) = recording_venue();
    let order_id = insert_default(&venue, &listener, 1);

    venue.delete_order(order_id);
    venue.delete_order(order_id);

    assert_eq!(
        listener.deleted(),
        vec![
            (order_id, DeleteStatus::Ok),
            (order_id, DeleteStatus::OrderNotFound),
        ]
    );
    assert_eq!(venue.resting_orders(), 0);
}
