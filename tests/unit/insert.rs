use crate::fixtures::*;
use venue_rs::prelude::*;

#[test]
fn unknown_symbol_is_rejected_on_both_sides() {
    let (venue, listener) = recording_venue();

    venue.insert_order("XXX", Side::Buy, DEFAULT_PRICE, DEFAULT_VOLUME, 1);
    venue.insert_order("XXX", Side::Sell, DEFAULT_PRICE, DEFAULT_VOLUME, 2);

    listener.assert_all_inserted(InsertStatus::SymbolNotFound, &[1, 2]);
    assert!(listener.deleted().is_empty());
    assert!(listener.best_prices().is_empty());
    assert_eq!(venue.resting_orders(), 0);
}

#[test]
fn rejected_symbol_still_consumes_an_order_id() {
    let (venue, listener) = recording_venue();

    venue.insert_order("XXX", Side::Buy, DEFAULT_PRICE, DEFAULT_VOLUME, 1);
    let rejected_id = listener.last_order_id();

    insert_default(&venue, &listener, 2);
    let accepted_id = listener.last_order_id();

    assert!(accepted_id > rejected_id);
}

#[test]
fn zero_price_is_rejected_without_touching_any_book() {
    let (venue, listener) = recording_venue();

    let mut references = Vec::new();
    for (reference, (symbol, side)) in symbol_side_matrix().into_iter().enumerate() {
        let reference = reference as UserReference + 1;
        venue.insert_order(symbol, side, 0, DEFAULT_VOLUME, reference);
        references.push(reference);
    }

    listener.assert_all_inserted(InsertStatus::InvalidPrice, &references);
    assert!(listener.best_prices().is_empty());
    assert_eq!(venue.resting_orders(), 0);
    for symbol in SYMBOLS {
        assert_eq!(venue.best_price_info(symbol), Some(BestPriceInfo::default()));
    }
}

#[test]
fn max_price_is_accepted() {
    let (venue, listener) = recording_venue();

    let mut references = Vec::new();
    for (reference, (symbol, side)) in symbol_side_matrix().into_iter().enumerate() {
        let reference = reference as UserReference + 1;
        venue.insert_order(symbol, side, Price::MAX, DEFAULT_VOLUME, reference);
        references.push(reference);
    }

    listener.assert_all_inserted(InsertStatus::Ok, &references);
    assert_eq!(listener.best_prices().len(), references.len());
}

#[test]
fn zero_volume_is_rejected_without_touching_any_book() {
    let (venue, listener) = recording_venue();

    let mut references = Vec::new();
    for (reference, (symbol, side)) in symbol_side_matrix().into_iter().enumerate() {
        let reference = reference as UserReference + 1;
        venue.insert_order(symbol, side, DEFAULT_PRICE, 0, reference);
        references.push(reference);
    }

    listener.assert_all_inserted(InsertStatus::InvalidVolume, &references);
    assert!(listener.best_prices().is_empty());
    assert_eq!(venue.resting_orders(), 0);
}

#[test]
fn max_volume_is_accepted() {
    let (venue, listener) = recording_venue();

    venue.insert_order(DEFAULT_SYMBOL, Side::Buy, DEFAULT_PRICE, Volume::MAX, 1);

    listener.assert_all_inserted(InsertStatus::Ok, &[1]);
    let info = venue.best_price_info(DEFAULT_SYMBOL).unwrap();
    assert_eq!(info.total_bid_volume, Volume::MAX);
}

#[test]
fn volume_overflow_reports_system_error_and_keeps_prior_state() {
    let (venue, listener) = recording_venue();

    for (symbol, side) in symbol_side_matrix() {
        venue.insert_order(symbol, side, DEFAULT_PRICE, Volume::MAX, 0);
    }
    let first_round = listener.inserted();
    assert!(first_round.iter().all(|(_, status, _)| status.is_ok()));

    for (symbol, side) in symbol_side_matrix() {
        venue.insert_order(symbol, side, DEFAULT_PRICE, 1, 0);
    }
    let events = listener.inserted();
    let second_round = &events[first_round.len()..];
    assert!(second_round
        .iter()
        .all(|(_, status, _)| *status == InsertStatus::SystemError));

    // Only the accepted first round moved the top of book.
    assert_eq!(listener.best_prices().len(), first_round.len());
    for symbol in SYMBOLS {
        let info = venue.best_price_info(symbol).unwrap();
        assert_eq!(info.total_bid_volume, Volume::MAX);
        assert_eq!(info.total_ask_volume, Volume::MAX);
    }
    assert_eq!(venue.resting_orders(), first_round.len());
}

#[test]
fn valid_inserts_get_unique_ids_across_symbols_and_sides() {
    let (venue, listener) = recording_venue();

    let mut references = Vec::new();
    for (reference, (symbol, side)) in symbol_side_matrix().into_iter().enumerate() {
        let reference = reference as UserReference + 1;
        venue.insert_order(symbol, side, DEFAULT_PRICE, DEFAULT_VOLUME, reference);
        references.push(reference);
    }

    listener.assert_all_inserted(InsertStatus::Ok, &references);
    assert!(listener.deleted().is_empty());
    assert_eq!(listener.best_prices().len(), references.len());
    assert_eq!(venue.resting_orders(), references.len());
}
