use tbt_parser::{OrderAction, Parser};

use super::common::level;

#[test]
fn max_bid_updates_on_buy_side_higher_price() {
    let mut parser = Parser::new([1]);
    assert_eq!(parser.seeker_bounds(1).unwrap().max_bid_seen, f64::MIN);

    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    assert_eq!(parser.seeker_bounds(1).unwrap().max_bid_seen, 100.0);
}

#[test]
fn min_ask_updates_on_sell_side_lower_price() {
    let mut parser = Parser::new([1]);
    assert_eq!(parser.seeker_bounds(1).unwrap().min_ask_seen, f64::MAX);

    parser
        .emit_orders_and_update_old_sell_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    assert_eq!(parser.seeker_bounds(1).unwrap().min_ask_seen, 100.0);
}

#[test]
fn multiple_updates_track_extremes_monotonically() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    let max_bid_1 = parser.seeker_bounds(1).unwrap().max_bid_seen;
    parser.clear_emitted_orders();

    parser
        .emit_orders_and_update_old_buy_book(1, &[level(105.0, 10)], 2)
        .unwrap();
    let max_bid_2 = parser.seeker_bounds(1).unwrap().max_bid_seen;

    assert!(max_bid_2 >= max_bid_1);
    assert_eq!(max_bid_2, 105.0);
}

#[test]
fn seeker_add_emitted_for_new_higher_buy_price() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    assert_eq!(parser.emitted_orders()[0].action, OrderAction::SeekerAdd);
}

#[test]
fn seeker_add_emitted_for_new_lower_sell_price() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_sell_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    assert_eq!(parser.emitted_orders()[0].action, OrderAction::SeekerAdd);
}
