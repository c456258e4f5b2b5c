use tbt_parser::Parser;

use super::common::level;

#[test]
fn pair_books_are_isolated() {
    let mut parser = Parser::new([1, 2]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    parser
        .emit_orders_and_update_old_buy_book(2, &[level(200.0, 20)], 1)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap()[0].price, 100.0);
    assert_eq!(parser.buy_side(2).unwrap()[0].price, 200.0);
}

#[test]
fn seeker_bounds_isolated_per_pair() {
    let mut parser = Parser::new([1, 2]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(150.0, 10)], 1)
        .unwrap();
    parser
        .emit_orders_and_update_old_buy_book(2, &[level(50.0, 10)], 1)
        .unwrap();

    assert_eq!(parser.seeker_bounds(1).unwrap().max_bid_seen, 150.0);
    assert_eq!(parser.seeker_bounds(2).unwrap().max_bid_seen, 50.0);
}

#[test]
fn market_orders_affect_only_target_pair() {
    let mut parser = Parser::new([1, 2]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 100)], 1)
        .unwrap();
    parser
        .emit_orders_and_update_old_buy_book(2, &[level(100.0, 100)], 1)
        .unwrap();
    parser.clear_emitted_orders();

    parser
        .emit_market_order_and_update_buy_book(1, 50, 100.0, 2)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap()[0].qty, 50);
    assert_eq!(parser.buy_side(2).unwrap()[0].qty, 100);
}

#[test]
fn independent_buy_sell_sides_per_pair() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    parser
        .emit_orders_and_update_old_sell_book(1, &[level(101.0, 20)], 1)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap().len(), 1);
    assert_eq!(parser.sell_side(1).unwrap().len(), 1);
    assert_eq!(parser.buy_side(1).unwrap()[0].price, 100.0);
    assert_eq!(parser.sell_side(1).unwrap()[0].price, 101.0);
}

#[test]
fn clearing_one_pair_does_not_affect_others() {
    let mut parser = Parser::new([1, 2]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], 1)
        .unwrap();
    parser
        .emit_orders_and_update_old_buy_book(2, &[level(200.0, 20)], 1)
        .unwrap();

    parser
        .emit_orders_and_update_old_buy_book(1, &[], 2)
        .unwrap();

    assert!(parser.buy_side(1).unwrap().is_empty());
    assert_eq!(parser.buy_side(2).unwrap().len(), 1);
}
