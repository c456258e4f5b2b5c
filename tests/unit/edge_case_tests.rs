use tbt_parser::Parser;

use super::common::{level, level_at};

#[test]
fn zero_price_level() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(0.0, 10)], 1)
        .unwrap();
    assert_eq!(parser.buy_side(1).unwrap()[0].price, 0.0);
}

#[test]
fn zero_quantity() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 0)], 1)
        .unwrap();
    assert_eq!(parser.buy_side(1).unwrap()[0].qty, 0);
}

#[test]
fn max_time_value() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level_at(100.0, 10, u64::MAX)], u64::MAX)
        .unwrap();
    assert_eq!(parser.buy_side(1).unwrap()[0].time, u64::MAX);
}

#[test]
fn large_book_with_many_levels() {
    let mut parser = Parser::new([1]);
    let book: Vec<_> = (0..100)
        .map(|i| level(200.0 - i as f64, 10 + i))
        .collect();
    parser.emit_orders_and_update_old_buy_book(1, &book, 1).unwrap();
    assert_eq!(parser.buy_side(1).unwrap().len(), 100);
}

#[test]
fn rapid_book_updates_end_with_single_level() {
    let mut parser = Parser::new([1]);
    for i in 0..100 {
        parser
            .emit_orders_and_update_old_buy_book(1, &[level(100.0 + i as f64, 10)], i as u64)
            .unwrap();
        parser.clear_emitted_orders();
    }
    assert_eq!(parser.buy_side(1).unwrap().len(), 1);
}

#[test]
fn alternating_add_remove_ends_empty() {
    let mut parser = Parser::new([1]);
    for i in 0..10 {
        parser
            .emit_orders_and_update_old_buy_book(1, &[level(100.0, 10)], i)
            .unwrap();
        parser.clear_emitted_orders();
        parser.emit_orders_and_update_old_buy_book(1, &[], i).unwrap();
        parser.clear_emitted_orders();
    }
    assert!(parser.buy_side(1).unwrap().is_empty());
}

#[test]
fn price_at_epsilon_boundary_still_matches() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 100)], 1)
        .unwrap();
    parser.clear_emitted_orders();

    parser
        .emit_market_order_and_update_buy_book(1, 75, 100.0 + 1e-5 / 2.0, 2)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap()[0].qty, 25);
}

#[test]
fn very_small_quantity_difference() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 100)], 1)
        .unwrap();
    parser.clear_emitted_orders();

    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, 99)], 2)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap()[0].qty, 99);
}

#[test]
fn price_near_double_max_accepted() {
    let mut parser = Parser::new([1]);
    let price = f64::MAX / 2.0;
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(price, 10)], 1)
        .unwrap();
    assert_eq!(parser.buy_side(1).unwrap().len(), 1);
    assert_eq!(parser.buy_side(1).unwrap()[0].price, price);
}

/// A front-surplus removal followed by an insert at the same position,
/// with a quantity-only change still pending one position over, must
/// fully reconcile within the same snapshot: the removal/insert pair
/// must not be mistaken for having already settled the trailing level.
#[test]
fn surplus_removal_and_insert_still_reconciles_next_level_quantity() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(
            1,
            &[level(110.0, 5), level(100.0, 10), level(90.0, 20)],
            1,
        )
        .unwrap();
    parser.clear_emitted_orders();

    parser
        .emit_orders_and_update_old_buy_book(1, &[level(105.0, 8), level(100.0, 12)], 2)
        .unwrap();

    let mirror = parser.buy_side(1).unwrap();
    assert_eq!(mirror[0].price, 105.0);
    assert_eq!(mirror[0].qty, 8);
    assert_eq!(mirror[1].price, 100.0);
    assert_eq!(mirror[1].qty, 12);
    assert_eq!(mirror[2].price, 90.0);
    assert_eq!(mirror[2].qty, 20);
}
