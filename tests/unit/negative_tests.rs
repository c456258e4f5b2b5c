use tbt_parser::Parser;

use super::common::level;

#[test]
fn access_non_existent_pair_errors_on_every_accessor() {
    let parser = Parser::new([1]);
    assert!(parser.buy_side(999).is_err());
    assert!(parser.sell_side(999).is_err());
    assert!(parser.seeker_bounds(999).is_err());
}

#[test]
fn print_full_book_on_non_existent_pair_errors() {
    let parser = Parser::new([1]);
    assert!(parser.print_full_book(999).is_err());
}

#[test]
fn negative_quantity_is_stored_verbatim() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(100.0, -10)], 1)
        .unwrap();

    let book = parser.buy_side(1).unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(book[0].qty, -10);
}

#[test]
fn negative_price_is_accepted_as_a_valid_level() {
    let mut parser = Parser::new([1]);
    parser
        .emit_orders_and_update_old_buy_book(1, &[level(-5.0, 10)], 1)
        .unwrap();

    assert_eq!(parser.buy_side(1).unwrap()[0].price, -5.0);
}
