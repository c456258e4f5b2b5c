use tbt_parser::{Parser, ParserError};

#[test]
fn constructs_with_multiple_distinct_pairs() {
    let parser = Parser::new([1, 2, 3]);
    for pair in [1, 2, 3] {
        assert!(parser.buy_side(pair).is_ok());
        assert!(parser.sell_side(pair).is_ok());
    }
}

#[test]
fn duplicate_ids_in_constructor_collapse_to_one_pair() {
    let parser = Parser::new([5, 5, 5, 5]);
    assert!(parser.buy_side(5).unwrap().is_empty());
}

#[test]
fn unknown_pair_is_unreachable_after_construction() {
    let parser = Parser::new([1]);
    match parser.buy_side(42) {
        Err(ParserError::UnknownPair(pair)) => assert_eq!(pair, 42),
        other => panic!("expected UnknownPair, got {other:?}"),
    }
}
