//! Market-order reconciliation against the top of a mirrored book side.

use tracing::warn;

use crate::parser::numeric::safe_eq;
use crate::parser::state::BookSide;
use crate::parser::types::{EmittedOrder, OrderAction, OrderType, PairId, Price, Qty, Side, Time};

/// Consume from the top of `book` as if a market order of `qty` traded at
/// `price` against it, appending the resulting events to `emitted`.
///
/// Five cases, matching the five cases of the component design:
/// 1. empty book -> synthesize an iceberg reveal then the market fill;
/// 2. top price matches, top has more quantity than the order -> partial fill;
/// 3. top price matches, quantities equal -> exact fill, level erased;
/// 4. top price matches, order wants more than is posted -> iceberg reveal
///    for the deficit, then the fill, level erased;
/// 5. top price does not match: on the buy side this is logged and
///    otherwise ignored; on the sell side it is silently ignored (the
///    asymmetry is intentional and preserved from the source algorithm).
pub fn emit_market_order_and_update_book(
    pair: PairId,
    qty: Qty,
    price: Price,
    time: Time,
    side: Side,
    book: &mut BookSide,
    emitted: &mut Vec<EmittedOrder>,
) {
    let opposite = side.opposite();

    if book.is_empty() {
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            qty,
            side,
            OrderType::Iceberg,
            OrderAction::Add,
        ));
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            qty,
            opposite,
            OrderType::Market,
            OrderAction::Add,
        ));
        return;
    }

    let top = book.front().copied().expect("book checked non-empty above");
    if !safe_eq(top.price, price) {
        if matches!(side, Side::Buy) {
            warn!(
                pair,
                price, "market order at price with no matching liquidity on buy side"
            );
        }
        return;
    }

    let qty_difference = top.qty - qty;
    if qty_difference > 0 {
        let level = book.front_mut().expect("book checked non-empty above");
        level.qty = qty_difference;
        level.time = time;
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            qty,
            opposite,
            OrderType::Market,
            OrderAction::Add,
        ));
    } else if qty_difference == 0 {
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            qty,
            opposite,
            OrderType::Market,
            OrderAction::Add,
        ));
        book.pop_front();
    } else {
        let deficit = -qty_difference;
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            deficit,
            side,
            OrderType::Iceberg,
            OrderAction::Add,
        ));
        emitted.push(EmittedOrder::new(
            pair,
            price,
            time,
            qty,
            opposite,
            OrderType::Market,
            OrderAction::Add,
        ));
        book.pop_front();
    }
}
