//! The snapshot-to-TBT differ: the pairwise walk between a mirrored book
//! side and a fresh snapshot of the same side.

use tracing::warn;

use crate::parser::numeric::safe_eq;
use crate::parser::state::{BookSide, SeekerBounds};
use crate::parser::types::{BookLevel, EmittedOrder, OrderAction, OrderType, PairId, Price, Side, Time};

fn price_at(levels: &[BookLevel], idx: usize, sentinel: Price) -> Price {
    levels.get(idx).map(|l| l.price).unwrap_or(sentinel)
}

fn deque_price_at(book: &BookSide, idx: usize, sentinel: Price) -> Price {
    book.get(idx).map(|l| l.price).unwrap_or(sentinel)
}

/// Diff `old` against `new_book` for `side`, mutating `old` in place to
/// match `new_book` (up to the loop-end asymmetry documented on the
/// component design) and appending the produced events to `emitted`.
///
/// This is the single largest piece of the crate: see the component design
/// for the terminal cases, the buy-only top-level prelude, and the inner
/// fix-up loop's five comparison branches. Every asymmetry here (the
/// prelude being buy-only, the loop end differing by side, the front-pop
/// on an old-side surplus) is preserved intentionally, not a latent bug.
pub fn diff_and_update_book(
    pair: PairId,
    old: &mut BookSide,
    new_book: &[BookLevel],
    time: Time,
    side: Side,
    seeker: &mut SeekerBounds,
    emitted: &mut Vec<EmittedOrder>,
) {
    let sentinel = side.sentinel();

    if old.is_empty() && new_book.is_empty() {
        return;
    }

    if new_book.is_empty() {
        while let Some(level) = old.pop_back() {
            emitted.push(EmittedOrder::new(
                pair,
                level.price,
                time,
                level.qty,
                side,
                OrderType::Limit,
                OrderAction::Remove,
            ));
        }
        return;
    }

    if old.is_empty() {
        for level in new_book {
            let action = seeker.observe(side, level.price);
            old.push_back(*level);
            emitted.push(EmittedOrder::new(
                pair, level.price, time, level.qty, side, OrderType::Limit, action,
            ));
        }
        return;
    }

    // Top-level prelude: buy side only.
    if matches!(side, Side::Buy) && safe_eq(old[0].price, new_book[0].price) {
        let qty_difference = new_book[0].qty - old[0].qty;
        if qty_difference > 0 {
            emitted.push(EmittedOrder::new(
                pair,
                new_book[0].price,
                time,
                qty_difference,
                side,
                OrderType::Limit,
                OrderAction::Add,
            ));
        } else if qty_difference < 0 {
            emitted.push(EmittedOrder::new(
                pair,
                new_book[0].price,
                time,
                -qty_difference,
                side,
                OrderType::Limit,
                OrderAction::Remove,
            ));
        }
        old[0].qty = new_book[0].qty;
        old[0].time = time;
    }

    let loop_end = match side {
        Side::Buy => new_book.len(),
        Side::Sell => new_book.len().max(old.len()),
    };
    let new_len_minus_one = new_book.len().checked_sub(1);

    for i in 1..loop_end {
        let max_iterations = (old.len() + new_book.len()) * 4 + 16;
        let mut iterations_left = max_iterations;

        loop {
            if old.is_empty() || new_book.is_empty() {
                break;
            }

            let op = deque_price_at(old, i - 1, sentinel);
            let np = price_at(new_book, i - 1, sentinel);
            let oq = deque_price_at(old, i, sentinel);
            let nq = price_at(new_book, i, sentinel);

            let cur_valid = i - 1 < old.len() && new_len_minus_one.is_some_and(|m| i - 1 <= m);
            let next_valid = i < old.len() && new_len_minus_one.is_some_and(|m| i <= m);

            if side.is_better(op, np) {
                if let Some(front) = old.pop_front() {
                    emitted.push(EmittedOrder::new(
                        pair,
                        front.price,
                        time,
                        front.qty,
                        side,
                        OrderType::Limit,
                        OrderAction::Remove,
                    ));
                }
            } else if side.is_better(np, op) {
                let new_level = new_book[i - 1];
                old.insert(i - 1, new_level);
                emitted.push(EmittedOrder::new(
                    pair,
                    new_level.price,
                    time,
                    new_level.qty,
                    side,
                    OrderType::Limit,
                    OrderAction::Add,
                ));
            } else if safe_eq(op, np) {
                if cur_valid {
                    let qty_delta = new_book[i - 1].qty - old[i - 1].qty;
                    if qty_delta > 0 {
                        emitted.push(EmittedOrder::new(
                            pair,
                            op,
                            time,
                            qty_delta,
                            side,
                            OrderType::Limit,
                            OrderAction::Add,
                        ));
                    }
                    if qty_delta < 0 {
                        emitted.push(EmittedOrder::new(
                            pair,
                            op,
                            time,
                            -qty_delta,
                            side,
                            OrderType::Limit,
                            OrderAction::Remove,
                        ));
                    }
                    old[i - 1].qty = new_book[i - 1].qty;
                    old[i - 1].time = time;
                }

                if side.is_better(oq, nq) {
                    if i < old.len() {
                        let removed = old.remove(i).expect("index checked above");
                        emitted.push(EmittedOrder::new(
                            pair,
                            removed.price,
                            time,
                            removed.qty,
                            side,
                            OrderType::Limit,
                            OrderAction::Remove,
                        ));
                    }
                } else if side.is_better(nq, oq) && i <= new_book.len().saturating_sub(1) {
                    let new_level = new_book[i];
                    let action = seeker.observe(side, new_level.price);
                    old.insert(i, new_level);
                    emitted.push(EmittedOrder::new(
                        pair, new_level.price, time, new_level.qty, side, OrderType::Limit, action,
                    ));
                }

                // Nested here, not a sibling of this `else if`: a surplus
                // branch above shifts indices, so this check must not run
                // against them in the same pass.
                if safe_eq(oq, nq) && next_valid {
                    let qty_delta = new_book[i].qty - old[i].qty;
                    if qty_delta > 0 {
                        emitted.push(EmittedOrder::new(
                            pair,
                            oq,
                            time,
                            qty_delta,
                            side,
                            OrderType::Limit,
                            OrderAction::Add,
                        ));
                    }
                    if qty_delta < 0 {
                        emitted.push(EmittedOrder::new(
                            pair,
                            oq,
                            time,
                            -qty_delta,
                            side,
                            OrderType::Limit,
                            OrderAction::Remove,
                        ));
                    }
                    old[i].qty = new_book[i].qty;
                    old[i].time = time;
                }
            }

            if iterations_left == 0 {
                warn!(
                    pair,
                    old_len = old.len(),
                    new_len = new_book.len(),
                    "snapshot differ inner loop exceeded iteration guard; aborting fix-up for this level"
                );
                break;
            }
            iterations_left -= 1;

            // Checked against op/np/oq/nq as read at the top of this pass,
            // not re-read post-mutation: a pass that both mutates and
            // happens to already satisfy the pair condition still needs
            // one more pass to reconcile positions against the new layout.
            if safe_eq(op, np) && safe_eq(oq, nq) {
                break;
            }
        }
    }
}
