//! The `Parser`: per-pair state plus the public operations that drive the
//! market-order updater and the snapshot differ.

use std::collections::HashMap;

use tracing::info;

use crate::parser::differ::diff_and_update_book;
use crate::parser::error::ParserError;
use crate::parser::market::emit_market_order_and_update_book;
use crate::parser::state::{BookSide, PairState, SeekerBounds};
use crate::parser::types::{BookLevel, EmittedOrder, PairId, Price, Qty, Side, Time};

/// Converts order book snapshots into tick-by-tick events for a fixed set
/// of trading pairs.
///
/// Constructed with the complete set of pairs it will ever be asked about;
/// every operation naming a pair outside that set returns
/// [`ParserError::UnknownPair`]. Not internally synchronized — a caller
/// driving one `Parser` from multiple threads must externally serialize
/// access.
#[derive(Debug)]
pub struct Parser {
    pairs: HashMap<PairId, PairState>,
    emitted: Vec<EmittedOrder>,
}

impl Parser {
    /// Construct a parser tracking exactly the given pairs. Duplicate ids
    /// collapse to a single tracked pair.
    pub fn new(pair_ids: impl IntoIterator<Item = PairId>) -> Self {
        let mut pairs = HashMap::new();
        for id in pair_ids {
            pairs.entry(id).or_insert_with(PairState::new);
        }
        Parser {
            pairs,
            emitted: Vec::with_capacity(256),
        }
    }

    fn state(&self, pair: PairId) -> Result<&PairState, ParserError> {
        self.pairs.get(&pair).ok_or(ParserError::UnknownPair(pair))
    }

    /// The mirrored buy side for `pair`.
    pub fn buy_side(&self, pair: PairId) -> Result<&BookSide, ParserError> {
        Ok(&self.state(pair)?.buy)
    }

    /// The mirrored sell side for `pair`.
    pub fn sell_side(&self, pair: PairId) -> Result<&BookSide, ParserError> {
        Ok(&self.state(pair)?.sell)
    }

    /// The running seeker extremum bounds for `pair`.
    pub fn seeker_bounds(&self, pair: PairId) -> Result<&SeekerBounds, ParserError> {
        Ok(&self.state(pair)?.seeker)
    }

    /// All events emitted since construction or the last
    /// [`Parser::clear_emitted_orders`] call, in emission order.
    pub fn emitted_orders(&self) -> &[EmittedOrder] {
        &self.emitted
    }

    /// Empty the emitted-orders buffer without releasing its capacity.
    pub fn clear_emitted_orders(&mut self) {
        self.emitted.clear();
    }

    /// Reconcile a market order of `qty` at `price` against the top of the
    /// buy side of `pair`. See the market-order updater's five cases.
    pub fn emit_market_order_and_update_buy_book(
        &mut self,
        pair: PairId,
        qty: Qty,
        price: Price,
        time: Time,
    ) -> Result<(), ParserError> {
        let Parser { pairs, emitted } = self;
        let state = pairs.get_mut(&pair).ok_or(ParserError::UnknownPair(pair))?;
        emit_market_order_and_update_book(pair, qty, price, time, Side::Buy, &mut state.buy, emitted);
        Ok(())
    }

    /// Reconcile a market order of `qty` at `price` against the top of the
    /// sell side of `pair`.
    pub fn emit_market_order_and_update_sell_book(
        &mut self,
        pair: PairId,
        qty: Qty,
        price: Price,
        time: Time,
    ) -> Result<(), ParserError> {
        let Parser { pairs, emitted } = self;
        let state = pairs.get_mut(&pair).ok_or(ParserError::UnknownPair(pair))?;
        emit_market_order_and_update_book(pair, qty, price, time, Side::Sell, &mut state.sell, emitted);
        Ok(())
    }

    /// Diff the mirrored buy side of `pair` against `new_book` and mutate
    /// the mirror to match it, emitting the transition's events.
    pub fn emit_orders_and_update_old_buy_book(
        &mut self,
        pair: PairId,
        new_book: &[BookLevel],
        time: Time,
    ) -> Result<(), ParserError> {
        let Parser { pairs, emitted } = self;
        let state = pairs.get_mut(&pair).ok_or(ParserError::UnknownPair(pair))?;
        diff_and_update_book(
            pair,
            &mut state.buy,
            new_book,
            time,
            Side::Buy,
            &mut state.seeker,
            emitted,
        );
        Ok(())
    }

    /// Diff the mirrored sell side of `pair` against `new_book` and mutate
    /// the mirror to match it, emitting the transition's events.
    pub fn emit_orders_and_update_old_sell_book(
        &mut self,
        pair: PairId,
        new_book: &[BookLevel],
        time: Time,
    ) -> Result<(), ParserError> {
        let Parser { pairs, emitted } = self;
        let state = pairs.get_mut(&pair).ok_or(ParserError::UnknownPair(pair))?;
        diff_and_update_book(
            pair,
            &mut state.sell,
            new_book,
            time,
            Side::Sell,
            &mut state.seeker,
            emitted,
        );
        Ok(())
    }

    /// Log a human-readable dump of both sides of `pair`'s mirrored book
    /// at `info` level: asks worst-to-best, a spread marker, then bids
    /// best-to-worst.
    pub fn print_full_book(&self, pair: PairId) -> Result<(), ParserError> {
        let state = self.state(pair)?;
        for (idx, level) in state.sell.iter().enumerate().rev() {
            info!(pair, level = idx, price = level.price, qty = level.qty, "ask");
        }
        info!(pair, "---- spread ----");
        for (idx, level) in state.buy.iter().enumerate() {
            info!(pair, level = idx, price = level.price, qty = level.qty, "bid");
        }
        Ok(())
    }
}
