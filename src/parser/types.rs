//! Scalar types and the event vocabulary.

use serde::{Deserialize, Serialize};

/// Identifier for a trading pair.
pub type PairId = i64;

/// A price, compared with tolerance via [`crate::parser::numeric::safe_eq`]
/// rather than raw equality.
pub type Price = f64;

/// A signed quantity. Negative values are accepted verbatim on input; see
/// the crate-level note on undefined arithmetic past the differ.
pub type Qty = i32;

/// A timestamp, opaque to the parser beyond being carried through events.
pub type Time = u64;

/// Which side of the book a level or order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// True iff `is_buy` prices and `a` is strictly better-ranked than `b`
    /// for this side: higher for buy, lower for sell.
    pub fn is_better(self, a: Price, b: Price) -> bool {
        match self {
            Side::Buy => a > b,
            Side::Sell => a < b,
        }
    }

    /// Sentinel price substituted for an out-of-range index in the differ's
    /// pairwise walk: the worst possible price for this side, so any real
    /// price is always "better" than it.
    pub fn sentinel(self) -> Price {
        match self {
            Side::Buy => 0.0,
            Side::Sell => f64::MAX,
        }
    }
}

/// The kind of order an emitted event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Limit,
    Market,
    Iceberg,
    Stop,
}

/// What happened to the price level an emitted event describes.
///
/// `SeekerAdd` is a variant of `Add` reserved for a level that sets a new
/// running extreme (highest bid or lowest ask ever observed for the pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderAction {
    SeekerAdd,
    Add,
    Remove,
    Modify,
}

/// One resting quantity at a price, as held in a [`crate::parser::state::BookSide`]
/// mirror or as part of an incoming snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Price,
    pub qty: Qty,
    pub time: Time,
}

impl BookLevel {
    pub fn new(price: Price, qty: Qty, time: Time) -> Self {
        BookLevel { price, qty, time }
    }
}

/// A single event describing a change to the mirrored book, emitted by the
/// differ or the market-order updater.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmittedOrder {
    pub pair: PairId,
    pub price: Price,
    pub time: Time,
    pub qty: Qty,
    pub side: Side,
    pub order_type: OrderType,
    pub action: OrderAction,
}

impl EmittedOrder {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pair: PairId,
        price: Price,
        time: Time,
        qty: Qty,
        side: Side,
        order_type: OrderType,
        action: OrderAction,
    ) -> Self {
        EmittedOrder {
            pair,
            price,
            time,
            qty,
            side,
            order_type,
            action,
        }
    }
}
