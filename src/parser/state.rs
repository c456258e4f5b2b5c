//! Per-pair state: the book-side mirror and the seeker extremum tracker.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use crate::parser::types::{BookLevel, OrderAction, Price, Side};

/// A price-ordered mirror of one side of a book, best-of-side at the front.
///
/// Backed by a [`VecDeque`] for O(1) push/pop at either end and O(n)
/// positional insert/erase, which is what the differ's pairwise walk needs.
#[derive(Debug, Clone, Default)]
pub struct BookSide(VecDeque<BookLevel>);

impl BookSide {
    pub fn new() -> Self {
        BookSide(VecDeque::new())
    }
}

impl Deref for BookSide {
    type Target = VecDeque<BookLevel>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for BookSide {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Running extremum tracker used to distinguish an ordinary refill from a
/// level that reaches a new best-ever price for its side.
#[derive(Debug, Clone, Copy)]
pub struct SeekerBounds {
    pub max_bid_seen: Price,
    pub min_ask_seen: Price,
}

impl Default for SeekerBounds {
    fn default() -> Self {
        SeekerBounds {
            max_bid_seen: f64::MIN,
            min_ask_seen: f64::MAX,
        }
    }
}

impl SeekerBounds {
    /// Record an observed price for `side`, returning the action that
    /// should be emitted for a newly inserted level at that price:
    /// `SeekerAdd` if it sets a new extreme (and the bound is updated
    /// accordingly), `Add` otherwise.
    pub fn observe(&mut self, side: Side, price: Price) -> OrderAction {
        match side {
            Side::Buy => {
                if price > self.max_bid_seen {
                    self.max_bid_seen = price;
                    OrderAction::SeekerAdd
                } else {
                    OrderAction::Add
                }
            }
            Side::Sell => {
                if price < self.min_ask_seen {
                    self.min_ask_seen = price;
                    OrderAction::SeekerAdd
                } else {
                    OrderAction::Add
                }
            }
        }
    }
}

/// The full mirrored state for one trading pair.
#[derive(Debug, Clone, Default)]
pub struct PairState {
    pub buy: BookSide,
    pub sell: BookSide,
    pub seeker: SeekerBounds,
}

impl PairState {
    pub fn new() -> Self {
        PairState::default()
    }

    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.buy,
            Side::Sell => &mut self.sell,
        }
    }
}
