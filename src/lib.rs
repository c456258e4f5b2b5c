//! `tbt-parser` converts periodic order book snapshots into an equivalent
//! tick-by-tick (TBT) event stream.
//!
//! A [`parser::Parser`] holds, per trading pair, a mirror of the current
//! buy and sell sides plus a "seeker" extremum tracker. Feeding it a fresh
//! snapshot for a side walks the mirror against the snapshot and emits the
//! minimal set of `ADD` / `REMOVE` / `SEEKER_ADD` events that describe the
//! transition; feeding it a market order reconciles top-of-book consumption
//! and, when the order overfills the visible quantity, synthesizes the
//! iceberg event that explains the difference.
//!
//! The crate is single-threaded: a [`parser::Parser`] performs no internal
//! synchronization, and callers driving one from multiple threads must
//! externally serialize access.
//!
//! Optional features add collaborators around the core:
//!
//! - `wire` — packed little-endian encode/decode for snapshots and order
//!   batches ([`wire`]).
//! - `nats` — a NATS-backed snapshot-in/orders-out processing loop
//!   ([`transport`]).
//! - `bincode` — a binary [`parser::serialization::EventSerializer`] in
//!   addition to the always-available JSON one.

pub mod parser;
pub mod prelude;

#[cfg(feature = "wire")]
pub mod wire;

#[cfg(feature = "nats")]
pub mod transport;

pub use parser::{
    BookLevel, EmittedOrder, OrderAction, OrderType, Parser, ParserError, Price, Qty, Side,
};
