/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/

//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types, traits, and functions from the `tbt-parser` crate. Instead of
//! importing each type individually, you can use:
//!
//! ```rust
//! use tbt_parser::prelude::*;
//! ```

pub use crate::parser::{
    safe_eq, BookLevel, BookSide, EmittedOrder, OrderAction, OrderType, PairId, PairState, Parser,
    ParserError, Price, Qty, SeekerBounds, Side, Time, EPSILON,
};

pub use crate::parser::serialization::{EventSerializer, JsonEventSerializer};

#[cfg(feature = "bincode")]
pub use crate::parser::serialization::BincodeEventSerializer;

#[cfg(feature = "wire")]
pub use crate::wire::{
    decode_orders, decode_snapshot, encode_orders, encode_snapshot, WireError,
};

#[cfg(feature = "nats")]
pub use crate::transport::{run_snapshot_processor, TransportConfig, TransportError};
