//! The core: per-pair book mirror, seeker tracker, market-order updater
//! and snapshot differ.

mod differ;
mod error;
mod market;
mod numeric;
pub mod parser;
pub mod serialization;
mod state;
mod types;

pub use error::ParserError;
pub use numeric::{safe_eq, EPSILON};
pub use parser::Parser;
pub use state::{BookSide, PairState, SeekerBounds};
pub use types::{BookLevel, EmittedOrder, OrderAction, OrderType, PairId, Price, Qty, Side, Time};
