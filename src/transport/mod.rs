//! NATS-backed snapshot-in / TBT-orders-out processing loop.

mod config;
mod nats;

pub use config::TransportConfig;
pub use nats::{run_snapshot_processor, TransportError};

pub const SNAPSHOTS_SUBJECT: &str = "orderbook.snapshots";
pub const TBT_SUBJECT: &str = "orderbook.tbt";
