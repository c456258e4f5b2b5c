//! Packed little-endian wire formats for snapshots and order batches.
//!
//! Field layout matches the external interface exactly: a fixed-size
//! header followed by fixed-size records, every multi-byte field stored
//! little-endian. Built on `zerocopy`'s byte-order wrapper types so the
//! encode/decode path is a reinterpret over a byte buffer rather than
//! hand-rolled shifting.

mod orders;
mod snapshot;

pub use orders::{decode_orders, encode_orders, DecodedOrderBatch, WIRE_ORDER_SIZE, WIRE_ORDERS_HEADER_SIZE};
pub use snapshot::{decode_snapshot, encode_snapshot, DecodedSnapshot, WIRE_BOOK_LEVEL_SIZE, WIRE_SNAPSHOT_HEADER_SIZE};

use std::fmt;

/// Errors produced while decoding a wire buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// The buffer was shorter than the declared header.
    TruncatedHeader { expected: usize, actual: usize },
    /// The buffer was shorter than the header plus the declared record count.
    TruncatedBody { expected: usize, actual: usize },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::TruncatedHeader { expected, actual } => write!(
                f,
                "truncated wire header: expected at least {expected} bytes, got {actual}"
            ),
            WireError::TruncatedBody { expected, actual } => write!(
                f,
                "truncated wire body: expected {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for WireError {}
