use zerocopy::byteorder::little_endian::{F64, I32, I64, U16, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::parser::{BookLevel, PairId, Time};
use crate::wire::WireError;

pub const WIRE_SNAPSHOT_HEADER_SIZE: usize = 20;
pub const WIRE_BOOK_LEVEL_SIZE: usize = 12;

#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C, packed)]
struct SnapshotHeader {
    pair_id: I64,
    timestamp: U64,
    num_bids: U16,
    num_asks: U16,
}

#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned, Clone, Copy)]
#[repr(C, packed)]
struct WireLevel {
    price: F64,
    qty: I32,
}

/// A snapshot decoded from the wire format: the bid and ask levels are
/// stamped with `timestamp` as their [`BookLevel::time`].
#[derive(Debug, Clone)]
pub struct DecodedSnapshot {
    pub pair_id: PairId,
    pub timestamp: Time,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

/// Encode a snapshot: header, then bid levels, then ask levels.
pub fn encode_snapshot(
    pair_id: PairId,
    timestamp: Time,
    bids: &[BookLevel],
    asks: &[BookLevel],
) -> Vec<u8> {
    let header = SnapshotHeader {
        pair_id: I64::new(pair_id),
        timestamp: U64::new(timestamp),
        num_bids: U16::new(bids.len() as u16),
        num_asks: U16::new(asks.len() as u16),
    };

    let mut buf = Vec::with_capacity(
        WIRE_SNAPSHOT_HEADER_SIZE + (bids.len() + asks.len()) * WIRE_BOOK_LEVEL_SIZE,
    );
    buf.extend_from_slice(header.as_bytes());
    for level in bids.iter().chain(asks.iter()) {
        let wire = WireLevel {
            price: F64::new(level.price),
            qty: I32::new(level.qty),
        };
        buf.extend_from_slice(wire.as_bytes());
    }
    buf
}

/// Decode a snapshot previously produced by [`encode_snapshot`].
pub fn decode_snapshot(data: &[u8]) -> Result<DecodedSnapshot, WireError> {
    if data.len() < WIRE_SNAPSHOT_HEADER_SIZE {
        return Err(WireError::TruncatedHeader {
            expected: WIRE_SNAPSHOT_HEADER_SIZE,
            actual: data.len(),
        });
    }
    let header = SnapshotHeader::read_from_bytes(&data[..WIRE_SNAPSHOT_HEADER_SIZE])
        .expect("length checked above");

    let num_bids = header.num_bids.get() as usize;
    let num_asks = header.num_asks.get() as usize;
    let timestamp = header.timestamp.get();
    let expected_len =
        WIRE_SNAPSHOT_HEADER_SIZE + (num_bids + num_asks) * WIRE_BOOK_LEVEL_SIZE;
    if data.len() < expected_len {
        return Err(WireError::TruncatedBody {
            expected: expected_len,
            actual: data.len(),
        });
    }

    let mut offset = WIRE_SNAPSHOT_HEADER_SIZE;
    let mut read_levels = |count: usize, data: &[u8], offset: &mut usize| -> Vec<BookLevel> {
        let mut levels = Vec::with_capacity(count);
        for _ in 0..count {
            let wire = WireLevel::read_from_bytes(&data[*offset..*offset + WIRE_BOOK_LEVEL_SIZE])
                .expect("length checked above");
            levels.push(BookLevel::new(wire.price.get(), wire.qty.get(), timestamp));
            *offset += WIRE_BOOK_LEVEL_SIZE;
        }
        levels
    };

    let bids = read_levels(num_bids, data, &mut offset);
    let asks = read_levels(num_asks, data, &mut offset);

    Ok(DecodedSnapshot {
        pair_id: header.pair_id.get(),
        timestamp,
        bids,
        asks,
    })
}
