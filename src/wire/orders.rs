use std::sync::atomic::{AtomicU64, Ordering};

use zerocopy::byteorder::little_endian::{F64, I32, I64, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::parser::{EmittedOrder, OrderAction, OrderType, Side};
use crate::wire::WireError;

pub const WIRE_ORDERS_HEADER_SIZE: usize = 20;
pub const WIRE_ORDER_SIZE: usize = 40;

const WIRE_MSG_ORDERS: u8 = 1;

static PUBLISH_SEQUENCE: AtomicU64 = AtomicU64::new(1);

#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C, packed)]
struct OrdersHeader {
    msg_type: u8,
    pair_id: U32,
    sequence: U64,
    count: U32,
    reserved: [u8; 3],
}

#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned, Clone, Copy)]
#[repr(C, packed)]
struct WireOrder {
    pair_id: I64,
    price: F64,
    time: U64,
    qty: I32,
    side: I32,
    order_type: I32,
    action: I32,
}

fn side_to_i32(side: Side) -> i32 {
    match side {
        Side::Buy => 1,
        Side::Sell => 2,
    }
}

fn side_from_i32(v: i32) -> Option<Side> {
    match v {
        1 => Some(Side::Buy),
        2 => Some(Side::Sell),
        _ => None,
    }
}

fn order_type_to_i32(t: OrderType) -> i32 {
    match t {
        OrderType::Limit => 1,
        OrderType::Market => 2,
        OrderType::Iceberg => 3,
        OrderType::Stop => 4,
    }
}

fn order_type_from_i32(v: i32) -> Option<OrderType> {
    match v {
        1 => Some(OrderType::Limit),
        2 => Some(OrderType::Market),
        3 => Some(OrderType::Iceberg),
        4 => Some(OrderType::Stop),
        _ => None,
    }
}

fn action_to_i32(a: OrderAction) -> i32 {
    match a {
        OrderAction::SeekerAdd => 0,
        OrderAction::Add => 1,
        OrderAction::Remove => 2,
        OrderAction::Modify => 3,
    }
}

fn action_from_i32(v: i32) -> Option<OrderAction> {
    match v {
        0 => Some(OrderAction::SeekerAdd),
        1 => Some(OrderAction::Add),
        2 => Some(OrderAction::Remove),
        3 => Some(OrderAction::Modify),
        _ => None,
    }
}

/// A batch of orders decoded from the wire format.
#[derive(Debug, Clone)]
pub struct DecodedOrderBatch {
    pub pair_id: u32,
    pub sequence: u64,
    pub orders: Vec<EmittedOrder>,
}

/// Encode a batch of emitted orders. Assigns the next value of a
/// process-global monotonic publish sequence, starting at 1.
///
/// `orders` must be non-empty; the batch's `pair_id` header field is taken
/// (truncated to `u32`) from the first order.
pub fn encode_orders(orders: &[EmittedOrder]) -> Vec<u8> {
    assert!(!orders.is_empty(), "encode_orders requires a non-empty batch");
    let sequence = PUBLISH_SEQUENCE.fetch_add(1, Ordering::SeqCst);
    let header = OrdersHeader {
        msg_type: WIRE_MSG_ORDERS,
        pair_id: U32::new(orders[0].pair as u32),
        sequence: U64::new(sequence),
        count: U32::new(orders.len() as u32),
        reserved: [0; 3],
    };

    let mut buf = Vec::with_capacity(WIRE_ORDERS_HEADER_SIZE + orders.len() * WIRE_ORDER_SIZE);
    buf.extend_from_slice(header.as_bytes());
    for order in orders {
        let wire = WireOrder {
            pair_id: I64::new(order.pair),
            price: F64::new(order.price),
            time: U64::new(order.time),
            qty: I32::new(order.qty),
            side: I32::new(side_to_i32(order.side)),
            order_type: I32::new(order_type_to_i32(order.order_type)),
            action: I32::new(action_to_i32(order.action)),
        };
        buf.extend_from_slice(wire.as_bytes());
    }
    buf
}

/// Decode a batch of orders previously produced by [`encode_orders`].
pub fn decode_orders(data: &[u8]) -> Result<DecodedOrderBatch, WireError> {
    if data.len() < WIRE_ORDERS_HEADER_SIZE {
        return Err(WireError::TruncatedHeader {
            expected: WIRE_ORDERS_HEADER_SIZE,
            actual: data.len(),
        });
    }
    let header = OrdersHeader::read_from_bytes(&data[..WIRE_ORDERS_HEADER_SIZE])
        .expect("length checked above");

    let count = header.count.get() as usize;
    let expected_len = WIRE_ORDERS_HEADER_SIZE + count * WIRE_ORDER_SIZE;
    if data.len() < expected_len {
        return Err(WireError::TruncatedBody {
            expected: expected_len,
            actual: data.len(),
        });
    }

    let mut orders = Vec::with_capacity(count);
    let mut offset = WIRE_ORDERS_HEADER_SIZE;
    for _ in 0..count {
        let wire = WireOrder::read_from_bytes(&data[offset..offset + WIRE_ORDER_SIZE])
            .expect("length checked above");
        offset += WIRE_ORDER_SIZE;
        orders.push(EmittedOrder::new(
            wire.pair_id.get(),
            wire.price.get(),
            wire.time.get(),
            wire.qty.get(),
            side_from_i32(wire.side.get()).unwrap_or(Side::Buy),
            order_type_from_i32(wire.order_type.get()).unwrap_or(OrderType::Limit),
            action_from_i32(wire.action.get()).unwrap_or(OrderAction::Add),
        ));
    }

    Ok(DecodedOrderBatch {
        pair_id: header.pair_id.get(),
        sequence: header.sequence.get(),
        orders,
    })
}
