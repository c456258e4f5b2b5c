//! Drives a [`crate::parser::Parser`] from snapshots received over NATS,
//! publishing the resulting TBT events back onto the bus.
//!
//! Mirrors the processing loop of a simple snapshot-in/orders-out bridge:
//! decode, diff both sides, encode the accumulated events if any were
//! produced, publish, clear the buffer.

use std::fmt;

use futures_util::StreamExt;
use tracing::{error, trace, warn};

use crate::parser::Parser;
use crate::transport::{SNAPSHOTS_SUBJECT, TBT_SUBJECT};
use crate::wire::{decode_snapshot, encode_orders};

/// Errors that can occur while running the snapshot processing loop.
#[derive(Debug)]
#[non_exhaustive]
pub enum TransportError {
    Connect(async_nats::ConnectError),
    Subscribe(async_nats::SubscribeError),
    Publish(async_nats::PublishError),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(e) => write!(f, "failed to connect to NATS: {e}"),
            TransportError::Subscribe(e) => write!(f, "failed to subscribe: {e}"),
            TransportError::Publish(e) => write!(f, "failed to publish: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Subscribe to `orderbook.snapshots` and, for every received snapshot,
/// diff both sides of the named pair through `parser` and publish any
/// resulting events to `orderbook.tbt`. Runs until the subscription
/// stream ends (the connection drops or is closed).
///
/// Unknown pairs arriving on the wire are logged and skipped rather than
/// treated as a fatal error for the loop.
pub async fn run_snapshot_processor(
    parser: &mut Parser,
    client: &async_nats::Client,
) -> Result<(), TransportError> {
    let mut subscriber = client
        .subscribe(SNAPSHOTS_SUBJECT)
        .await
        .map_err(TransportError::Subscribe)?;

    while let Some(message) = subscriber.next().await {
        let decoded = match decode_snapshot(&message.payload) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(%err, "dropping malformed snapshot message");
                continue;
            }
        };

        if let Err(err) =
            parser.emit_orders_and_update_old_buy_book(decoded.pair_id, &decoded.bids, decoded.timestamp)
        {
            warn!(pair = decoded.pair_id, %err, "skipping snapshot for unknown pair");
            continue;
        }
        if let Err(err) = parser.emit_orders_and_update_old_sell_book(
            decoded.pair_id,
            &decoded.asks,
            decoded.timestamp,
        ) {
            warn!(pair = decoded.pair_id, %err, "skipping snapshot for unknown pair");
            continue;
        }

        if !parser.emitted_orders().is_empty() {
            let bytes = encode_orders(parser.emitted_orders());
            trace!(pair = decoded.pair_id, bytes = bytes.len(), "publishing TBT batch");
            if let Err(err) = client.publish(TBT_SUBJECT, bytes.into()).await {
                error!(%err, "failed to publish TBT batch");
                parser.clear_emitted_orders();
                return Err(TransportError::Publish(err));
            }
        }
        parser.clear_emitted_orders();
    }

    Ok(())
}
