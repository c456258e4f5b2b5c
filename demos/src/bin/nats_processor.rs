//! Connects to NATS, subscribes to `orderbook.snapshots`, diffs each
//! incoming snapshot through a [`tbt_parser::Parser`], and republishes the
//! resulting TBT events on `orderbook.tbt`.

use tbt_parser::transport::{run_snapshot_processor, TransportConfig};
use tbt_parser::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = TransportConfig::from_env();
    tracing::info!(nats_url = %config.nats_url, "connecting to NATS");
    let client = async_nats::connect(&config.nats_url).await?;

    // Pairs are discovered lazily in a real deployment; for this demo we
    // track a small fixed set matching the benchmark generator.
    let mut parser = Parser::new([1, 2]);

    run_snapshot_processor(&mut parser, &client).await?;
    Ok(())
}
