//! Three-phase benchmark: per-message publish latency percentiles, flood
//! throughput, and full generate+diff+encode+publish pipeline throughput.
//!
//! Usage: `benchmark [duration_sec] [depth] [latency_rounds]`
//! (defaults: 5, 20, 10000).

use std::time::{Duration, Instant};

use demos::SinusoidalMarketGenerator;
use hdrhistogram::Histogram;
use tbt_parser::transport::TransportConfig;
use tbt_parser::wire::encode_orders;
use tbt_parser::Parser;

const LATENCY_SUBJECT: &str = "bench.lat";
const THROUGHPUT_SUBJECT: &str = "bench.tp";
const PIPELINE_SUBJECT: &str = "bench.pipe";

fn parse_args() -> (u64, usize, u64) {
    let args: Vec<String> = std::env::args().collect();
    let duration_sec = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
    let depth = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);
    let latency_rounds = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    (duration_sec, depth, latency_rounds)
}

async fn phase_latency(client: &async_nats::Client, depth: usize, rounds: u64) {
    println!("-- Phase 1: latency ({rounds} rounds, depth {depth}) --");
    let mut gen = SinusoidalMarketGenerator::new(100.0, 5.0, 0.001, 0.5, depth);
    let mut parser = Parser::new([1]);
    let mut histogram = Histogram::<u64>::new(3).expect("valid histogram config");

    for _ in 0..rounds {
        let (bids, asks) = gen.generate_snapshot();
        let start = Instant::now();
        let _ = parser.emit_orders_and_update_old_buy_book(1, &bids, gen.get_tick());
        let _ = parser.emit_orders_and_update_old_sell_book(1, &asks, gen.get_tick());
        if !parser.emitted_orders().is_empty() {
            let bytes = encode_orders(parser.emitted_orders());
            let _ = client.publish(LATENCY_SUBJECT, bytes.into()).await;
            let _ = client.flush().await;
        }
        let micros = start.elapsed().as_micros() as u64;
        let _ = histogram.record(micros);
        parser.clear_emitted_orders();
    }

    println!("samples={}", histogram.len());
    println!("min={}us", histogram.min());
    println!("p50={}us", histogram.value_at_quantile(0.50));
    println!("p95={}us", histogram.value_at_quantile(0.95));
    println!("p99={}us", histogram.value_at_quantile(0.99));
    println!("max={}us", histogram.max());
}

async fn phase_throughput(client: &async_nats::Client, depth: usize, duration_sec: u64) {
    println!("-- Phase 2: flood throughput ({duration_sec}s) --");
    let mut gen = SinusoidalMarketGenerator::new(100.0, 5.0, 0.001, 0.5, depth);
    let mut parser = Parser::new([1]);

    let mut batch = Vec::with_capacity(1000);
    while batch.len() < 1000 {
        let (bids, asks) = gen.generate_snapshot();
        let _ = parser.emit_orders_and_update_old_buy_book(1, &bids, gen.get_tick());
        let _ = parser.emit_orders_and_update_old_sell_book(1, &asks, gen.get_tick());
        if !parser.emitted_orders().is_empty() {
            batch.push(encode_orders(parser.emitted_orders()));
        }
        parser.clear_emitted_orders();
    }

    let total_bytes: usize = batch.iter().map(Vec::len).sum();
    let deadline = Instant::now() + Duration::from_secs(duration_sec);
    let mut published = 0u64;
    let mut bytes_sent = 0u64;
    let start = Instant::now();
    let mut idx = 0;
    while Instant::now() < deadline {
        let msg = &batch[idx % batch.len()];
        if client
            .publish(THROUGHPUT_SUBJECT, msg.clone().into())
            .await
            .is_ok()
        {
            published += 1;
            bytes_sent += msg.len() as u64;
        }
        idx += 1;
    }
    let _ = client.flush().await;
    report_throughput(published, bytes_sent, start.elapsed(), total_bytes / batch.len());
}

async fn phase_pipeline(client: &async_nats::Client, depth: usize, duration_sec: u64) {
    println!("-- Phase 3: full pipeline throughput ({duration_sec}s) --");
    let mut gen = SinusoidalMarketGenerator::new(100.0, 5.0, 0.001, 0.5, depth);
    let mut parser = Parser::new([1]);

    let deadline = Instant::now() + Duration::from_secs(duration_sec);
    let mut published = 0u64;
    let mut bytes_sent = 0u64;
    let start = Instant::now();
    while Instant::now() < deadline {
        let (bids, asks) = gen.generate_snapshot();
        let _ = parser.emit_orders_and_update_old_buy_book(1, &bids, gen.get_tick());
        let _ = parser.emit_orders_and_update_old_sell_book(1, &asks, gen.get_tick());
        if !parser.emitted_orders().is_empty() {
            let bytes = encode_orders(parser.emitted_orders());
            if client
                .publish(PIPELINE_SUBJECT, bytes.clone().into())
                .await
                .is_ok()
            {
                published += 1;
                bytes_sent += bytes.len() as u64;
            }
        }
        parser.clear_emitted_orders();
    }
    let _ = client.flush().await;
    report_throughput(published, bytes_sent, start.elapsed(), 0);
}

fn report_throughput(published: u64, bytes_sent: u64, elapsed: Duration, avg_msg_bytes: usize) {
    let secs = elapsed.as_secs_f64().max(1e-9);
    println!("published={published}");
    if avg_msg_bytes > 0 {
        println!("avg_msg_bytes={avg_msg_bytes}");
    }
    println!("duration={secs:.3}s");
    println!("pub_ops_per_sec={:.0}", published as f64 / secs);
    println!("pub_mb_per_sec={:.3}", (bytes_sent as f64 / 1_000_000.0) / secs);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let (duration_sec, depth, latency_rounds) = parse_args();

    let config = TransportConfig::from_env();
    let client = async_nats::connect(&config.nats_url).await?;

    phase_latency(&client, depth, latency_rounds).await;
    phase_throughput(&client, depth, duration_sec).await;
    phase_pipeline(&client, depth, duration_sec).await;

    Ok(())
}
