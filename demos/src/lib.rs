//! Synthetic market data generation for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tbt_parser::{BookLevel, Qty, Time};

/// Generates sinusoidal-mid-price order book snapshots and incremental
/// updates, for exercising the differ without a live market-data feed.
pub struct SinusoidalMarketGenerator {
    base_price: f64,
    amplitude: f64,
    frequency: f64,
    noise_level: f64,
    depth: usize,
    spread_bps: f64,
    tick: Time,
    rng: StdRng,
}

impl SinusoidalMarketGenerator {
    pub fn new(base_price: f64, amplitude: f64, frequency: f64, noise_level: f64, depth: usize) -> Self {
        Self::with_spread(base_price, amplitude, frequency, noise_level, depth, 10.0)
    }

    pub fn with_spread(
        base_price: f64,
        amplitude: f64,
        frequency: f64,
        noise_level: f64,
        depth: usize,
        spread_bps: f64,
    ) -> Self {
        SinusoidalMarketGenerator {
            base_price,
            amplitude,
            frequency,
            noise_level,
            depth,
            spread_bps,
            tick: 0,
            rng: StdRng::seed_from_u64(42),
        }
    }

    pub fn get_tick(&self) -> Time {
        self.tick
    }

    fn mid_price(&mut self) -> f64 {
        let phase = self.tick as f64 * self.frequency;
        let noise = self.rng.random_range(-self.noise_level..=self.noise_level);
        self.base_price + self.amplitude * phase.sin() + noise
    }

    /// Generate a full fresh snapshot for both sides, best-first.
    pub fn generate_snapshot(&mut self) -> (Vec<BookLevel>, Vec<BookLevel>) {
        self.tick += 1;
        let mid = self.mid_price();
        let half_spread = mid * self.spread_bps / 10_000.0 / 2.0;
        let best_bid = mid - half_spread;
        let best_ask = mid + half_spread;

        let mut bids = Vec::with_capacity(self.depth);
        let mut price = best_bid;
        for _ in 0..self.depth {
            let qty = self.rng.random_range(100..=10_000) as Qty;
            bids.push(BookLevel::new(price, qty, self.tick));
            let tick_mult = 1.0 + self.rng.random_range(0.0..3.0);
            price -= tick_mult * 0.01 * mid;
        }

        let mut asks = Vec::with_capacity(self.depth);
        let mut price = best_ask;
        for _ in 0..self.depth {
            let qty = self.rng.random_range(100..=10_000) as Qty;
            asks.push(BookLevel::new(price, qty, self.tick));
            let tick_mult = 1.0 + self.rng.random_range(0.0..3.0);
            price += tick_mult * 0.01 * mid;
        }

        (bids, asks)
    }

    /// Perturb existing `bids`/`asks` in place: random quantity jitter
    /// (floored at 1) plus a shared price drift, widening or narrowing
    /// the spread depending on its random sign.
    pub fn generate_incremental_update(
        &mut self,
        bids: &mut [BookLevel],
        asks: &mut [BookLevel],
        change_rate: f64,
    ) {
        self.tick += 1;
        let drift = self.rng.random_range(-self.amplitude..=self.amplitude) * change_rate;

        for level in bids.iter_mut() {
            if self.rng.random_bool(change_rate) {
                let delta = self.rng.random_range(-500..=500);
                level.qty = (level.qty + delta).max(1);
            }
            level.price -= drift;
            level.time = self.tick;
        }
        for level in asks.iter_mut() {
            if self.rng.random_bool(change_rate) {
                let delta = self.rng.random_range(-500..=500);
                level.qty = (level.qty + delta).max(1);
            }
            level.price += drift;
            level.time = self.tick;
        }
    }
}
