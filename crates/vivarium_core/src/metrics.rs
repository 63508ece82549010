//! Runtime telemetry for a simulation run.
//!
//! Structured logging hooks plus a small lock-free counter block the driver
//! samples for throughput reporting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Aggregate counters for one driver process.
pub struct Metrics {
    tick_count: AtomicU64,
    creature_count: AtomicU64,
    food_count: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            creature_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, creatures: usize, food: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.creature_count.store(creatures as u64, Ordering::Relaxed);
        self.food_count.store(food as u64, Ordering::Relaxed);

        // Log at info level every 1000 ticks
        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick.is_multiple_of(1000) {
            tracing::info!(
                tick = tick,
                creatures = creatures,
                food = food,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn creature_count(&self) -> u64 {
        self.creature_count.load(Ordering::Relaxed)
    }

    /// Elapsed wall time since the metrics block was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
