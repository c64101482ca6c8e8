use std::time::{Duration, Instant};

/// Wall-clock timer for a single labelled operation (transport round trips).
pub struct Telemetry {
    label: &'static str,
    start: Instant,
}

impl Telemetry {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }
}
