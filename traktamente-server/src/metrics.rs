//! Prometheus metrics collection for the allowance server

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Instant;

/// Initialize all metric descriptions
pub fn init_metrics() {
    describe_counter!(
        "traktamente_requests_total",
        "Total number of allowance lookups by endpoint and outcome"
    );
    describe_histogram!(
        "traktamente_lookup_latency_seconds",
        "Allowance lookup latency in seconds"
    );
    describe_gauge!(
        "traktamente_records_loaded",
        "Number of allowance records loaded at startup"
    );
}

/// Record a finished lookup
pub fn record_lookup(endpoint: &'static str, outcome: &'static str, latency_seconds: f64) {
    counter!("traktamente_requests_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
    histogram!("traktamente_lookup_latency_seconds", "endpoint" => endpoint)
        .record(latency_seconds);
}

/// Record the size of the loaded dataset
pub fn record_dataset_size(records: usize) {
    gauge!("traktamente_records_loaded").set(records as f64);
}

/// Timer for one lookup
pub struct LookupTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LookupTimer {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Record the lookup with its outcome and return the elapsed milliseconds
    pub fn finish<T, E>(self, result: &Result<T, E>) -> f64 {
        let elapsed = self.start.elapsed().as_secs_f64();
        let outcome = if result.is_ok() { "found" } else { "error" };
        record_lookup(self.endpoint, outcome, elapsed);
        elapsed * 1000.0
    }
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Initialize Prometheus exporter
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Failed to set Prometheus handle"))?;
    Ok(())
}

/// Get Prometheus metrics string
pub fn get_prometheus_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Prometheus metrics not initialized\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_reports_elapsed_ms() {
        let timer = LookupTimer::new("list");
        let result: Result<(), ()> = Ok(());
        assert!(timer.finish(&result) >= 0.0);
    }
}
