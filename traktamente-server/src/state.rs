//! Application state

use std::time::Instant;
use traktamente_core::AllowanceDirectory;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The allowance records, loaded once at startup
    pub directory: AllowanceDirectory,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(directory: AllowanceDirectory) -> Self {
        Self {
            directory,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
