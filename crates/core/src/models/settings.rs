use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dashboard configuration. All timing constants flow from here so tests
/// and embedders can shrink them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the dashboard backend (e.g., "http://localhost:8000").
    pub api_base_url: String,

    /// Fixed delay between poll attempts, measured from the completion of
    /// one attempt to the start of the next.
    pub poll_interval_ms: u64,

    /// Quiet window after a keystroke before a symbol lookup fires.
    pub suggestion_debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            poll_interval_ms: 20_000,
            suggestion_debounce_ms: 300,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn suggestion_debounce(&self) -> Duration {
        Duration::from_millis(self.suggestion_debounce_ms)
    }
}
