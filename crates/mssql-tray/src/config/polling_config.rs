use crate::config::{default_poll_interval_ms, default_probe_timeout_secs};

use serde::{Deserialize, Serialize};

/// Status polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Milliseconds between status polls.
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
    /// Hard timeout in seconds for a single engine query.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval_ms(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}
