use std::time::Duration;

use crate::fetch::FetchSettings;

/// Construction-time configuration for the engine.
///
/// The endpoint URL has no default; the retry interval defaults to the
/// reference behavior of 5 seconds.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub endpoint_url: String,
    pub retry_interval: Duration,
    pub fetch: FetchSettings,
}

impl EngineConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            retry_interval: Duration::from_secs(5),
            fetch: FetchSettings::default(),
        }
    }

    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }
}
