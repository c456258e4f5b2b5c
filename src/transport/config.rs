//! Environment-derived transport configuration.

const DEFAULT_NATS_URL: &str = "nats://localhost:4222";

/// Connection configuration for the NATS transport, read from the
/// environment at process startup.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub nats_url: String,
}

impl TransportConfig {
    /// Read `NATS_URL` from the environment, defaulting to
    /// `nats://localhost:4222` when unset.
    pub fn from_env() -> Self {
        TransportConfig {
            nats_url: std::env::var("NATS_URL").unwrap_or_else(|_| DEFAULT_NATS_URL.to_string()),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            nats_url: DEFAULT_NATS_URL.to_string(),
        }
    }
}
