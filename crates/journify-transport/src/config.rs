//! Transport configuration.

use std::fmt;

/// Production collection API origin.
pub const DEFAULT_API_HOST: &str = "https://api.journify.io";

/// Credentials and destination for the transport.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Write key identifying the sending application.
    pub write_key: String,
    /// API origin events are posted to, without the `/v1` path.
    pub api_host: String,
}

impl TransportConfig {
    /// Config for `write_key` against the production host.
    pub fn new(write_key: impl Into<String>) -> Self {
        Self {
            write_key: write_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

// Write keys stay out of logs.
impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("write_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}
