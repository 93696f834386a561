//! HTTP seam used by the transport.

use crate::TransportResult;
use async_trait::async_trait;
use reqwest::Client;

/// Sends a single POST and reports the response status.
///
/// Implementations return `Err` only when no response arrived.
#[async_trait]
pub trait HttpPoster: Send + Sync {
    async fn post(&self, url: &str, headers: &[(&str, String)], body: Vec<u8>)
        -> TransportResult<u16>;
}

/// `HttpPoster` backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestPoster {
    client: Client,
}

impl ReqwestPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpPoster for ReqwestPoster {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: Vec<u8>,
    ) -> TransportResult<u16> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await?;
        Ok(response.status().as_u16())
    }
}
