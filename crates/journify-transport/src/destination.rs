//! Journify collection API destination.

use crate::{
    Context, EventType, HttpPoster, ReqwestPoster, TransportConfig, TransportError,
    TransportResult,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{debug, info, warn};

/// Client identifier sent with every request.
pub const USER_AGENT: &str = "analytics-node-next/latest";

/// `Basic` authorization value for a write key.
pub fn encode_basic_token(write_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(write_key))
}

/// Somewhere tracked events can be delivered.
///
/// Each entry point hands back the context on success so a pipeline can
/// chain destinations.
#[async_trait]
pub trait Destination: Send + Sync {
    fn name(&self) -> &str;

    async fn identify(&self, ctx: Context) -> TransportResult<Context>;

    async fn track(&self, ctx: Context) -> TransportResult<Context>;

    async fn page(&self, ctx: Context) -> TransportResult<Context>;

    /// Route `ctx` to the entry point matching its event type.
    async fn dispatch(&self, ctx: Context) -> TransportResult<Context> {
        match ctx.event().event_type {
            EventType::Identify => self.identify(ctx).await,
            EventType::Track => self.track(ctx).await,
            EventType::Page => self.page(ctx).await,
        }
    }
}

/// Posts each event to `{api_host}/v1/{type}`.
pub struct JournifyTransport<P = ReqwestPoster> {
    config: TransportConfig,
    poster: P,
}

impl JournifyTransport<ReqwestPoster> {
    pub fn new(config: TransportConfig) -> Self {
        Self::with_poster(config, ReqwestPoster::new())
    }
}

impl<P: HttpPoster> JournifyTransport<P> {
    pub fn with_poster(config: TransportConfig, poster: P) -> Self {
        Self { config, poster }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Delivery URL for an event type.
    pub fn event_url(&self, event_type: EventType) -> String {
        format!(
            "{}/v1/{}",
            self.config.api_host.trim_end_matches('/'),
            event_type
        )
    }

    /// Post the context's event once.
    ///
    /// Returns the context untouched on a 2xx response, `Delivery` on any
    /// other status, `Network` when no response arrived.
    pub async fn send(&self, ctx: Context) -> TransportResult<Context> {
        let event = ctx.event();
        let url = self.event_url(event.event_type);
        let body = serde_json::to_vec(event)?;

        let headers = [
            ("Content-Type", "application/json".to_string()),
            ("User-Agent", USER_AGENT.to_string()),
            ("Authorization", encode_basic_token(&self.config.write_key)),
        ];

        debug!(
            url = %url,
            event_type = %event.event_type,
            bytes = body.len(),
            "Sending event"
        );

        let status = self.poster.post(&url, &headers, body).await?;
        if !(200..300).contains(&status) {
            warn!(url = %url, status = status, "Event rejected");
            return Err(TransportError::Delivery { url, status });
        }

        info!(url = %url, status = status, "Event delivered");
        Ok(ctx)
    }
}

#[async_trait]
impl<P: HttpPoster> Destination for JournifyTransport<P> {
    fn name(&self) -> &str {
        "Journify"
    }

    async fn identify(&self, ctx: Context) -> TransportResult<Context> {
        self.send(ctx).await
    }

    async fn track(&self, ctx: Context) -> TransportResult<Context> {
        self.send(ctx).await
    }

    async fn page(&self, ctx: Context) -> TransportResult<Context> {
        self.send(ctx).await
    }
}
