//! Event delivery for the Journify client.
//!
//! This crate provides:
//! - Event / Context: the tracked-event envelope handed to destinations
//! - JournifyTransport: one POST per event to `{api_host}/v1/{type}`
//! - HttpPoster: the HTTP seam, with a reqwest-backed default
//!
//! Delivery is one-shot. Nothing is retried, batched or queued here.

mod config;
mod destination;
mod error;
mod event;
mod http;

pub use config::{TransportConfig, DEFAULT_API_HOST};
pub use destination::{encode_basic_token, Destination, JournifyTransport, USER_AGENT};
pub use error::{TransportError, TransportResult};
pub use event::{Context, Event, EventType};
pub use http::{HttpPoster, ReqwestPoster};
