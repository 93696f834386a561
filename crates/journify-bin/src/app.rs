//! Wiring between local identity tiers and the transport.

use journify_config_and_utils::{Config, Paths};
use journify_identity::{IdentityResolver, IdentityResolverFactory};
use journify_storage::{FileStore, MemoryStore};
use journify_transport::{Context, Destination, Event, JournifyTransport};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

/// Tiers, highest precedence first: identity file, cache file, memory.
pub fn identity_factory(paths: &Paths) -> IdentityResolverFactory {
    IdentityResolverFactory::new(
        Arc::new(FileStore::new(paths.identity_file())),
        Arc::new(FileStore::new(paths.identity_cache_file())),
        Arc::new(MemoryStore::new()),
    )
}

pub fn describe(identity: &IdentityResolver) -> Value {
    json!({
        "anonymousId": identity.anonymous_id(),
        "userId": identity.user_id(),
        "traits": identity.traits(),
    })
}

pub fn identify_event(identity: &IdentityResolver) -> Event {
    Event::identify(identity.traits().clone()).with_identity(identity)
}

pub fn track_event(
    identity: &IdentityResolver,
    name: String,
    properties: Map<String, Value>,
) -> Event {
    Event::track(name, properties).with_identity(identity)
}

pub fn page_event(
    identity: &IdentityResolver,
    name: Option<String>,
    properties: Map<String, Value>,
) -> Event {
    Event::page(name, properties).with_identity(identity)
}

/// Send one event through the Journify destination.
pub async fn deliver(config: &Config, event: Event) -> Result<(), Box<dyn std::error::Error>> {
    let transport = JournifyTransport::new(config.transport_config()?);
    let event_type = event.event_type;

    transport.dispatch(Context::new(event)).await?;
    info!(event_type = %event_type, destination = transport.name(), "Sent");
    Ok(())
}
