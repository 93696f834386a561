//! Tracked-event envelope.

use journify_identity::{IdentityResolver, Traits};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Event discriminator. Also the last path segment of the delivery URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Identify,
    Track,
    Page,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identify => "identify",
            Self::Track => "track",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked event: a `type` plus an opaque body.
///
/// The body is flattened next to `type` on the wire and is never interpreted
/// by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(flatten)]
    body: Map<String, Value>,
}

impl Event {
    pub fn new(event_type: EventType, body: Map<String, Value>) -> Self {
        let mut body = body;
        // `type` is owned by the discriminator
        body.remove("type");
        Self { event_type, body }
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Set a body field. `type` is reserved and left untouched; returns
    /// whether the field was written.
    pub fn insert_field(&mut self, key: impl Into<String>, value: Value) -> bool {
        let key = key.into();
        if key == "type" {
            return false;
        }
        self.body.insert(key, value);
        true
    }

    /// An identify event carrying `traits`.
    pub fn identify(traits: Traits) -> Self {
        let mut body = Map::new();
        body.insert("traits".to_string(), Value::Object(traits));
        Self::new(EventType::Identify, body)
    }

    /// A track event named `event`.
    pub fn track(event: impl Into<String>, properties: Map<String, Value>) -> Self {
        let mut body = Map::new();
        body.insert("event".to_string(), Value::String(event.into()));
        body.insert("properties".to_string(), Value::Object(properties));
        Self::new(EventType::Track, body)
    }

    /// A page view, optionally named.
    pub fn page(name: Option<String>, properties: Map<String, Value>) -> Self {
        let mut body = Map::new();
        if let Some(name) = name {
            body.insert("name".to_string(), Value::String(name));
        }
        body.insert("properties".to_string(), Value::Object(properties));
        Self::new(EventType::Page, body)
    }

    /// Stamp the visitor's current identity onto the body.
    ///
    /// Identify events also get the resolver's full merged trait set.
    pub fn with_identity(mut self, identity: &IdentityResolver) -> Self {
        self.body.insert(
            "anonymousId".to_string(),
            Value::String(identity.anonymous_id().to_string()),
        );
        if let Some(user_id) = identity.user_id() {
            self.body
                .insert("userId".to_string(), Value::String(user_id.to_string()));
        }
        if self.event_type == EventType::Identify {
            self.body.insert(
                "traits".to_string(),
                Value::Object(identity.traits().clone()),
            );
        }
        self
    }
}

/// Carries one event through a destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    event: Event,
}

impl Context {
    pub fn new(event: Event) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_event(self) -> Event {
        self.event
    }
}

impl From<Event> for Context {
    fn from(event: Event) -> Self {
        Self::new(event)
    }
}
