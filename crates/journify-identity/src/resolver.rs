//! Visitor identity resolution.

use crate::{merge_traits, StoreChain, Traits};
use journify_storage::{IdentityStore, StorageKeys};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Anonymous id, user id and traits for one visitor.
///
/// Every field is written through to all tiers as soon as it is set. A value
/// found only in a lower tier is copied up to the higher ones at construction.
#[derive(Debug)]
pub struct IdentityResolver {
    stores: StoreChain,
    anonymous_id: String,
    user_id: Option<String>,
    traits: Traits,
}

impl IdentityResolver {
    /// Resolve identity from `stores`, generating an anonymous id if no tier
    /// holds one.
    pub fn new(stores: StoreChain) -> Self {
        let user_id = stores.get_string(StorageKeys::USER_ID);
        if let Some(ref id) = user_id {
            stores.set_all(StorageKeys::USER_ID, &Value::String(id.clone()));
        }

        let anonymous_id = match stores.get_string(StorageKeys::ANONYMOUS_ID) {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                info!(anonymous_id = %id, "Generated anonymous id");
                id
            }
        };
        stores.set_all(
            StorageKeys::ANONYMOUS_ID,
            &Value::String(anonymous_id.clone()),
        );

        let traits = stores
            .get_object(StorageKeys::USER_TRAITS)
            .unwrap_or_default();
        stores.set_all(StorageKeys::USER_TRAITS, &Value::Object(traits.clone()));

        debug!(
            anonymous_id = %anonymous_id,
            has_user_id = user_id.is_some(),
            trait_count = traits.len(),
            "Identity resolved"
        );

        Self {
            stores,
            anonymous_id,
            user_id,
            traits,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn anonymous_id(&self) -> &str {
        &self.anonymous_id
    }

    pub fn traits(&self) -> &Traits {
        &self.traits
    }

    /// Record who the visitor is.
    ///
    /// A non-empty `user_id` replaces the current one; `None` or an empty
    /// string keeps it. `traits` are shallow-merged over the current set and
    /// the result is persisted even when nothing was supplied.
    pub fn identify(&mut self, user_id: Option<&str>, traits: Option<Traits>) {
        if let Some(id) = user_id.filter(|id| !id.is_empty()) {
            self.user_id = Some(id.to_string());
            self.stores
                .set_all(StorageKeys::USER_ID, &Value::String(id.to_string()));
        }

        let merged = merge_traits(&self.traits, traits.unwrap_or_default());
        self.stores
            .set_all(StorageKeys::USER_TRAITS, &Value::Object(merged.clone()));
        self.traits = merged;

        debug!(
            has_user_id = self.user_id.is_some(),
            trait_count = self.traits.len(),
            "Identify applied"
        );
    }
}

/// Holds the storage tiers and hands out resolvers over them.
#[derive(Debug, Clone)]
pub struct IdentityResolverFactory {
    stores: StoreChain,
}

impl IdentityResolverFactory {
    /// Tiers are read in the order given: primary first.
    pub fn new(
        primary: Arc<dyn IdentityStore>,
        secondary: Arc<dyn IdentityStore>,
        tertiary: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            stores: StoreChain::from_tiers(primary, secondary, tertiary),
        }
    }

    pub fn with_chain(stores: StoreChain) -> Self {
        Self { stores }
    }

    pub fn new_resolver(&self) -> IdentityResolver {
        IdentityResolver::new(self.stores.clone())
    }
}
