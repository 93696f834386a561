//! Storage key constants.

/// Keys under which identity state is persisted in every tier.
pub struct StorageKeys;

impl StorageKeys {
    /// Generated anonymous visitor id
    pub const ANONYMOUS_ID: &'static str = "journifyio_anonymous_id";

    /// Host-supplied user id
    pub const USER_ID: &'static str = "journifyio_user_id";

    /// Visitor traits (JSON object)
    pub const USER_TRAITS: &'static str = "journifyio_user_traits";

    /// Every identity key, in resolution order.
    pub const ALL: [&'static str; 3] = [Self::USER_ID, Self::ANONYMOUS_ID, Self::USER_TRAITS];
}
