//! Visitor identity for the Journify client.
//!
//! This crate provides:
//! - StoreChain: precedence-ordered tiers with first-present reads and
//!   write-through to every tier
//! - IdentityResolver: anonymous id, user id and traits recovered from the
//!   chain at construction and mutated through `identify`
//! - IdentityResolverFactory: holds the tiers and yields resolvers

mod chain;
mod resolver;
mod traits;

pub use chain::StoreChain;
pub use resolver::{IdentityResolver, IdentityResolverFactory};
pub use traits::{merge_traits, Traits};
