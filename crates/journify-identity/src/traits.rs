//! Visitor trait maps.

use serde_json::{Map, Value};

/// Caller-defined visitor attributes. No schema is imposed.
pub type Traits = Map<String, Value>;

/// Shallow merge: keys from `incoming` replace those in `current`, every
/// other key in `current` is kept as is.
pub fn merge_traits(current: &Traits, incoming: Traits) -> Traits {
    let mut merged = current.clone();
    for (key, value) in incoming {
        merged.insert(key, value);
    }
    merged
}
