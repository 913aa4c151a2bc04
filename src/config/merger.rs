//! Merging of config documents.
//!
//! `config.local.yml` is layered over `config.yml` before deserializing:
//! mappings merge key by key, everything else in the overlay replaces the
//! base value, and an explicit `null` removes the key.

use serde_yaml::Value;

/// Merge `overlay` into `base`, recursing through mappings.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Fold documents in order; later documents take precedence.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, next| {
            deep_merge(&acc, next)
        })
}
