//! Deterministic key ordering.

use mapkit_core::{Key, Mapping, Value};

/// Keys of `map` in ascending order of their textual form.
///
/// Keys with the same text (`1` and `"1"`) are ordered bool < integer <
/// string, so the result never depends on hash iteration order.
pub fn sort_keys(map: &Mapping) -> Vec<&Key> {
    let mut keys: Vec<&Key> = map.keys().collect();
    keys.sort_by(|a, b| a.cmp_textual(b));
    keys
}

/// Extract one string per entry with `extractor` and return them sorted.
pub fn sort_by_custom_key<F>(map: &Mapping, extractor: F) -> Vec<String>
where
    F: Fn(&Key, &Value) -> String,
{
    let mut keys: Vec<String> = map.iter().map(|(k, v)| extractor(k, v)).collect();
    keys.sort_unstable();
    keys
}
