//! Whole-mapping helpers: shape inspection, concatenation, membership,
//! key sorting, printing and streaming iteration.

pub mod iterate;
pub mod print;
pub mod sort;

use mapkit_core::{Key, Mapping, Value};

use crate::clone::deep_clone;

pub use iterate::iterate_map;
pub use print::{pretty_print, write_pretty};
pub use sort::{sort_by_custom_key, sort_keys};

/// Name used by `map_type` when kinds are mixed or the mapping is empty.
pub const ANY_KIND: &str = "any";

/// Key kind and value kind of `map`.
///
/// Each side is the kind name shared by every entry, or `"any"` when the
/// entries disagree or there are none.
pub fn map_type(map: &Mapping) -> (&'static str, &'static str) {
    let mut entries = map.iter();
    let Some((first_key, first_value)) = entries.next() else {
        return (ANY_KIND, ANY_KIND);
    };

    let mut key_kind = Some(first_key.kind_name());
    let mut value_kind = Some(first_value.kind().name());
    for (key, value) in entries {
        if key_kind != Some(key.kind_name()) {
            key_kind = None;
        }
        if value_kind != Some(value.kind().name()) {
            value_kind = None;
        }
        if key_kind.is_none() && value_kind.is_none() {
            break;
        }
    }
    (key_kind.unwrap_or(ANY_KIND), value_kind.unwrap_or(ANY_KIND))
}

/// Union of two mappings; on a shared key the entry from `second` wins.
/// Values are deep-cloned, so the result shares nothing with its inputs.
pub fn concat_maps(first: &Mapping, second: &Mapping) -> Mapping {
    let mut out = Mapping::with_capacity_and_hasher(first.len() + second.len(), Default::default());
    for (key, value) in first.iter().chain(second.iter()) {
        out.insert(key.clone(), deep_clone(value));
    }
    out
}

pub fn contains_key(map: &Mapping, key: &Key) -> bool {
    map.contains_key(key)
}

pub fn is_map_empty(map: &Mapping) -> bool {
    map.is_empty()
}

/// Convenience for `Value`-typed callers: `None` if `value` is not a mapping.
pub fn value_map_type(value: &Value) -> Option<(&'static str, &'static str)> {
    value.as_mapping().map(map_type)
}
