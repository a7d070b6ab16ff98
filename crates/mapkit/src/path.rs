//! Dotted-path lookup into nested mappings.

use mapkit_core::{Key, Value};

/// Resolve `path` (keys joined by `.`) against `value`.
///
/// Returns `None` (absent) for an empty path, a non-mapping root or
/// intermediate, or a missing key. A present `Null` is `Some(&Value::Null)`.
/// Segments are looked up as string keys; `"a..b"` looks up the empty key.
pub fn lookup_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = value;
    for segment in path.split('.') {
        let map = current.as_mapping()?;
        current = map.get(&Key::String(segment.to_string()))?;
    }
    Some(current)
}
