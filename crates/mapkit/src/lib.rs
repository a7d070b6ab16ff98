//! Map utilities over mapkit's dynamic value model.
//!
//! - `clone`: sequential and fan-out deep clone
//! - `compare`: order-independent structural equality
//! - `path`: dotted-path lookup into nested mappings
//! - `maps`: concatenation, membership, key sorting, printing, iteration

pub mod clone;
pub mod compare;
pub mod maps;
pub mod path;

pub use clone::{deep_clone, deep_clone_concurrent, ParallelCloner};
pub use compare::deep_equal;
pub use maps::{
    concat_maps, contains_key, is_map_empty, iterate_map, map_type, pretty_print,
    sort_by_custom_key, sort_keys, write_pretty,
};
pub use path::lookup_path;

pub use mapkit_core::{
    json_to_map, json_to_value, map_to_json, value_to_json, CloneConfig, CloneError, CodecError,
    Key, KeySet, Kind, Mapping, MapkitConfig, Record, RecordSchema, Value,
};
