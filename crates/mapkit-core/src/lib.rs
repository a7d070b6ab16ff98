//! Core types for mapkit: the dynamic value model, errors, configuration,
//! tracing setup and the JSON codec.

pub mod codec;
pub mod config;
pub mod errors;
pub mod tracing;
pub mod value;

pub use codec::{json_to_map, json_to_value, map_to_json, value_to_json};
pub use config::{CloneConfig, MapkitConfig};
pub use errors::{CloneError, CodecError, ConfigError, MapkitErrorCode, RecordError};
pub use value::{Key, KeySet, Kind, Mapping, Record, RecordSchema, Value};
