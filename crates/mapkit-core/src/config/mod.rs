//! Configuration system for mapkit.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod clone_config;
pub mod mapkit_config;

pub use clone_config::CloneConfig;
pub use mapkit_config::MapkitConfig;
