//! Concurrent clone configuration.

use serde::{Deserialize, Serialize};

/// Default nesting limit for the concurrent clone.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for the concurrent deep clone.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CloneConfig {
    /// Worker threads in the clone pool. Default: number of CPUs.
    pub threads: Option<usize>,
    /// Maximum nesting depth before the clone fails. Default: 512.
    pub max_depth: Option<usize>,
}

impl CloneConfig {
    /// Returns the effective thread count, defaulting to the CPU count.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    /// Returns the effective depth limit, defaulting to 512.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
