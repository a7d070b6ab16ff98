//! Deep Copy Engine.
//!
//! Both variants return a value equal to the input that shares no composite
//! node with it. The sequential variant cannot fail; the concurrent variant
//! runs on a bounded pool and reports depth overruns and task panics.

pub mod concurrent;
pub mod sequential;

pub use concurrent::{deep_clone_concurrent, ParallelCloner};
pub use sequential::deep_clone;
