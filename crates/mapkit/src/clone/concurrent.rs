//! Fan-out deep clone.
//!
//! Every composite node allocates one placeholder slot per child, then spawns
//! one task per child inside a `rayon::scope`. Each task owns exactly one
//! `&mut` slot, so the output containers need no locking; the scope is the
//! join barrier. Tasks run on a bounded pool owned by `ParallelCloner`.
//!
//! The first failure wins: once it is recorded, tasks that have not started
//! yet return a placeholder immediately.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use mapkit_core::config::CloneConfig;
use mapkit_core::{CloneError, Key, Mapping, MapkitConfig, Record, Value};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

/// Deep clone driver with its own thread pool and depth limit.
pub struct ParallelCloner {
    pool: ThreadPool,
    max_depth: usize,
}

impl std::fmt::Debug for ParallelCloner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelCloner")
            .field("threads", &self.pool.current_num_threads())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl ParallelCloner {
    pub fn new(config: &CloneConfig) -> Result<Self, CloneError> {
        let threads = config.effective_threads();
        let max_depth = config.effective_max_depth();
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mapkit-clone-{i}"))
            .build()
            .map_err(|e| CloneError::ThreadPool {
                message: e.to_string(),
            })?;
        debug!(threads, max_depth, "built clone pool");
        Ok(Self { pool, max_depth })
    }

    pub fn from_config(config: &MapkitConfig) -> Result<Self, CloneError> {
        Self::new(&config.clone)
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Deep clone `value`, fanning out one task per child at every level.
    ///
    /// Blocks until the whole task tree has finished.
    pub fn clone_value(&self, value: &Value) -> Result<Value, CloneError> {
        let start = Instant::now();
        let ctx = CloneContext::new(self.max_depth);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.install(|| ctx.clone_node(value, 0))
        }));

        let cloned = match outcome {
            Ok(cloned) => cloned,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(%message, "clone task panicked");
                return Err(CloneError::TaskPanicked { message });
            }
        };

        if let Some(err) = ctx.failure.into_inner() {
            warn!(error = %err, "concurrent clone failed");
            return Err(err);
        }

        debug!(
            nodes = ctx.nodes.load(Ordering::Relaxed),
            duration_ms = start.elapsed().as_millis() as u64,
            "concurrent clone finished"
        );
        Ok(cloned)
    }
}

/// Concurrent deep clone on a process-wide cloner built from default config.
pub fn deep_clone_concurrent(value: &Value) -> Result<Value, CloneError> {
    static DEFAULT: OnceLock<Result<ParallelCloner, CloneError>> = OnceLock::new();
    match DEFAULT.get_or_init(|| ParallelCloner::new(&CloneConfig::default())) {
        Ok(cloner) => cloner.clone_value(value),
        Err(err) => Err(err.clone()),
    }
}

/// Per-call state shared by every task of one clone.
struct CloneContext {
    max_depth: usize,
    failure: OnceLock<CloneError>,
    nodes: AtomicUsize,
}

impl CloneContext {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            failure: OnceLock::new(),
            nodes: AtomicUsize::new(0),
        }
    }

    /// Record the first failure; later ones are dropped.
    fn fail(&self, err: CloneError) {
        let _ = self.failure.set(err);
    }

    fn failed(&self) -> bool {
        self.failure.get().is_some()
    }

    /// `depth` counts composite ancestors. Returns false once the limit is hit.
    fn enter(&self, depth: usize) -> bool {
        if depth >= self.max_depth {
            self.fail(CloneError::DepthLimitExceeded {
                limit: self.max_depth,
            });
            return false;
        }
        true
    }

    /// Clone one node. Once any task has failed the returned value is a
    /// placeholder and the caller must consult `failure`.
    fn clone_node(&self, value: &Value, depth: usize) -> Value {
        if self.failed() {
            return Value::Null;
        }
        self.nodes.fetch_add(1, Ordering::Relaxed);

        match value {
            Value::Sequence(items) => {
                if !self.enter(depth) {
                    return Value::Null;
                }
                let mut slots = vec![Value::Null; items.len()];
                self.fan_out(slots.iter_mut().zip(items.iter()), depth);
                Value::Sequence(slots)
            }
            Value::Mapping(map) => {
                if !self.enter(depth) {
                    return Value::Null;
                }
                let entries: Vec<(&Key, &Value)> = map.iter().collect();
                let mut slots = vec![Value::Null; entries.len()];
                self.fan_out(
                    slots.iter_mut().zip(entries.iter().map(|(_, child)| *child)),
                    depth,
                );
                let mut out = Mapping::with_capacity_and_hasher(entries.len(), Default::default());
                out.extend(entries.iter().map(|(key, _)| (*key).clone()).zip(slots));
                Value::Mapping(out)
            }
            Value::Record(record) => {
                if !self.enter(depth) {
                    return Value::Null;
                }
                let mut out = Record::empty(Arc::clone(record.schema()));
                self.fan_out(out.values_mut().iter_mut().zip(record.values()), depth);
                Value::Record(out)
            }
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => value.clone(),
        }
    }

    /// Spawn one task per `(slot, child)` pair and wait for all of them.
    fn fan_out<'s, 'v, I>(&self, pairs: I, depth: usize)
    where
        I: Iterator<Item = (&'s mut Value, &'v Value)> + Send,
    {
        rayon::scope(|scope| {
            for (slot, child) in pairs {
                scope.spawn(move |_| {
                    *slot = self.clone_node(child, depth + 1);
                });
            }
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
