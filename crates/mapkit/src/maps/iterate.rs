//! Streaming iteration over a mapping from a producer thread.

use crossbeam_channel::{bounded, Receiver};
use mapkit_core::{Key, Mapping, Value};
use tracing::trace;

/// Stream the entries of `map` through a rendezvous channel.
///
/// A producer thread sends every entry exactly once, in unspecified order,
/// then drops its sender so the receiver's iterator ends. Dropping the
/// receiver early stops the producer.
pub fn iterate_map(map: Mapping) -> Receiver<(Key, Value)> {
    let (tx, rx) = bounded(0);
    std::thread::spawn(move || {
        let total = map.len();
        let mut sent = 0usize;
        for entry in map {
            if tx.send(entry).is_err() {
                break;
            }
            sent += 1;
        }
        trace!(sent, total, "map iteration producer finished");
    });
    rx
}
