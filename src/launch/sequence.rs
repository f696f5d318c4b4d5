//! Default unique-token source for launch names.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::gateway::NameSequence;

/// Monotonic token source seeded from the wall clock at construction.
///
/// Tokens combine a per-process hex seed with an atomic counter, so
/// concurrent resolutions within a process never share a name and names
/// rarely collide across processes.
#[derive(Debug)]
pub struct AtomicNameSequence {
    seed: u64,
    counter: AtomicU64,
}

impl AtomicNameSequence {
    /// Creates a sequence with a fresh seed.
    #[must_use]
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos())
            });
        Self {
            seed,
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for AtomicNameSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSequence for AtomicNameSequence {
    fn next_token(&self) -> String {
        let count = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{seed:08x}{count}", seed = self.seed)
    }
}
