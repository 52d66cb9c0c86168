//! Round-robin selection.

use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use crate::load_balancer::{DestinationSet, SelectionStrategy};

/// Round-robin selector.
/// Stores an internal counter to rotate through destinations.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for RoundRobin {
    fn select<'a>(&self, destinations: &'a DestinationSet) -> &'a Url {
        let index = self.counter.fetch_add(1, Ordering::Relaxed) % destinations.len();
        &destinations.as_slice()[index]
    }
}
