//! Destination selection subsystem.
//!
//! # Data Flow
//! ```text
//! Request enters the selection layer
//!     → SelectionStrategy::select(&DestinationSet)
//!         - random.rs (uniform over the set, injectable RNG)
//!         - round_robin.rs (rotate through the set)
//!     → request.url replaced by the chosen destination
//!     → inner executor
//! ```
//!
//! # Design Decisions
//! - The set is non-empty by construction, so selection cannot fail
//! - Strategy runs once per request, with no stickiness
//! - Placed inside a retry layer, every attempt selects again

pub mod destination;
pub mod layer;
pub mod random;
pub mod round_robin;

use url::Url;

pub use destination::DestinationSet;
pub use layer::{select_destination, select_from};
pub use random::UniformRandom;
pub use round_robin::RoundRobin;

/// Chooses one destination per request.
pub trait SelectionStrategy: Send + Sync {
    fn select<'a>(&self, destinations: &'a DestinationSet) -> &'a Url;
}

/// Strategy backed by a plain function or closure.
pub struct FnStrategy<F> {
    f: F,
}

/// Wrap a closure as a [`SelectionStrategy`].
pub fn strategy_fn<F>(f: F) -> FnStrategy<F>
where
    F: for<'a> Fn(&'a DestinationSet) -> &'a Url + Send + Sync,
{
    FnStrategy { f }
}

impl<F> SelectionStrategy for FnStrategy<F>
where
    F: for<'a> Fn(&'a DestinationSet) -> &'a Url + Send + Sync,
{
    fn select<'a>(&self, destinations: &'a DestinationSet) -> &'a Url {
        (self.f)(destinations)
    }
}
