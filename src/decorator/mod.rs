//! Decorator chain engine.
//!
//! # Data Flow
//! ```text
//! decorate(base, [d1, d2, d3])
//!     → d1(base)      innermost, last to see the request
//!     → d2(d1(base))
//!     → d3(d2(d1(base)))  outermost, first to see the request
//! ```
//!
//! # Design Decisions
//! - A decorator is a value, `SharedExecutor -> SharedExecutor`
//! - Wrapping never mutates the wrapped executor
//! - The first decorator in the list is innermost. This is the reverse of
//!   `tower::ServiceBuilder`, where the first layer added is outermost
//! - Composition cannot fail; all validation happens when a decorator is built

pub mod auth;
pub mod error;
pub mod header;
pub mod logging;

use std::fmt;
use std::sync::Arc;

use crate::client::SharedExecutor;

pub use auth::{authorization, basic_auth_value};
pub use error::BuildError;
pub use header::{set_header, set_header_value};
pub use logging::{logging, RequestLogger, StandardLogger, VerboseLogger};

type WrapFn = dyn Fn(SharedExecutor) -> SharedExecutor + Send + Sync;

/// Transforms one executor into another that adds behavior around it.
#[derive(Clone)]
pub struct Decorator {
    name: &'static str,
    wrap: Arc<WrapFn>,
}

impl Decorator {
    /// Create a decorator from a wrapping function.
    ///
    /// `name` only shows up in logs and `Debug` output.
    pub fn new<F>(name: &'static str, wrap: F) -> Self
    where
        F: Fn(SharedExecutor) -> SharedExecutor + Send + Sync + 'static,
    {
        Self {
            name,
            wrap: Arc::new(wrap),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wrap `inner`, returning the decorated executor.
    pub fn apply(&self, inner: SharedExecutor) -> SharedExecutor {
        (self.wrap)(inner)
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator").field("name", &self.name).finish()
    }
}

/// Apply `decorators` to `base` in order, each wrapping the previous result.
///
/// The first decorator ends up innermost and the last outermost. An empty
/// list returns `base` itself.
pub fn decorate<I>(base: SharedExecutor, decorators: I) -> SharedExecutor
where
    I: IntoIterator<Item = Decorator>,
{
    decorators.into_iter().fold(base, |inner, decorator| {
        tracing::trace!(layer = decorator.name(), "Applying decorator");
        decorator.apply(inner)
    })
}

/// Ordered list of decorators, applied innermost first.
#[derive(Debug, Clone, Default)]
pub struct DecoratorChain {
    decorators: Vec<Decorator>,
}

impl DecoratorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decorator outside every decorator added so far.
    pub fn layer(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Layer names, innermost first.
    pub fn names(&self) -> Vec<&'static str> {
        self.decorators.iter().map(Decorator::name).collect()
    }

    /// Compose the chain around `base`.
    pub fn build(self, base: SharedExecutor) -> SharedExecutor {
        decorate(base, self.decorators)
    }
}

impl FromIterator<Decorator> for DecoratorChain {
    fn from_iter<T: IntoIterator<Item = Decorator>>(iter: T) -> Self {
        Self {
            decorators: iter.into_iter().collect(),
        }
    }
}

impl Extend<Decorator> for DecoratorChain {
    fn extend<T: IntoIterator<Item = Decorator>>(&mut self, iter: T) {
        self.decorators.extend(iter);
    }
}
