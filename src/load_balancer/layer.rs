//! Destination-selection layer.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use url::Url;

use crate::client::{CallContext, ExecuteResult, Executor, Request, Response, SharedExecutor};
use crate::decorator::{BuildError, Decorator};
use crate::load_balancer::{DestinationSet, SelectionStrategy};

struct SelectDestination {
    inner: SharedExecutor,
    strategy: Arc<dyn SelectionStrategy>,
    destinations: DestinationSet,
}

impl Executor for SelectDestination {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        let target = self.strategy.select(&self.destinations);
        tracing::debug!(
            destination = %target,
            candidates = self.destinations.len(),
            "Selected destination"
        );
        // The whole target is replaced; method, headers and body stay.
        request.url = target.clone();
        self.inner.execute(ctx, request)
    }
}

/// Decorator that points every request at a destination chosen by `strategy`.
///
/// Fails with [`BuildError::EmptyDestinationSet`] if `destinations` is empty.
pub fn select_destination<S, I>(strategy: S, destinations: I) -> Result<Decorator, BuildError>
where
    S: SelectionStrategy + 'static,
    I: IntoIterator<Item = Url>,
{
    Ok(select_from(strategy, DestinationSet::new(destinations)?))
}

/// Same as [`select_destination`] for an already validated set.
pub fn select_from<S>(strategy: S, destinations: DestinationSet) -> Decorator
where
    S: SelectionStrategy + 'static,
{
    let strategy: Arc<dyn SelectionStrategy> = Arc::new(strategy);
    Decorator::new("select_destination", move |inner| {
        Arc::new(SelectDestination {
            inner,
            strategy: strategy.clone(),
            destinations: destinations.clone(),
        })
    })
}
