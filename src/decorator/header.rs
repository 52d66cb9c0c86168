//! Header-injection layer.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use http::header::{HeaderName, HeaderValue};

use crate::client::{CallContext, ExecuteResult, Executor, Request, Response, SharedExecutor};
use crate::decorator::{BuildError, Decorator};

/// Sets one header on every request, then delegates.
struct SetHeader {
    inner: SharedExecutor,
    name: HeaderName,
    value: HeaderValue,
}

impl Executor for SetHeader {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        // `insert` drops every earlier value under this name.
        request.headers.insert(self.name.clone(), self.value.clone());
        self.inner.execute(ctx, request)
    }
}

/// Decorator that sets header `name` to `value`, overwriting prior values.
///
/// Fails if the name or value is not a valid HTTP header.
pub fn set_header(name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Decorator, BuildError> {
    let name = name.as_ref();
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|source| BuildError::InvalidHeaderName {
            name: name.to_string(),
            source,
        })?;
    let header_value =
        HeaderValue::from_str(value.as_ref()).map_err(|source| BuildError::InvalidHeaderValue {
            name: name.to_string(),
            source,
        })?;
    Ok(set_header_value(header_name, header_value))
}

/// Typed variant of [`set_header`]; cannot fail.
pub fn set_header_value(name: HeaderName, value: HeaderValue) -> Decorator {
    header_decorator("set_header", name, value)
}

pub(crate) fn header_decorator(
    label: &'static str,
    name: HeaderName,
    value: HeaderValue,
) -> Decorator {
    Decorator::new(label, move |inner| {
        Arc::new(SetHeader {
            inner,
            name: name.clone(),
            value: value.clone(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::ScriptedExecutor;
    use crate::client::ExecuteError;
    use crate::decorator::decorate;

    #[tokio::test]
    async fn test_sets_absent_header() {
        let base = ScriptedExecutor::succeeding();
        let client = decorate(base.clone(), [set_header("X-Api-Version", "2").unwrap()]);

        let mut req = Request::get("http://a.test".parse().unwrap());
        client.execute(&CallContext::new(), &mut req).await.unwrap();

        assert_eq!(base.requests()[0].header("x-api-version"), Some("2"));
        // The caller's request carries the mutation too.
        assert_eq!(req.header("X-API-VERSION"), Some("2"));
    }

    #[tokio::test]
    async fn test_overwrites_every_prior_value() {
        let base = ScriptedExecutor::succeeding();
        let client = decorate(base.clone(), [set_header("accept", "application/json").unwrap()]);

        let mut req = Request::get("http://a.test".parse().unwrap());
        req.headers.append("Accept", HeaderValue::from_static("text/html"));
        req.headers.append("accept", HeaderValue::from_static("text/plain"));
        client.execute(&CallContext::new(), &mut req).await.unwrap();

        let seen = &base.requests()[0];
        let values: Vec<_> = seen.headers.get_all("accept").iter().cloned().collect();
        assert_eq!(values, vec![HeaderValue::from_static("application/json")]);
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let base = ScriptedExecutor::always_failing();
        let client = decorate(base.clone(), [set_header("x-a", "1").unwrap()]);

        let mut req = Request::get("http://a.test".parse().unwrap());
        let err = client.execute(&CallContext::new(), &mut req).await.unwrap_err();
        assert!(matches!(err, ExecuteError::Transport(_)));
        assert_eq!(err.to_string(), "transport error: attempt 1 failed");
    }

    #[test]
    fn test_invalid_header_rejected_at_construction() {
        assert!(matches!(
            set_header("bad header", "v"),
            Err(BuildError::InvalidHeaderName { .. })
        ));
        assert!(matches!(
            set_header("x-ok", "line\nbreak"),
            Err(BuildError::InvalidHeaderValue { .. })
        ));
    }
}
