//! Response value returned through the chain.

use std::borrow::Cow;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response produced by the base executor.
///
/// No built-in layer rewrites it. A non-2xx status is still `Ok`; treating
/// it as a failure is up to the caller.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_success_status_is_plain_value() {
        let res = Response::new(StatusCode::SERVICE_UNAVAILABLE).with_body("busy");
        assert!(!res.is_success());
        assert_eq!(res.text(), "busy");
    }
}
