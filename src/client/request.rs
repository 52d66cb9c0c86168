//! Outgoing request value.

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use url::Url;

/// A request travelling down the decorator chain.
///
/// Layers mutate it in place. The same value is reused by the retry layer
/// across attempts, so whatever an inner layer writes is visible to the next
/// attempt.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Target of the request. Destination selection replaces it wholesale.
    pub url: Url,
    /// Header names are case-insensitive.
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Request {
    /// Create a request with no headers and an empty body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Header value as text, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
