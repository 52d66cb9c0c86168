//! Basic-Auth authorization layer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION};

use crate::decorator::header::header_decorator;
use crate::decorator::{BuildError, Decorator};

/// `Basic <base64(username:password)>` with the standard padded alphabet.
pub fn basic_auth_value(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Decorator that sets `Authorization` to Basic-Auth credentials.
///
/// The value is computed once here and reused for every request. It is
/// marked sensitive so it stays out of `Debug` output.
pub fn authorization(username: &str, password: &str) -> Result<Decorator, BuildError> {
    let mut value = HeaderValue::from_str(&basic_auth_value(username, password)).map_err(
        |source| BuildError::InvalidHeaderValue {
            name: AUTHORIZATION.as_str().to_string(),
            source,
        },
    )?;
    value.set_sensitive(true);
    Ok(header_decorator("authorization", AUTHORIZATION, value))
}
