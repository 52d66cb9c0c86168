//! Construction-time errors for decorators.

use thiserror::Error;

/// A decorator could not be built from the given configuration.
///
/// These are raised when the layer is constructed, never while a request is
/// in flight.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Destination selection needs at least one candidate.
    #[error("destination set must contain at least one destination")]
    EmptyDestinationSet,

    /// A configured destination is not a valid absolute URL.
    #[error("invalid destination '{url}': {source}")]
    InvalidDestination {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Retry needs at least one attempt.
    #[error("retry attempts must be at least 1")]
    ZeroAttempts,

    #[error("invalid header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },

    #[error("invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}
