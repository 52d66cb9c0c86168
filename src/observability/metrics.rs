//! Metrics emitted by the pipeline.
//!
//! # Metrics
//! - `hottp_attempts_total` (counter): attempts seen by retry layers, by outcome
//! - `hottp_retries_total` (counter): waits completed before a new attempt
//! - `hottp_retries_exhausted_total` (counter): calls that used every attempt

/// Record one attempt made under a retry layer.
pub fn record_attempt(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    ::metrics::counter!("hottp_attempts_total", "outcome" => outcome).increment(1);
}

/// Record a retry about to be attempted.
pub fn record_retry() {
    ::metrics::counter!("hottp_retries_total").increment(1);
}

/// Record a call that failed on its last allowed attempt.
pub fn record_exhausted() {
    ::metrics::counter!("hottp_retries_exhausted_total").increment(1);
}
