use criterion::Criterion;
use kind_error::sentry::{KindSentryError, SentryData};
use kind_error::{AnyError, Errors, KindError, KindErrorOptions, PlainError};
use serde_json::json;
use std::time::Duration;

// ============================================================================
// Fixtures
// ============================================================================

/// Fixed frames so construction cost does not depend on the bench harness stack.
pub fn frames(depth: usize) -> Vec<String> {
    (0..depth).map(|i| format!("at service::layer_{i} (src/layer_{i}.rs:{i}:5)")).collect()
}

pub fn sentry_data(i: usize) -> SentryData {
    SentryData::default()
        .with_tag(format!("layer_{i}"), format!("value {i}"))
        .with_tag("region", "ap-northeast-2")
        .with_context(format!("layer_{i}"), json!({"depth": i, "retry": i % 3}))
        .with_fingerprint([format!("layer-{}", i % 4)])
}

/// Builds a chain of `depth` kinded errors over a plain root cause.
///
/// Every other layer carries Sentry data.
pub fn chain(depth: usize) -> AnyError {
    let mut current: AnyError = PlainError::new("connection reset by peer")
        .with_stack("Error: connection reset by peer\n    at net::read\n    at service::layer_0")
        .into();

    for i in 0..depth {
        let options = KindErrorOptions::default()
            .stack_frames(frames(8))
            .cause(current)
            .composite_stack(true);
        current = if i % 2 == 0 {
            KindSentryError::new(
                format!("layer {i} failed"),
                Errors::TRANSIENT_SERVICE,
                options,
                sentry_data(i),
            )
            .map(AnyError::from)
            .unwrap_or_else(|err| err.into())
        } else {
            KindError::new(format!("layer {i} failed"), Errors::INTERNAL, options)
                .map(AnyError::from)
                .unwrap_or_else(|err| err.into())
        };
    }
    current
}

// ============================================================================
// Criterion configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
