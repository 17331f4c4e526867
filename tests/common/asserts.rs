#![allow(dead_code)]

use super::builders::{Applied, PROCEEDED};
use bunner_cors_policy::{CorsOutcome, Headers};

/// Assert the request went on to the next handler exactly once and return
/// the response headers.
pub fn assert_proceeded(applied: Applied) -> Headers {
    assert_eq!(applied.proceed_calls, 1, "proceed should run exactly once");
    match applied.outcome {
        CorsOutcome::Proceed(result) => {
            assert_eq!(result, PROCEEDED);
            applied.response
        }
        other => panic!("expected proceed outcome, got {:?}", other),
    }
}

/// Assert the request was short-circuited and return the preflight headers
/// and status.
pub fn assert_preflight(applied: Applied) -> (Headers, u16) {
    assert_eq!(applied.proceed_calls, 0, "proceed must not run for preflight");
    match applied.outcome {
        CorsOutcome::Preflight(preflight) => {
            assert!(preflight.body().is_empty());
            (preflight.headers, preflight.status)
        }
        other => panic!("expected preflight outcome, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        headers.get(name),
        Some(expected),
        "unexpected value for header {name}"
    );
}
