use crate::constants::status;
use crate::headers::Headers;
use crate::origin::BoxError;
use thiserror::Error;

/// Terminal response for a short-circuited preflight request.
///
/// Carries only the CORS headers computed for the request and never a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub status: u16,
    pub headers: Headers,
}

impl PreflightResponse {
    pub(crate) fn new(headers: Headers) -> Self {
        Self {
            status: status::PREFLIGHT_SUCCESS,
            headers,
        }
    }

    pub fn body(&self) -> &[u8] {
        &[]
    }
}

/// Headers computed by [`crate::CorsPolicy::evaluate`] and how the request
/// should continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResponse),
    Simple { headers: Headers },
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(response) => &response.headers,
            CorsDecision::Simple { headers } => headers,
        }
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }
}

/// Result of [`crate::CorsPolicy::apply`].
#[derive(Debug)]
pub enum CorsOutcome<R> {
    /// The request was a preflight; the pipeline must stop here.
    Preflight(PreflightResponse),
    /// The continuation ran; this is its result, unchanged.
    Proceed(R),
}

impl<R> CorsOutcome<R> {
    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsOutcome::Preflight(_))
    }

    pub fn into_proceeded(self) -> Option<R> {
        match self {
            CorsOutcome::Proceed(result) => Some(result),
            CorsOutcome::Preflight(_) => None,
        }
    }
}

/// Errors that can be produced during CORS evaluation.
#[derive(Debug, Error)]
pub enum CorsError {
    /// A fallible origin predicate failed. Display and source are those of
    /// the predicate's own error.
    #[error(transparent)]
    OriginPredicate(#[from] BoxError),
}
