use crate::context::CorsRequest;
use crate::headers::ResponseHeaders;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::{CorsError, CorsOutcome};
use std::sync::Arc;

/// Pre-bound, cheaply cloneable form of a [`CorsPolicy`] for registering
/// with a host pipeline.
#[derive(Clone, Debug)]
pub struct CorsHandler {
    policy: Arc<CorsPolicy>,
}

impl CorsHandler {
    pub fn new(policy: impl Into<Arc<CorsPolicy>>) -> Self {
        Self {
            policy: policy.into(),
        }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Same as [`CorsPolicy::apply`].
    pub fn handle<Q, S, F, R>(
        &self,
        request: &Q,
        response: &mut S,
        proceed: F,
    ) -> Result<CorsOutcome<R>, CorsError>
    where
        Q: CorsRequest + ?Sized,
        S: ResponseHeaders + ?Sized,
        F: FnOnce() -> R,
    {
        self.policy.apply(request, response, proceed)
    }
}

impl CorsPolicy {
    pub fn into_handler(self) -> CorsHandler {
        CorsHandler::new(self)
    }
}

/// Build a bound handler from `options`.
pub fn cors(options: CorsOptions) -> CorsHandler {
    CorsPolicy::new(options).into_handler()
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
