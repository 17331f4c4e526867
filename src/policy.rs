use crate::config::CorsConfig;
use crate::constants::{WILDCARD, header, method};
use crate::context::CorsRequest;
use crate::headers::{Headers, ResponseHeaders};
use crate::options::CorsOptions;
use crate::result::{CorsDecision, CorsError, CorsOutcome, PreflightResponse};
use tracing::{debug, trace};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// A policy is immutable once built and can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    /// Build a policy from an optional partial configuration, filling any
    /// missing field from the defaults.
    pub fn from_config(config: Option<CorsConfig>) -> Self {
        Self::new(config.map(CorsOptions::from).unwrap_or_default())
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Compute the CORS headers for `request` and classify it.
    pub fn evaluate<Q>(&self, request: &Q) -> Result<CorsDecision, CorsError>
    where
        Q: CorsRequest + ?Sized,
    {
        let mut headers = Headers::with_capacity(6);
        self.build_origin_headers(request, &mut headers)?;
        self.build_methods_header(&mut headers);
        self.build_allowed_headers(&mut headers);
        self.build_max_age_header(&mut headers);
        self.build_exposed_headers(&mut headers);

        if request.method() == method::OPTIONS {
            Ok(CorsDecision::Preflight(PreflightResponse::new(headers)))
        } else {
            Ok(CorsDecision::Simple { headers })
        }
    }

    /// Write the CORS headers for `request` into `response`, then either
    /// end a preflight request or hand over to `proceed`.
    ///
    /// `proceed` runs at most once and only for non-`OPTIONS` requests. For
    /// preflight requests the returned [`PreflightResponse`] holds exactly
    /// the CORS headers that were written.
    pub fn apply<Q, S, F, R>(
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
        let decision = self.evaluate(request)?;
        decision.headers().write_to(response);

        match decision {
            CorsDecision::Preflight(preflight) => {
                debug!(
                    status = preflight.status,
                    headers = preflight.headers.len(),
                    "cors preflight ended"
                );
                Ok(CorsOutcome::Preflight(preflight))
            }
            CorsDecision::Simple { .. } => Ok(CorsOutcome::Proceed(proceed())),
        }
    }

    fn build_origin_headers<Q>(&self, request: &Q, headers: &mut Headers) -> Result<(), CorsError>
    where
        Q: CorsRequest + ?Sized,
    {
        let request_origin = request.origin();
        let decision = self.options.origin.resolve(request_origin).map_err(|err| {
            debug!(origin = request_origin, error = %err, "cors origin predicate failed");
            CorsError::from(err)
        })?;
        trace!(origin = request_origin, ?decision, "cors origin resolved");

        let Some(allowed_origin) = decision.allowed_origin(request_origin) else {
            return Ok(());
        };

        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin);
        if self.options.credentials && allowed_origin != WILDCARD {
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }

        Ok(())
    }

    fn build_methods_header(&self, headers: &mut Headers) {
        if let Some(value) = self.options.methods.header_value() {
            headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }

    fn build_allowed_headers(&self, headers: &mut Headers) {
        if let Some(value) = self.options.allowed_headers.header_value() {
            headers.set(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
    }

    fn build_max_age_header(&self, headers: &mut Headers) {
        if let Some(value) = &self.options.max_age
            && !value.is_empty()
        {
            headers.set(header::ACCESS_CONTROL_MAX_AGE, value.as_str());
        }
    }

    fn build_exposed_headers(&self, headers: &mut Headers) {
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

impl From<CorsConfig> for CorsPolicy {
    fn from(config: CorsConfig) -> Self {
        Self::new(config.into())
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
