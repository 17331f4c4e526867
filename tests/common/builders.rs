#![allow(dead_code)]

use bunner_cors_policy::constants::method;
use bunner_cors_policy::{
    CorsError, CorsOptions, CorsOutcome, CorsPolicy, HeaderList, Headers, Origin, RequestContext,
};
use std::cell::Cell;

pub const PROCEEDED: &str = "next handler";

#[derive(Default)]
pub struct PolicyBuilder {
    origin: Option<Origin>,
    methods: Option<HeaderList>,
    allowed_headers: Option<HeaderList>,
    exposed_headers: Option<HeaderList>,
    credentials: Option<bool>,
    max_age: Option<Option<String>>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(HeaderList::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(HeaderList::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(HeaderList::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: impl Into<String>) -> Self {
        self.max_age = Some(Some(value.into()));
        self
    }

    pub fn without_max_age(mut self) -> Self {
        self.max_age = Some(None);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let defaults = CorsOptions::default();

        CorsPolicy::new(CorsOptions {
            origin: self.origin.unwrap_or(defaults.origin),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.unwrap_or(defaults.max_age),
        })
    }
}

/// Outcome of running a request through `CorsPolicy::apply`.
pub struct Applied {
    pub outcome: CorsOutcome<&'static str>,
    pub response: Headers,
    pub proceed_calls: usize,
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    response: Headers,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            response: Headers::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Seed the response with a header another collaborator already set.
    pub fn existing_header(mut self, name: &str, value: &str) -> Self {
        self.response.set(name, value);
        self
    }

    pub fn try_apply(self, policy: &CorsPolicy) -> Result<Applied, CorsError> {
        let RequestBuilder {
            method,
            origin,
            mut response,
        } = self;
        let ctx = RequestContext::new(&method, origin.as_deref());
        let calls = Cell::new(0);

        let outcome = policy.apply(&ctx, &mut response, || {
            calls.set(calls.get() + 1);
            PROCEEDED
        })?;

        Ok(Applied {
            outcome,
            response,
            proceed_calls: calls.get(),
        })
    }

    pub fn apply(self, policy: &CorsPolicy) -> Applied {
        self.try_apply(policy).expect("cors evaluation should succeed")
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
