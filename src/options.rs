use crate::constants::{DEFAULT_MAX_AGE, header, method};
use crate::header_list::HeaderList;
use crate::origin::Origin;

/// Resolved policy configuration.
///
/// Override individual fields with struct-update syntax; untouched fields
/// keep their defaults.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: HeaderList,
    pub allowed_headers: HeaderList,
    pub exposed_headers: HeaderList,
    pub credentials: bool,
    pub max_age: Option<String>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: CorsOptions::default_methods(),
            allowed_headers: CorsOptions::default_allowed_headers(),
            exposed_headers: HeaderList::empty(),
            credentials: false,
            max_age: Some(DEFAULT_MAX_AGE.to_string()),
        }
    }
}

impl CorsOptions {
    pub fn default_methods() -> HeaderList {
        HeaderList::list([
            method::GET,
            method::POST,
            method::PUT,
            method::PATCH,
            method::DELETE,
            method::OPTIONS,
            method::TRACE,
        ])
    }

    pub fn default_allowed_headers() -> HeaderList {
        HeaderList::list([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
