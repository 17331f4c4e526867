use crate::constants::header;

/// Read-only view of the inbound request the policy needs.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// Look up a request header by name, case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// The `Origin` request header. Empty values count as absent.
    fn origin(&self) -> Option<&str> {
        self.header(header::ORIGIN).filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else {
            None
        }
    }
}
