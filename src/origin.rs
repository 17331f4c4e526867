use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

/// Error type a fallible origin predicate may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type OriginPredicateFn = dyn Fn(&str) -> Result<bool, BoxError> + Send + Sync;

/// Which origins the policy grants access to.
#[derive(Clone, Default)]
pub enum Origin {
    /// Emit `*` for every request.
    #[default]
    Any,
    /// Emit this value for every request, whatever the request origin is.
    /// An empty value behaves like [`Origin::Any`].
    Exact(String),
    /// Mirror the request origin when it is a member of the set.
    List(IndexSet<String>),
    /// Mirror the request origin when the predicate accepts it.
    Predicate(Arc<OriginPredicateFn>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Exact(String),
    Mirror,
    Disallow,
}

impl OriginDecision {
    /// The `Access-Control-Allow-Origin` value this decision produces.
    pub fn allowed_origin<'a>(&'a self, request_origin: Option<&'a str>) -> Option<&'a str> {
        match self {
            OriginDecision::Any => Some(crate::constants::WILDCARD),
            OriginDecision::Exact(value) => Some(value.as_str()),
            OriginDecision::Mirror => request_origin,
            OriginDecision::Disallow => None,
        }
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(move |origin: &str| {
            Ok::<bool, BoxError>(predicate(origin))
        }))
    }

    /// Like [`Origin::predicate`], but the callback may fail. Its error is
    /// handed back to the caller of `apply` untouched.
    pub fn try_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> Result<OriginDecision, BoxError> {
        let decision = match self {
            Origin::Any => OriginDecision::Any,
            Origin::Exact(value) if value.is_empty() => OriginDecision::Any,
            Origin::Exact(value) => OriginDecision::Exact(value.clone()),
            Origin::List(allowed) => match request_origin {
                Some(origin) if allowed.contains(origin) => OriginDecision::Mirror,
                _ => OriginDecision::Disallow,
            },
            Origin::Predicate(predicate) => match request_origin {
                Some(origin) => {
                    if predicate(origin)? {
                        OriginDecision::Mirror
                    } else {
                        OriginDecision::Disallow
                    }
                }
                None => OriginDecision::Disallow,
            },
        };

        Ok(decision)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Any => write!(f, "Any"),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::List(values) => f.debug_tuple("List").field(values).finish(),
            Origin::Predicate(_) => write!(f, "Predicate(<fn>)"),
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Exact(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Exact(value)
    }
}

impl From<Vec<String>> for Origin {
    fn from(values: Vec<String>) -> Self {
        Origin::list(values)
    }
}

impl<const N: usize> From<[&str; N]> for Origin {
    fn from(values: [&str; N]) -> Self {
        Origin::list(values)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
