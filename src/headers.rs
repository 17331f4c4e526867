use indexmap::IndexMap;
use indexmap::map::IntoValues;

/// Mutable header capability the policy writes its decision into.
///
/// Implementations must compare names case-insensitively and keep the last
/// value written for a name.
pub trait ResponseHeaders {
    fn set_header(&mut self, name: &str, value: &str);

    fn header(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered header map keyed case-insensitively on the header name.
///
/// Overwriting a header keeps its original position and adopts the spelling
/// of the most recent write.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let header = Header::new(name, value);
        self.entries.insert(header.name.to_ascii_lowercase(), header);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|header| header.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|header| (header.name.as_str(), header.value.as_str()))
    }

    /// Copy every header into `target`, overwriting same-named entries.
    pub fn write_to<R>(&self, target: &mut R)
    where
        R: ResponseHeaders + ?Sized,
    {
        for (name, value) in self.iter() {
            target.set_header(name, value);
        }
    }
}

impl ResponseHeaders for Headers {
    fn set_header(&mut self, name: &str, value: &str) {
        self.set(name, value);
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

type SplitHeader = fn(Header) -> (String, String);

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::iter::Map<IntoValues<String, Header>, SplitHeader>;

    fn into_iter(self) -> Self::IntoIter {
        fn split(header: Header) -> (String, String) {
            (header.name, header.value)
        }
        self.entries.into_values().map(split as SplitHeader)
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
