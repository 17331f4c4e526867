use std::ops::Deref;

/// Ordered list of tokens rendered as a single comma-separated header value.
///
/// Entries are kept exactly as given: no trimming, no deduplication and no
/// reordering, so the emitted header mirrors the configured declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderList {
    values: Vec<String>,
}

impl HeaderList {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Return the header value representation, or `None` when the list is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }
}

impl Deref for HeaderList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::list(iter)
    }
}

impl From<Vec<String>> for HeaderList {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl<const N: usize> From<[&str; N]> for HeaderList {
    fn from(values: [&str; N]) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
