use crate::constants::WILDCARD;
use crate::header_list::HeaderList;
use crate::options::CorsOptions;
use crate::origin::Origin;
use serde::{Deserialize, Deserializer};

/// Partial policy configuration, typically loaded from a config file.
///
/// Every field is optional. Converting into [`CorsOptions`] performs a
/// shallow merge: a supplied field replaces the default for that field only.
/// An explicit `"max_age": null` clears the default max-age.
/// Origin predicates cannot be expressed here; build them in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub origin: Option<OriginConfig>,
    pub methods: Option<Vec<String>>,
    #[serde(alias = "headers")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(alias = "expose_headers", alias = "exposeHeaders")]
    pub exposed_headers: Option<Vec<String>>,
    #[serde(alias = "maxAge", deserialize_with = "present")]
    pub max_age: Option<Option<MaxAgeConfig>>,
    pub credentials: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OriginConfig {
    /// `"*"` allows any origin; any other string is sent verbatim.
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MaxAgeConfig {
    Seconds(i64),
    Text(String),
}

impl From<OriginConfig> for Origin {
    fn from(config: OriginConfig) -> Self {
        match config {
            OriginConfig::Single(value) if value == WILDCARD => Origin::Any,
            OriginConfig::Single(value) => Origin::Exact(value),
            OriginConfig::List(values) => Origin::list(values),
        }
    }
}

impl From<MaxAgeConfig> for String {
    fn from(config: MaxAgeConfig) -> Self {
        match config {
            MaxAgeConfig::Seconds(seconds) => seconds.to_string(),
            MaxAgeConfig::Text(text) => text,
        }
    }
}

impl CorsConfig {
    /// Overlay the supplied fields onto `base`.
    pub fn merge_into(self, base: CorsOptions) -> CorsOptions {
        let CorsConfig {
            origin,
            methods,
            allowed_headers,
            exposed_headers,
            max_age,
            credentials,
        } = self;

        CorsOptions {
            origin: origin.map(Origin::from).unwrap_or(base.origin),
            methods: methods.map(HeaderList::from).unwrap_or(base.methods),
            allowed_headers: allowed_headers
                .map(HeaderList::from)
                .unwrap_or(base.allowed_headers),
            exposed_headers: exposed_headers
                .map(HeaderList::from)
                .unwrap_or(base.exposed_headers),
            credentials: credentials.unwrap_or(base.credentials),
            max_age: match max_age {
                Some(supplied) => supplied.map(String::from),
                None => base.max_age,
            },
        }
    }
}

// Keeps a supplied `null` apart from a missing field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<CorsConfig> for CorsOptions {
    fn from(config: CorsConfig) -> Self {
        config.merge_into(CorsOptions::default())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
