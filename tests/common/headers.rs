#![allow(dead_code)]

use bunner_cors_policy::Headers;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn header_names(headers: &Headers) -> Vec<String> {
    headers.iter().map(|(name, _)| name.to_string()).collect()
}
