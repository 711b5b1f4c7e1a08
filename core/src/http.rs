//! HTTP request and response values exchanged with a `Transport`.
//!
//! # Design
//! Requests and responses are plain data. `PhotoQuery` builds an
//! `HttpRequest` without any I/O, the transport executes it, and the
//! resulting `HttpResponse` goes back to the caller untouched. Every request
//! this client issues is a GET, so the method is implied rather than stored.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Ordered query parameters. Unset options are never pushed, so the wire
/// query only contains values that were actually chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.push((name.into(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Set `name` to `value`, replacing an existing entry in place or
    /// appending a new one. Names stay unique.
    pub fn set(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    /// Apply caller-supplied pass-through parameters. A name that is already
    /// present has its value replaced in place; new names are appended.
    pub fn apply_extra(&mut self, extra: &[(String, String)]) {
        for (name, value) in extra {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A GET request described as plain data. `path` is relative to the
/// client's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub query: QueryParams,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }
}

/// A response exactly as the transport received it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Deserialize the body. The client never does this on its own; it is
    /// here for callers that want typed access to a response.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_opt_skips_unset_values() {
        let mut query = QueryParams::new();
        query.push("page", 1);
        query.push_opt::<String>("collections", None);
        query.push_opt("orientation", Some("portrait"));
        assert_eq!(query.len(), 2);
        assert!(!query.contains("collections"));
        assert_eq!(query.get("orientation"), Some("portrait"));
    }

    #[test]
    fn apply_extra_overrides_in_place_and_appends_new_names() {
        let mut query = QueryParams::new();
        query.push("page", 1);
        query.push("per_page", 10);
        query.apply_extra(&[
            ("per_page".to_string(), "50".to_string()),
            ("color".to_string(), "blue".to_string()),
        ]);
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("page", "1"), ("per_page", "50"), ("color", "blue")]);
    }

    #[test]
    fn set_replaces_existing_name() {
        let mut query = QueryParams::new();
        query.push("query", "x");
        query.push("page", 1);
        query.set("query", "city");
        query.set("id", "abc");
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("query", "city"), ("page", "1"), ("id", "abc")]);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("X-Ratelimit-Remaining".to_string(), "49".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("x-ratelimit-remaining"), Some("49"));
        assert_eq!(response.header("x-total"), None);
    }

    #[test]
    fn json_reports_bad_bodies() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
