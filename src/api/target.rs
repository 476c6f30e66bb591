//! Typed request descriptors.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Everything the HTTP client needs to issue one request.
///
/// Parameters are sent as the query string for `GET`/`DELETE` and as a JSON
/// body otherwise.
pub trait Target: Send + Sync {
    fn method(&self) -> HttpMethod;

    /// Path relative to the API base URL, starting with `/`.
    fn path(&self) -> String;

    fn parameters(&self) -> Option<Value> {
        None
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
