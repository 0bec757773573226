use std::fmt;

use crate::http::response::StatusCode;

/// HTTP request methods.
///
/// Only GET and POST are recognised. Anything else parses as `UNDEFINED`
/// and is answered with 405 Method Not Allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Accepted on the request line, body ignored
    POST,
    /// Missing or unrecognised method
    UNDEFINED,
}

/// Represents a parsed HTTP request line.
///
/// Built once by the parser and never modified afterwards. Fields that could
/// not be parsed keep their defaults (`UNDEFINED`, empty url, empty version),
/// which [`Request::status`] then classifies as a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Absolute request path, with trailing `/` stripped and `/` mapped to `/index.html`
    pub url: String,
    /// Raw HTTP version token (e.g. "HTTP/1.1")
    pub version: String,
}

impl Method {
    /// Parses an HTTP method, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("post"), Method::POST);
    /// assert_eq!(Method::from_token("DELETE"), Method::UNDEFINED);
    /// ```
    pub fn from_token(s: &str) -> Self {
        if s.eq_ignore_ascii_case("GET") {
            Method::GET
        } else if s.eq_ignore_ascii_case("POST") {
            Method::POST
        } else {
            Method::UNDEFINED
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::UNDEFINED => "UNDEFINED",
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: Method::UNDEFINED,
            url: String::new(),
            version: String::new(),
        }
    }
}

impl Request {
    /// Classifies the request from its fields alone.
    ///
    /// Returns `None` when the request is well-formed enough to resolve, or the
    /// error status to answer with. Checks run in order: method (405), url (400),
    /// version (505).
    pub fn status(&self) -> Option<StatusCode> {
        if self.method == Method::UNDEFINED {
            return Some(StatusCode::METHOD_NOT_ALLOWED);
        }

        if !self.url.starts_with('/') {
            return Some(StatusCode::BAD_REQUEST);
        }

        if !self.version.starts_with("HTTP/") {
            return Some(StatusCode::HTTP_VERSION_NOT_SUPPORTED);
        }

        None
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method.as_str(), self.url, self.version)
    }
}
