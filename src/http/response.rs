use std::fmt;

/// Reason phrase used for status codes missing from the table.
pub const UNKNOWN_REASON_PHRASE: &str = "Unknown Status Code";

/// An HTTP status code.
///
/// Any `u16` is representable; codes outside the reason-phrase table still
/// serialize, with [`UNKNOWN_REASON_PHRASE`] as their phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    pub const REQUEST_TIMEOUT: StatusCode = StatusCode(408);
    pub const UNSUPPORTED_MEDIA_TYPE: StatusCode = StatusCode(415);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode(501);
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);
    pub const HTTP_VERSION_NOT_SUPPORTED: StatusCode = StatusCode(505);

    pub const fn from_u16(code: u16) -> Self {
        StatusCode(code)
    }

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::OK.as_u16(), 200);
    /// assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    /// ```
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Looks the code up in the reason-phrase table.
    pub fn lookup_reason_phrase(&self) -> Option<&'static str> {
        let phrase = match self.0 {
            100 => "Continue",
            101 => "Switching Protocols",
            200 => "OK",
            201 => "Created",
            202 => "Accepted",
            203 => "Non-Authoritative Information",
            204 => "No Content",
            205 => "Reset Content",
            206 => "Partial Content",
            300 => "Multiple Choices",
            301 => "Moved Permanently",
            302 => "Found",
            303 => "See Other",
            304 => "Not Modified",
            305 => "Use Proxy",
            307 => "Temporary Redirect",
            400 => "Bad Request",
            401 => "Unauthorized",
            402 => "Payment Required",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            406 => "Not Acceptable",
            407 => "Proxy Authentication Required",
            408 => "Request Time-out",
            409 => "Conflict",
            410 => "Gone",
            411 => "Length Required",
            412 => "Precondition Failed",
            413 => "Request Entity Too Large",
            414 => "Request-URI Too Large",
            415 => "Unsupported Media Type",
            416 => "Requested range not satisfiable",
            417 => "Expectation Failed",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Time-out",
            505 => "HTTP Version not supported",
            _ => return None,
        };
        Some(phrase)
    }

    /// Returns the reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::{StatusCode, UNKNOWN_REASON_PHRASE};
    /// assert_eq!(StatusCode::OK.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::from_u16(299).reason_phrase(), UNKNOWN_REASON_PHRASE);
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        self.lookup_reason_phrase().unwrap_or(UNKNOWN_REASON_PHRASE)
    }

    /// Human readable explanation shown on error pages.
    pub fn message(&self) -> &'static str {
        match self.0 {
            400 => "Please check the request format.",
            403 => "Directory listing is not allowed.",
            404 => "The requested file or directory cannot be found.",
            405 | 501 => "GET is currently the only supported method.",
            415 => "The requested file format is currently not supported.",
            500 => "The server is experiencing some unknown errors.",
            503 => "The server is currently busy. Please try again later.",
            505 => "The requested HTTP version is not supported. Please consider using HTTP/1.1.",
            _ => "No message available.",
        }
    }

    /// True for 2xx and 3xx, the only codes whose body is sent as-is.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

/// A complete HTTP response, ready to be serialized.
///
/// The status is always terminal. For non-success codes `content` is ignored
/// and the writer renders the error page instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP version echoed from the request
    pub version: String,
    /// The HTTP status code
    pub status: StatusCode,
    /// MIME type of `content`, if any
    pub content_type: Option<&'static str>,
    /// Response body as bytes
    pub content: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response carrying `content`.
    pub fn ok(version: impl Into<String>, content_type: &'static str, content: Vec<u8>) -> Self {
        Self {
            version: version.into(),
            status: StatusCode::OK,
            content_type: Some(content_type),
            content,
        }
    }

    /// Creates a body-less response whose page is rendered from the error template.
    pub fn error(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            content_type: None,
            content: Vec::new(),
        }
    }

    /// The Content-Type header value. Anything but a typed success is HTML.
    pub fn header_content_type(&self) -> &'static str {
        match self.content_type {
            Some(ct) if self.status.is_success() && !ct.is_empty() => ct,
            _ => "text/html",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} content_type={} content_length={}",
            self.version,
            self.status,
            self.content_type.unwrap_or("-"),
            self.content.len()
        )
    }
}
