use crate::http::request::{Method, Request};

const SP: u8 = b' ';
const CRLF: &[u8] = b"\r\n";

/// Parses the request line out of a raw receive buffer.
///
/// Never fails: whatever could not be read is left at its default and the
/// returned request classifies itself as invalid. Headers and body after the
/// request line are ignored.
pub fn parse_request(buf: &[u8]) -> Request {
    let mut request = Request::default();

    // Only the request line is tokenized; a line still missing its CRLF is taken whole.
    let buf = match find(buf, CRLF) {
        Some(end) => &buf[..end + CRLF.len()],
        None => buf,
    };

    // Method
    let Some(method_end) = find(buf, &[SP]) else {
        return request;
    };
    request.method = Method::from_token(&String::from_utf8_lossy(&buf[..method_end]));

    // Url
    let rest = &buf[method_end + 1..];
    let Some(url_end) = find(rest, &[SP]) else {
        return request;
    };
    request.url = normalize_url(&String::from_utf8_lossy(&rest[..url_end]));

    // Version
    let rest = &rest[url_end + 1..];
    let Some(version_end) = find(rest, CRLF) else {
        return request;
    };
    request.version = String::from_utf8_lossy(&rest[..version_end]).into_owned();

    request
}

/// Returns true once the buffer holds a complete request line.
pub fn request_line_complete(buf: &[u8]) -> bool {
    find(buf, CRLF).is_some()
}

/// Maps `/` to `/index.html`, then strips every trailing `/`.
pub fn normalize_url(raw: &str) -> String {
    if raw == "/" {
        return "/index.html".to_string();
    }

    raw.trim_end_matches('/').to_string()
}

fn find(buf: &[u8], needle: &[u8]) -> Option<usize> {
    buf.windows(needle.len()).position(|w| w == needle)
}
