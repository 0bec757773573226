use docserve::http::parser::{normalize_url, parse_request, request_line_complete};
use docserve::http::request::Method;
use docserve::http::response::StatusCode;

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n");

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url, "/index.html");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.status(), None);
}

#[test]
fn test_parse_root_maps_to_index() {
    let req = parse_request(b"GET / HTTP/1.1\r\n\r\n");

    assert_eq!(req.url, "/index.html");
}

#[test]
fn test_parse_strips_trailing_slashes() {
    let a = parse_request(b"GET /a/b// HTTP/1.1\r\n\r\n");
    let b = parse_request(b"GET /a/b HTTP/1.1\r\n\r\n");

    assert_eq!(a.url, "/a/b");
    assert_eq!(a, b);
}

#[test]
fn test_parse_method_is_case_insensitive() {
    assert_eq!(parse_request(b"get /x.txt HTTP/1.1\r\n").method, Method::GET);
    assert_eq!(parse_request(b"Post /x.txt HTTP/1.1\r\n").method, Method::POST);
}

#[test]
fn test_parse_unknown_method_is_undefined() {
    let req = parse_request(b"DELETE /x.txt HTTP/1.1\r\n\r\n");

    assert_eq!(req.method, Method::UNDEFINED);
    assert_eq!(req.url, "/x.txt");
    assert_eq!(req.status(), Some(StatusCode::METHOD_NOT_ALLOWED));
}

#[test]
fn test_parse_missing_version_is_bad_request() {
    let req = parse_request(b"GET /index.html\r\n\r\n");

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url, "");
    assert_eq!(req.version, "");
    assert_eq!(req.status(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn test_parse_missing_version_ignores_headers() {
    let req = parse_request(b"GET /index.html\r\nHost: localhost\r\n\r\n");

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url, "");
    assert_eq!(req.version, "");
    assert_eq!(req.status(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn test_parse_version_without_crlf_stays_empty() {
    let req = parse_request(b"GET /index.html HTTP/1.1");

    assert_eq!(req.url, "/index.html");
    assert_eq!(req.version, "");
    assert_eq!(req.status(), Some(StatusCode::HTTP_VERSION_NOT_SUPPORTED));
}

#[test]
fn test_parse_empty_buffer() {
    let req = parse_request(b"");

    assert_eq!(req.method, Method::UNDEFINED);
    assert!(req.status().is_some());
}

#[test]
fn test_parse_ignores_headers_and_body() {
    let req = parse_request(
        b"POST /form.html HTTP/1.0\r\nContent-Length: 5\r\nBroken header\r\n\r\nhello",
    );

    assert_eq!(req.method, Method::POST);
    assert_eq!(req.url, "/form.html");
    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.status(), None);
}

#[test]
fn test_parse_relative_url_is_bad_request() {
    let req = parse_request(b"GET index.html HTTP/1.1\r\n");

    assert_eq!(req.status(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn test_normalize_url() {
    assert_eq!(normalize_url("/"), "/index.html");
    assert_eq!(normalize_url("/docs/"), "/docs");
    assert_eq!(normalize_url("/a/b///"), "/a/b");
    assert_eq!(normalize_url(normalize_url("/a/b//").as_str()), "/a/b");
}

#[test]
fn test_request_line_complete() {
    assert!(!request_line_complete(b""));
    assert!(!request_line_complete(b"GET / HTTP/1.1"));
    assert!(request_line_complete(b"GET / HTTP/1.1\r\n"));
}
