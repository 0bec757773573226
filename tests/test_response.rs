use docserve::http::response::{Response, StatusCode, UNKNOWN_REASON_PHRASE};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::OK.as_u16(), 200);
    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), 400);
    assert_eq!(StatusCode::FORBIDDEN.as_u16(), 403);
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
    assert_eq!(StatusCode::METHOD_NOT_ALLOWED.as_u16(), 405);
    assert_eq!(StatusCode::UNSUPPORTED_MEDIA_TYPE.as_u16(), 415);
    assert_eq!(StatusCode::HTTP_VERSION_NOT_SUPPORTED.as_u16(), 505);
}

#[test]
fn test_status_code_reason_phrase() {
    let table = [
        (100, "Continue"),
        (200, "OK"),
        (204, "No Content"),
        (304, "Not Modified"),
        (400, "Bad Request"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (405, "Method Not Allowed"),
        (408, "Request Time-out"),
        (415, "Unsupported Media Type"),
        (416, "Requested range not satisfiable"),
        (500, "Internal Server Error"),
        (501, "Not Implemented"),
        (503, "Service Unavailable"),
        (505, "HTTP Version not supported"),
    ];

    for (code, phrase) in table {
        assert_eq!(StatusCode::from_u16(code).reason_phrase(), phrase);
    }
}

#[test]
fn test_unknown_status_code_falls_back() {
    for code in [0, 199, 306, 418, 599, 999] {
        let status = StatusCode::from_u16(code);
        assert_eq!(status.lookup_reason_phrase(), None);
        assert_eq!(status.reason_phrase(), UNKNOWN_REASON_PHRASE);
    }
}

#[test]
fn test_status_messages() {
    assert_eq!(StatusCode::BAD_REQUEST.message(), "Please check the request format.");
    assert_eq!(
        StatusCode::NOT_FOUND.message(),
        "The requested file or directory cannot be found."
    );
    assert_eq!(
        StatusCode::METHOD_NOT_ALLOWED.message(),
        StatusCode::NOT_IMPLEMENTED.message()
    );
    assert_eq!(
        StatusCode::UNSUPPORTED_MEDIA_TYPE.message(),
        "The requested file format is currently not supported."
    );
    assert_eq!(StatusCode::from_u16(418).message(), "No message available.");
}

#[test]
fn test_is_success() {
    assert!(StatusCode::OK.is_success());
    assert!(StatusCode::from_u16(302).is_success());
    assert!(!StatusCode::from_u16(199).is_success());
    assert!(!StatusCode::NOT_FOUND.is_success());
}

#[test]
fn test_response_ok_helper() {
    let response = Response::ok("HTTP/1.1", "text/plain", b"test content".to_vec());

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, Some("text/plain"));
    assert_eq!(response.content, b"test content".to_vec());
    assert_eq!(response.header_content_type(), "text/plain");
}

#[test]
fn test_response_error_helper() {
    let response = Response::error("HTTP/1.0", StatusCode::NOT_FOUND);

    assert_eq!(response.version, "HTTP/1.0");
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.content.is_empty());
    assert_eq!(response.header_content_type(), "text/html");
}

#[test]
fn test_error_status_always_renders_html() {
    let mut response = Response::ok("HTTP/1.1", "image/png", vec![1, 2, 3]);
    response.status = StatusCode::INTERNAL_SERVER_ERROR;

    assert_eq!(response.header_content_type(), "text/html");
}

#[test]
fn test_empty_content_type_renders_html() {
    let response = Response::ok("HTTP/1.1", "", Vec::new());

    assert_eq!(response.header_content_type(), "text/html");
}
