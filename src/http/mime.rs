//! MIME type detection based on file extensions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Extension (lowercase, without the dot) to MIME type.
static CONTENT_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("7z", "application/x-7z-compressed"),
        ("bmp", "image/bmp"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("doc", "application/msword"),
        (
            "docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        ("gif", "image/gif"),
        ("gz", "application/gzip"),
        ("htm", "text/html"),
        ("html", "text/html"),
        ("ico", "image/vnd.microsoft.icon"),
        ("jpeg", "image/jpeg"),
        ("jpg", "image/jpeg"),
        ("js", "text/javascript"),
        ("json", "application/json"),
        ("mp3", "audio/mpeg"),
        ("mp4", "video/mp4"),
        ("mpeg", "video/mpeg"),
        ("pdf", "application/pdf"),
        ("php", "application/x-httpd-php"),
        ("png", "image/png"),
        ("ppt", "application/vnd.ms-powerpoint"),
        (
            "pptx",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ),
        ("rar", "application/vnd.rar"),
        ("sh", "application/x-sh"),
        ("svg", "image/svg+xml"),
        ("tar", "application/x-tar"),
        ("txt", "text/plain"),
        ("wav", "audio/wav"),
        ("weba", "audio/webm"),
        ("webm", "audio/webm"),
        ("webp", "image/webp"),
        ("xhtml", "application/xhtml+xml"),
        ("xls", "application/vnd.ms-excel"),
        (
            "xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        ("zip", "application/zip"),
    ])
});

/// Outcome of mapping a path segment to a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A registered file type
    Mime(&'static str),
    /// No extension: the segment names a directory
    Directory,
}

/// The extension is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedExtension(pub String);

/// Maps the last path segment to a content type.
///
/// A segment without an extension (no dot, or a trailing dot) is a directory.
/// Lookup is case-sensitive against lowercase keys.
///
/// # Example
///
/// ```
/// # use docserve::http::mime::{content_type_of, ContentType};
/// assert_eq!(content_type_of("index.html"), Ok(ContentType::Mime("text/html")));
/// assert_eq!(content_type_of("docs"), Ok(ContentType::Directory));
/// assert!(content_type_of("data.xyz").is_err());
/// ```
pub fn content_type_of(name: &str) -> Result<ContentType, UnsupportedExtension> {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => return Ok(ContentType::Directory),
    };

    lookup(ext)
        .map(ContentType::Mime)
        .ok_or_else(|| UnsupportedExtension(ext.to_string()))
}

/// Direct table lookup by extension.
pub fn lookup(ext: &str) -> Option<&'static str> {
    CONTENT_TYPES.get(ext).copied()
}
