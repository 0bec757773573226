//! Maps a validated request onto the document root.
//!
//! Resolution is a chain of steps, each of which either narrows the request
//! down or ends it with a status code:
//!
//! 1. take the last path segment (400 if there is none)
//! 2. map its extension to a content type (415 if unknown, "directory" if absent)
//! 3. for directories: 404 if missing, the listing page if there is no
//!    `index.html`, otherwise continue with `<dir>/index.html`
//! 4. read the file (404 on failure)
//!
//! Urls with a `..` segment are refused with 403 before the filesystem is touched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::files::listing;
use crate::http::mime::{ContentType, content_type_of};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::template::Templates;

pub const INDEX_FILE: &str = "index.html";
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

const HTML: &str = "text/html";
const ROOT_INDEX: &str = "/index.html";

type Resolved = Result<(&'static str, Vec<u8>), StatusCode>;

pub struct Resolver {
    root: PathBuf,
    templates: Arc<Templates>,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>, templates: Arc<Templates>) -> Self {
        Self {
            root: root.into(),
            templates,
        }
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Produces the response for `request`.
    ///
    /// Invalid requests short-circuit with their own status and never reach
    /// the filesystem.
    pub async fn resolve(&self, request: &Request) -> Response {
        let version = response_version(request);

        if let Some(status) = request.status() {
            return Response::error(version, status);
        }

        match self.resolve_url(&request.url).await {
            Ok((content_type, content)) => Response::ok(version, content_type, content),
            Err(status) => Response::error(version, status),
        }
    }

    async fn resolve_url(&self, url: &str) -> Resolved {
        if url.split('/').any(|segment| segment == "..") {
            tracing::warn!(url, "Rejected path escaping the document root");
            return Err(StatusCode::FORBIDDEN);
        }

        let name = match url.rsplit_once('/') {
            Some((_, name)) if !name.is_empty() => name,
            _ => {
                tracing::warn!(url, "Unknown request object");
                return Err(StatusCode::BAD_REQUEST);
            }
        };

        let content_type = content_type_of(name).map_err(|e| {
            tracing::warn!(url, extension = %e.0, "Unknown file type");
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        })?;

        match content_type {
            ContentType::Mime(mime) => self.read_file(url, mime).await,
            ContentType::Directory => {
                let dir = self.fs_path(url);
                if !is_dir(&dir).await {
                    tracing::warn!(url, "Directory not found");
                    return Err(StatusCode::NOT_FOUND);
                }

                if !exists(&dir.join(INDEX_FILE)).await {
                    return self.list_directory(url, &dir).await;
                }

                let index = format!("{url}/{INDEX_FILE}");
                self.read_file(&index, HTML).await
            }
        }
    }

    async fn read_file(&self, url: &str, mime: &'static str) -> Resolved {
        let path = self.fs_path(url);

        match tokio::fs::read(&path).await {
            Ok(content) => Ok((mime, content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // `/` arrives here as `/index.html`; without an index the root is listed.
                if url == ROOT_INDEX && is_dir(&self.root).await {
                    return self.list_directory("/", &self.root).await;
                }

                tracing::warn!(url, "File not found");
                Err(StatusCode::NOT_FOUND)
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Reading file failed");
                Err(StatusCode::NOT_FOUND)
            }
        }
    }

    async fn list_directory(&self, url: &str, dir: &Path) -> Resolved {
        let entries = listing::read_entries(dir).await.map_err(|e| {
            tracing::warn!(url, error = %e, "Listing directory failed");
            StatusCode::NOT_FOUND
        })?;

        let html = self.templates.dir_listing(url, &entries);
        Ok((HTML, html.into_bytes()))
    }

    fn fs_path(&self, url: &str) -> PathBuf {
        self.root.join(url.trim_start_matches('/'))
    }
}

/// The version echoed in the status line; malformed versions fall back to HTTP/1.1.
pub fn response_version(request: &Request) -> &str {
    if request.version.starts_with("HTTP/") {
        &request.version
    } else {
        DEFAULT_VERSION
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}
