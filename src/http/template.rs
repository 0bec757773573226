//! HTML page templates for error pages and directory listings.
//!
//! Both templates are plain HTML files with `{%name%}` placeholders. They are
//! read once at startup; a missing file is logged and every page rendered from
//! it falls back to a minimal inline fragment.

use std::path::Path;

use crate::http::response::StatusCode;

pub const ERROR_TEMPLATE_FILE: &str = "error.html";
pub const DIRLIST_TEMPLATE_FILE: &str = "dirlist.html";

const MISSING_TEMPLATE_HTML: &str = "<h1>Missing file template</h1>";

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Templates {
    error: Option<String>,
    dirlist: Option<String>,
}

impl Templates {
    pub fn new(error: Option<String>, dirlist: Option<String>) -> Self {
        Self { error, dirlist }
    }

    /// Reads `error.html` and `dirlist.html` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            error: read_template(&dir.join(ERROR_TEMPLATE_FILE)),
            dirlist: read_template(&dir.join(DIRLIST_TEMPLATE_FILE)),
        }
    }

    /// Renders the error page for `status`.
    pub fn error_page(&self, status: StatusCode) -> String {
        let Some(template) = &self.error else {
            return format!("<h1>{} {}</h1>", status.as_u16(), status.reason_phrase());
        };

        let code = status.as_u16().to_string();
        substitute(
            ERROR_TEMPLATE_FILE,
            template,
            &[
                ("{%status_code%}", code.as_str()),
                ("{%reason_phrase%}", status.reason_phrase()),
                ("{%message%}", status.message()),
            ],
        )
    }

    /// Renders the listing page for the directory at url `path`.
    ///
    /// Entries are rendered in the order given.
    pub fn dir_listing(&self, path: &str, entries: &[ListingEntry]) -> String {
        let Some(template) = &self.dirlist else {
            return MISSING_TEMPLATE_HTML.to_string();
        };

        let mut path = path.strip_prefix('.').unwrap_or(path).to_string();
        if !path.ends_with('/') {
            path.push('/');
        }

        let path = html_escape(&path);
        let list: String = entries.iter().map(render_entry).collect();

        substitute(
            DIRLIST_TEMPLATE_FILE,
            template,
            &[("{%path%}", path.as_str()), ("{%list%}", list.as_str())],
        )
    }
}

fn read_template(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(html) => Some(html),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Template not readable, falling back to inline HTML"
            );
            None
        }
    }
}

fn substitute(name: &str, template: &str, values: &[(&str, &str)]) -> String {
    let mut html = template.to_string();
    for &(placeholder, value) in values {
        if !html.contains(placeholder) {
            tracing::warn!(template = name, placeholder, "Placeholder missing from template");
            continue;
        }
        html = html.replace(placeholder, value);
    }
    html
}

fn render_entry(entry: &ListingEntry) -> String {
    let name = html_escape(&entry.name);
    let slash = if entry.is_dir { "/" } else { "" };
    format!("\n<li><a href=\"{name}{slash}\">{name}{slash}</a></li>")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_are_escaped() {
        let entry = ListingEntry {
            name: "a<b>&\"c\".txt".to_string(),
            is_dir: false,
        };
        assert_eq!(
            render_entry(&entry),
            "\n<li><a href=\"a&lt;b&gt;&amp;&quot;c&quot;.txt\">a&lt;b&gt;&amp;&quot;c&quot;.txt</a></li>"
        );
    }
}
