use std::time::SystemTime;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;
use crate::http::template::Templates;

const SP: &str = " ";
const CRLF: &str = "\r\n";

/// Serializes a response stamped with the current time.
pub fn serialize_response(resp: &Response, templates: &Templates) -> Vec<u8> {
    serialize_response_at(resp, templates, SystemTime::now())
}

/// Serializes a response with an explicit `Date`.
///
/// Non-success responses carry the rendered error page; their own content is
/// not sent.
pub fn serialize_response_at(resp: &Response, templates: &Templates, date: SystemTime) -> Vec<u8> {
    let error_page;
    let body: &[u8] = if resp.status.is_success() {
        &resp.content
    } else {
        error_page = templates.error_page(resp.status);
        error_page.as_bytes()
    };

    let head = format!(
        "{version}{SP}{code}{SP}{phrase}{CRLF}\
         Date: {date}{CRLF}\
         Content-Type: {content_type}{CRLF}\
         Content-Length: {length}{CRLF}\
         {CRLF}",
        version = resp.version,
        code = resp.status.as_u16(),
        phrase = resp.status.reason_phrase(),
        date = httpdate::fmt_http_date(date),
        content_type = resp.header_content_type(),
        length = body.len(),
    );

    let mut buf = Vec::with_capacity(head.len() + body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, templates: &Templates) -> Self {
        Self {
            buffer: serialize_response(response, templates),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
