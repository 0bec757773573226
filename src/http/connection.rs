use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::time::timeout;

use crate::files::resolver::{DEFAULT_VERSION, Resolver};
use crate::http::parser::{parse_request, request_line_complete};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::template::Templates;
use crate::http::writer::ResponseWriter;

/// Upper bound on buffered request bytes before parsing anyway.
pub const MAX_REQUEST_SIZE: usize = 8192;

/// One request/response exchange over a stream.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    resolver: Arc<Resolver>,
    read_timeout: Option<Duration>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    TimedOut,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Arc<Resolver>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            resolver,
            read_timeout: None,
            state: ConnectionState::Reading,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_with_timeout().await? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::TimedOut => {
                            tracing::warn!("Timed out waiting for request line");
                            let response = Response::error(DEFAULT_VERSION, StatusCode::REQUEST_TIMEOUT);
                            ConnectionState::Writing(self.writer_for(&response))
                        }
                        ReadOutcome::Closed => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    if let Some(status) = req.status() {
                        tracing::warn!(
                            status = status.as_u16(),
                            request_line = %first_line(&self.buffer),
                            "Malformed HTTP request"
                        );
                    }

                    let response = self.resolver.resolve(req).await;

                    tracing::info!(
                        method = req.method.as_str(),
                        url = %req.url,
                        status = response.status.as_u16(),
                        "Request served"
                    );
                    tracing::debug!(response = %response, "Response built");

                    let writer = self.writer_for(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_with_timeout(&mut self) -> anyhow::Result<ReadOutcome> {
        let Some(limit) = self.read_timeout else {
            return self.read_request().await;
        };

        match timeout(limit, self.read_request()).await {
            Ok(outcome) => outcome,
            Err(_) => Ok(ReadOutcome::TimedOut),
        }
    }

    /// Accumulates bytes until the request line is complete, the peer stops
    /// sending, or the buffer is full, then parses once.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        while !request_line_complete(&self.buffer) && self.buffer.len() < MAX_REQUEST_SIZE {
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed connection without sending anything
                    return Ok(ReadOutcome::Closed);
                }
                break;
            }
        }

        Ok(ReadOutcome::Request(parse_request(&self.buffer)))
    }

    fn writer_for(&self, response: &Response) -> ResponseWriter {
        ResponseWriter::new(response, self.resolver.templates())
    }
}

/// Answers `stream` with a bare error page without reading the request.
pub async fn reject<S>(mut stream: S, templates: &Templates, status: StatusCode) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let response = Response::error(DEFAULT_VERSION, status);
    ResponseWriter::new(&response, templates)
        .write_to_stream(&mut stream)
        .await
}

fn first_line(buf: &[u8]) -> String {
    let line = buf.split(|&b| b == b'\n').next().unwrap_or_default();
    String::from_utf8_lossy(line).trim_end().to_string()
}
