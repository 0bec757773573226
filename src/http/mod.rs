//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.x engine: one request line in, one
//! response out, then the connection closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Drives a single exchange over a stream
//! - **`parser`**: Parses the request line out of a byte buffer
//! - **`request`**: Request representation and validity classification
//! - **`response`**: Status codes, reason phrases and the response type
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`template`**: Error and directory-listing pages
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Line received (or timeout → 408)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve against the document root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docserve::files::Resolver;
//! use docserve::http::connection::Connection;
//! use docserve::http::template::Templates;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:12345").await?;
//!     let resolver = Arc::new(Resolver::new(".", Arc::new(Templates::load("templates"))));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let resolver = resolver.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, resolver);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod template;
pub mod writer;
