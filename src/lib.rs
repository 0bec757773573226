//! Docserve - Static File Server
//!
//! Core library for the HTTP request engine and document-root resolution.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
