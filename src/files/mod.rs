//! Static file resolution
//!
//! This module turns a validated request into file content, a directory
//! listing, or the status code explaining why neither is possible.

pub mod listing;
pub mod resolver;

pub use resolver::Resolver;
