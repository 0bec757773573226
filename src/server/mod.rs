//! TCP front end: binds the listener and hands each connection to its own task.

pub mod listener;
