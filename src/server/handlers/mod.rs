//! HTTP handlers for the server.

pub mod usage;
pub mod xml;
