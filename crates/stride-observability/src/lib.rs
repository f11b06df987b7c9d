//! Observability for Stride catalog rendering.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with component and catalog context
//! - `LogBuilder` - Fluent construction of log entries with typed fields

mod logging;

pub use logging::*;
