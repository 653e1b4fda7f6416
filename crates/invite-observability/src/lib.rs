//! Observability for the invitation card storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one page session
//! - `StructuredLogger` - Structured logging with session and component context
//! - `LogBuilder` - Fluent construction of log entries with typed fields

mod logging;
mod session;

pub use logging::*;
pub use session::*;
