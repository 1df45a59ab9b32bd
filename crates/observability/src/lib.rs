//! Logging setup shared by everything that drives the review services.

pub mod tracing;

pub use self::tracing::{init, LogFormat};
