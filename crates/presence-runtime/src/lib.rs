//! Runtime layer for the Presence Analyzer.
//!
//! Owns the TTL-cached presence-log loader shared by all request handlers,
//! and the clock abstraction that makes cache expiry testable.

pub mod clock;
pub mod log_cache;

pub use presence_core as core;
pub use presence_data as data;
