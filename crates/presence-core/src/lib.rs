//! Shared foundation for the Presence Analyzer.
//!
//! Defines the data model for the parsed presence log, the error taxonomy,
//! clock arithmetic used by the aggregation layer, and the CLI settings
//! surface consumed by the server binary.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{AnalyzerError, Result};
pub use models::{DayRecord, DayRecords, PresenceLog, UserId};
