//! HTTP read API for the Presence Analyzer.
//!
//! Serves the dashboard's JSON endpoints on top of the cached presence log:
//! user listing, per-weekday mean and total presence time, and mean
//! arrival/departure times. Optionally serves a directory of static
//! dashboard assets at the root.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::app;
pub use state::AppState;
