//! # Tariff Zones - time-of-use network tariff classifier
//!
//! Maps a local date and time to one of five tariff zones, a display label,
//! and the time left until the next block boundary. A small HTTP service
//! exposes the classification as JSON, a server-sent event stream, and a
//! clock-face page.
//!
//! ## Architecture
//!
//! - `tariff`: seasons, day kinds, the versioned zone policy and the classifier
//! - `clock`: injectable source of "now"
//! - `config`: YAML configuration and validation
//! - `logging`: structured logging and tracing
//! - `web`: HTTP server, page rendering and live updates
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 12, 21)
//!     .and_then(|d| d.and_hms_opt(23, 0, 0))
//!     .unwrap();
//! let result = tariff_zones::classify(&at);
//! assert_eq!(result.zone.number(), 4);
//! assert_eq!(result.remaining_block_time.to_string(), "7h:0m");
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod tariff;
pub mod web;

#[cfg(test)]
mod web_tests;

/// Build version, with a nightly suffix when built as such
pub const APP_VERSION: &str = env!("APP_VERSION");

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TariffError};
pub use tariff::{TariffClassifier, TariffResult, classify};
