//! # pdeck-core - Core Domain Types
//!
//! Foundation crate for Profile Deck. Provides domain types, error handling,
//! status classification, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LogEntry`] - A single timestamped panel log line
//! - [`LogLevel`] - Log severity (Info, Warning, Error)
//! - [`Badge`], [`BadgeKind`] - Derived per-panel status badge
//! - [`DebugEndpoint`] - Remote debugging host/port of a running profile
//!
//! ### Status Classification (`status`)
//! - [`classify_status()`] - Map a raw backend status string to a [`Badge`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `user prompt` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod status;
pub mod types;

pub use error::{Error, Result};
pub use status::{classify_status, is_started};
pub use types::{Badge, BadgeKind, DebugEndpoint, LogEntry, LogLevel};
