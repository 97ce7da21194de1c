//! Colors and style builders shared by the widgets.
//!
//! - `palette` holds the raw colors
//! - `styles` maps domain values (badges, log levels) onto styles

pub mod palette;
pub mod styles;
