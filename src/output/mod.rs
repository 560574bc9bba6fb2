//! Presentation boundary: serialization and terminal rendering.
//!
//! The engine produces data; this module turns it into the two formats a
//! presentation layer consumes directly — JSON and colored terminal text.

mod json;
mod terminal;

pub use json::{battery_to_json, to_json, to_json_pretty};
pub use terminal::{format_battery, format_report};
