//! Camelot wheel model
//!
//! The 24-key wheel itself:
//! - Key notation, parsing, and wheel arithmetic
//! - The static per-key display reference table

pub mod data;
pub mod key;

pub use data::{wheel_entry, WheelEntry, WHEEL};
pub use key::{CamelotKey, Mode};
