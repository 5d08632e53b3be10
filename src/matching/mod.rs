//! Match generation modules
//!
//! Turns a (key, BPM) query into the full compatibility picture:
//! - Category lists (perfect / good / advanced, plus energy-boost
//!   pitch-shift candidates)
//! - Pitch-shift choices with merged labels
//! - The serializable result types

pub mod category;
pub mod pitch;
pub mod result;

pub use category::{advanced_matches, energy_boost_matches, good_matches, perfect_matches};
pub use pitch::{pitch_choices, PitchDirection};
pub use result::{Match, MatchKind, MatchResult, OriginalKey, PitchChoice};
