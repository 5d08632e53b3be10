//! # Harmonic Match
//!
//! A harmonic-mixing compatibility engine for DJ applications, built on the
//! Camelot wheel key notation.
//!
//! ## Features
//!
//! - **Match Categories**: perfect, good, and advanced compatible keys for
//!   any of the 24 Camelot keys, each with its acceptable BPM window
//! - **Pitch-Shift Choices**: which other keys become compatible when a
//!   track is pitched up or down by one semitone, with converging
//!   categories merged into a single suggestion
//! - **Tempo Transforms**: tolerance bands and equal-tempered pitch/tempo
//!   scaling
//!
//! ## Quick Start
//!
//! ```
//! use harmonic_match::{find_matches, CamelotKey, EngineConfig};
//!
//! let key: CamelotKey = "8A".parse()?;
//! let result = find_matches(key, 120.0, &EngineConfig::default())?;
//!
//! assert_eq!(result.perfect_matches[0].key.to_string(), "8A");
//! assert_eq!(result.perfect_matches[1].key.to_string(), "8B");
//! println!(
//!     "{} mixes {:.2}-{:.2} BPM",
//!     key, result.original.bpm_range.lower, result.original.bpm_range.upper
//! );
//! # Ok::<(), harmonic_match::EngineError>(())
//! ```
//!
//! ## Architecture
//!
//! The engine is a stateless pure function space over a fixed 24-key wheel:
//!
//! ```text
//! (key, BPM) → Category Lists → Pitch-Shift Grouping → MatchResult
//! ```
//!
//! Every invocation is independent and O(1); there is no caching, no I/O,
//! and no shared state. The static wheel reference table
//! ([`WHEEL`]) is plain data shared with renderers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod display;
pub mod error;
pub mod matching;
pub mod tempo;
pub mod wheel;

// Re-export main types
pub use config::EngineConfig;
pub use display::contrast_color;
pub use error::EngineError;
pub use matching::{Match, MatchKind, MatchResult, OriginalKey, PitchChoice, PitchDirection};
pub use tempo::{pitch_shifted_tempo, tempo_band, TempoBand};
pub use wheel::{wheel_entry, CamelotKey, Mode, WheelEntry, WHEEL};

use matching::{
    advanced_matches, energy_boost_matches, good_matches, perfect_matches, pitch_choices,
};

/// Main match computation
///
/// Computes the full compatibility picture for one (key, BPM) query: the
/// queried key's own summary, the three ordered match lists, and the pitch
/// up/down choice lists.
///
/// # Arguments
///
/// * `key` - Selected Camelot key
/// * `bpm` - Queried tempo; must lie within `config.min_bpm..=config.max_bpm`
///   (clamp user input with [`EngineConfig::clamp_bpm`] first)
/// * `config` - Engine configuration parameters
///
/// # Errors
///
/// Returns `EngineError::BpmOutOfRange` if `bpm` falls outside the
/// configured range. Key validity is carried by the [`CamelotKey`] type;
/// malformed key strings are rejected when parsed.
///
/// # Example
///
/// ```
/// use harmonic_match::{find_matches, CamelotKey, EngineConfig};
///
/// let key: CamelotKey = "1A".parse()?;
/// let result = find_matches(key, 174.0, &EngineConfig::default())?;
///
/// // perfect fifth down from 1A wraps to 6A
/// assert_eq!(result.advanced_matches[0].key.to_string(), "6A");
/// # Ok::<(), harmonic_match::EngineError>(())
/// ```
pub fn find_matches(
    key: CamelotKey,
    bpm: f64,
    config: &EngineConfig,
) -> Result<MatchResult, EngineError> {
    log::debug!("Computing harmonic matches for {} at {} BPM", key, bpm);

    if !(config.min_bpm..=config.max_bpm).contains(&bpm) {
        return Err(EngineError::BpmOutOfRange(format!(
            "{} BPM outside supported range {}-{}",
            bpm, config.min_bpm, config.max_bpm
        )));
    }

    let perfect = perfect_matches(key, bpm, config);
    let good = good_matches(key, bpm, config);
    let advanced = advanced_matches(key, bpm, config);

    // Pitch-shift candidates: everything above plus the two energy-boost
    // targets that never show up in the visible lists.
    let mut candidates = Vec::with_capacity(13);
    candidates.extend_from_slice(&perfect);
    candidates.extend_from_slice(&good);
    candidates.extend_from_slice(&advanced);
    candidates.extend(energy_boost_matches(key, bpm, config));

    let pitch_up = pitch_choices(&candidates, bpm, PitchDirection::Up);
    let pitch_down = pitch_choices(&candidates, bpm, PitchDirection::Down);

    log::debug!(
        "Generated {} perfect, {} good, {} advanced matches, {}/{} pitch choices",
        perfect.len(),
        good.len(),
        advanced.len(),
        pitch_up.len(),
        pitch_down.len()
    );

    Ok(MatchResult {
        original: OriginalKey {
            key,
            bpm_range: tempo_band(bpm, config.tolerance_percent),
            pitched_up_becomes: key.shift_fifths(1),
            pitched_down_becomes: key.shift_fifths(-1),
        },
        perfect_matches: perfect,
        good_matches: good,
        advanced_matches: advanced,
        pitch_up_choices: pitch_up,
        pitch_down_choices: pitch_down,
    })
}
