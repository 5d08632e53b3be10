//! Static wheel reference data
//!
//! One row per Camelot key: display color, musical key name, and mode.
//! Pure presentation reference shared by the engine's consumers; the
//! matching logic itself never reads it.

use serde::Serialize;

use super::key::{CamelotKey, Mode};

/// Display metadata for one wheel position
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelEntry {
    /// Badge color as `#RRGGBB` hex
    pub color: &'static str,
    /// Musical key name (e.g. "A", "F#", "Db")
    pub musical_key: &'static str,
    /// Major or minor
    pub mode: Mode,
}

const fn entry(color: &'static str, musical_key: &'static str, mode: Mode) -> WheelEntry {
    WheelEntry {
        color,
        musical_key,
        mode,
    }
}

/// The 24-row wheel table, indexed by [`CamelotKey::position`]
/// (`1A..12A, 1B..12B` order)
pub const WHEEL: [WheelEntry; 24] = [
    // Minor ring, 1A..12A
    entry("#4A8A5A", "Ab", Mode::Minor),
    entry("#5A8A4A", "Eb", Mode::Minor),
    entry("#7A8A4A", "Bb", Mode::Minor),
    entry("#9A8A4A", "F", Mode::Minor),
    entry("#9A6A4A", "C", Mode::Minor),
    entry("#9A5A4A", "G", Mode::Minor),
    entry("#9A4A6A", "D", Mode::Minor),
    entry("#8A4A8A", "A", Mode::Minor),
    entry("#6A4A8A", "E", Mode::Minor),
    entry("#5A5A8A", "B", Mode::Minor),
    entry("#4A7A8A", "F#", Mode::Minor),
    entry("#3A7A7A", "Db", Mode::Minor),
    // Major ring, 1B..12B
    entry("#4A9B7A", "B", Mode::Major),
    entry("#6B9B4A", "F#", Mode::Major),
    entry("#8B9B4A", "Db", Mode::Major),
    entry("#B8A84A", "Ab", Mode::Major),
    entry("#B8864A", "Eb", Mode::Major),
    entry("#B8644A", "Bb", Mode::Major),
    entry("#B84A7A", "F", Mode::Major),
    entry("#9B4A9B", "C", Mode::Major),
    entry("#7A4A9B", "G", Mode::Major),
    entry("#5A6B9B", "D", Mode::Major),
    entry("#4A8B9B", "A", Mode::Major),
    entry("#4A9B9B", "E", Mode::Major),
];

/// Look up the wheel entry for a key
///
/// Array-indexed; no string parsing involved.
///
/// # Example
///
/// ```
/// use harmonic_match::{wheel_entry, CamelotKey};
///
/// let key: CamelotKey = "8A".parse()?;
/// assert_eq!(wheel_entry(key).musical_key, "A");
/// assert_eq!(wheel_entry(key).color, "#8A4A8A");
/// # Ok::<(), harmonic_match::EngineError>(())
/// ```
pub fn wheel_entry(key: CamelotKey) -> &'static WheelEntry {
    &WHEEL[key.position()]
}
