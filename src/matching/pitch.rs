//! Pitch-shift choice derivation
//!
//! Answers "which other keys become compatible with my selection if I pitch
//! a track up or down by one semitone?". Candidates that collapse onto the
//! same (source, target) key pair are merged into a single row with their
//! category labels joined.

use super::result::{Match, PitchChoice};
use crate::tempo::pitch_shifted_tempo;

/// Direction of a one-semitone pitch shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchDirection {
    /// Source track is pitched up to land on the target key
    Up,
    /// Source track is pitched down to land on the target key
    Down,
}

impl PitchDirection {
    /// Semitone shift applied to a *target* key to recover its source
    ///
    /// Pitching up lands on the target from one semitone below, so the
    /// source is the target shifted −1; down is the mirror image.
    fn source_shift(&self) -> i32 {
        match self {
            PitchDirection::Up => -1,
            PitchDirection::Down => 1,
        }
    }
}

/// Derive pitch-shift choices from the candidate target matches
///
/// For each candidate target key `K`, the source is `K` shifted one
/// semitone against the direction, at the queried tempo shifted the same
/// way. Candidates are scanned in order; rows with an identical
/// `(original_key, becomes_key)` pair merge, accumulating their category
/// labels first-seen-first into a `" or "`-joined `match_type`.
///
/// # Arguments
///
/// * `candidates` - All target matches (perfect + good + advanced + energy
///   boost), in scan order
/// * `bpm` - The queried tempo
/// * `direction` - Which way the source track gets pitched
pub fn pitch_choices(candidates: &[Match], bpm: f64, direction: PitchDirection) -> Vec<PitchChoice> {
    let shift = direction.source_shift();
    let source_bpm = pitch_shifted_tempo(bpm, shift);

    // Insertion-ordered grouping; the candidate list is small (13 entries)
    // so a linear scan beats a map here.
    let mut grouped: Vec<(PitchChoice, Vec<&'static str>)> = Vec::new();

    for candidate in candidates {
        let original_key = candidate.key.shift_fifths(shift);
        let label = candidate.kind.label();

        let existing = grouped.iter_mut().find(|(choice, _)| {
            choice.original_key == original_key && choice.becomes_key == candidate.key
        });
        match existing {
            Some((_, labels)) => labels.push(label),
            None => grouped.push((
                PitchChoice {
                    original_key,
                    bpm: source_bpm,
                    becomes_key: candidate.key,
                    match_type: String::new(),
                },
                vec![label],
            )),
        }
    }

    grouped
        .into_iter()
        .map(|(mut choice, labels)| {
            choice.match_type = labels.join(" or ");
            choice
        })
        .collect()
}
