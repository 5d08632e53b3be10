//! Tempo transforms
//!
//! Closed-form helpers shared by the match generators: tolerance bands
//! around a queried tempo, and equal-tempered pitch/tempo scaling for
//! players whose pitch and tempo move together.

use serde::{Deserialize, Serialize};

/// Inclusive BPM window around a tempo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoBand {
    /// Lower bound in BPM
    pub lower: f64,
    /// Upper bound in BPM
    pub upper: f64,
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tolerance band around a tempo
///
/// Returns `(bpm·(1−p/100), bpm·(1+p/100))`, both rounded to two decimals.
/// The default engine tolerance of 2.97% models the pitch-fader range a
/// track can be nudged without drifting out of its Camelot key.
///
/// # Example
///
/// ```
/// use harmonic_match::{tempo_band, TempoBand};
///
/// assert_eq!(
///     tempo_band(120.0, 2.97),
///     TempoBand { lower: 116.44, upper: 123.56 }
/// );
/// ```
pub fn tempo_band(bpm: f64, tolerance_percent: f64) -> TempoBand {
    let fraction = tolerance_percent / 100.0;
    TempoBand {
        lower: round2(bpm * (1.0 - fraction)),
        upper: round2(bpm * (1.0 + fraction)),
    }
}

/// Tempo after a whole-semitone pitch shift
///
/// `bpm · 2^(semitones/12)`, rounded to two decimals: the equal-tempered
/// frequency ratio, applied to tempo because fixed-ratio players shift
/// pitch and tempo together.
///
/// # Example
///
/// ```
/// use harmonic_match::pitch_shifted_tempo;
///
/// assert_eq!(pitch_shifted_tempo(120.0, 1), 127.14);
/// assert_eq!(pitch_shifted_tempo(120.0, -1), 113.26);
/// ```
pub fn pitch_shifted_tempo(bpm: f64, semitones: i32) -> f64 {
    let factor = 2f64.powf(f64::from(semitones) / 12.0);
    round2(bpm * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempo_band_reference_values() {
        // 120 × 0.9703 = 116.436 → 116.44, 120 × 1.0297 = 123.564 → 123.56
        let band = tempo_band(120.0, 2.97);
        assert_eq!(band.lower, 116.44);
        assert_eq!(band.upper, 123.56);
    }

    #[test]
    fn test_tempo_band_other_tempos() {
        let band = tempo_band(174.0, 2.97);
        assert_eq!(band.lower, 168.83); // 174 × 0.9703 = 168.8322
        assert_eq!(band.upper, 179.17); // 174 × 1.0297 = 179.1678

        let band = tempo_band(60.0, 2.97);
        assert_eq!(band.lower, 58.22); // 58.218
        assert_eq!(band.upper, 61.78); // 61.782
    }

    #[test]
    fn test_tempo_band_zero_tolerance() {
        let band = tempo_band(128.0, 0.0);
        assert_eq!(band.lower, 128.0);
        assert_eq!(band.upper, 128.0);
    }

    #[test]
    fn test_pitch_shifted_tempo_one_semitone() {
        // 120 × 2^(1/12) = 127.1355… and 120 × 2^(−1/12) = 113.2649…
        assert_eq!(pitch_shifted_tempo(120.0, 1), 127.14);
        assert_eq!(pitch_shifted_tempo(120.0, -1), 113.26);
    }

    #[test]
    fn test_pitch_shifted_tempo_two_semitones() {
        // 120 × 2^(2/12) = 134.6954…
        assert_eq!(pitch_shifted_tempo(120.0, 2), 134.7);
    }

    #[test]
    fn test_pitch_shifted_tempo_zero_is_identity() {
        assert_eq!(pitch_shifted_tempo(120.0, 0), 120.0);
        assert_eq!(pitch_shifted_tempo(93.5, 0), 93.5);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(116.436), 116.44);
        assert_eq!(round2(113.2649), 113.26);
        assert_eq!(round2(120.0), 120.0);
    }
}
