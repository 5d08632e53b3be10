//! Match category generation
//!
//! Builds the fixed-order perfect/good/advanced candidate lists for a
//! queried key, plus the two energy-boost candidates that exist only as
//! pitch-shift targets.

use super::result::{Match, MatchKind};
use crate::config::EngineConfig;
use crate::tempo::{pitch_shifted_tempo, tempo_band};
use crate::wheel::{CamelotKey, Mode};

/// Perfect matches: the key itself and its relative
///
/// Two entries, fixed order. Both carry the queried tempo's tolerance band.
pub fn perfect_matches(key: CamelotKey, bpm: f64, config: &EngineConfig) -> Vec<Match> {
    let band = tempo_band(bpm, config.tolerance_percent);
    vec![
        Match {
            key,
            bpm_range: band,
            kind: MatchKind::SameKey,
            description: "Perfect match - same key".to_string(),
        },
        Match {
            key: key.relative(),
            bpm_range: band,
            kind: MatchKind::Relative,
            description: match key.mode() {
                Mode::Minor => "Relative major",
                Mode::Major => "Relative minor",
            }
            .to_string(),
        },
    ]
}

/// Good matches: adjacent keys, same root, diagonal neighbor
///
/// Four entries, fixed order. The Same Root entry computes the same key as
/// the perfect list's Relative entry; the taxonomy keeps both on purpose.
pub fn good_matches(key: CamelotKey, bpm: f64, config: &EngineConfig) -> Vec<Match> {
    let band = tempo_band(bpm, config.tolerance_percent);
    let diagonal = match key.mode() {
        // minor moves one back and brightens, major moves one forward and darkens
        Mode::Minor => key.shift_number(-1).relative(),
        Mode::Major => key.shift_number(1).relative(),
    };
    vec![
        Match {
            key: key.shift_number(-1),
            bpm_range: band,
            kind: MatchKind::Adjacent,
            description: "Adjacent key (-1)".to_string(),
        },
        Match {
            key: key.shift_number(1),
            bpm_range: band,
            kind: MatchKind::Adjacent,
            description: "Adjacent key (+1)".to_string(),
        },
        Match {
            key: key.relative(),
            bpm_range: band,
            kind: MatchKind::SameRoot,
            description: match key.mode() {
                Mode::Minor => "Same root note (minor to major)",
                Mode::Major => "Same root note (major to minor)",
            }
            .to_string(),
        },
        Match {
            key: diagonal,
            bpm_range: band,
            kind: MatchKind::Diagonal,
            description: match key.mode() {
                Mode::Minor => "Diagonal mixing (A to B: -1)",
                Mode::Major => "Diagonal mixing (B to A: +1)",
            }
            .to_string(),
        },
    ]
}

/// Advanced matches: fifths, related key, cross-mode advance, energy drop
///
/// Five entries, fixed order.
pub fn advanced_matches(key: CamelotKey, bpm: f64, config: &EngineConfig) -> Vec<Match> {
    let band = tempo_band(bpm, config.tolerance_percent);
    let cross_mode = match key.mode() {
        Mode::Minor => key.shift_number(3).relative(),
        Mode::Major => key.shift_number(-3).relative(),
    };
    vec![
        Match {
            key: key.shift_number(-7),
            bpm_range: band,
            kind: MatchKind::PerfectFifth,
            description: "Perfect fifth down".to_string(),
        },
        Match {
            key: key.shift_number(7),
            bpm_range: band,
            kind: MatchKind::PerfectFifth,
            description: "Perfect fifth up".to_string(),
        },
        Match {
            key: key.shift_number(4),
            bpm_range: band,
            kind: MatchKind::Related,
            description: "Related key (+4)".to_string(),
        },
        Match {
            key: cross_mode,
            bpm_range: band,
            kind: MatchKind::AdvancedMix,
            description: "Advanced harmonic mixing (+3 cross-mode)".to_string(),
        },
        Match {
            key: key.shift_number(-2),
            bpm_range: band,
            kind: MatchKind::EnergyDrop,
            description: "Energy drop (-2 for energy drop)".to_string(),
        },
    ]
}

/// Energy-boost candidates, used only as pitch-shift targets
///
/// Two entries whose bands sit at the pitched-up tempo rather than the
/// queried one; they never appear in the three visible match lists.
pub fn energy_boost_matches(key: CamelotKey, bpm: f64, config: &EngineConfig) -> Vec<Match> {
    vec![
        Match {
            key: key.shift_number(7),
            bpm_range: tempo_band(pitch_shifted_tempo(bpm, 1), config.tolerance_percent),
            kind: MatchKind::EnergyBoost,
            description: "Energy boost (+7 for 1 semitone)".to_string(),
        },
        Match {
            key: key.shift_number(2),
            bpm_range: tempo_band(pitch_shifted_tempo(bpm, 2), config.tolerance_percent),
            kind: MatchKind::EnergyBoost,
            description: "Energy boost (+2 for 2 semitones)".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tempo::TempoBand;

    fn key(s: &str) -> CamelotKey {
        s.parse().unwrap()
    }

    fn keys(matches: &[Match]) -> Vec<String> {
        matches.iter().map(|m| m.key.to_string()).collect()
    }

    #[test]
    fn test_perfect_matches_8a() {
        let config = EngineConfig::default();
        let matches = perfect_matches(key("8A"), 120.0, &config);
        assert_eq!(keys(&matches), ["8A", "8B"]);
        assert_eq!(matches[0].kind, MatchKind::SameKey);
        assert_eq!(matches[1].kind, MatchKind::Relative);
        assert_eq!(matches[1].description, "Relative major");
        for m in &matches {
            assert_eq!(
                m.bpm_range,
                TempoBand {
                    lower: 116.44,
                    upper: 123.56
                }
            );
        }
    }

    #[test]
    fn test_perfect_matches_major_description() {
        let config = EngineConfig::default();
        let matches = perfect_matches(key("5B"), 120.0, &config);
        assert_eq!(keys(&matches), ["5B", "5A"]);
        assert_eq!(matches[1].description, "Relative minor");
    }

    #[test]
    fn test_good_matches_minor() {
        let config = EngineConfig::default();
        let matches = good_matches(key("8A"), 120.0, &config);
        assert_eq!(keys(&matches), ["7A", "9A", "8B", "7B"]);
        assert_eq!(matches[2].kind, MatchKind::SameRoot);
        assert_eq!(matches[2].description, "Same root note (minor to major)");
        assert_eq!(matches[3].kind, MatchKind::Diagonal);
        assert_eq!(matches[3].description, "Diagonal mixing (A to B: -1)");
    }

    #[test]
    fn test_good_matches_major_diagonal() {
        let config = EngineConfig::default();
        let matches = good_matches(key("8B"), 120.0, &config);
        assert_eq!(keys(&matches), ["7B", "9B", "8A", "9A"]);
        assert_eq!(matches[3].description, "Diagonal mixing (B to A: +1)");
    }

    #[test]
    fn test_advanced_matches_minor() {
        let config = EngineConfig::default();
        let matches = advanced_matches(key("8A"), 120.0, &config);
        assert_eq!(keys(&matches), ["1A", "3A", "12A", "11B", "6A"]);
    }

    #[test]
    fn test_advanced_matches_wraps_below_one() {
        // 1 − 7 = −6 normalizes to 6 on the same ring
        let config = EngineConfig::default();
        let matches = advanced_matches(key("1A"), 120.0, &config);
        assert_eq!(matches[0].key, key("6A"));
        assert_eq!(matches[0].description, "Perfect fifth down");
    }

    #[test]
    fn test_advanced_matches_major_cross_mode() {
        let config = EngineConfig::default();
        let matches = advanced_matches(key("8B"), 120.0, &config);
        // major goes −3 and switches to minor
        assert_eq!(matches[3].key, key("5A"));
    }

    #[test]
    fn test_energy_boost_bands_use_shifted_tempo() {
        let config = EngineConfig::default();
        let matches = energy_boost_matches(key("8A"), 120.0, &config);
        assert_eq!(keys(&matches), ["3A", "10A"]);
        // +1 semitone: 127.14 BPM, +2 semitones: 134.7 BPM
        assert_eq!(
            matches[0].bpm_range,
            tempo_band(127.14, config.tolerance_percent)
        );
        assert_eq!(
            matches[1].bpm_range,
            tempo_band(134.7, config.tolerance_percent)
        );
    }

    #[test]
    fn test_same_root_duplicates_relative() {
        // intentional taxonomy overlap, the pitch-choice merger depends on it
        let config = EngineConfig::default();
        for k in CamelotKey::all() {
            let perfect = perfect_matches(k, 120.0, &config);
            let good = good_matches(k, 120.0, &config);
            assert_eq!(perfect[1].key, good[2].key);
            assert_ne!(perfect[1].kind, good[2].kind);
        }
    }
}
