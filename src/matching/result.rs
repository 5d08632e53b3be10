//! Match result types

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::tempo::TempoBand;
use crate::wheel::CamelotKey;

/// Match taxonomy label
///
/// The fixed set of category tags the engine assigns to compatible keys.
/// Serialized as the display label (e.g. `"Same Key"`, `"Perfect Fifth"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The queried key itself
    SameKey,
    /// Same number, opposite mode (shared key signature)
    Relative,
    /// Number ±1, same mode
    Adjacent,
    /// Same number, opposite mode, framed as a root-note move
    ///
    /// Computes the same key as [`MatchKind::Relative`]; the taxonomy
    /// labels it twice on purpose and the pitch-choice merger relies on
    /// seeing both labels.
    SameRoot,
    /// Cross-mode neighbor (minor −1 to major, major +1 to minor)
    Diagonal,
    /// Number ±7, same mode
    PerfectFifth,
    /// Number +4, same mode
    Related,
    /// Cross-mode advance (minor +3 to major, major −3 to minor)
    AdvancedMix,
    /// Number −2, same mode
    EnergyDrop,
    /// Number +7 or +2 at a pitched-up tempo; pitch-choice candidates only
    EnergyBoost,
}

impl MatchKind {
    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::SameKey => "Same Key",
            MatchKind::Relative => "Relative",
            MatchKind::Adjacent => "Adjacent",
            MatchKind::SameRoot => "Same Root",
            MatchKind::Diagonal => "Diagonal",
            MatchKind::PerfectFifth => "Perfect Fifth",
            MatchKind::Related => "Related",
            MatchKind::AdvancedMix => "Advanced Mix",
            MatchKind::EnergyDrop => "Energy Drop",
            MatchKind::EnergyBoost => "Energy Boost",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let kind = match label {
            "Same Key" => MatchKind::SameKey,
            "Relative" => MatchKind::Relative,
            "Adjacent" => MatchKind::Adjacent,
            "Same Root" => MatchKind::SameRoot,
            "Diagonal" => MatchKind::Diagonal,
            "Perfect Fifth" => MatchKind::PerfectFifth,
            "Related" => MatchKind::Related,
            "Advanced Mix" => MatchKind::AdvancedMix,
            "Energy Drop" => MatchKind::EnergyDrop,
            "Energy Boost" => MatchKind::EnergyBoost,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MatchKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for MatchKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MatchKind::from_label(&s)
            .ok_or_else(|| de::Error::custom(format!("unknown match type {:?}", s)))
    }
}

/// One compatible key candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The compatible key
    pub key: CamelotKey,

    /// BPM window in which this candidate mixes cleanly
    ///
    /// Derived from the *queried* tempo: the engine knows nothing about a
    /// track library, it only reports the window the caller should match
    /// actual tracks against.
    pub bpm_range: TempoBand,

    /// Category tag
    #[serde(rename = "type")]
    pub kind: MatchKind,

    /// Human-readable description of the move
    pub description: String,
}

/// One pitch-shift suggestion
///
/// A source key/tempo that lands on a compatible key after a one-semitone
/// pitch shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchChoice {
    /// Key to look for in the library
    pub original_key: CamelotKey,

    /// Tempo such a track should be near (the queried tempo shifted one
    /// semitone the other way)
    pub bpm: f64,

    /// Key it becomes after the shift
    pub becomes_key: CamelotKey,

    /// Category label, or several joined with `" or "` when multiple
    /// categories converge on the same key pair
    pub match_type: String,
}

/// The queried key's own summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalKey {
    /// The queried key
    pub key: CamelotKey,

    /// Tolerance band around the queried tempo
    pub bpm_range: TempoBand,

    /// Key this track becomes when pitched up one semitone
    pub pitched_up_becomes: CamelotKey,

    /// Key this track becomes when pitched down one semitone
    pub pitched_down_becomes: CamelotKey,
}

/// Complete result for one (key, BPM) query
///
/// Entirely derived from its inputs; recomputed on every query, never
/// cached or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Summary of the queried key
    pub original: OriginalKey,

    /// Perfect matches: same key, relative key
    pub perfect_matches: Vec<Match>,

    /// Good matches: adjacent keys, same root, diagonal
    pub good_matches: Vec<Match>,

    /// Advanced matches: fifths, related, cross-mode advance, energy drop
    pub advanced_matches: Vec<Match>,

    /// Keys that become compatible when pitched up one semitone
    pub pitch_up_choices: Vec<PitchChoice>,

    /// Keys that become compatible when pitched down one semitone
    pub pitch_down_choices: Vec<PitchChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(MatchKind::SameKey.label(), "Same Key");
        assert_eq!(MatchKind::PerfectFifth.label(), "Perfect Fifth");
        assert_eq!(MatchKind::EnergyBoost.label(), "Energy Boost");
    }

    #[test]
    fn test_kind_label_roundtrip() {
        let kinds = [
            MatchKind::SameKey,
            MatchKind::Relative,
            MatchKind::Adjacent,
            MatchKind::SameRoot,
            MatchKind::Diagonal,
            MatchKind::PerfectFifth,
            MatchKind::Related,
            MatchKind::AdvancedMix,
            MatchKind::EnergyDrop,
            MatchKind::EnergyBoost,
        ];
        for kind in kinds {
            assert_eq!(MatchKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(MatchKind::from_label("Sideways"), None);
    }

    #[test]
    fn test_match_serializes_kind_as_type() {
        let m = Match {
            key: "8A".parse().unwrap(),
            bpm_range: TempoBand {
                lower: 116.44,
                upper: 123.56,
            },
            kind: MatchKind::SameKey,
            description: "Perfect match - same key".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["key"], "8A");
        assert_eq!(json["type"], "Same Key");
        assert_eq!(json["bpm_range"]["lower"], 116.44);
    }
}
