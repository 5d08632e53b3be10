//! Camelot key notation and wheel arithmetic
//!
//! The wheel is the fixed 24-key cycle `1A..12A, 1B..12B`. Minor keys carry
//! the letter `A`, major keys `B`. Moving one semitone of pitch corresponds
//! to seven steps along this fifths-ordered cycle.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Key mode (the Camelot letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Minor keys, Camelot letter `A`
    Minor,
    /// Major keys, Camelot letter `B`
    Major,
}

impl Mode {
    /// Camelot letter for this mode (`'A'` minor, `'B'` major)
    pub fn letter(&self) -> char {
        match self {
            Mode::Minor => 'A',
            Mode::Major => 'B',
        }
    }

    /// The other mode
    pub fn opposite(&self) -> Mode {
        match self {
            Mode::Minor => Mode::Major,
            Mode::Major => Mode::Minor,
        }
    }
}

/// One of the 24 Camelot wheel keys
///
/// Internally a fixed wheel position in `0..24` over the ordered cycle
/// `1A..12A, 1B..12B`, so every value in existence is a valid key and wheel
/// arithmetic can never produce an out-of-range result. Strings enter and
/// leave through [`FromStr`]/[`fmt::Display`] only.
///
/// # Example
///
/// ```
/// use harmonic_match::CamelotKey;
///
/// let key: CamelotKey = "8A".parse()?;
/// assert_eq!(key.number(), 8);
/// assert_eq!(key.to_string(), "8A");
/// # Ok::<(), harmonic_match::EngineError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CamelotKey(u8);

impl CamelotKey {
    /// Create a key from its hour number (1-12) and mode
    ///
    /// Returns `None` if `number` is outside `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use harmonic_match::{CamelotKey, Mode};
    ///
    /// assert_eq!(CamelotKey::new(8, Mode::Minor).unwrap().to_string(), "8A");
    /// assert_eq!(CamelotKey::new(13, Mode::Minor), None);
    /// ```
    pub fn new(number: u8, mode: Mode) -> Option<Self> {
        if !(1..=12).contains(&number) {
            return None;
        }
        let offset = match mode {
            Mode::Minor => 0,
            Mode::Major => 12,
        };
        Some(CamelotKey(number - 1 + offset))
    }

    /// Iterate over all 24 keys in wheel order (`1A..12A, 1B..12B`)
    pub fn all() -> impl Iterator<Item = CamelotKey> {
        (0..24).map(CamelotKey)
    }

    /// Hour number on the wheel (1-12)
    pub fn number(self) -> u8 {
        self.0 % 12 + 1
    }

    /// Key mode (minor for `A`, major for `B`)
    pub fn mode(self) -> Mode {
        if self.0 < 12 {
            Mode::Minor
        } else {
            Mode::Major
        }
    }

    /// Position in `0..24` along the `1A..12A, 1B..12B` cycle
    ///
    /// Used as the index into the static wheel reference table.
    pub fn position(self) -> usize {
        self.0 as usize
    }

    fn from_position(position: i32) -> Self {
        debug_assert!((0..24).contains(&position));
        CamelotKey(position as u8)
    }

    /// Shift by whole semitones along the full 24-key cycle
    ///
    /// One semitone is seven wheel positions (the wheel is laid out in
    /// fifths), wrapping modulo 24. This models pitching a track up or down
    /// on a player whose pitch and tempo move together.
    ///
    /// # Example
    ///
    /// ```
    /// use harmonic_match::CamelotKey;
    ///
    /// let key: CamelotKey = "8A".parse()?;
    /// assert_eq!(key.shift_fifths(1).to_string(), "3B");
    /// assert_eq!(key.shift_fifths(1).shift_fifths(-1), key);
    /// # Ok::<(), harmonic_match::EngineError>(())
    /// ```
    pub fn shift_fifths(self, semitones: i32) -> Self {
        let position = (self.0 as i32 + semitones * 7).rem_euclid(24);
        CamelotKey::from_position(position)
    }

    /// Shift the hour number, keeping the mode
    ///
    /// Wraps modulo 12 into `1..=12`, so moving below 1 or above 12 lands
    /// back on the ring of the same mode.
    ///
    /// # Example
    ///
    /// ```
    /// use harmonic_match::CamelotKey;
    ///
    /// let key: CamelotKey = "1A".parse()?;
    /// assert_eq!(key.shift_number(-7).to_string(), "6A");
    /// assert_eq!(key.shift_number(1).to_string(), "2A");
    /// # Ok::<(), harmonic_match::EngineError>(())
    /// ```
    pub fn shift_number(self, delta: i32) -> Self {
        let number = (i32::from(self.number()) - 1 + delta).rem_euclid(12) as u8 + 1;
        // number is back in 1..=12, so new() cannot fail
        CamelotKey::new(number, self.mode()).unwrap_or(self)
    }

    /// Relative key: same hour number, opposite mode
    ///
    /// The minor/major pair sharing a key signature (e.g. `8A` ↔ `8B`).
    pub fn relative(self) -> Self {
        match self.mode() {
            Mode::Minor => CamelotKey(self.0 + 12),
            Mode::Major => CamelotKey(self.0 - 12),
        }
    }
}

impl fmt::Display for CamelotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number(), self.mode().letter())
    }
}

impl fmt::Debug for CamelotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for CamelotKey {
    type Err = EngineError;

    /// Parse Camelot notation (`"1A"` through `"12B"`)
    ///
    /// Accepts exactly the pattern `([1-9]|1[0-2])[AB]`: no leading zeros,
    /// no lowercase letters, no surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidKey(format!("expected 1A-12B notation, got {:?}", s));

        if !s.is_ascii() || s.len() < 2 || s.len() > 3 {
            return Err(invalid());
        }

        let (num_str, letter) = s.split_at(s.len() - 1);
        let mode = match letter {
            "A" => Mode::Minor,
            "B" => Mode::Major,
            _ => return Err(invalid()),
        };

        if num_str.starts_with('0') {
            return Err(invalid());
        }
        let number: u8 = num_str.parse().map_err(|_| invalid())?;

        CamelotKey::new(number, mode).ok_or_else(invalid)
    }
}

impl Serialize for CamelotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CamelotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
