//! Display helpers
//!
//! Presentation-side numeric contracts that don't depend on the matching
//! engine. Currently just the WCAG contrast picker used to keep key badges
//! legible on the wheel colors.

use crate::error::EngineError;

/// Foreground returned on light backgrounds
const DARK: &str = "#000000";
/// Foreground returned on dark backgrounds
const LIGHT: &str = "#ffffff";

/// Pick a legible foreground color for a hex background
///
/// Computes WCAG relative luminance from the sRGB-gamma-corrected channels
/// and returns black above a luminance of 0.4, white otherwise. The 0.4
/// threshold (instead of the usual 0.5) biases toward white text.
///
/// # Arguments
///
/// * `hex_color` - Background color as `#RRGGBB`
///
/// # Errors
///
/// Returns `EngineError::InvalidColor` if the input is not a 7-character
/// `#RRGGBB` string.
///
/// # Example
///
/// ```
/// use harmonic_match::contrast_color;
///
/// assert_eq!(contrast_color("#FFFFFF")?, "#000000");
/// assert_eq!(contrast_color("#000000")?, "#ffffff");
/// # Ok::<(), harmonic_match::EngineError>(())
/// ```
pub fn contrast_color(hex_color: &str) -> Result<&'static str, EngineError> {
    let (r, g, b) = parse_hex(hex_color)?;

    let luminance =
        0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b);

    if luminance > 0.4 {
        Ok(DARK)
    } else {
        Ok(LIGHT)
    }
}

fn parse_hex(hex_color: &str) -> Result<(u8, u8, u8), EngineError> {
    let invalid = || EngineError::InvalidColor(format!("expected #RRGGBB, got {:?}", hex_color));

    let digits = hex_color.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Gamma-expand one sRGB channel to linear light
fn channel_luminance(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(contrast_color("#FFFFFF").unwrap(), "#000000");
        assert_eq!(contrast_color("#000000").unwrap(), "#ffffff");
    }

    #[test]
    fn test_threshold_bias() {
        // mid-grey (#808080) has luminance ~0.216, below the 0.4 threshold,
        // so it still gets white text
        assert_eq!(contrast_color("#808080").unwrap(), "#ffffff");
        // a bright yellow clears it
        assert_eq!(contrast_color("#FFFF00").unwrap(), "#000000");
    }

    #[test]
    fn test_wheel_palette_is_dark() {
        // every color in the wheel table should take white text
        for key in crate::wheel::CamelotKey::all() {
            let entry = crate::wheel::wheel_entry(key);
            assert_eq!(contrast_color(entry.color).unwrap(), "#ffffff", "{}", key);
        }
    }

    #[test]
    fn test_lowercase_hex_accepted() {
        assert_eq!(contrast_color("#ffffff").unwrap(), "#000000");
    }

    #[test]
    fn test_invalid_inputs() {
        for s in ["", "#FFF", "FFFFFF", "#GGGGGG", "#FFFFFFF"] {
            assert!(contrast_color(s).is_err(), "accepted {:?}", s);
        }
    }
}
