//! Hex color parsing for the theme's primary-color accents.
//!
//! Themes reference a primary color through the `--md-primary-color` custom
//! property, and derive a translucent variant for backgrounds and accents.
//! Only hex input is supported (`#rgb` or `#rrggbb`); malformed input is
//! rejected at this boundary rather than leaking `NaN` channel values into
//! generated markup.

use crate::error::Error;

/// Converts a hex color to an `rgba(r, g, b, a)` string.
///
/// The `#` prefix is optional. Three-digit shorthand expands by doubling
/// each digit, so `#abc` and `#aabbcc` are the same color.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for lengths other than 3 or 6 digits and
/// for non-hex characters.
///
/// # Example
///
/// ```rust
/// use mdpress::style::hex_to_rgba;
///
/// assert_eq!(hex_to_rgba("#0f4c81", 0.2).unwrap(), "rgba(15, 76, 129, 0.2)");
/// assert_eq!(hex_to_rgba("#abc", 1.0).unwrap(), hex_to_rgba("#aabbcc", 1.0).unwrap());
/// ```
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Result<String, Error> {
    let (r, g, b) = parse_hex(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}

/// Parses a hex color into its RGB channels.
fn parse_hex(hex: &str) -> Result<(u8, u8, u8), Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || Error::InvalidColor(hex.to_string());

    // Length is in bytes and the slicing below is byte-indexed; multi-byte
    // input must fail as invalid, not trip a char boundary.
    if !digits.is_ascii() {
        return Err(invalid());
    }

    match digits.len() {
        // #rgb -> #rrggbb: doubling a nibble's digit is the same as
        // multiplying its value by 17.
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).map_err(|_| invalid())? * 17;
            let g = u8::from_str_radix(&digits[1..2], 16).map_err(|_| invalid())? * 17;
            let b = u8::from_str_radix(&digits[2..3], 16).map_err(|_| invalid())? * 17;
            Ok((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
            let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
            let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
            Ok((r, g, b))
        }
        _ => Err(invalid()),
    }
}
