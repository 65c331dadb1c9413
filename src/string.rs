use crate::color::Rgb;
use crate::error::ColorFormatError;

/// Determine whether the string is a valid hexadecimal color.
///
/// A valid hexadecimal color comprises exactly 3 or 6 hexadecimal digits,
/// lowercase or uppercase, preceded by an optional `#`.
pub fn is_valid_hex_color(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Determine whether the string is a valid `rgb()` color.
///
/// After removal of all whitespace, a valid `rgb()` color matches
/// `rgb(d{1,3},d{1,3},d{1,3})`. The check is purely syntactic: a component
/// such as `999` passes even though it exceeds the 255 maximum for a channel.
pub fn is_valid_rgb_color(s: &str) -> bool {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    let Some(body) = compact
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };

    let mut count = 0;
    for component in body.split(',') {
        count += 1;
        if component.is_empty()
            || 3 < component.len()
            || !component.chars().all(|c| c.is_ascii_digit())
        {
            return false;
        }
    }

    count == 3
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in hexadecimal format. This function transparently handles
/// single-digit coordinates, which duplicate into double-digit ones, and an
/// optional leading `#`.
pub(crate) fn parse_hex(s: &str) -> Result<Rgb, ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(digits: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = digits.len() / 3;
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok(Rgb::new(c1, c2, c3))
}

/// Parse a color in `rgb()` function format. If successful, this function
/// returns the three components as unsigned integers of at most three digits
/// each. It does not enforce the 255 channel maximum; callers that need
/// channel values convert through [`Rgb::try_from`].
pub(crate) fn parse_rgb_function(s: &str) -> Result<[u32; 3], ColorFormatError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    let body = compact
        .strip_prefix("rgb(")
        .ok_or(ColorFormatError::UnknownFormat)?
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    fn parse_coordinate(s: Option<&str>) -> Result<u32, ColorFormatError> {
        let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
        if t.is_empty() {
            return Err(ColorFormatError::MissingCoordinate);
        } else if 3 < t.len() {
            return Err(ColorFormatError::OversizedCoordinate);
        } else if !t.chars().all(|c| c.is_ascii_digit()) {
            // u32's FromStr tolerates a leading `+`, which the component
            // grammar does not.
            return Err(ColorFormatError::MalformedInteger);
        }

        t.parse().map_err(|_| ColorFormatError::MalformedInteger)
    }

    let mut iter = body.split(',');
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the hexadecimal color to an RGB color.
///
/// This function is opportunistic about its input: a string that already is a
/// valid `rgb()` color passes through as the equivalent [`Rgb`] value. Anything
/// else must be a valid hexadecimal color, with three digits expanding by
/// duplication, e.g., `#a52` reading as `#aa5522`.
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorFormatError> {
    if is_valid_rgb_color(s) {
        return Rgb::try_from(parse_rgb_function(s)?);
    }

    parse_hex(s)
}

/// Convert the `rgb()` color to a hexadecimal color.
///
/// A string that already is a valid hexadecimal color passes through
/// unchanged, hash or not, uppercase or not. Anything else must match the
/// `rgb()` function format; each component then renders as two zero-padded
/// lowercase hexadecimal digits. Components are *not* clamped: a component
/// beyond 255 renders with however many digits its value takes, so callers
/// computing channel values must clamp before formatting.
pub fn rgb_to_hex(s: &str) -> Result<String, ColorFormatError> {
    if is_valid_hex_color(s) {
        return Ok(s.to_string());
    }

    let [c1, c2, c3] = parse_rgb_function(s)?;
    Ok(format!("#{:02x}{:02x}{:02x}", c1, c2, c3))
}

// ====================================================================================================================
