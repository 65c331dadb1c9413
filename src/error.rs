//! Utility module with hueshift's errors.

/// An erroneous color format.
///
/// Every variant describes one way a color string can fail to parse as either
/// the hashed hexadecimal format or the `rgb(r, g, b)` function format. The
/// format layer in [`crate::string`] reports the fine-grained variant; callers
/// that only care whether the input was usable can treat the entire enumeration
/// as a single invalid-format condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that is neither hashed hexadecimal nor an `rgb()`
    /// function. For example, `hsl(0 0% 0%)` matches no supported format.
    UnknownFormat,

    /// A hexadecimal color with an unexpected number of digits. For example,
    /// `#ffff` has four digits, which is neither three nor six.
    UnexpectedCharacters,

    /// A hexadecimal color with a malformed digit. For example, `#0g0`
    /// contains `g`, which is not a hexadecimal digit.
    MalformedHex,

    /// An `rgb()` function without the closing parenthesis. For example,
    /// `rgb(1, 2, 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// An `rgb()` function that is missing a component. For example,
    /// `rgb(1, 2)` has two components instead of three, whereas `rgb(1,,3)`
    /// has an empty second component.
    MissingCoordinate,

    /// An `rgb()` function with a component that is not an unsigned integer.
    /// For example, `rgb(1, 2, x)` has a malformed third component.
    MalformedInteger,

    /// An `rgb()` function with a component that is too large, either because
    /// it has more than three digits or because it exceeds 255 where a
    /// channel value is required. For example, `rgb(1000, 2, 3)` has an
    /// oversized first component.
    OversizedCoordinate,

    /// An `rgb()` function with more than three components. For example,
    /// `rgb(1, 2, 3, 4)` has one component too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should be hexadecimal or `rgb(r, g, b)` but is neither")
            }
            UnexpectedCharacters => {
                f.write_str("hexadecimal color should have 3 or 6 digits but does not")
            }
            MalformedHex => {
                f.write_str("hexadecimal color should contain only hexadecimal digits but does not")
            }
            NoClosingParenthesis => {
                f.write_str("rgb() color should include a closing parenthesis but has none")
            }
            MissingCoordinate => {
                f.write_str("rgb() color should have 3 components but is missing one")
            }
            MalformedInteger => {
                f.write_str("rgb() color components should be unsigned integers but are not")
            }
            OversizedCoordinate => {
                f.write_str("rgb() color components should be at most 3 digits and 255 but are not")
            }
            TooManyCoordinates => {
                f.write_str("rgb() color should have 3 components but has more")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
