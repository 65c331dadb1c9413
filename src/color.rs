use crate::error::ColorFormatError;
use crate::string::{is_valid_hex_color, parse_hex, parse_rgb_function};

/// A true RGB color with three 8-bit channels.
///
/// ```
/// # use hueshift::Rgb;
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(sand.coordinates(), [0xee, 0xdc, 0xad]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access the red channel.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Access the green channel.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue channel.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Apply the function to every channel, producing a new color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn map(&self, f: impl FnMut(u8) -> u8) -> Self {
        Self(self.0.map(f))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(coordinates: [u8; 3]) -> Self {
        Self(coordinates)
    }
}

impl TryFrom<[u32; 3]> for Rgb {
    type Error = ColorFormatError;

    /// Narrow parsed `rgb()` components to channels, which requires that every
    /// component is at most 255.
    fn try_from(components: [u32; 3]) -> Result<Self, Self::Error> {
        let [c1, c2, c3] = components.map(u8::try_from);
        match (c1, c2, c3) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self([r, g, b])),
            _ => Err(ColorFormatError::OversizedCoordinate),
        }
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The textual notation a color was written in.
///
/// Operations that accept colors in either notation detect the format while
/// parsing and echo it on output, so that a hexadecimal input yields a
/// hexadecimal result and an `rgb()` input an `rgb()` result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// Hashed hexadecimal notation, `#RRGGBB` or `#RGB`.
    Hex,
    /// Function notation, `rgb(r, g, b)`.
    Rgb,
}

/// A color parsed from either supported notation.
///
/// [`Color::parse`] detects the notation once, up front, and the resulting
/// value carries both the channel values and the [`ColorFormat`] tag. The
/// `Display` implementation renders the color back in its source notation,
/// which is how derived operations honor the echo-the-input-format contract
/// without re-parsing per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
    format: ColorFormat,
}

impl Color {
    /// Parse the string in either supported notation.
    ///
    /// Hexadecimal colors take priority; a string that is not a valid
    /// hexadecimal color must parse as an `rgb()` function with components of
    /// at most 255 each.
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        if is_valid_hex_color(s) {
            Ok(Self {
                rgb: parse_hex(s)?,
                format: ColorFormat::Hex,
            })
        } else {
            Ok(Self {
                rgb: Rgb::try_from(parse_rgb_function(s)?)?,
                format: ColorFormat::Rgb,
            })
        }
    }

    /// Access the channel values.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Access the detected notation.
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// Create a new color with the given channel values but this color's
    /// notation. Derived operations use this method to render computed
    /// channels back in the notation of their input.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_rgb(&self, rgb: Rgb) -> Self {
        Self {
            rgb,
            format: self.format,
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Color {
    /// Render this color in its source notation, i.e., lowercase hashed
    /// hexadecimal or `rgb()` with `", "`-separated components.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb.coordinates();
        match self.format {
            ColorFormat::Hex => f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b)),
            ColorFormat::Rgb => f.write_fmt(format_args!("rgb({}, {}, {})", r, g, b)),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, ColorFormat, Rgb};
    use crate::error::ColorFormatError;

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        let color = Color::parse("#1a2b3c")?;
        assert_eq!(color.rgb(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(color.format(), ColorFormat::Hex);

        let color = Color::parse("1A2B3C")?;
        assert_eq!(color.rgb(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(color.format(), ColorFormat::Hex);

        let color = Color::parse("rgb(10,20,30)")?;
        assert_eq!(color.rgb(), Rgb::new(10, 20, 30));
        assert_eq!(color.format(), ColorFormat::Rgb);

        assert_eq!(Color::parse("teal"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            Color::parse("rgb(256, 0, 0)"),
            Err(ColorFormatError::OversizedCoordinate)
        );
        assert_eq!(
            Color::parse("rgb(+10, 0, 0)"),
            Err(ColorFormatError::MalformedInteger)
        );

        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), ColorFormatError> {
        // Hexadecimal output is canonical: lowercase, hashed, two digits per
        // channel.
        assert_eq!(Color::parse("#1a2b3c")?.to_string(), "#1a2b3c");
        assert_eq!(Color::parse("1A2B3C")?.to_string(), "#1a2b3c");
        assert_eq!(Color::parse("#fff")?.to_string(), "#ffffff");
        assert_eq!(Color::parse("rgb(10,20,30)")?.to_string(), "rgb(10, 20, 30)");

        // Round-trip for canonical six-digit colors.
        for s in ["#000000", "#0080ff", "#abcdef", "#ffffff"] {
            assert_eq!(Color::parse(s)?.to_string(), s);
        }

        Ok(())
    }

    #[test]
    fn test_with_rgb() -> Result<(), ColorFormatError> {
        let color = Color::parse("rgb(1, 2, 3)")?;
        let other = color.with_rgb(Rgb::new(4, 5, 6));
        assert_eq!(other.to_string(), "rgb(4, 5, 6)");
        assert_eq!(other.format(), ColorFormat::Rgb);

        Ok(())
    }

    #[test]
    fn test_try_from_components() {
        assert_eq!(Rgb::try_from([1_u32, 2, 3]), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(
            Rgb::try_from([300_u32, 0, 0]),
            Err(ColorFormatError::OversizedCoordinate)
        );
    }
}
