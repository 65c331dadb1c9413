//! Derived-color operations.
//!
//! Unless noted otherwise, every operation in this module accepts a color in
//! either hexadecimal or `rgb()` notation, computes on the channel values, and
//! renders its result in the notation of the input. The exceptions are
//! [`darker_hex_color`], [`compare_colors_by_brightness`], and
//! [`sort_colors_by_brightness`], which build on [`hex_color_brightness`] and
//! hence accept hexadecimal colors only.

use std::cmp::Ordering;

use crate::color::{Color, Rgb};
use crate::error::ColorFormatError;
use crate::space::{from_hsl, hex_color_brightness, luminance, to_hsl};
use crate::Float;

/// Scale the color's brightness by the given signed fraction.
///
/// Every channel scales to `channel * (1 + percent)`, rounds, and clamps into
/// `0..=255` independently, so `-0.1` darkens by a tenth and `0.1` brightens
/// by a tenth. Note that scaling cannot brighten pure black: all channels of
/// `#000000` are zero and stay zero under any `percent`.
pub fn adjust_brightness(color: &str, percent: Float) -> Result<String, ColorFormatError> {
    let color = Color::parse(color)?;
    let adjusted = color
        .rgb()
        .map(|c| (c as Float * (1.0 + percent)).round().clamp(0.0, 255.0) as u8);

    Ok(color.with_rgb(adjusted).to_string())
}

/// Pick black or white text for the given background color.
///
/// Returns `#000000` if the color's luminance exceeds one half and `#FFFFFF`
/// otherwise. Unlike the other derived operations, the result is always
/// hexadecimal, whatever the input notation: the two possible outputs are
/// fixed sentinel values, not derived colors.
pub fn contrast_color(color: &str) -> Result<&'static str, ColorFormatError> {
    let color = Color::parse(color)?;

    Ok(if luminance(color.rgb()) > 0.5 {
        "#000000"
    } else {
        "#FFFFFF"
    })
}

/// Compute the color's complement.
///
/// Every channel inverts to `255 - channel`, which makes the operation its own
/// inverse. The result renders in the input's notation.
pub fn complementary_color(color: &str) -> Result<String, ColorFormatError> {
    let color = Color::parse(color)?;
    Ok(color.with_rgb(color.rgb().map(|c| 255 - c)).to_string())
}

/// Of the two hexadecimal colors, return the one measuring *higher* on
/// [`hex_color_brightness`], with ties going to the second.
///
/// The name is a long-standing API anomaly: despite "darker", this function
/// has always returned the brighter color, and callers depend on exactly
/// that. Kept as is, documented here.
pub fn darker_hex_color<'a>(
    color1: &'a str,
    color2: &'a str,
) -> Result<&'a str, ColorFormatError> {
    let brightness1 = hex_color_brightness(color1)?;
    let brightness2 = hex_color_brightness(color2)?;

    Ok(if brightness1 > brightness2 {
        color1
    } else {
        color2
    })
}

/// Compare two hexadecimal colors by their perceptual brightness.
///
/// The result is a standard three-way comparison and hence directly usable
/// for ordering colors from darkest to brightest.
pub fn compare_colors_by_brightness(
    color1: &str,
    color2: &str,
) -> Result<Ordering, ColorFormatError> {
    let brightness1 = hex_color_brightness(color1)?;
    let brightness2 = hex_color_brightness(color2)?;

    Ok(brightness1.total_cmp(&brightness2))
}

/// Sort the hexadecimal colors from darkest to brightest.
///
/// The sort is stable, so colors of equal brightness keep their relative
/// order, and it returns a new vector; the input stays untouched. Any invalid
/// color fails the whole operation.
pub fn sort_colors_by_brightness<S: AsRef<str>>(
    colors: &[S],
) -> Result<Vec<String>, ColorFormatError> {
    let mut keyed = colors
        .iter()
        .map(|color| {
            let color = color.as_ref();
            hex_color_brightness(color).map(|brightness| (brightness, color.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(brightness1, _), (brightness2, _)| brightness1.total_cmp(brightness2));
    Ok(keyed.into_iter().map(|(_, color)| color).collect())
}

/// Compute hue-adjacent variations of the color.
///
/// The first variation sits 30 degrees below the color's hue, with every
/// further variation another 30 degrees below the previous one, at the
/// original saturation and lightness. The hue wraps with the sign-preserving
/// float remainder; the HSL conversion folds a negative angle back into the
/// circle. Results render in the input's notation, nearest variation first.
pub fn analogous_colors(color: &str, num_colors: usize) -> Result<Vec<String>, ColorFormatError> {
    let color = Color::parse(color)?;
    let [mut hue, saturation, lightness] = to_hsl(color.rgb());

    let mut variations = Vec::with_capacity(num_colors);
    for _ in 0..num_colors {
        hue = (hue - 30.0) % 360.0;
        variations.push(
            color
                .with_rgb(from_hsl(hue, saturation, lightness))
                .to_string(),
        );
    }

    Ok(variations)
}

/// Compute the color's two triadic companions.
///
/// These are the channel rotations `(b, r, g)` and `(g, b, r)`. That is a
/// straight permutation of the channels, not a 120-degree rotation in hue
/// space, and callers rely on the permutation's exact results. Results render
/// in the input's notation.
pub fn triadic_colors(color: &str) -> Result<[String; 2], ColorFormatError> {
    let color = Color::parse(color)?;
    let [r, g, b] = color.rgb().coordinates();

    Ok([
        color.with_rgb(Rgb::new(b, r, g)).to_string(),
        color.with_rgb(Rgb::new(g, b, r)).to_string(),
    ])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        adjust_brightness, analogous_colors, compare_colors_by_brightness, complementary_color,
        contrast_color, darker_hex_color, sort_colors_by_brightness, triadic_colors,
    };
    use crate::error::ColorFormatError;
    use std::cmp::Ordering;

    #[test]
    fn test_adjust_brightness() -> Result<(), ColorFormatError> {
        // Pure black cannot brighten under multiplicative scaling.
        assert_eq!(adjust_brightness("#000000", 0.1)?, "#000000");

        assert_eq!(adjust_brightness("#808080", 0.5)?, "#c0c0c0");
        assert_eq!(adjust_brightness("#646464", -0.1)?, "#5a5a5a");
        assert_eq!(adjust_brightness("rgb(100, 100, 100)", -0.1)?, "rgb(90, 90, 90)");

        // Channels clamp independently.
        assert_eq!(adjust_brightness("#ffffff", 0.5)?, "#ffffff");
        assert_eq!(adjust_brightness("#ff0080", 0.5)?, "#ff00c0");
        assert_eq!(adjust_brightness("#808080", -2.0)?, "#000000");

        assert_eq!(
            adjust_brightness("nope", 0.1),
            Err(ColorFormatError::UnknownFormat)
        );

        Ok(())
    }

    #[test]
    fn test_contrast_color() -> Result<(), ColorFormatError> {
        assert_eq!(contrast_color("#000000")?, "#FFFFFF");
        assert_eq!(contrast_color("#ffffff")?, "#000000");

        // Always hexadecimal, whatever the input notation.
        assert_eq!(contrast_color("rgb(255, 255, 255)")?, "#000000");
        assert_eq!(contrast_color("rgb(0, 0, 0)")?, "#FFFFFF");

        Ok(())
    }

    #[test]
    fn test_complementary_color() -> Result<(), ColorFormatError> {
        assert_eq!(complementary_color("#000000")?, "#ffffff");
        assert_eq!(complementary_color("#ff8000")?, "#007fff");
        assert_eq!(complementary_color("rgb(10, 20, 30)")?, "rgb(245, 235, 225)");

        // The complement of the complement is the original color, in its
        // canonical rendering.
        for color in ["#123456", "#fff", "rgb(10, 20, 30)"] {
            let once = complementary_color(color)?;
            let twice = complementary_color(&once)?;
            assert_eq!(twice, crate::Color::parse(color)?.to_string());
        }

        Ok(())
    }

    #[test]
    fn test_darker_hex_color() -> Result<(), ColorFormatError> {
        // The anomaly: "darker" picks the brighter color.
        assert_eq!(darker_hex_color("#000000", "#ffffff")?, "#ffffff");
        assert_eq!(darker_hex_color("#ffffff", "#000000")?, "#ffffff");

        // Ties go to the second argument.
        assert_eq!(darker_hex_color("#ffffff", "#fff")?, "#fff");

        Ok(())
    }

    #[test]
    fn test_compare_colors_by_brightness() -> Result<(), ColorFormatError> {
        assert_eq!(
            compare_colors_by_brightness("#000000", "#ffffff")?,
            Ordering::Less
        );
        assert_eq!(
            compare_colors_by_brightness("#ffffff", "#000000")?,
            Ordering::Greater
        );
        assert_eq!(
            compare_colors_by_brightness("#123456", "#123456")?,
            Ordering::Equal
        );

        Ok(())
    }

    #[test]
    fn test_sort_colors_by_brightness() -> Result<(), ColorFormatError> {
        let colors = ["#ffffff", "#000000", "#888888"];
        let sorted = sort_colors_by_brightness(&colors)?;
        assert_eq!(sorted, ["#000000", "#888888", "#ffffff"]);

        // The input is untouched and the output is a permutation of it.
        assert_eq!(colors, ["#ffffff", "#000000", "#888888"]);
        let mut resorted = sorted.clone();
        resorted.sort();
        let mut expected: Vec<String> = colors.iter().map(|c| (*c).to_string()).collect();
        expected.sort();
        assert_eq!(resorted, expected);

        // Stable: equal-brightness colors keep their relative order.
        assert_eq!(
            sort_colors_by_brightness(&["#ffffff", "#000000", "#fff"])?,
            ["#000000", "#ffffff", "#fff"]
        );

        assert_eq!(
            sort_colors_by_brightness(&["#ffffff", "oops"]),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        Ok(())
    }

    #[test]
    fn test_analogous_colors() -> Result<(), ColorFormatError> {
        // Red at hue 0: the variations sit at -30, -60, and -90 degrees,
        // i.e., 330, 300, and 270 on the circle.
        assert_eq!(
            analogous_colors("#ff0000", 3)?,
            ["#ff007f", "#ff00ff", "#7f00ff"]
        );

        // Notation echoes the input.
        assert_eq!(analogous_colors("rgb(255, 0, 0)", 1)?, ["rgb(255, 0, 127)"]);

        assert_eq!(analogous_colors("#ff0000", 0)?, Vec::<String>::new());

        Ok(())
    }

    #[test]
    fn test_triadic_colors() -> Result<(), ColorFormatError> {
        assert_eq!(triadic_colors("#ff0000")?, ["#00ff00", "#0000ff"]);
        assert_eq!(
            triadic_colors("rgb(1, 2, 3)")?,
            ["rgb(3, 1, 2)", "rgb(2, 3, 1)"]
        );

        Ok(())
    }
}
