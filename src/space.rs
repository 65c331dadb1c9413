use crate::color::Rgb;
use crate::error::ColorFormatError;
use crate::string::parse_hex;
use crate::Float;

/// Convert the RGB color to its HSL representation, with hue in degrees and
/// saturation and lightness as fractions. The hue of an achromatic color is
/// zero, not not-a-number.
pub(crate) fn to_hsl(rgb: Rgb) -> [Float; 3] {
    let [r, g, b] = rgb.coordinates().map(|c| c as Float / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, lightness];
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [hue * 60.0, saturation, lightness]
}

/// Convert the RGB color to HSL.
///
/// The result scales to whole numbers: hue in degrees, saturation and
/// lightness in percent, each rounded to the nearest integer. Note the
/// asymmetry with [`hsl_to_rgb`], which consumes *fractional* saturation and
/// lightness; internally, this crate computes on the fractional scale
/// throughout and widens to degrees and percent only here.
pub fn rgb_to_hsl(rgb: Rgb) -> (u16, u8, u8) {
    let [hue, saturation, lightness] = to_hsl(rgb);
    (
        // A hue just below a full turn may round up to 360; fold it back.
        (hue.round() as u16) % 360,
        (saturation * 100.0).round() as u8,
        (lightness * 100.0).round() as u8,
    )
}

/// Convert the HSL coordinates to an RGB color. The hue is in degrees and may
/// fall up to one turn outside `0..360`; the per-channel offset wrap folds it
/// back at most once, so farther-out angles are not handled. Saturation and
/// lightness are fractions in `0..=1`.
pub(crate) fn from_hsl(hue: Float, saturation: Float, lightness: Float) -> Rgb {
    if saturation == 0.0 {
        let v = (lightness * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    fn channel(p: Float, q: Float, mut t: Float) -> Float {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let t = hue / 360.0;
    let r = channel(p, q, t + 1.0 / 3.0);
    let g = channel(p, q, t);
    let b = channel(p, q, t - 1.0 / 3.0);

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Convert the HSL coordinates to an RGB color.
///
/// The hue is in degrees, whereas saturation and lightness are fractions in
/// `0..=1` — *not* the percent scale returned by [`rgb_to_hsl`]. Channels
/// round to the nearest integer; the construction keeps them within `0..=255`
/// for in-range inputs, so no further clamping applies.
pub fn hsl_to_rgb(hue: Float, saturation: Float, lightness: Float) -> Rgb {
    from_hsl(hue, saturation, lightness)
}

// --------------------------------------------------------------------------------------------------------------------

/// The coefficients for computing the perceptual brightness of RGB channels.
const BRIGHTNESS_WEIGHTS: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The coefficients for computing the contrast luminance of RGB channels.
const LUMINANCE_WEIGHTS: &[Float; 3] = &[0.299, 0.587, 0.114];

/// Compute the perceptual brightness of the color on a 0–255 scale.
///
/// This is the square root of the weighted sum of *squared* channel values
/// with BT.709-style weights. It is deliberately not a linear-light luminance;
/// the squared-channel formula is the quantity the comparison and sorting
/// operations order by.
pub(crate) fn brightness(rgb: Rgb) -> Float {
    let [w1, w2, w3] = *BRIGHTNESS_WEIGHTS;
    let [r, g, b] = rgb.coordinates().map(|c| c as Float);

    (r * r).mul_add(w1, (g * g).mul_add(w2, (b * b) * w3)).sqrt()
}

/// Compute the perceptual brightness of the hexadecimal color.
///
/// The result ranges from 0 for `#000000` to 255 for `#ffffff` and grows
/// monotonically as channels brighten. Only hexadecimal input is accepted;
/// there is no `rgb()` overload.
pub fn hex_color_brightness(s: &str) -> Result<Float, ColorFormatError> {
    parse_hex(s).map(brightness)
}

/// Compute the luminance of the color as a fraction of full white.
///
/// This simpler, linear weighting backs the black-or-white contrast decision
/// only and is distinct from [`brightness`].
pub(crate) fn luminance(rgb: Rgb) -> Float {
    let [w1, w2, w3] = *LUMINANCE_WEIGHTS;
    let [r, g, b] = rgb.coordinates().map(|c| c as Float);

    r.mul_add(w1, g.mul_add(w2, b * w3)) / 255.0
}

// ====================================================================================================================
