//! # Hueshift
//!
//! Hueshift converts, compares, and riffs on colors written in hexadecimal or
//! `rgb()` notation. Its main abstractions are:
//!
//!   * [`Rgb`] implements a **true RGB color** with three 8-bit channels; it
//!     is the value every textual color parses into and every computation
//!     runs on.
//!   * [`Color`] pairs channel values with the [`ColorFormat`] they were
//!     **written in**, so that operations can render their results back in
//!     the notation of their input. [`Color::parse`] is the single entry
//!     point for format detection.
//!   * The **format layer** — [`is_valid_hex_color`], [`is_valid_rgb_color`],
//!     [`hex_to_rgb`], and [`rgb_to_hex`] — validates and converts between
//!     the two textual notations.
//!   * The **color-space math** — [`rgb_to_hsl`], [`hsl_to_rgb`], and
//!     [`hex_color_brightness`] — moves between RGB and HSL and derives a
//!     perceptual brightness.
//!   * The **derived operations** in [`ops`] compute contrast, complementary,
//!     analogous, and triadic colors as well as brightness adjustments and
//!     orderings.
//!
//! Every function is pure: no I/O, no shared mutable state, and hence trivial
//! thread-safety. Malformed input surfaces as [`ColorFormatError`]; nothing
//! panics and nothing silently returns an empty string.
//!
//! ```
//! # use hueshift::{complementary_color, ColorFormatError};
//! assert_eq!(complementary_color("rgb(10, 20, 30)")?, "rgb(245, 235, 225)");
//! assert_eq!(complementary_color("#0a141e")?, "#f5ebe1");
//! # Ok::<(), ColorFormatError>(())
//! ```

/// The floating point type in use.
pub type Float = f64;

mod color;
mod error;
pub mod ops;
mod space;
mod string;

pub use color::{Color, ColorFormat, Rgb};
pub use error::ColorFormatError;
pub use ops::{
    adjust_brightness, analogous_colors, compare_colors_by_brightness, complementary_color,
    contrast_color, darker_hex_color, sort_colors_by_brightness, triadic_colors,
};
pub use space::{hex_color_brightness, hsl_to_rgb, rgb_to_hsl};
pub use string::{hex_to_rgb, is_valid_hex_color, is_valid_rgb_color, rgb_to_hex};

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> u64 {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (1e5 * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}
