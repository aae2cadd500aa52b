// SPDX-License-Identifier: MIT
//
// HSL — the space palette rules are written in.
//
// Hue rotation and lightness/saturation adjustment are trivial here, which
// is all derivation needs. The conversion back to sRGB uses the usual
// chroma / intermediate / match-lightness decomposition over six 60°
// sectors:
//
//   c = (1 - |2l - 1|) * s
//   x = c * (1 - |(h / 60) mod 2 - 1|)
//   m = l - c / 2
//
// Values read from a hex color are rounded to integers, so a round trip
// through HSL is exact for pure primaries and within a few levels per
// channel elsewhere.

use crate::error::Result;
use crate::rgb::Rgb;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue in degrees, 0.0 to 360.0
/// - `s`: saturation in percent, 0.0 to 100.0
/// - `l`: lightness in percent, 0.0 to 100.0
///
/// Components may be fractional. Values produced by [`Rgb::to_hsl`] are
/// whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees` (wraps around 360°, either direction).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: shift_hue(self.h, degrees),
            ..self
        }
    }

    /// Return a copy with lightness replaced.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Convert to sRGB, rounding each channel to the nearest level.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(to_u8(r + m), to_u8(g + m), to_u8(b + m))
    }

    /// Convert to uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

// ─── Free Functions ──────────────────────────────────────────────────────────

/// Parse a hex string and convert it to HSL.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`](crate::ColorError::InvalidHex) if `hex`
/// is not a six-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Rgb::parse(hex)?.to_hsl())
}

/// Convert HSL to an uppercase `#RRGGBB` string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_hex()
}

/// Add `degrees` to a hue and wrap the result into [0, 360).
///
/// The double modulo keeps negative sums on the wheel: `shift_hue(10, -30)`
/// is 340, not -20.
#[inline]
#[must_use]
pub fn shift_hue(h: f64, degrees: f64) -> f64 {
    ((h + degrees) % 360.0 + 360.0) % 360.0
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; with `min > max` the upper
/// bound wins.
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Map a channel fraction to a byte with round-half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
