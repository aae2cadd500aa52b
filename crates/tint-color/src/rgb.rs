// SPDX-License-Identifier: MIT
//
// Hex colors — 24-bit sRGB values as they cross the library boundary.
//
// Input is accepted with or without a leading `#` and in any case; output
// is always `#RRGGBB` in uppercase. Validation happens once, in `parse`,
// so every `Rgb` in circulation is well-formed and every downstream
// operation is total.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::{ColorError, Result};
use crate::hsl::Hsl;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("hex pattern compiles"));

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// # Examples
///
/// ```
/// use tint_color::Rgb;
///
/// let indigo: Rgb = "#6366f1".parse().unwrap();
/// assert_eq!(indigo.to_hex(), "#6366F1");
/// assert_eq!(indigo.to_hsl().h, 239.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything else, including the
    /// short `#RGB` form and strings with surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self> {
        if !HEX_PATTERN.is_match(s) {
            return Err(ColorError::invalid_hex(s));
        }
        let digits = s.strip_prefix('#').unwrap_or(s);
        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ColorError::invalid_hex(s))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels as sRGB fractions in [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL with every component rounded to an integer.
    ///
    /// Achromatic colors (all channels equal) have hue 0 and saturation 0.
    /// When two channels tie for the maximum, red wins over green and
    /// green over blue.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let hi = self.r.max(self.g).max(self.b);
        let lo = self.r.min(self.g).min(self.b);
        let max = f64::from(hi) / 255.0;
        let min = f64::from(lo) / 255.0;
        let delta = max - min;
        let l = (max + min) / 2.0;

        if hi == lo {
            return Hsl::new(0.0, 0.0, (l * 100.0).round());
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if hi == self.r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if hi == self.g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        // 359.5° and above rounds onto 360°, which is 0° again.
        Hsl::new(h.round() % 360.0, (s * 100.0).round(), (l * 100.0).round())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
