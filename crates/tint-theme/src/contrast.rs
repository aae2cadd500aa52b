//! WCAG contrast measurement for derived palettes.
//!
//! Two judgments are made here:
//!
//! - Legibility: the contrast ratio between two colors, compared against
//!   the AA body-text threshold of 4.5:1.
//! - Dark/light classification: a surface is "dark" when its relative
//!   luminance is below 0.2. This is not the 0.5 midpoint. Dark UI
//!   surfaces are authored near black, so only those are called dark.

use tint_color::{Result, Rgb};

/// WCAG AA threshold for normal body text.
pub const AA_NORMAL: f64 = 4.5;

/// Luminance below which a color counts as dark.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.2;

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the 0.03928 knee from the WCAG 2.1 text rather than the 0.04045
/// of the sRGB standard; the two differ only below one 8-bit level.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a ratio passes WCAG AA for body text.
#[inline]
#[must_use]
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= AA_NORMAL
}

/// Classify a raw luminance value. The comparison is strict.
#[inline]
#[must_use]
pub fn is_dark_luminance(luminance: f64) -> bool {
    luminance < DARK_LUMINANCE_THRESHOLD
}

/// Whether a color reads as a dark surface.
#[must_use]
pub fn is_dark(color: Rgb) -> bool {
    is_dark_luminance(relative_luminance(color))
}

/// Parse `hex` and classify it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`](tint_color::ColorError::InvalidHex)
/// if `hex` is not a six-digit hex color.
pub fn is_color_dark(hex: &str) -> Result<bool> {
    Ok(is_dark(Rgb::parse(hex)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn gray(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(gray(128));
        // sRGB 128 linearizes to ~0.216
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_channel_weights() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn linear_segment_below_knee() {
        assert!(approx_eq(srgb_to_linear(0.03), 0.03 / 12.92, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Rgb::new(0x63, 0x66, 0xF1);
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-9), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::new(204, 51, 77);
        let b = Rgb::new(26, 26, 102);
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_always_at_least_one() {
        let ratio = contrast_ratio(Rgb::new(70, 60, 90), Rgb::new(80, 85, 60));
        assert!(ratio >= 1.0, "Contrast < 1: {ratio}");
    }

    #[test]
    fn aa_threshold_is_inclusive() {
        assert!(meets_aa(4.5));
        assert!(!meets_aa(4.499));
    }

    // ── Dark classification ─────────────────────────────────────────

    #[test]
    fn black_is_dark_white_is_not() {
        assert!(is_dark(Rgb::BLACK));
        assert!(!is_dark(Rgb::WHITE));
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_dark_luminance(DARK_LUMINANCE_THRESHOLD));
        assert!(is_dark_luminance(0.199_999));
    }

    #[test]
    fn threshold_sits_between_adjacent_grays() {
        // #7B7B7B ≈ 0.198, #7C7C7C ≈ 0.202
        assert!(is_dark(gray(0x7B)));
        assert!(!is_dark(gray(0x7C)));
    }

    #[test]
    fn saturated_mid_colors_can_be_dark() {
        // Indigo has lightness 67% but luminance ≈ 0.185.
        assert!(is_dark(Rgb::new(0x63, 0x66, 0xF1)));
    }

    #[test]
    fn hex_entry_point() {
        assert_eq!(is_color_dark("#0a0a0a"), Ok(true));
        assert_eq!(is_color_dark("FFFFFF"), Ok(false));
        assert!(is_color_dark("#00000").is_err());
    }
}
