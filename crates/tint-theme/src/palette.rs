//! Brand palette derivation — one seed color to seven roles.
//!
//! Every role is a [`ToneRule`] applied to the brand color in HSL: rotate
//! the hue, scale-and-clamp the saturation, then fix or clamp the
//! lightness. The rules for each mode live in one constant table
//! ([`RuleSet::LIGHT`], [`RuleSet::DARK`]) chosen once per derivation, so
//! each mode can be audited on its own.
//!
//! After conversion to hex the primary is checked against the background.
//! Below AA it gets a single fixed lightness step toward legibility. The
//! step is not iterated: some seeds (saturated yellows and greens on light
//! backgrounds) still fall short, and [`PrimaryContrast`] reports that.

use tint_color::{Hsl, Result, Rgb, clamp, shift_hue};
use tracing::{debug, warn};

use crate::contrast::{AA_NORMAL, contrast_ratio, is_dark};
use crate::theme::{ColorTheme, Derivation, PrimaryContrast, Role, ThemeColors};

// ---------------------------------------------------------------------------
// Rule primitives
// ---------------------------------------------------------------------------

/// Saturation as a multiple of the brand saturation, clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub factor: f64,
    pub min: f64,
    pub max: f64,
}

impl Scale {
    #[must_use]
    pub const fn new(factor: f64, min: f64, max: f64) -> Self {
        Self { factor, min, max }
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        clamp(value * self.factor, self.min, self.max)
    }
}

/// How a role's lightness relates to the brand lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lightness {
    /// Ignore the brand; always this value.
    Fixed(f64),
    /// Keep the brand lightness, pulled into a range.
    Clamped { min: f64, max: f64 },
}

impl Lightness {
    #[must_use]
    pub fn apply(self, brand: f64) -> f64 {
        match self {
            Self::Fixed(l) => l,
            Self::Clamped { min, max } => clamp(brand, min, max),
        }
    }
}

/// The recipe for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRule {
    /// Degrees added to the brand hue.
    pub hue_shift: f64,
    pub saturation: Scale,
    pub lightness: Lightness,
}

impl ToneRule {
    const fn new(hue_shift: f64, saturation: Scale, lightness: Lightness) -> Self {
        Self {
            hue_shift,
            saturation,
            lightness,
        }
    }

    /// Apply the rule to a brand color.
    #[must_use]
    pub fn apply(&self, brand: Hsl) -> Hsl {
        Hsl::new(
            shift_hue(brand.h, self.hue_shift),
            self.saturation.apply(brand.s),
            self.lightness.apply(brand.l),
        )
    }
}

/// The one-shot lightness nudge for a primary that fails contrast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Added to the primary lightness (negative darkens).
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Correction {
    #[must_use]
    pub fn apply(self, lightness: f64) -> f64 {
        clamp(lightness + self.step, self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Every derivation rule for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSet {
    pub is_dark: bool,
    pub background: ToneRule,
    pub foreground: ToneRule,
    pub primary: ToneRule,
    pub secondary: ToneRule,
    pub accent: ToneRule,
    pub muted: ToneRule,
    pub border: ToneRule,
    pub correction: Correction,
    /// Primary-vs-background ratio below which `correction` runs.
    pub min_contrast: f64,
}

impl RuleSet {
    /// Rules for a near-white page with near-black text.
    pub const LIGHT: Self = Self {
        is_dark: false,
        background: ToneRule::new(0.0, Scale::new(0.12, 3.0, 12.0), Lightness::Fixed(98.0)),
        foreground: ToneRule::new(0.0, Scale::new(0.08, 0.0, 10.0), Lightness::Fixed(8.0)),
        primary: ToneRule::new(
            0.0,
            Scale::new(1.0, 40.0, 95.0),
            Lightness::Clamped { min: 35.0, max: 55.0 },
        ),
        secondary: ToneRule::new(30.0, Scale::new(0.7, 20.0, 70.0), Lightness::Fixed(45.0)),
        accent: ToneRule::new(180.0, Scale::new(0.8, 30.0, 85.0), Lightness::Fixed(45.0)),
        muted: ToneRule::new(0.0, Scale::new(0.1, 2.0, 10.0), Lightness::Fixed(94.0)),
        border: ToneRule::new(0.0, Scale::new(0.12, 3.0, 12.0), Lightness::Fixed(85.0)),
        correction: Correction {
            step: -15.0,
            min: 15.0,
            max: 45.0,
        },
        min_contrast: AA_NORMAL,
    };

    /// Rules for a near-black page with near-white text.
    ///
    /// Dark backgrounds carry a little more tint (up to 15% saturation)
    /// before reading as muddy.
    pub const DARK: Self = Self {
        is_dark: true,
        background: ToneRule::new(0.0, Scale::new(0.15, 3.0, 15.0), Lightness::Fixed(7.0)),
        foreground: ToneRule::new(0.0, Scale::new(0.08, 0.0, 10.0), Lightness::Fixed(93.0)),
        primary: ToneRule::new(
            0.0,
            Scale::new(1.0, 40.0, 95.0),
            Lightness::Clamped { min: 45.0, max: 65.0 },
        ),
        secondary: ToneRule::new(30.0, Scale::new(0.7, 20.0, 70.0), Lightness::Fixed(55.0)),
        accent: ToneRule::new(180.0, Scale::new(0.8, 30.0, 85.0), Lightness::Fixed(55.0)),
        muted: ToneRule::new(0.0, Scale::new(0.1, 2.0, 10.0), Lightness::Fixed(12.0)),
        border: ToneRule::new(0.0, Scale::new(0.12, 3.0, 12.0), Lightness::Fixed(20.0)),
        correction: Correction {
            step: 15.0,
            min: 50.0,
            max: 80.0,
        },
        min_contrast: AA_NORMAL,
    };

    /// Select the table for a mode.
    #[must_use]
    pub fn for_mode(is_dark: bool) -> &'static Self {
        if is_dark { &Self::DARK } else { &Self::LIGHT }
    }

    /// The rule for one role.
    #[must_use]
    pub const fn tone(&self, role: Role) -> &ToneRule {
        match role {
            Role::Background => &self.background,
            Role::Foreground => &self.foreground,
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Accent => &self.accent,
            Role::Muted => &self.muted,
            Role::Border => &self.border,
        }
    }

    /// Derive a theme from a brand color with this rule set.
    #[must_use]
    pub fn derive(&self, brand: Rgb) -> Derivation {
        let seed = brand.to_hsl();
        debug!(
            brand = %brand,
            h = seed.h,
            s = seed.s,
            l = seed.l,
            is_dark = self.is_dark,
            "deriving palette"
        );

        let tone = |role: Role| self.tone(role).apply(seed).to_rgb();
        let background = tone(Role::Background);
        let (primary, primary_contrast) = self.settle_primary(self.primary.apply(seed), background);

        let colors = ThemeColors {
            background,
            foreground: tone(Role::Foreground),
            primary,
            secondary: tone(Role::Secondary),
            accent: tone(Role::Accent),
            muted: tone(Role::Muted),
            border: tone(Role::Border),
        };

        Derivation {
            theme: ColorTheme::custom_brand(colors, self.is_dark),
            primary_contrast,
        }
    }

    /// Convert the primary and run the correction step if it fails contrast.
    fn settle_primary(&self, primary: Hsl, background: Rgb) -> (Rgb, PrimaryContrast) {
        let first = primary.to_rgb();
        let before = contrast_ratio(first, background);
        if before >= self.min_contrast {
            return (first, PrimaryContrast::unchanged(before));
        }

        let adjusted = primary.with_lightness(self.correction.apply(primary.l));
        let rgb = adjusted.to_rgb();
        let after = contrast_ratio(rgb, background);
        debug!(
            from = primary.l,
            to = adjusted.l,
            before,
            after,
            "primary lightness corrected"
        );
        if after < self.min_contrast {
            warn!(
                primary = %rgb,
                background = %background,
                ratio = after,
                "primary below AA after correction step"
            );
        }

        (
            rgb,
            PrimaryContrast {
                before,
                after,
                corrected: true,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Derive a theme from a brand color.
#[must_use]
pub fn derive(brand: Rgb, is_dark: bool) -> ColorTheme {
    derive_with_report(brand, is_dark).theme
}

/// Derive a theme and report how the primary contrast was settled.
#[must_use]
pub fn derive_with_report(brand: Rgb, is_dark: bool) -> Derivation {
    RuleSet::for_mode(is_dark).derive(brand)
}

/// Derive a theme whose mode follows the surface it will sit on.
#[must_use]
pub fn derive_for_surface(brand: Rgb, surface: Rgb) -> ColorTheme {
    derive(brand, is_dark(surface))
}

/// Parse `brand_hex` and derive a theme from it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`](tint_color::ColorError::InvalidHex)
/// if `brand_hex` is not a six-digit hex color.
pub fn derive_theme(brand_hex: &str, is_dark: bool) -> Result<ColorTheme> {
    Ok(derive(Rgb::parse(brand_hex)?, is_dark))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb(hex: &str) -> Rgb {
        Rgb::parse(hex).unwrap()
    }

    fn colors_of(hexes: [&str; 7]) -> ThemeColors {
        let [background, foreground, primary, secondary, accent, muted, border] = hexes.map(rgb);
        ThemeColors {
            background,
            foreground,
            primary,
            secondary,
            accent,
            muted,
            border,
        }
    }

    // ── Full themes ─────────────────────────────────────────────────

    #[test]
    fn indigo_light() {
        let d = derive_with_report(rgb("#6366F1"), false);
        assert_eq!(
            d.theme.colors,
            colors_of(["#F9F9FA", "#131316", "#2C2FED", "#712FB6", "#C0BD26", "#EEEEF1", "#D5D5DD"])
        );
        assert!(!d.primary_contrast.corrected);
        assert!(d.primary_contrast.meets_aa());
    }

    #[test]
    fn indigo_dark_corrects_primary() {
        let d = derive_with_report(rgb("#6366F1"), true);
        assert_eq!(
            d.theme.colors,
            colors_of(["#101014", "#ECECEE", "#A1A3F7", "#8A49D0", "#D9D73F", "#1C1C21", "#2E2E38"])
        );
        assert!(d.primary_contrast.corrected);
        assert!(d.primary_contrast.before < AA_NORMAL);
        assert!(d.primary_contrast.meets_aa());
        // Clamped 65 + 15 = 80.
        assert_eq!(d.theme.colors.primary.to_hsl().l, 80.0);
    }

    #[test]
    fn black_dark() {
        let d = derive_with_report(Rgb::BLACK, true);
        assert_eq!(
            d.theme.colors,
            colors_of(["#121111", "#EDEDED", "#C27070", "#A38C75", "#6AAFAF", "#1F1E1E", "#353131"])
        );
        assert!(d.primary_contrast.corrected);
        assert!(d.primary_contrast.meets_aa());
    }

    #[test]
    fn yellow_light_stays_below_aa() {
        let d = derive_with_report(rgb("#FFFF00"), false);
        let report = d.primary_contrast;
        assert!(report.corrected);
        assert!(report.after > report.before);
        assert!(!report.meets_aa(), "single step should not reach AA: {report:?}");
        assert_eq!(d.theme.colors.primary, rgb("#AEAE04"));
    }

    #[test]
    fn passing_primary_is_untouched() {
        let d = derive_with_report(rgb("#FFFF00"), true);
        assert!(!d.primary_contrast.corrected);
        assert_eq!(d.theme.colors.primary, rgb("#F9F906"));
    }

    // ── Individual rules ────────────────────────────────────────────

    #[test]
    fn zero_saturation_collapses_to_clamp_floors() {
        let seed = Rgb::BLACK.to_hsl();
        let rules = RuleSet::for_mode(true);
        let floors = [
            (Role::Background, 3.0),
            (Role::Foreground, 0.0),
            (Role::Primary, 40.0),
            (Role::Secondary, 20.0),
            (Role::Accent, 30.0),
            (Role::Muted, 2.0),
            (Role::Border, 3.0),
        ];
        for (role, floor) in floors {
            assert_eq!(rules.tone(role).apply(seed).s, floor, "{role}");
        }
    }

    #[test]
    fn saturation_ceilings() {
        let seed = Hsl::new(200.0, 100.0, 50.0);
        assert_eq!(RuleSet::LIGHT.background.apply(seed).s, 12.0);
        assert_eq!(RuleSet::DARK.background.apply(seed).s, 15.0);
        assert_eq!(RuleSet::LIGHT.primary.apply(seed).s, 95.0);
        assert_eq!(RuleSet::LIGHT.secondary.apply(seed).s, 70.0);
        assert_eq!(RuleSet::LIGHT.accent.apply(seed).s, 80.0);
    }

    #[test]
    fn primary_lightness_pulled_into_mode_range() {
        let pale = Hsl::new(10.0, 60.0, 90.0);
        let deep = Hsl::new(10.0, 60.0, 10.0);
        assert_eq!(RuleSet::LIGHT.primary.apply(pale).l, 55.0);
        assert_eq!(RuleSet::LIGHT.primary.apply(deep).l, 35.0);
        assert_eq!(RuleSet::DARK.primary.apply(pale).l, 65.0);
        assert_eq!(RuleSet::DARK.primary.apply(deep).l, 45.0);
    }

    #[test]
    fn hue_shifts() {
        let seed = Hsl::new(239.0, 84.0, 67.0);
        for rules in [&RuleSet::LIGHT, &RuleSet::DARK] {
            assert_eq!(rules.primary.apply(seed).h, 239.0);
            assert_eq!(rules.secondary.apply(seed).h, 269.0);
            assert_eq!(rules.accent.apply(seed).h, 59.0);
            assert_eq!(rules.border.apply(seed).h, 239.0);
        }
    }

    #[test]
    fn foreground_background_far_apart() {
        for rules in [&RuleSet::LIGHT, &RuleSet::DARK] {
            let seed = Hsl::new(0.0, 50.0, 50.0);
            let gap = (rules.foreground.apply(seed).l - rules.background.apply(seed).l).abs();
            assert!(gap >= 85.0, "gap {gap} (dark = {})", rules.is_dark);
        }
    }

    #[test]
    fn correction_direction_and_bounds() {
        assert_eq!(RuleSet::LIGHT.correction.apply(55.0), 40.0);
        assert_eq!(RuleSet::LIGHT.correction.apply(35.0), 20.0);
        assert_eq!(RuleSet::DARK.correction.apply(45.0), 60.0);
        assert_eq!(RuleSet::DARK.correction.apply(65.0), 80.0);
        // Bounds hold even for out-of-range input.
        assert_eq!(RuleSet::LIGHT.correction.apply(90.0), 45.0);
        assert_eq!(RuleSet::DARK.correction.apply(10.0), 50.0);
    }

    #[test]
    fn for_mode_selects_table() {
        assert!(RuleSet::for_mode(true).is_dark);
        assert!(!RuleSet::for_mode(false).is_dark);
    }

    // ── Entry points ────────────────────────────────────────────────

    #[test]
    fn derive_theme_accepts_loose_hex() {
        let a = derive_theme("6366f1", false).unwrap();
        let b = derive(rgb("#6366F1"), false);
        assert_eq!(a, b);
    }

    #[test]
    fn derive_theme_rejects_malformed() {
        assert!(derive_theme("#63F1", false).is_err());
    }

    #[test]
    fn surface_picks_mode() {
        let brand = rgb("#6366F1");
        assert!(derive_for_surface(brand, rgb("#0A0A0A")).is_dark);
        assert!(!derive_for_surface(brand, rgb("#FFFFFF")).is_dark);
        assert_eq!(derive_for_surface(brand, Rgb::BLACK), derive(brand, true));
    }

    #[test]
    fn echoes_mode() {
        assert!(derive(Rgb::WHITE, true).is_dark);
        assert!(!derive(Rgb::WHITE, false).is_dark);
    }
}
