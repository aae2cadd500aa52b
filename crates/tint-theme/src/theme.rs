//! Theme assembly — the value handed to preview and prompt generation.
//!
//! A [`ColorTheme`] is plain data: seven role colors plus the identity
//! fields collaborators key on. It serializes to the camelCase JSON shape
//! those collaborators read:
//!
//! ```text
//! { "id": "custom-brand", "name": "Custom Brand", "styleIds": ["all"],
//!   "colors": { "background": "#F9F9FA", ... }, "isDark": false }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tint_color::Rgb;

use crate::contrast::meets_aa;

/// Id shared by every theme derived from a brand color.
pub const CUSTOM_BRAND_ID: &str = "custom-brand";

/// Display label for a derived theme.
pub const CUSTOM_BRAND_NAME: &str = "Custom Brand";

/// Style id meaning "combines with any style".
pub const ALL_STYLES: &str = "all";

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A semantic slot in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Page surface.
    Background,
    /// Body text.
    Foreground,
    /// The brand color, tuned for legibility.
    Primary,
    /// Analogous hue, 30° from the brand.
    Secondary,
    /// Complementary hue, 180° from the brand.
    Accent,
    /// Subtle surface one step off the background.
    Muted,
    /// Dividers and outlines.
    Border,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Background,
        Self::Foreground,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Muted,
        Self::Border,
    ];

    /// The key used for this role in serialized themes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Muted => "muted",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// The seven role colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Rgb,
    pub foreground: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
}

impl ThemeColors {
    /// Look up the color for a role.
    #[must_use]
    pub const fn get(&self, role: Role) -> Rgb {
        match role {
            Role::Background => self.background,
            Role::Foreground => self.foreground,
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Muted => self.muted,
            Role::Border => self.border,
        }
    }

    /// Iterate `(role, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

// ---------------------------------------------------------------------------
// ColorTheme
// ---------------------------------------------------------------------------

/// A complete derived theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub id: String,
    pub name: String,
    /// Styles this theme pairs with.
    pub style_ids: Vec<String>,
    pub colors: ThemeColors,
    /// Which rule set produced the colors.
    pub is_dark: bool,
}

impl ColorTheme {
    /// Wrap derived colors with the custom-brand identity.
    #[must_use]
    pub fn custom_brand(colors: ThemeColors, is_dark: bool) -> Self {
        Self {
            id: CUSTOM_BRAND_ID.to_owned(),
            name: CUSTOM_BRAND_NAME.to_owned(),
            style_ids: vec![ALL_STYLES.to_owned()],
            colors,
            is_dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation report
// ---------------------------------------------------------------------------

/// Primary-vs-background contrast before and after the correction step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryContrast {
    /// Ratio of the primary as first derived.
    pub before: f64,
    /// Ratio of the primary that ended up in the theme.
    pub after: f64,
    /// Whether the lightness correction ran.
    pub corrected: bool,
}

impl PrimaryContrast {
    /// Report for a primary that already passed.
    #[must_use]
    pub const fn unchanged(ratio: f64) -> Self {
        Self {
            before: ratio,
            after: ratio,
            corrected: false,
        }
    }

    /// Whether the final primary meets WCAG AA against the background.
    #[must_use]
    pub fn meets_aa(&self) -> bool {
        meets_aa(self.after)
    }
}

/// A theme together with how its primary color was settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub theme: ColorTheme,
    pub primary_contrast: PrimaryContrast,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
