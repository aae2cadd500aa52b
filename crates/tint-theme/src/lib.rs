//! # tint-theme — brand palette derivation engine
//!
//! Derives a complete, legible 7-role color theme from one brand color and
//! a dark/light flag. Same inputs, same theme: no randomness, no caching,
//! no state between calls.
//!
//! # Architecture
//!
//! ```text
//! brand hex + is_dark
//!     │
//!     ▼
//! tint-color:  parse to Rgb, convert to HSL
//!     │
//!     ▼
//! palette.rs:  apply the mode's RuleSet, one ToneRule per role
//!     │
//!     ▼
//! contrast.rs: check primary vs background (WCAG AA, 4.5:1)
//!     │
//!     ▼
//! palette.rs:  one lightness correction step if it fails
//!     │
//!     ▼
//! theme.rs:    assemble ColorTheme (+ PrimaryContrast report)
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Luminance and rule arithmetic follow the WCAG formulas term for term.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod palette;
pub mod theme;

pub use contrast::{contrast_ratio, is_color_dark, is_dark, relative_luminance};
pub use palette::{RuleSet, derive, derive_for_surface, derive_theme, derive_with_report};
pub use theme::{ColorTheme, Derivation, PrimaryContrast, Role, ThemeColors};
