// SPDX-License-Identifier: MIT
//
// tint-color — color primitives for tint.
//
// Two representations and the bridge between them:
//
//   Rgb  ← parse("#RRGGBB")   the boundary type: validated once, rendered
//                             as uppercase hex, serialized as a string
//   Hsl  ← Rgb::to_hsl()      the working type: palette rules rotate hue
//                             and clamp saturation/lightness here
//
// Everything is plain `Copy` data and pure functions. The only fallible
// step is parsing text into an `Rgb`.

// Single-char math variables (h, s, l, c, x, m) are the standard notation.
#![allow(clippy::many_single_char_names)]
// Channel math follows the HSL formulas term for term so rounding at
// .5 boundaries matches; fused multiply-add would not.
#![allow(clippy::suboptimal_flops)]

pub mod error;
pub mod hsl;
pub mod rgb;

pub use error::{ColorError, Result};
pub use hsl::{Hsl, clamp, hex_to_hsl, hsl_to_hex, shift_hue};
pub use rgb::Rgb;
