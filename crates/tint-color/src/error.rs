// SPDX-License-Identifier: MIT
//
// Error types for color parsing.

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised at the boundary where text becomes a color.
///
/// Everything past parsing is total: once an [`Rgb`](crate::Rgb) exists,
/// conversion, contrast and derivation cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not six hex digits with an optional leading `#`.
    #[error("invalid hex color '{input}' (expected #RRGGBB)")]
    InvalidHex { input: String },
}

impl ColorError {
    /// Create an invalid-hex error for the offending input.
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
