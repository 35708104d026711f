pub mod palette;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::color;
use crate::config::SECONDARY_BRIGHTEN_PERCENT;

/// An immutable color/prefix/font descriptor applied to a trace line
///
/// The font weight and size are only used by browser console output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style {
    color: Box<str>,
    prefix: Box<str>,
    font_weight: Box<str>,
    font_size: u32,
}

impl Style {
    pub const DEFAULT_FONT_WEIGHT: &'static str = "normal";
    pub const DEFAULT_FONT_SIZE: u32 = 12;

    /// Creates a new style with the default prefix (`""`), font weight (`"normal"`) and font size (`12`)
    ///
    /// # Panics
    ///
    /// Panics if `color` is not a hex color starting with `#`, use [Style::try_new] for a fallible variant
    pub fn new(color: &str) -> Self {
        match Self::try_new(color, "", None, None) {
            Ok(style) => style,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a new style and validates all arguments
    ///
    /// # Arguments
    ///
    /// * `color` - Hex color which must start with `#` (e.g. `"#6B7280"`)
    /// * `prefix` - Emoji or symbol which is printed in front of the message
    /// * `font_weight` - CSS font weight, `"normal"` if [None] or empty
    /// * `font_size` - Font size in pixels, `12` if [None]
    pub fn try_new(
        color: &str,
        prefix: &str,
        font_weight: Option<&str>,
        font_size: Option<i64>,
    ) -> Result<Self, StyleError> {
        if color.is_empty() || !color.starts_with('#') {
            return Err(StyleError::InvalidColor(color.into()));
        }

        let font_weight = font_weight.
                filter(|font_weight| !font_weight.trim().is_empty()).
                unwrap_or(Self::DEFAULT_FONT_WEIGHT);

        let font_size = match font_size {
            Some(font_size) => u32::try_from(font_size).
                    map_err(|_| StyleError::InvalidFontSize(font_size))?,

            None => Self::DEFAULT_FONT_SIZE,
        };

        Ok(Self {
            color: color.into(),
            prefix: prefix.into(),
            font_weight: font_weight.into(),
            font_size,
        })
    }

    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            prefix: prefix.into(),
            ..self.clone()
        }
    }

    /// Returns a copy of this style with another font weight
    ///
    /// An empty font weight falls back to `"normal"`
    #[must_use]
    pub fn with_font_weight(&self, font_weight: &str) -> Self {
        let font_weight = if font_weight.trim().is_empty() {
            Self::DEFAULT_FONT_WEIGHT
        }else {
            font_weight
        };

        Self {
            font_weight: font_weight.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_font_size(&self, font_size: u32) -> Self {
        Self {
            font_size,
            ..self.clone()
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Brightened variant of [color](Style::color), recomputed on every call
    pub fn color_secondary(&self) -> String {
        color::brighten(&self.color, SECONDARY_BRIGHTEN_PERCENT)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        Self::try_new(color, "", None, None)
    }
}

/// Returned if the arguments of [Style::try_new] violate their contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    InvalidColor(Box<str>),
    InvalidFontSize(i64),
}

impl StyleError {
    pub fn message(&self) -> String {
        match self {
            StyleError::InvalidColor(color) => format!(
                "Style requires a valid hex color (e.g. \"#6B7280\"), got \"{color}\"",
            ),

            StyleError::InvalidFontSize(font_size) => format!(
                "Style font size must be a non-negative integer when provided, got {font_size}",
            ),
        }
    }
}

impl Display for StyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl Error for StyleError {}
