//! Built-in styles and style argument resolution

use std::sync::LazyLock;
use crate::style::Style;

/// Separator which is printed around top-level groups
pub const SEPARATOR: &str = "::::::::::::::::::";

/// Neutral style without a prefix
pub static DEFAULT: LazyLock<Style, fn() -> Style> =
    LazyLock::new(|| Style::new("#CCCCCC"));

/// Attention/warning style
pub static HEADSUP: LazyLock<Style, fn() -> Style> =
    LazyLock::new(|| Style::new("#F59E0B").with_prefix("⚡"));

/// Error/failure style
pub static ERROR: LazyLock<Style, fn() -> Style> =
    LazyLock::new(|| Style::new("#EF4444").with_prefix("❌"));

/// Success/confirmation style
pub static SUCCESS: LazyLock<Style, fn() -> Style> =
    LazyLock::new(|| Style::new("#10B981"));

/// Names of the built-in styles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StyleName {
    #[default]
    Default,
    Headsup,
    Error,
    Success,

    /// A name which does not match any built-in style, resolves to [DEFAULT]
    Unknown(Box<str>),
}

impl StyleName {
    /// Parses a style name case-insensitively
    pub fn from_name(name: &str) -> Self {
        match &*name.to_lowercase() {
            "default" => Self::Default,
            "headsup" => Self::Headsup,
            "error" => Self::Error,
            "success" => Self::Success,

            _ => Self::Unknown(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StyleName::Default => "default",
            StyleName::Headsup => "headsup",
            StyleName::Error => "error",
            StyleName::Success => "success",
            StyleName::Unknown(name) => name,
        }
    }

    pub fn style(&self) -> &'static Style {
        match self {
            StyleName::Headsup => &HEADSUP,
            StyleName::Error => &ERROR,
            StyleName::Success => &SUCCESS,
            StyleName::Default | StyleName::Unknown(..) => &DEFAULT,
        }
    }
}

/// The style argument of a trace call: either a built-in style name or a custom [Style]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleArg {
    Named(StyleName),
    Custom(Style),
}

impl StyleArg {
    /// Returns true if this argument is the default style name
    ///
    /// Only this argument is upgraded to the error style if the payload is an error value
    pub fn is_default(&self) -> bool {
        matches!(self, StyleArg::Named(StyleName::Default))
    }
}

impl Default for StyleArg {
    fn default() -> Self {
        Self::Named(StyleName::Default)
    }
}

impl From<StyleName> for StyleArg {
    fn from(value: StyleName) -> Self {
        Self::Named(value)
    }
}

impl From<&str> for StyleArg {
    fn from(value: &str) -> Self {
        Self::Named(StyleName::from_name(value))
    }
}

impl From<String> for StyleArg {
    fn from(value: String) -> Self {
        Self::from(&*value)
    }
}

impl From<Style> for StyleArg {
    fn from(value: Style) -> Self {
        Self::Custom(value)
    }
}

impl From<&Style> for StyleArg {
    fn from(value: &Style) -> Self {
        Self::Custom(value.clone())
    }
}

/// Resolves a style argument to the style which should be used for rendering
///
/// Custom styles are returned unchanged (the returned reference points to the style inside `style`)
pub fn resolve(style: &StyleArg) -> &Style {
    match style {
        StyleArg::Custom(style) => style,
        StyleArg::Named(name) => name.style(),
    }
}

/// Returns the built-in style for `name` (case-insensitive) or [DEFAULT] if there is none
pub fn get_style(name: &str) -> &'static Style {
    StyleName::from_name(name).style()
}
