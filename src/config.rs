//! Logger configuration and formatting constants


use std::env;
use ahash::AHashMap;
use crate::style::Style;

/// Number of spaces per indent level
pub const INDENT_SIZE: usize = 2;

/// Number of sequence elements which are shown in brief mode
pub const MAX_ARRAY_PREVIEW: usize = 3;

/// Number of mapping entries which are shown in brief mode
pub const MAX_OBJECT_PREVIEW: usize = 3;

/// Nesting depth after which verbose mode stops descending (`[...]` / `{...}`)
pub const MAX_VERBOSE_DEPTH: usize = 5;

/// Used for [Style::color_secondary]
pub const SECONDARY_BRIGHTEN_PERCENT: f64 = 0.2;

/// Used for the label color of scoped loggers
pub const BRIGHTEN_PERCENT: f64 = 0.6;

pub const DIVIDER_CHAR: char = '─';
pub const DIVIDER_LENGTH: usize = 50;
pub const DIVIDER_COLOR: &str = "#808080";

pub const SCRIPT_OUTLINE_TITLE: &str = "Script Execution Plan:";
pub const SCRIPT_OUTLINE_COUNT_TEMPLATE: &str = "{count} scripts will be executed in sequence";
pub const EXECUTION_BEGIN_TITLE: &str = "Execution will begin:";
pub const EXECUTION_BEGIN_SUBTEXT: &str = "Scripts will run in the order shown above";
pub const NO_DESCRIPTION: &str = "No description provided";

pub const LABEL_EXECUTES: &str = "Executes:";
pub const LABEL_TRIGGERS: &str = "Triggers:";
pub const LABEL_REQUIRES: &str = "Requires:";

pub const GROUP_START_SUFFIX: &str = "Starting grouped operation";
pub const GROUP_COMPLETE_SUFFIX: &str = "Completed grouped operation";

/// Environment variable which enables the global logger if it is set to `"true"`
pub const ENVKEY_DEBUG: &str = "DEBUG";

/// The live configuration of a logger
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggerConfig {
    pub enabled: bool,

    /// Printed (trimmed) in front of every trace line
    pub prefix: String,

    pub scope: Option<String>,

    /// Appends the location of the trace call to every line
    pub show_caller_location: bool,

    /// Named custom styles, these are stored but do not override the built-in styles
    pub styles: AHashMap<String, Style>,
}

impl LoggerConfig {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    /// Creates a configuration which is enabled if the [ENVKEY_DEBUG] variable is `"true"`
    pub fn from_env() -> Self {
        Self::new(debug_env_enabled())
    }

    /// Shallow-merges all fields which are set in `options`
    pub fn apply(&mut self, options: ConfigOptions) {
        let ConfigOptions { enabled, prefix, scope, show_caller_location, styles } = options;

        if let Some(enabled) = enabled {
            self.enabled = enabled;
        }

        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }

        if let Some(scope) = scope {
            self.scope = scope;
        }

        if let Some(show_caller_location) = show_caller_location {
            self.show_caller_location = show_caller_location;
        }

        self.styles.extend(styles);
    }
}

/// Returns true if the [ENVKEY_DEBUG] environment variable is set to `"true"`
pub fn debug_env_enabled() -> bool {
    env::var(ENVKEY_DEBUG).is_ok_and(|value| value == "true")
}

/// A partial configuration update, only fields which are set are applied
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigOptions {
    enabled: Option<bool>,
    prefix: Option<String>,
    scope: Option<Option<String>>,
    show_caller_location: Option<bool>,
    styles: Vec<(String, Style)>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the scope, [None] clears it
    #[must_use]
    pub fn scope(mut self, scope: Option<impl Into<String>>) -> Self {
        self.scope = Some(scope.map(Into::into));
        self
    }

    #[must_use]
    pub fn show_caller_location(mut self, show_caller_location: bool) -> Self {
        self.show_caller_location = Some(show_caller_location);
        self
    }

    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.push((name.into(), style));
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
