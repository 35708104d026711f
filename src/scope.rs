#[cfg(test)]
mod tests;

use std::future::Future;
use std::panic::Location;
use crate::color;
use crate::config::{LoggerConfig, BRIGHTEN_PERCENT, GROUP_COMPLETE_SUFFIX, GROUP_START_SUFFIX};
use crate::engine::{Lumberjack, Mode, TraceMessage};
use crate::outline::Step;
use crate::style::palette::{StyleArg, StyleName};
use crate::value::{IntoValue, Value};

/// Options of [Lumberjack::create_scoped]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeOptions {
    prefix: Option<String>,
    color: Option<String>,
}

impl ScopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emoji or icon which is printed before the scope name
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Hex color of scoped messages, the scope label uses a brightened variant
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A view of a [Lumberjack] engine which prefixes every message with a scope label
///
/// Scoped loggers have no state of their own: indentation and the enabled flag are shared with the engine.
#[derive(Debug, Clone)]
pub struct ScopedLogger {
    engine: Lumberjack,
    scope: Box<str>,
    label: Box<str>,
    colors: Option<ScopeColors>,
}

#[derive(Debug, Clone)]
struct ScopeColors {
    color: Box<str>,
    label_color: Box<str>,
}

impl ScopedLogger {
    fn new(engine: Lumberjack, scope: &str, options: ScopeOptions) -> Self {
        let ScopeOptions { prefix, color } = options;

        let label = match prefix.filter(|prefix| !prefix.is_empty()) {
            Some(prefix) => format!("{prefix} [{scope}]"),
            None => format!("[{scope}]"),
        };

        let colors = color.map(|color| ScopeColors {
            label_color: color::brighten(&color, BRIGHTEN_PERCENT).into(),
            color: color.into(),
        });

        Self {
            engine,
            scope: scope.into(),
            label: label.into(),
            colors,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The scope name with its prefix, e.g. `"🌐 [API]"`
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn engine(&self) -> &Lumberjack {
        &self.engine
    }

    /// A snapshot of the engine configuration with the scope of this logger
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            scope: Some(self.scope.to_string()),
            ..self.engine.config()
        }
    }

    pub fn enabled(&self) -> bool {
        self.engine.enabled()
    }

    /// Enables or disables the shared engine, this affects all loggers of the engine
    pub fn set_enabled(&self, enabled: bool) {
        self.engine.set_enabled(enabled);
    }

    /// Prints a trace line prefixed with the scope label, see [Lumberjack::trace]
    #[track_caller]
    pub fn trace(&self, message: &str, payload: impl IntoValue, mode: Mode, style: impl Into<StyleArg>) {
        let caller = Location::caller();

        if !self.engine.enabled() || mode == Mode::Silent {
            return;
        }

        let payload = payload.to_value();
        let style = style.into();

        match &self.colors {
            Some(ScopeColors { color, label_color }) => {
                self.engine.trace_at(TraceMessage::Scoped {
                    label: &self.label,
                    label_color,
                    color,
                    message,
                }, &payload, mode, &style, caller);
            },

            None => {
                let message = format!("{} {message}", self.label);

                self.engine.trace_at(TraceMessage::Plain(&message), &payload, mode, &style, caller);
            },
        }
    }

    #[track_caller]
    pub fn trace_message(&self, message: &str) {
        self.trace(message, (), Mode::Brief, StyleName::Default);
    }

    #[track_caller]
    pub fn trace_with(&self, message: &str, payload: impl IntoValue) {
        self.trace(message, payload, Mode::Brief, StyleName::Default);
    }

    pub fn indent(&self) {
        self.engine.indent();
    }

    pub fn outdent(&self) {
        self.engine.outdent();
    }

    pub fn reset_indent(&self) {
        self.engine.reset_indent();
    }

    fn trace_group_boundary(&self, suffix: &str, style: StyleName, caller: &'static Location<'static>) {
        let message = format!("{} {suffix}", self.label);

        self.engine.trace_at(
            TraceMessage::Plain(&message),
            &Value::Null,
            Mode::Brief,
            &StyleArg::Named(style),
            caller,
        );
    }

    /// Runs `body` in an engine group surrounded by a start and a completion line
    ///
    /// The completion line is not printed if `body` panics.
    #[track_caller]
    pub fn group<R>(&self, body: impl FnOnce() -> R) -> R {
        let caller = Location::caller();

        self.trace_group_boundary(GROUP_START_SUFFIX, StyleName::Headsup, caller);
        let ret = self.engine.group(body);
        self.trace_group_boundary(GROUP_COMPLETE_SUFFIX, StyleName::Success, caller);

        ret
    }

    /// Async version of [group](ScopedLogger::group)
    #[track_caller]
    pub fn group_async<R>(&self, body: impl Future<Output = R>) -> impl Future<Output = R> {
        let caller = Location::caller();

        async move {
            self.trace_group_boundary(GROUP_START_SUFFIX, StyleName::Headsup, caller);
            let ret = self.engine.group_async(body).await;
            self.trace_group_boundary(GROUP_COMPLETE_SUFFIX, StyleName::Success, caller);

            ret
        }
    }

    /// Prints a script outline titled `"<scope>: <title>"` in brief mode, see [Lumberjack::show_script_outline]
    #[track_caller]
    pub fn show_script_outline(&self, title: &str, steps: &[Step]) {
        self.engine.show_script_outline(
            &format!("{}: {title}", self.scope),
            steps,
            Mode::Brief,
            StyleName::Headsup,
        );
    }
}

impl Lumberjack {
    /// Creates a logger which prefixes all messages with `"[<scope>]"` or `"<prefix> [<scope>]"`
    ///
    /// # Examples
    ///
    /// ```
    /// use lumberjack::{CaptureTarget, Lumberjack, ScopeOptions};
    ///
    /// let capture = CaptureTarget::terminal();
    /// let logger = Lumberjack::builder().enabled(true).target(capture.clone()).build();
    ///
    /// let api = logger.create_scoped("API", ScopeOptions::new().prefix("🌐"));
    /// api.trace_message("Fetching data...");
    ///
    /// assert_eq!(capture.texts(), ["🌐 [API] Fetching data..."]);
    /// ```
    pub fn create_scoped(&self, scope: &str, options: ScopeOptions) -> ScopedLogger {
        ScopedLogger::new(self.clone(), scope, options)
    }
}
