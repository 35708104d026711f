
use std::future::Future;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::config::{self, ConfigOptions, LoggerConfig, INDENT_SIZE};
use crate::location::{CallerLocation, LocationProvider, TrackedCaller};
use crate::render::{self, Line, RenderTarget, Segment, Tone};
use crate::style::Style;
use crate::style::palette::{self, StyleArg, StyleName};
use crate::value::{format, IntoValue, Value};

static GLOBAL: Mutex<Option<Lumberjack>> = Mutex::new(None);
static BANNER_PRINTED: AtomicBool = AtomicBool::new(false);

/// Detail level of a trace payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Single line, truncated payload
    #[default]
    Brief,

    /// Multi line, indented, depth-capped payload
    Verbose,

    /// Nothing is printed
    Silent,
}

impl Mode {
    pub fn from_name(name: &str) -> Option<Self> {
        match &*name.to_lowercase() {
            "brief" => Some(Self::Brief),
            "verbose" => Some(Self::Verbose),
            "silent" => Some(Self::Silent),

            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Brief => "brief",
            Mode::Verbose => "verbose",
            Mode::Silent => "silent",
        }
    }
}

/// The message part of a trace line
#[derive(Debug, Clone, Copy)]
pub(crate) enum TraceMessage<'a> {
    Plain(&'a str),

    /// A scope label with its own color followed by a message in the scope color
    Scoped {
        label: &'a str,
        label_color: &'a str,
        color: &'a str,
        message: &'a str,
    },
}

#[derive(Debug)]
pub(crate) struct EngineState {
    config: LoggerConfig,
    indent_level: usize,
    target: Box<dyn RenderTarget>,
    location_provider: Box<dyn LocationProvider>,
}

impl EngineState {
    pub(crate) fn enabled(&self) -> bool {
        self.config.enabled
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn outdent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub(crate) fn indent_string(&self) -> String {
        " ".repeat(self.indent_level * INDENT_SIZE)
    }

    pub(crate) fn emit(&mut self, line: &Line) {
        self.target.emit(line);
    }

    fn print_separator(&mut self) {
        self.emit(&Line::new().with(Segment::plain(format!("\n{}\n", palette::SEPARATOR))));
    }

    pub(crate) fn trace(
        &mut self,
        message: TraceMessage<'_>,
        payload: &Value,
        mode: Mode,
        style: &StyleArg,
        caller: &'static Location<'static>,
    ) {
        if !self.config.enabled || mode == Mode::Silent {
            return;
        }

        let style = if style.is_default() && payload.is_error() {
            &*palette::ERROR
        }else {
            palette::resolve(style)
        };

        let location = if self.config.show_caller_location {
            self.location_provider.locate(caller)
        }else {
            None
        };

        let line = self.build_line(message, payload, mode, style, location.as_ref());
        self.emit(&line);
    }

    fn build_line(
        &self,
        message: TraceMessage<'_>,
        payload: &Value,
        mode: Mode,
        style: &Style,
        location: Option<&CallerLocation>,
    ) -> Line {
        let mut line = Line::new();

        let indent = self.indent_string();
        let config_prefix = self.config.prefix.trim();

        let lead = if config_prefix.is_empty() {
            indent.clone()
        }else {
            format!("{indent}{config_prefix} ")
        };
        if !lead.is_empty() {
            line.push(Segment::plain(lead));
        }

        let style_prefix = style.prefix();
        if !style_prefix.is_empty() {
            line.push(Segment::new(
                style_prefix.replace('\n', &format!("\n{indent}")),
                Tone::accent_style(style),
            ));

            if !style_prefix.ends_with(char::is_whitespace) {
                line.push(Segment::plain(" "));
            }
        }

        match message {
            TraceMessage::Plain(message) => {
                line.push(Segment::new(message, Tone::message_style(style)));
            },

            TraceMessage::Scoped { label, label_color, color, message } => {
                line.push(Segment::new(label, Tone::accent(label_color)));
                line.push(Segment::new(format!(" {message}"), Tone::accent(color)));
            },
        }

        if let Some(location) = location {
            line.push(Segment::new(location.to_string(), Tone::Location));
        }

        if !payload.is_absent() {
            let payload = match mode {
                Mode::Brief => format!(" {}", format::brief(payload)),
                _ => format!("\n{}", format::verbose(payload, &indent)),
            };

            line.push(Segment::plain(payload));
        }

        line
    }
}

/// Handle to a trace engine
///
/// Clones share the same configuration and indent level.
/// [Lumberjack::global] returns the process-wide instance, [Lumberjack::builder] creates independent engines.
///
/// # Examples
///
/// ```
/// use lumberjack::{CaptureTarget, ConfigOptions, Lumberjack, Mode, Value};
///
/// let capture = CaptureTarget::terminal();
/// let logger = Lumberjack::builder().target(capture.clone()).build();
///
/// logger.configure(ConfigOptions::new().enabled(true));
/// logger.trace("Operation completed", Value::mapping([("duration", "1.2s")]), Mode::Brief, "success");
///
/// assert_eq!(capture.texts(), ["Operation completed { duration: 1.2s }"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lumberjack {
    state: Arc<Mutex<EngineState>>,
}

impl Lumberjack {
    pub fn builder() -> LumberjackBuilder {
        LumberjackBuilder::new()
    }

    /// Returns the process-wide instance and creates it on first access
    ///
    /// `enabled` is only used if the instance does not exist yet, the `DEBUG` environment variable is used if it is [None].
    /// The initialization banner is printed once per process.
    pub fn get_instance(enabled: Option<bool>) -> Self {
        let enabled = enabled.unwrap_or_else(config::debug_env_enabled);

        Self::builder().config(LoggerConfig::new(enabled)).build_global()
    }

    /// Same as [get_instance](Lumberjack::get_instance) but seeds the instance from a full configuration
    pub fn get_instance_with(config: LoggerConfig) -> Self {
        Self::builder().config(config).build_global()
    }

    /// Returns the process-wide instance, see [get_instance](Lumberjack::get_instance)
    pub fn global() -> Self {
        Self::get_instance(None)
    }

    /// Applies `options` to the process-wide instance
    pub fn configure_global(options: ConfigOptions) -> Self {
        Self::global().configure(options)
    }

    /// Drops the process-wide instance, the next access creates a new one
    ///
    /// Existing handles keep working but are detached from the new instance.
    #[doc(hidden)]
    pub fn reset_global() {
        *GLOBAL.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if both handles refer to the same engine
    pub fn ptr_eq(&self, other: &Lumberjack) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn print_banner(&self) {
        let mut state = self.lock();

        let (state_style, state_name) = if state.enabled() {
            (&*palette::SUCCESS, "enabled")
        }else {
            (&*palette::ERROR, "disabled")
        };

        let line = Line::new().
                with(Segment::new("Lumberjack", Tone::accent_style(&palette::HEADSUP))).
                with(Segment::plain(" initialized: ")).
                with(Segment::new(state_name, Tone::accent_style(state_style)));

        state.emit(&line);
    }

    /// Shallow-merges `options` into the live configuration
    pub fn configure(&self, options: ConfigOptions) -> Self {
        self.lock().config.apply(options);

        self.clone()
    }

    /// A snapshot of the live configuration
    pub fn config(&self) -> LoggerConfig {
        self.lock().config.clone()
    }

    pub fn enabled(&self) -> bool {
        self.lock().enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.lock().config.enabled = enabled;
    }

    pub fn indent(&self) {
        self.lock().indent();
    }

    /// Decreases the indent level, the level never drops below `0`
    pub fn outdent(&self) {
        self.lock().outdent();
    }

    pub fn reset_indent(&self) {
        self.lock().indent_level = 0;
    }

    pub fn indent_level(&self) -> usize {
        self.lock().indent_level
    }

    /// Two spaces per indent level
    pub fn indent_string(&self) -> String {
        self.lock().indent_string()
    }

    /// Prints a trace line
    ///
    /// Nothing is printed if the logger is disabled or `mode` is [Mode::Silent].
    /// If `style` is the default style and `payload` is an error value, the error style is used instead.
    /// [Null](Value::Null) and [Undefined](Value::Undefined) payloads are not printed.
    ///
    /// # Arguments
    ///
    /// * `message` - The message of the line
    /// * `payload` - Data which is printed after the message
    /// * `mode` - Detail level of the payload
    /// * `style` - A built-in style name (e.g. `"success"`) or a custom [Style]
    #[track_caller]
    pub fn trace(&self, message: &str, payload: impl IntoValue, mode: Mode, style: impl Into<StyleArg>) {
        let caller = Location::caller();

        let mut state = self.lock();
        if !state.enabled() || mode == Mode::Silent {
            return;
        }

        state.trace(TraceMessage::Plain(message), &payload.to_value(), mode, &style.into(), caller);
    }

    /// Prints a trace line without payload in the default style
    #[track_caller]
    pub fn trace_message(&self, message: &str) {
        self.trace(message, (), Mode::Brief, StyleName::Default);
    }

    /// Prints a trace line with a brief payload in the default style
    #[track_caller]
    pub fn trace_with(&self, message: &str, payload: impl IntoValue) {
        self.trace(message, payload, Mode::Brief, StyleName::Default);
    }

    /// Prints a trace line for a location which was tracked by the caller
    pub(crate) fn trace_at(
        &self,
        message: TraceMessage<'_>,
        payload: &Value,
        mode: Mode,
        style: &StyleArg,
        caller: &'static Location<'static>,
    ) {
        self.lock().trace(message, payload, mode, style, caller);
    }

    fn enter_group(&self) -> GroupGuard<'_> {
        let mut state = self.lock();

        let top_level = state.indent_level == 0;
        if top_level && state.enabled() {
            state.print_separator();
        }

        state.indent();

        GroupGuard {
            engine: self,
            top_level,
        }
    }

    /// Runs `body` with one additional indent level
    ///
    /// The previous indent level is restored on every exit path, including panics.
    /// Top-level groups are surrounded by separator lines if the logger is enabled.
    pub fn group<R>(&self, body: impl FnOnce() -> R) -> R {
        let _guard = self.enter_group();

        body()
    }

    /// Async version of [group](Lumberjack::group)
    ///
    /// The indent level is also restored if the returned future is dropped before completion.
    pub async fn group_async<R>(&self, body: impl Future<Output = R>) -> R {
        let _guard = self.enter_group();

        body.await
    }
}

struct GroupGuard<'a> {
    engine: &'a Lumberjack,
    top_level: bool,
}

impl Drop for GroupGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.engine.lock();

        state.outdent();

        if self.top_level && state.enabled() {
            state.print_separator();
        }
    }
}

/// Creates [Lumberjack] engines with a custom configuration, render target or location provider
#[derive(Debug, Default)]
pub struct LumberjackBuilder {
    config: Option<LoggerConfig>,
    target: Option<Box<dyn RenderTarget>>,
    location_provider: Option<Box<dyn LocationProvider>>,
}

impl LumberjackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to a disabled [LoggerConfig]
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.get_or_insert_with(LoggerConfig::default).enabled = enabled;
        self
    }

    /// Defaults to [render::default_target]
    #[must_use]
    pub fn target(mut self, target: impl RenderTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Defaults to [TrackedCaller], only used if `show_caller_location` is enabled
    #[must_use]
    pub fn location_provider(mut self, location_provider: impl LocationProvider + 'static) -> Self {
        self.location_provider = Some(Box::new(location_provider));
        self
    }

    /// Creates an independent engine, no initialization banner is printed
    pub fn build(self) -> Lumberjack {
        let state = EngineState {
            config: self.config.unwrap_or_default(),
            indent_level: 0,
            target: self.target.unwrap_or_else(render::default_target),
            location_provider: self.location_provider.unwrap_or_else(|| Box::new(TrackedCaller)),
        };

        Lumberjack {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Installs the engine as the process-wide instance if there is none yet and returns the process-wide instance
    ///
    /// The initialization banner is printed the first time an instance is installed.
    pub fn build_global(self) -> Lumberjack {
        let mut global = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = &*global {
            return instance.clone();
        }

        let instance = self.build();
        *global = Some(instance.clone());
        drop(global);

        if !BANNER_PRINTED.swap(true, Ordering::SeqCst) {
            instance.print_banner();
        }

        instance
    }
}
