//! Best-effort lookup of the code location which called a trace method

#[cfg(test)]
mod tests;

use std::backtrace::Backtrace;
use std::fmt::{Debug, Display, Formatter};
use std::panic::Location;
use std::sync::LazyLock;
use regex::Regex;

static FRAME_SYMBOL: LazyLock<Regex, fn() -> Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+:\s+(\S.*?)\s*$").unwrap());

static FRAME_LOCATION: LazyLock<Regex, fn() -> Regex> =
    LazyLock::new(|| Regex::new(r"^\s*at\s+(.+):(\d+):(\d+)\s*$").unwrap());

/// The file and line of a trace call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    file: Box<str>,
    line: u32,
    column: u32,
}

impl CallerLocation {
    pub fn new(file: &str, line: u32, column: u32) -> Self {
        Self { file: file.into(), line, column }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl Display for CallerLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// This trait is used to abstract the lookup of caller locations
///
/// `caller` is the location which was tracked with `#[track_caller]` through the public trace methods.
/// Implementations must not panic, [None] is returned if no location can be determined.
pub trait LocationProvider: Debug + Send {
    fn locate(&self, caller: &'static Location<'static>) -> Option<CallerLocation>;
}

/// Never returns a location
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn locate(&self, _: &'static Location<'static>) -> Option<CallerLocation> {
        None
    }
}

/// Returns the location which was tracked by the compiler with `#[track_caller]`
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackedCaller;

impl LocationProvider for TrackedCaller {
    fn locate(&self, caller: &'static Location<'static>) -> Option<CallerLocation> {
        Some(CallerLocation::from(caller))
    }
}

/// Decides which stack frames belong to the logger or the Rust runtime and must be skipped
///
/// A frame is internal if its symbol starts with one of the configured prefixes
/// (a leading `<` of trait impl symbols is ignored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalFrames {
    symbol_prefixes: Vec<Box<str>>,
}

impl InternalFrames {
    pub fn new<S: Into<Box<str>>>(symbol_prefixes: impl IntoIterator<Item = S>) -> Self {
        Self {
            symbol_prefixes: symbol_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, symbol_prefix: impl Into<Box<str>>) -> Self {
        self.symbol_prefixes.push(symbol_prefix.into());
        self
    }

    pub fn is_internal(&self, symbol: &str) -> bool {
        let symbol = symbol.trim_start_matches('<');

        self.symbol_prefixes.iter().
                any(|prefix| symbol.starts_with(&**prefix))
    }

    /// Returns the location of the first non-internal frame of a formatted [Backtrace]
    pub fn first_external_frame(&self, backtrace: &str) -> Option<CallerLocation> {
        let mut current_symbol = None;

        for line in backtrace.lines() {
            if let Some(captures) = FRAME_LOCATION.captures(line) {
                let Some(symbol) = current_symbol.take() else {
                    continue;
                };
                if self.is_internal(symbol) {
                    continue;
                }

                let line_number = captures[2].parse().ok()?;
                let column = captures[3].parse().ok()?;

                return Some(CallerLocation::new(&captures[1], line_number, column));
            }

            if let Some(captures) = FRAME_SYMBOL.captures(line) {
                current_symbol = captures.get(1).map(|symbol| symbol.as_str());
            }
        }

        None
    }
}

impl Default for InternalFrames {
    fn default() -> Self {
        Self::new([
            concat!(env!("CARGO_CRATE_NAME"), "::"),
            "std::", "core::", "alloc::", "backtrace::",
            "rust_begin_unwind", "__rust", "_start", "__libc_start",
        ])
    }
}

/// Captures a [Backtrace] on every call and returns the first frame outside of [InternalFrames]
///
/// This is slow and depends on debug info being available, prefer [TrackedCaller].
#[derive(Debug, Default, Clone)]
pub struct BacktraceLocation {
    internal_frames: InternalFrames,
}

impl BacktraceLocation {
    pub fn new(internal_frames: InternalFrames) -> Self {
        Self { internal_frames }
    }
}

impl LocationProvider for BacktraceLocation {
    fn locate(&self, _: &'static Location<'static>) -> Option<CallerLocation> {
        let backtrace = Backtrace::force_capture().to_string();

        self.internal_frames.first_external_frame(&backtrace)
    }
}
