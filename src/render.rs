//! Line model and the render targets which print it
//!
//! The engine builds every printed line as a [Line] of [Segment]s. A [RenderTarget] turns
//! a line into either a single ANSI colored string ([terminal]) or a `%c` format string
//! with CSS style arguments ([console]) and prints it.

pub mod terminal;
pub mod console;
pub mod capture;

#[cfg(feature = "wasm")]
pub mod wasm;


use std::fmt::Debug;
use crate::style::Style;
use crate::style::palette;

pub use terminal::{TerminalRenderer, TerminalTarget};
pub use console::ConsoleCall;
pub use capture::{CaptureTarget, Output};

/// How a [Segment] is colored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    /// Default color in the browser, uncolored on a terminal
    Plain,

    /// Colored in the browser and on a terminal (prefixes, scope labels, dividers)
    Accent {
        color: Box<str>,
        font_weight: Box<str>,
    },

    /// Colored in the browser, uncolored on a terminal
    Message {
        color: Box<str>,
        font_weight: Box<str>,
    },

    /// The `file:line` of the trace call, dimmed
    Location,
}

impl Tone {
    pub fn accent(color: &str) -> Self {
        Self::Accent {
            color: color.into(),
            font_weight: palette::DEFAULT.font_weight().into(),
        }
    }

    pub fn accent_style(style: &Style) -> Self {
        Self::Accent {
            color: style.color().into(),
            font_weight: style.font_weight().into(),
        }
    }

    pub fn message(color: &str) -> Self {
        Self::Message {
            color: color.into(),
            font_weight: palette::DEFAULT.font_weight().into(),
        }
    }

    pub fn message_style(style: &Style) -> Self {
        Self::Message {
            color: style.color().into(),
            font_weight: style.font_weight().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }
}

/// A single printed line, possibly spanning multiple terminal lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    #[must_use]
    pub fn with(mut self, segment: Segment) -> Self {
        self.push(segment);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The output capability of a logger
///
/// Every call of [emit](RenderTarget::emit) must result in exactly one print call
pub trait RenderTarget: Debug + Send {
    fn emit(&mut self, line: &Line);
}

/// Returns the browser console target for `wasm32` builds with the `wasm` feature
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn default_target() -> Box<dyn RenderTarget> {
    Box::new(wasm::JsConsoleTarget::new())
}

/// Returns a terminal target which prints to standard out
#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
pub fn default_target() -> Box<dyn RenderTarget> {
    Box::new(TerminalTarget::new())
}
