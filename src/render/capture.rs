use std::sync::{Arc, Mutex, PoisonError};
use crate::render::{ConsoleCall, Line, RenderTarget, TerminalRenderer};

/// A rendered line which was recorded by a [CaptureTarget]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Terminal(String),
    Console(ConsoleCall),
}

impl Output {
    /// The printed text without ANSI codes or `%c` placeholders
    pub fn text(&self) -> String {
        match self {
            Output::Terminal(text) => text.clone(),
            Output::Console(call) => call.text(),
        }
    }

    pub fn console_call(&self) -> Option<&ConsoleCall> {
        match self {
            Output::Console(call) => Some(call),
            Output::Terminal(..) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureKind {
    Terminal,
    Console,
}

/// This [RenderTarget] records every rendered line instead of printing it
///
/// Clones share the same recording, keep one clone and pass another one to the logger.
#[derive(Debug, Clone)]
pub struct CaptureTarget {
    kind: CaptureKind,
    outputs: Arc<Mutex<Vec<Output>>>,
}

impl CaptureTarget {
    /// Records uncolored terminal strings
    pub fn terminal() -> Self {
        Self {
            kind: CaptureKind::Terminal,
            outputs: Default::default(),
        }
    }

    /// Records browser console calls
    pub fn console() -> Self {
        Self {
            kind: CaptureKind::Console,
            outputs: Default::default(),
        }
    }

    pub fn outputs(&self) -> Vec<Output> {
        self.outputs.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.outputs().iter().map(Output::text).collect()
    }

    /// The number of recorded print calls
    pub fn len(&self) -> usize {
        self.outputs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.outputs.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl RenderTarget for CaptureTarget {
    fn emit(&mut self, line: &Line) {
        let output = match self.kind {
            CaptureKind::Terminal => Output::Terminal(TerminalRenderer::plain().render(line)),
            CaptureKind::Console => Output::Console(ConsoleCall::from_line(line)),
        };

        self.outputs.lock().unwrap_or_else(PoisonError::into_inner).push(output);
    }
}
