use colored::{ColoredString, Colorize};
use crate::color;
use crate::render::{Line, RenderTarget, Tone};

/// Renders a [Line] as a single ANSI colored string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRenderer {
    colorize: bool,
}

impl TerminalRenderer {
    /// Colors are still disabled if `NO_COLOR` or `CLICOLOR=0` is set
    pub fn new() -> Self {
        Self { colorize: true }
    }

    pub fn plain() -> Self {
        Self { colorize: false }
    }

    pub fn render(&self, line: &Line) -> String {
        let mut out = String::new();

        for segment in line.segments() {
            match segment.tone() {
                Tone::Plain | Tone::Message { .. } => {
                    out += segment.text();
                },

                Tone::Accent { color, font_weight } => {
                    out += &self.paint(segment.text(), color, font_weight);
                },

                Tone::Location => {
                    let location = format!(" ({})", segment.text());
                    if self.colorize {
                        out += &location.dimmed().to_string();
                    }else {
                        out += &location;
                    }
                },
            }
        }

        out
    }

    fn paint(&self, text: &str, color: &str, font_weight: &str) -> String {
        if !self.colorize || text.is_empty() {
            return text.to_string();
        }

        let Some((r, g, b)) = color::parse_hex(color) else {
            return text.to_string();
        };

        let mut painted: ColoredString = text.truecolor(r, g, b);
        if font_weight == "bold" {
            painted = painted.bold();
        }

        painted.to_string()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// This [RenderTarget] prints to standard out
#[derive(Debug, Default)]
pub struct TerminalTarget {
    renderer: TerminalRenderer,
}

impl TerminalTarget {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
        }
    }

    /// A terminal target which never prints ANSI escape codes
    pub fn plain() -> Self {
        Self {
            renderer: TerminalRenderer::plain(),
        }
    }
}

impl RenderTarget for TerminalTarget {
    fn emit(&mut self, line: &Line) {
        println!("{}", self.renderer.render(line));
    }
}
