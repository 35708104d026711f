use crate::render::{Line, Tone};
use crate::style::palette;

/// The arguments of a browser `console.log` call: a `%c` format string and one CSS string per `%c`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleCall {
    format: String,
    styles: Vec<String>,
}

impl ConsoleCall {
    /// Builds one `%c` segment per line segment
    pub fn from_line(line: &Line) -> Self {
        let mut format = String::new();
        let mut styles = Vec::with_capacity(line.segments().len());

        for segment in line.segments() {
            format += "%c";

            match segment.tone() {
                Tone::Location => {
                    format += " ";
                    format += segment.text();
                },

                _ => {
                    format += segment.text();
                },
            }

            styles.push(css(segment.tone()));
        }

        Self { format, styles }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// The printed text without any `%c` placeholder
    pub fn text(&self) -> String {
        self.format.replace("%c", "")
    }
}

fn css(tone: &Tone) -> String {
    let default = &*palette::DEFAULT;

    match tone {
        Tone::Plain => format!(
            "color: {}; font-weight: {}; font-size: {}px",
            default.color(), default.font_weight(), default.font_size(),
        ),

        Tone::Accent { color, font_weight } |
        Tone::Message { color, font_weight } => format!(
            "color: {color}; font-weight: {font_weight}; font-size: {}px",
            default.font_size(),
        ),

        Tone::Location => format!(
            "color: {}; font-weight: normal; font-size: 10px; opacity: 0.7",
            default.color(),
        ),
    }
}
