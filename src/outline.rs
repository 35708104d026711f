#[cfg(test)]
mod tests;

use std::panic::Location;
use crate::config::{
    DIVIDER_CHAR, DIVIDER_COLOR, DIVIDER_LENGTH, EXECUTION_BEGIN_SUBTEXT, EXECUTION_BEGIN_TITLE,
    LABEL_EXECUTES, LABEL_REQUIRES, LABEL_TRIGGERS, NO_DESCRIPTION, SCRIPT_OUTLINE_COUNT_TEMPLATE,
    SCRIPT_OUTLINE_TITLE,
};
use crate::engine::{Lumberjack, Mode, TraceMessage};
use crate::render::{Line, Segment, Tone};
use crate::style::palette::{self, StyleArg, StyleName};
use crate::value::Value;

/// A named step of a script outline
///
/// Triggers and dependencies are descriptive only, steps are always listed in the given order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    name: String,
    description: Option<String>,
    script: Option<String>,
    triggers: Vec<String>,
    dependencies: Vec<String>,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The script or command which is executed by this step
    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    #[must_use]
    pub fn triggers<S: Into<String>>(mut self, triggers: impl IntoIterator<Item = S>) -> Self {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn dependencies<S: Into<String>>(mut self, dependencies: impl IntoIterator<Item = S>) -> Self {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn get_triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn get_dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Step {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Lumberjack {
    /// Prints the planned sequence of steps of an operation
    ///
    /// In [Mode::Verbose] the script, triggers and dependencies of every step are listed as well.
    ///
    /// # Arguments
    ///
    /// * `title` - Name of the overall operation (e.g. `"Full Build Process"`)
    /// * `steps` - The steps in execution order
    /// * `mode` - [Mode::Brief] prints one line per step
    /// * `style` - Style of the header, usually `"headsup"`
    #[track_caller]
    pub fn show_script_outline(&self, title: &str, steps: &[Step], mode: Mode, style: impl Into<StyleArg>) {
        let caller = Location::caller();

        if !self.enabled() {
            return;
        }

        let style = style.into();
        let header_style = palette::resolve(&style);
        let icon = if header_style.prefix().is_empty() {
            palette::HEADSUP.prefix()
        }else {
            header_style.prefix()
        };

        {
            let mut state = self.lock();

            state.emit(&Line::new().
                    with(Segment::plain("\n")).
                    with(Segment::new(icon, Tone::accent_style(header_style))).
                    with(Segment::plain(format!(" {}", title.to_uppercase()))));

            state.emit(&Line::new().
                    with(Segment::new(DIVIDER_CHAR.to_string().repeat(DIVIDER_LENGTH), Tone::accent(DIVIDER_COLOR))));
        }

        let headsup = StyleArg::Named(StyleName::Headsup);
        let default = StyleArg::Named(StyleName::Default);

        let count = SCRIPT_OUTLINE_COUNT_TEMPLATE.replace("{count}", &steps.len().to_string());
        self.trace_at(TraceMessage::Plain(SCRIPT_OUTLINE_TITLE), &Value::text(count), Mode::Brief, &headsup, caller);

        self.group(|| {
            for (i, step) in steps.iter().enumerate() {
                let number = i + 1;
                let description = non_empty(step.description.as_deref());

                if mode == Mode::Verbose {
                    let message = format!("{number}. {}", step.name);
                    let description = description.unwrap_or(NO_DESCRIPTION);
                    self.trace_at(TraceMessage::Plain(&message), &Value::text(description), Mode::Brief, &default, caller);

                    if let Some(script) = non_empty(step.script.as_deref()) {
                        self.trace_detail(LABEL_EXECUTES, script, caller);
                    }

                    if !step.triggers.is_empty() {
                        self.trace_detail(LABEL_TRIGGERS, &step.triggers.join(", "), caller);
                    }

                    if !step.dependencies.is_empty() {
                        self.trace_detail(LABEL_REQUIRES, &step.dependencies.join(", "), caller);
                    }
                }else {
                    let message = match description {
                        Some(description) => format!("{number}. {} - {description}", step.name),
                        None => format!("{number}. {}", step.name),
                    };

                    self.trace_at(TraceMessage::Plain(&message), &Value::Null, Mode::Brief, &default, caller);
                }
            }
        });

        self.trace_at(
            TraceMessage::Plain(EXECUTION_BEGIN_TITLE),
            &Value::text(EXECUTION_BEGIN_SUBTEXT),
            Mode::Brief,
            &headsup,
            caller,
        );
    }

    fn trace_detail(&self, label: &str, detail: &str, caller: &'static Location<'static>) {
        self.indent();
        self.trace_at(
            TraceMessage::Plain(label),
            &Value::text(detail),
            Mode::Brief,
            &StyleArg::Named(StyleName::Default),
            caller,
        );
        self.outdent();
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
