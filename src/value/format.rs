//! Brief (single line) and verbose (multi line) payload formatting


use ahash::AHashSet;
use crate::config::{INDENT_SIZE, MAX_ARRAY_PREVIEW, MAX_OBJECT_PREVIEW, MAX_VERBOSE_DEPTH};
use crate::value::Value;

const CIRCULAR: &str = "[Circular]";

/// The sequences and mappings which are currently being rendered by an ancestor call
///
/// A container is only reported as `[Circular]` if it is a back-reference to one of its ancestors,
/// the same container in two sibling branches is rendered twice.
#[derive(Debug, Default)]
pub struct Visited {
    ancestors: AHashSet<usize>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if `identity` is already being rendered
    fn enter(&mut self, identity: usize) -> bool {
        self.ancestors.insert(identity)
    }

    fn leave(&mut self, identity: usize) {
        self.ancestors.remove(&identity);
    }

    pub fn contains(&self, value: &Value) -> bool {
        value.identity().is_some_and(|identity| self.ancestors.contains(&identity))
    }

    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty()
    }
}

/// Formats `value` as a single, truncated line
pub fn brief(value: &Value) -> String {
    format_brief(value, &mut Visited::new())
}

/// Formats `value` over multiple lines, every nested line starts with `indent`
pub fn verbose(value: &Value, indent: &str) -> String {
    format_verbose(value, indent, &mut Visited::new(), 0)
}

pub fn format_brief(value: &Value, visited: &mut Visited) -> String {
    match value {
        Value::Sequence(sequence) => {
            let Some(identity) = value.identity() else {
                return String::new();
            };
            if !visited.enter(identity) {
                return CIRCULAR.to_string();
            }

            let elements = sequence.borrow();
            let preview = elements.iter().
                    take(MAX_ARRAY_PREVIEW).
                    map(|ele| format_brief(ele, visited)).
                    collect::<Vec<_>>();
            let truncated = if elements.len() > MAX_ARRAY_PREVIEW { ", ..." } else { "" };

            visited.leave(identity);

            format!("[{}{truncated}]", preview.join(", "))
        },

        Value::Mapping(mapping) => {
            let Some(identity) = value.identity() else {
                return String::new();
            };
            if !visited.enter(identity) {
                return CIRCULAR.to_string();
            }

            let entries = mapping.borrow();
            let preview = entries.iter().
                    take(MAX_OBJECT_PREVIEW).
                    map(|(key, ele)| format!("{key}: {}", format_brief(ele, visited))).
                    collect::<Vec<_>>();
            let truncated = if entries.len() > MAX_OBJECT_PREVIEW { ", ..." } else { "" };

            visited.leave(identity);

            if preview.is_empty() {
                "{}".to_string()
            }else {
                format!("{{ {}{truncated} }}", preview.join(", "))
            }
        },

        Value::Error(error) => format!("{}: {}", error.kind(), error.message()),

        _ => format_scalar(value),
    }
}

pub fn format_verbose(value: &Value, indent: &str, visited: &mut Visited, depth: usize) -> String {
    let indent_unit = " ".repeat(INDENT_SIZE);

    match value {
        Value::Sequence(sequence) => {
            let Some(identity) = value.identity() else {
                return String::new();
            };
            if visited.contains(value) {
                return CIRCULAR.to_string();
            }
            if depth >= MAX_VERBOSE_DEPTH {
                return "[...]".to_string();
            }

            visited.enter(identity);

            let nested_indent = format!("{indent}{indent_unit}");
            let lines = sequence.borrow().iter().
                    map(|ele| format!(
                        "{nested_indent}- {}",
                        format_verbose(ele, &nested_indent, visited, depth + 1),
                    )).
                    collect::<Vec<_>>();

            visited.leave(identity);

            if lines.is_empty() {
                "[]".to_string()
            }else {
                lines.join("\n")
            }
        },

        Value::Mapping(mapping) => {
            let Some(identity) = value.identity() else {
                return String::new();
            };
            if visited.contains(value) {
                return CIRCULAR.to_string();
            }
            if depth >= MAX_VERBOSE_DEPTH {
                return "{...}".to_string();
            }

            visited.enter(identity);

            let nested_indent = format!("{indent}{indent_unit}");
            let lines = mapping.borrow().iter().
                    map(|(key, ele)| format!(
                        "{nested_indent}{key}: {}",
                        format_verbose(ele, &nested_indent, visited, depth + 1),
                    )).
                    collect::<Vec<_>>();

            visited.leave(identity);

            if lines.is_empty() {
                "{}".to_string()
            }else {
                lines.join("\n")
            }
        },

        Value::Error(error) => format!("{}: {}\n{}", error.kind(), error.message(), error.stack()),

        _ => format_scalar(value),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Int(value) => value.to_string(),
        Value::Float(value) => format_float(*value),
        Value::Text(value) => value.to_string(),
        Value::Function(..) => "[Function]".to_string(),

        Value::Sequence(..) | Value::Mapping(..) | Value::Error(..) => String::new(),
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    }else if value.is_infinite() {
        (if value < 0.0 { "-" } else { "" }).to_string() + "Infinity"
    }else if value == 0.0 {
        //Prevent "-0"
        "0".to_string()
    }else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        format_float_exponential(value)
    }else {
        value.to_string()
    }
}

/// Shortest exponential notation with an explicit sign for positive exponents (e.g. `1e+21`, `1.5e-7`)
fn format_float_exponential(value: f64) -> String {
    let exponential = format!("{value:e}");

    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),

        _ => exponential,
    }
}
