use crate::config::{DIVIDER_CHAR, DIVIDER_LENGTH};
use crate::engine::{Lumberjack, Mode};
use crate::outline::*;
use crate::render::CaptureTarget;
use crate::style::palette::SEPARATOR;
use crate::style::Style;

fn capture_logger(enabled: bool) -> (Lumberjack, CaptureTarget) {
    let capture = CaptureTarget::terminal();
    let logger = Lumberjack::builder().
            enabled(enabled).
            target(capture.clone()).
            build();

    (logger, capture)
}

fn build_steps() -> Vec<Step> {
    vec![
        Step::new("clean").description("Remove build output"),
        Step::new("compile").
                description("Compile sources").
                script("cargo build").
                triggers(["test"]).
                dependencies(["clean", "fetch"]),
        Step::from("test"),
    ]
}

fn divider() -> String {
    DIVIDER_CHAR.to_string().repeat(DIVIDER_LENGTH)
}

fn separator() -> String {
    format!("\n{SEPARATOR}\n")
}

#[test]
fn step_builder() {
    let step = Step::new("compile").
            script("cargo build").
            triggers(["test", "lint"]);

    assert_eq!(step.name(), "compile");
    assert_eq!(step.get_description(), None);
    assert_eq!(step.get_script(), Some("cargo build"));
    assert_eq!(step.get_triggers(), ["test", "lint"]);
    assert!(step.get_dependencies().is_empty());
}

#[test]
fn brief_outline() {
    let (logger, capture) = capture_logger(true);

    logger.show_script_outline("Full Build Process", &build_steps(), Mode::Brief, "headsup");

    assert_eq!(capture.texts(), [
        "\n⚡ FULL BUILD PROCESS".to_string(),
        divider(),
        "⚡ Script Execution Plan: 3 scripts will be executed in sequence".to_string(),
        separator(),
        "  1. clean - Remove build output".to_string(),
        "  2. compile - Compile sources".to_string(),
        "  3. test".to_string(),
        separator(),
        "⚡ Execution will begin: Scripts will run in the order shown above".to_string(),
    ]);
    assert_eq!(logger.indent_level(), 0);
}

#[test]
fn verbose_outline() {
    let (logger, capture) = capture_logger(true);

    logger.show_script_outline("Full Build Process", &build_steps(), Mode::Verbose, "headsup");

    let texts = capture.texts();
    assert_eq!(texts[4..11], [
        "  1. clean Remove build output".to_string(),
        "  2. compile Compile sources".to_string(),
        "    Executes: cargo build".to_string(),
        "    Triggers: test".to_string(),
        "    Requires: clean, fetch".to_string(),
        "  3. test No description provided".to_string(),
        separator(),
    ]);
    assert_eq!(texts.len(), 12);
}

#[test]
fn outline_icon_from_custom_style() {
    let (logger, capture) = capture_logger(true);

    logger.show_script_outline("Deploy", &[], Mode::Brief, Style::new("#3B82F6").with_prefix("🚀"));

    let texts = capture.texts();
    assert_eq!(texts[0], "\n🚀 DEPLOY");
    assert_eq!(texts[2], "⚡ Script Execution Plan: 0 scripts will be executed in sequence");
}

#[test]
fn outline_icon_falls_back_to_headsup() {
    let (logger, capture) = capture_logger(true);

    logger.show_script_outline("Deploy", &[Step::new("upload")], Mode::Brief, "success");

    assert_eq!(capture.texts()[0], "\n⚡ DEPLOY");
}

#[test]
fn disabled_outline_prints_nothing() {
    let (logger, capture) = capture_logger(false);

    logger.show_script_outline("Full Build Process", &build_steps(), Mode::Verbose, "headsup");

    assert!(capture.is_empty());
    assert_eq!(logger.indent_level(), 0);
}

#[test]
fn nested_outline_has_no_separators() {
    let (logger, capture) = capture_logger(true);

    logger.indent();
    logger.show_script_outline("Nested", &[Step::new("only")], Mode::Brief, "headsup");

    let texts = capture.texts();
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[3], "    1. only");
    assert_eq!(logger.indent_level(), 1);
}

#[test]
fn empty_description_and_script_are_omitted() {
    let steps = [Step::new("clean").description("").script("")];

    let (logger, capture) = capture_logger(true);
    logger.show_script_outline("Build", &steps, Mode::Brief, "headsup");
    assert_eq!(capture.texts()[4], "  1. clean");

    let (logger, capture) = capture_logger(true);
    logger.show_script_outline("Build", &steps, Mode::Verbose, "headsup");

    let texts = capture.texts();
    assert_eq!(texts[4], "  1. clean No description provided");
    assert_eq!(texts[5], separator());
    assert_eq!(texts.len(), 7);
}
