use futures::executor::block_on;
use crate::engine::{Lumberjack, Mode};
use crate::outline::Step;
use crate::render::CaptureTarget;
use crate::scope::*;
use crate::style::palette::SEPARATOR;

fn capture_logger(capture: &CaptureTarget) -> Lumberjack {
    Lumberjack::builder().
            enabled(true).
            target(capture.clone()).
            build()
}

fn separator() -> String {
    format!("\n{SEPARATOR}\n")
}

#[test]
fn label_without_prefix() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let db = logger.create_scoped("DB", ScopeOptions::new());
    db.trace_message("Connected");

    assert_eq!(db.scope(), "DB");
    assert_eq!(db.label(), "[DB]");
    assert_eq!(capture.texts(), ["[DB] Connected"]);
}

#[test]
fn label_with_prefix() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new().prefix("🌐"));
    api.trace_with("Fetched", vec!["a", "b"]);

    assert_eq!(api.label(), "🌐 [API]");
    assert_eq!(capture.texts(), ["🌐 [API] Fetched [a, b]"]);
}

#[test]
fn empty_prefix_is_ignored() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new().prefix(""));

    assert_eq!(api.label(), "[API]");
}

#[test]
fn colored_scope_segments() {
    let capture = CaptureTarget::console();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new().color("#3B82F6"));
    api.trace_message("Fetching");

    let outputs = capture.outputs();
    let call = outputs[0].console_call().unwrap();
    assert_eq!(call.format(), "%c[API]%c Fetching");
    assert_eq!(call.styles(), [
        "color: #5ed0ff; font-weight: normal; font-size: 12px",
        "color: #3B82F6; font-weight: normal; font-size: 12px",
    ]);
}

#[test]
fn colored_scope_on_terminal() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new().prefix("🌐").color("#3B82F6"));
    api.trace("Failed", (), Mode::Brief, "error");

    assert_eq!(capture.texts(), ["❌ 🌐 [API] Failed"]);
}

#[test]
fn scoped_loggers_share_engine_state() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new());
    api.indent();
    logger.trace_message("Engine");
    api.outdent();
    api.trace_message("Scoped");

    assert!(api.engine().ptr_eq(&logger));
    assert_eq!(capture.texts(), ["  Engine", "[API] Scoped"]);

    api.set_enabled(false);
    assert!(!logger.enabled());
    assert!(!api.enabled());

    api.trace_message("Hidden");
    assert_eq!(capture.len(), 2);
}

#[test]
fn scoped_config_reports_scope() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new());

    assert_eq!(api.config().scope.as_deref(), Some("API"));
    assert!(api.config().enabled);
    assert_eq!(logger.config().scope, None);
}

#[test]
fn silent_scoped_trace() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new());
    api.trace("Hidden", 1, Mode::Silent, "default");

    assert!(capture.is_empty());
}

#[test]
fn scoped_group() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new());
    let result = api.group(|| {
        api.trace_message("Inside");

        7
    });

    assert_eq!(result, 7);
    assert_eq!(capture.texts(), [
        "⚡ [API] Starting grouped operation".to_string(),
        separator(),
        "  [API] Inside".to_string(),
        separator(),
        "[API] Completed grouped operation".to_string(),
    ]);
}

#[test]
fn scoped_async_group() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let api = logger.create_scoped("API", ScopeOptions::new());
    block_on(api.group_async(async {
        api.trace_message("Awaiting");
    }));

    assert_eq!(capture.len(), 5);
    assert_eq!(capture.texts()[2], "  [API] Awaiting");
    assert_eq!(logger.indent_level(), 0);
}

#[test]
fn scoped_script_outline() {
    let capture = CaptureTarget::terminal();
    let logger = capture_logger(&capture);

    let deploy = logger.create_scoped("Deploy", ScopeOptions::new());
    deploy.show_script_outline("rollout", &[Step::new("upload")]);

    let texts = capture.texts();
    assert_eq!(texts[0], "\n⚡ DEPLOY: ROLLOUT");
    assert!(texts.contains(&"  1. upload".to_string()));
}
