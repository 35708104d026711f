use std::panic::Location;
use crate::location::*;

const BACKTRACE: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/abc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
   1: std::backtrace::Backtrace::create
             at /rustc/abc/library/std/src/backtrace.rs:331:13
   2: lumberjack::location::BacktraceLocation::locate
             at ./src/location.rs:180:25
   3: <lumberjack::location::BacktraceLocation as lumberjack::location::LocationProvider>::locate
             at ./src/location.rs:185:9
   4: lumberjack::engine::Lumberjack::trace
             at ./src/engine.rs:200:9
   5: build_tool::run
             at ./src/main.rs:42:5
   6: build_tool::main
             at ./src/main.rs:10:5
   7: core::ops::function::FnOnce::call_once
             at /rustc/abc/library/core/src/ops/function.rs:250:5
";

#[test]
fn first_external_frame_skips_internal_frames() {
    let location = InternalFrames::default().first_external_frame(BACKTRACE);

    assert_eq!(location, Some(CallerLocation::new("./src/main.rs", 42, 5)));
}

#[test]
fn first_external_frame_with_additional_prefix() {
    let internal_frames = InternalFrames::default().with_prefix("build_tool::run");

    let location = internal_frames.first_external_frame(BACKTRACE);

    assert_eq!(location, Some(CallerLocation::new("./src/main.rs", 10, 5)));
}

#[test]
fn first_external_frame_without_external_frames() {
    let internal_frames = InternalFrames::new(["std::", "lumberjack::", "build_tool::", "core::"]);

    assert_eq!(internal_frames.first_external_frame(BACKTRACE), None);
    assert_eq!(internal_frames.first_external_frame(""), None);
    assert_eq!(internal_frames.first_external_frame("disabled backtrace"), None);
}

#[test]
fn first_external_frame_skips_frames_without_location() {
    let backtrace = "   0: lumberjack::engine::Lumberjack::trace
   1: app::handler
   2: app::main
             at ./src/main.rs:7:3
";

    let location = InternalFrames::default().first_external_frame(backtrace);

    assert_eq!(location, Some(CallerLocation::new("./src/main.rs", 7, 3)));
}

#[test]
fn is_internal_ignores_impl_brackets() {
    let internal_frames = InternalFrames::default();

    assert!(internal_frames.is_internal("<lumberjack::render::TerminalTarget as lumberjack::render::RenderTarget>::emit"));
    assert!(internal_frames.is_internal("core::ops::function::FnOnce::call_once"));
    assert!(!internal_frames.is_internal("app::main"));
    assert!(!internal_frames.is_internal("lumberjack_app::main"));
}

#[test]
fn caller_location_display() {
    let location = CallerLocation::new("src/main.rs", 12, 4);

    assert_eq!(location.to_string(), "src/main.rs:12");
    assert_eq!(location.column(), 4);
}

#[test]
fn tracked_caller_returns_caller() {
    let caller = Location::caller();

    let location = TrackedCaller.locate(caller).unwrap();

    assert_eq!(location.file(), caller.file());
    assert_eq!(location.line(), caller.line());
}

#[test]
fn no_location_returns_none() {
    assert_eq!(NoLocation.locate(Location::caller()), None);
}

#[test]
fn backtrace_location_does_not_panic() {
    let _ = BacktraceLocation::default().locate(Location::caller());
}
