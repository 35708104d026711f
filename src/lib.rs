#![warn(clippy::allow_attributes)]
#![warn(clippy::assigning_clones)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::collection_is_never_read)]
#![warn(clippy::debug_assert_with_mut_call)]
#![warn(clippy::filter_map_next)]
#![warn(clippy::flat_map_option)]
#![warn(clippy::format_push_string)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::iter_filter_is_ok)]
#![warn(clippy::iter_filter_is_some)]
#![warn(clippy::manual_string_new)]
#![warn(clippy::option_as_ref_cloned)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::too_long_first_doc_paragraph)]

//Triggered by for Trace and Finalize derive
#![allow(non_local_definitions)]

//! Environment-adaptive debug tracing
//!
//! Trace lines are styled, indented and optionally annotated with a payload and the caller location.
//! They are printed as ANSI colored text on a terminal or as `%c` styled `console.log` calls in a browser
//! (`wasm` feature).
//!
//! ```
//! use lumberjack::{CaptureTarget, Lumberjack, Mode, Step};
//!
//! let capture = CaptureTarget::terminal();
//! let logger = Lumberjack::builder().enabled(true).target(capture.clone()).build();
//!
//! logger.group(|| {
//!     logger.trace("Compiling", lumberjack::payload!("files" => 12), Mode::Brief, "default");
//! });
//!
//! assert!(capture.texts().contains(&"  Compiling { files: 12 }".to_string()));
//! ```

#[macro_use]
#[doc(hidden)]
pub mod macros;

pub mod color;
pub mod config;
pub mod style;
pub mod value;
pub mod render;
pub mod location;
pub mod engine;
pub mod outline;
pub mod scope;

extern crate self as lumberjack;

use std::future::Future;

pub use config::{ConfigOptions, LoggerConfig};
pub use engine::{Lumberjack, LumberjackBuilder, Mode};
pub use outline::Step;
pub use render::{CaptureTarget, Output, RenderTarget};
pub use scope::{ScopeOptions, ScopedLogger};
pub use style::palette::{StyleArg, StyleName};
pub use style::{Style, StyleError};
pub use value::{IntoValue, Value};

/// Derives [IntoValue] for structs (mapping of field names) and enums (variant name or mapping)
///
/// Fields can be renamed with `#[payload(rename = "...")]` and skipped with `#[payload(skip)]`.
#[cfg(feature = "derive")]
pub use lumberjack_macros::IntoValue;

/// Prints a trace line with the global logger, see [Lumberjack::trace]
#[track_caller]
pub fn trace(message: &str, payload: impl IntoValue, mode: Mode, style: impl Into<StyleArg>) {
    Lumberjack::global().trace(message, payload, mode, style);
}

pub fn indent() {
    Lumberjack::global().indent();
}

pub fn outdent() {
    Lumberjack::global().outdent();
}

pub fn reset_indent() {
    Lumberjack::global().reset_indent();
}

/// Runs `body` with one additional indent level, see [Lumberjack::group]
pub fn group<R>(body: impl FnOnce() -> R) -> R {
    Lumberjack::global().group(body)
}

/// Async version of [group]
pub async fn group_async<R>(body: impl Future<Output = R>) -> R {
    Lumberjack::global().group_async(body).await
}

/// Prints a script outline with the global logger, see [Lumberjack::show_script_outline]
#[track_caller]
pub fn show_script_outline(title: &str, steps: &[Step], mode: Mode, style: impl Into<StyleArg>) {
    Lumberjack::global().show_script_outline(title, steps, mode, style);
}

/// Applies `options` to the global logger
pub fn configure(options: ConfigOptions) -> Lumberjack {
    Lumberjack::configure_global(options)
}

/// Creates a scoped logger of the global logger, see [Lumberjack::create_scoped]
pub fn create_scoped(scope: &str, options: ScopeOptions) -> ScopedLogger {
    Lumberjack::global().create_scoped(scope, options)
}

pub fn enabled() -> bool {
    Lumberjack::global().enabled()
}

pub fn set_enabled(enabled: bool) {
    Lumberjack::global().set_enabled(enabled);
}
