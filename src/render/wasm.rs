use web_sys::js_sys::Array;
use web_sys::wasm_bindgen::JsValue;
use crate::render::{ConsoleCall, Line, RenderTarget};

/// This [RenderTarget] prints to the web browser console
///
/// This struct is only available if the `wasm` feature is enabled
#[derive(Debug)]
pub struct JsConsoleTarget;

impl JsConsoleTarget {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsConsoleTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for JsConsoleTarget {
    fn emit(&mut self, line: &Line) {
        let call = ConsoleCall::from_line(line);

        let args = Array::new();
        args.push(&JsValue::from_str(call.format()));
        for style in call.styles() {
            args.push(&JsValue::from_str(style));
        }

        web_sys::console::log(&args);
    }
}
