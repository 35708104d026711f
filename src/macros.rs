/// Builds a trace payload
///
/// * `payload!()` - [Null](crate::Value::Null)
/// * `payload!("key" => value, ...)` - an ordered mapping
/// * `payload!([value, ...])` - a sequence, elements may have different types
/// * `payload!(value)` - any [IntoValue](crate::IntoValue)
///
/// # Examples
///
/// ```
/// use lumberjack::payload;
///
/// let value = payload!("duration" => "1.2s", "steps" => payload!([1, "two", true]));
///
/// assert_eq!(value.to_string(), "{ duration: 1.2s, steps: [1, two, true] }");
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::value::Value::Null
    };

    ( $( $key:literal => $value:expr ),+ $(,)? ) => {{
        let mapping = $crate::value::Value::empty_mapping();
        $(
            mapping.insert($key, $value);
        )+

        mapping
    }};

    ( [ $( $ele:expr ),* $(,)? ] ) => {{
        let sequence = $crate::value::Value::empty_sequence();
        $(
            sequence.push($ele);
        )*

        sequence
    }};

    ( $value:expr ) => {
        $crate::value::IntoValue::to_value(&$value)
    };
}

/// Prints a trace line with the global logger
///
/// Arguments which are omitted default to no payload, [Mode::Brief](crate::Mode::Brief) and the default style.
///
/// ```no_run
/// use lumberjack::{trace, Mode};
///
/// trace!("Build started");
/// trace!("Options:", lumberjack::payload!("minify" => true));
/// trace!("Build finished", (), Mode::Brief, "success");
/// ```
#[macro_export]
macro_rules! trace {
    ( $message:expr $(,)? ) => {
        $crate::Lumberjack::global().trace_message($message)
    };

    ( $message:expr, $payload:expr $(,)? ) => {
        $crate::Lumberjack::global().trace_with($message, $payload)
    };

    ( $message:expr, $payload:expr, $mode:expr $(,)? ) => {
        $crate::Lumberjack::global().trace($message, $payload, $mode, $crate::style::palette::StyleName::Default)
    };

    ( $message:expr, $payload:expr, $mode:expr, $style:expr $(,)? ) => {
        $crate::Lumberjack::global().trace($message, $payload, $mode, $style)
    };
}
