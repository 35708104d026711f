pub mod format;

#[cfg(test)]
mod tests;

use std::backtrace::{Backtrace, BacktraceStatus};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Write as _};
use std::rc::Rc;
use gc::{Finalize, Gc, GcCell, Trace};

pub type SequenceRef = Gc<GcCell<Vec<Value>>>;
pub type MappingRef = Gc<GcCell<Vec<(Box<str>, Value)>>>;
pub type ErrorValueRef = Gc<ErrorValue>;

/// An arbitrary trace payload
///
/// Sequences and mappings are shared references, a value can therefore contain itself.
/// Mappings keep the insertion order of their keys.
#[derive(Clone, Trace, Finalize, Default)]
pub enum Value {
    #[default]
    Null,
    Undefined,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Rc<str>),
    Sequence(SequenceRef),
    Mapping(MappingRef),
    Error(ErrorValueRef),
    Function(Rc<str>),
}

impl Value {
    pub fn text(text: impl Into<Rc<str>>) -> Self {
        Self::Text(text.into())
    }

    pub fn empty_sequence() -> Self {
        Self::Sequence(Gc::new(GcCell::new(Vec::new())))
    }

    pub fn sequence<T: IntoValue>(elements: impl IntoIterator<Item = T>) -> Self {
        let elements = elements.into_iter().
                map(|ele| ele.to_value()).
                collect::<Vec<_>>();

        Self::Sequence(Gc::new(GcCell::new(elements)))
    }

    pub fn empty_mapping() -> Self {
        Self::Mapping(Gc::new(GcCell::new(Vec::new())))
    }

    /// Creates a mapping, later duplicate keys replace the value of earlier ones
    pub fn mapping<K: Into<Box<str>>, V: IntoValue>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mapping = Self::empty_mapping();
        for (key, value) in entries {
            mapping.insert(key, value);
        }

        mapping
    }

    /// Creates an error value from a kind (e.g. `"TypeError"`) and a message
    pub fn error(kind: &str, message: &str) -> Self {
        Self::Error(Gc::new(ErrorValue::new(kind, message)))
    }

    /// Creates an error value from a Rust error, the kind is the type name of `E`
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        let type_name = std::any::type_name::<E>();
        let type_name = type_name.split('<').next().unwrap_or(type_name);
        let kind = type_name.rsplit("::").next().unwrap_or(type_name);

        Self::from_dyn_error(kind, error)
    }

    pub fn from_dyn_error(kind: &str, error: &(dyn Error + 'static)) -> Self {
        Self::Error(Gc::new(ErrorValue::from_dyn_error(kind, error)))
    }

    pub fn function(name: impl Into<Rc<str>>) -> Self {
        Self::Function(name.into())
    }

    /// Appends an element if this value is a sequence
    ///
    /// Returns false if this value is not a sequence
    pub fn push(&self, value: impl IntoValue) -> bool {
        let Value::Sequence(sequence) = self else {
            return false;
        };

        sequence.borrow_mut().push(value.to_value());

        true
    }

    /// Inserts or replaces an entry if this value is a mapping
    ///
    /// Returns false if this value is not a mapping
    pub fn insert(&self, key: impl Into<Box<str>>, value: impl IntoValue) -> bool {
        let Value::Mapping(mapping) = self else {
            return false;
        };

        let key = key.into();
        let value = value.to_value();

        let mut mapping = mapping.borrow_mut();
        if let Some(entry) = mapping.iter_mut().find(|(entry_key, _)| *entry_key == key) {
            entry.1 = value;
        }else {
            mapping.push((key, value));
        }

        true
    }

    /// Returns the number of elements or entries of a sequence or mapping
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Sequence(sequence) => Some(sequence.borrow().len()),
            Value::Mapping(mapping) => Some(mapping.borrow().len()),

            _ => None,
        }
    }

    /// Returns true for [Null](Value::Null) and [Undefined](Value::Undefined), these payloads are not rendered
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(..))
    }

    /// Identity of a shared sequence or mapping, used for cycle detection
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Sequence(sequence) => Some(&**sequence as *const GcCell<_> as *const () as usize),
            Value::Mapping(mapping) => Some(&**mapping as *const GcCell<_> as *const () as usize),

            _ => None,
        }
    }

    /// Returns true if both values are the same shared sequence or mapping
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self.identity(), other.identity()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,

            _ => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Value").
                field(&format::brief(self)).
                finish()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format::brief(self))
    }
}

/// An error-like payload
#[derive(Debug, Trace, Finalize)]
pub struct ErrorValue {
    kind: Box<str>,
    message: Box<str>,
    stack: Box<str>,
}

impl ErrorValue {
    pub fn new(kind: &str, message: &str) -> Self {
        Self::with_stack(kind, message, &format!("{kind}: {message}"))
    }

    pub fn with_stack(kind: &str, message: &str, stack: &str) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// The stack contains the error, all of its sources and a backtrace if backtrace capturing is enabled
    pub fn from_dyn_error(kind: &str, error: &(dyn Error + 'static)) -> Self {
        let message = error.to_string();

        let mut stack = format!("{kind}: {message}");

        let mut source = error.source();
        while let Some(err) = source {
            let _ = write!(stack, "\n    caused by: {err}");

            source = err.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            let _ = write!(stack, "\n{backtrace}");
        }

        Self::with_stack(kind, &message, &stack)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

/// Conversion of Rust values into trace payloads
///
/// This trait can be derived for structs and enums with `#[derive(IntoValue)]` if the `derive` feature is enabled
pub trait IntoValue {
    fn to_value(&self) -> Value;
}

impl IntoValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl IntoValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl IntoValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_into_value_for_int {
    ( $( $selfT:ty ),* ) => {
        $(
            impl IntoValue for $selfT {
                fn to_value(&self) -> Value {
                    Value::Int(*self as i64)
                }
            }
        )*
    };
}

impl_into_value_for_int! { i8, i16, i32, i64, isize, u8, u16, u32 }

macro_rules! impl_into_value_for_wide_int {
    ( $( $selfT:ty ),* ) => {
        $(
            impl IntoValue for $selfT {
                fn to_value(&self) -> Value {
                    match i64::try_from(*self) {
                        Ok(value) => Value::Int(value),
                        Err(_) => Value::Text(self.to_string().into()),
                    }
                }
            }
        )*
    };
}

impl_into_value_for_wide_int! { u64, usize, i128, u128 }

impl IntoValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }
}

impl IntoValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl IntoValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string().into())
    }
}

impl IntoValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.into())
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.as_str().into())
    }
}

impl IntoValue for Rc<str> {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue> IntoValue for [T] {
    fn to_value(&self) -> Value {
        Value::sequence(self)
    }
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::sequence(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::sequence(self)
    }
}

impl<K: Display, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::mapping(self.iter().map(|(key, value)| (key.to_string(), value)))
    }
}

impl<T: IntoValue + ?Sized> IntoValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
