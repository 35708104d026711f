use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use crate::value::*;

#[derive(Debug)]
struct ConnectionError {
    source: std::io::Error,
}

impl Display for ConnectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Connection lost")
    }
}

impl Error for ConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn mapping_keeps_insertion_order() {
    let value = Value::mapping([("b", 1), ("a", 2), ("c", 3)]);

    let Value::Mapping(mapping) = &value else {
        panic!("Expected a mapping");
    };

    let keys = mapping.borrow().iter().
            map(|(key, _)| key.to_string()).
            collect::<Vec<_>>();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn mapping_insert_replaces_existing_key() {
    let value = Value::mapping([("a", 1)]);

    assert!(value.insert("a", 2));
    assert!(value.insert("b", 3));

    assert_eq!(value.len(), Some(2));
    assert_eq!(value.to_string(), "{ a: 2, b: 3 }");
}

#[test]
fn push_and_insert_require_matching_kind() {
    let sequence = Value::empty_sequence();
    let mapping = Value::empty_mapping();

    assert!(sequence.push(1));
    assert!(!sequence.insert("a", 1));
    assert!(!mapping.push(1));
    assert!(!Value::Null.push(1));

    assert_eq!(sequence.len(), Some(1));
    assert_eq!(Value::Int(1).len(), None);
}

#[test]
fn identity_is_shared_by_clones() {
    let value = Value::sequence([1, 2]);
    let clone = value.clone();
    let other = Value::sequence([1, 2]);

    assert!(value.ptr_eq(&clone));
    assert!(!value.ptr_eq(&other));
    assert!(!Value::Int(1).ptr_eq(&Value::Int(1)));
}

#[test]
fn error_value_from_rust_error() {
    let error = ConnectionError {
        source: std::io::Error::other("socket closed"),
    };

    let Value::Error(ref value) = Value::from_error(&error) else {
        panic!("Expected an error value");
    };

    assert_eq!(value.kind(), "ConnectionError");
    assert_eq!(value.message(), "Connection lost");
    assert!(value.stack().starts_with("ConnectionError: Connection lost"));
    assert!(value.stack().contains("caused by: socket closed"));
}

#[test]
fn error_value_from_kind_and_message() {
    let value = Value::error("TypeError", "x is undefined");

    assert!(value.is_error());
    assert_eq!(value.to_string(), "TypeError: x is undefined");
}

#[test]
fn absent_values() {
    assert!(Value::Null.is_absent());
    assert!(Value::Undefined.is_absent());
    assert!(!Value::Bool(false).is_absent());
    assert!(!Value::text("").is_absent());
}

#[test]
fn into_value_conversions() {
    assert!(matches!(().to_value(), Value::Null));
    assert!(matches!(None::<i32>.to_value(), Value::Null));
    assert!(matches!(Some(42).to_value(), Value::Int(42)));
    assert!(matches!(true.to_value(), Value::Bool(true)));
    assert!(matches!(1.5_f32.to_value(), Value::Float(value) if value == 1.5));
    assert!(matches!(u64::MAX.to_value(), Value::Text(..)));

    assert_eq!("text".to_value().to_string(), "text");
    assert_eq!(vec!["a", "b"].to_value().to_string(), "[a, b]");
    assert_eq!([1, 2, 3, 4].to_value().to_string(), "[1, 2, 3, ...]");

    let map = BTreeMap::from([("b", 2), ("a", 1)]);
    assert_eq!(map.to_value().to_string(), "{ a: 1, b: 2 }");
}

#[test]
fn debug_output_uses_brief_format() {
    let value = Value::mapping([("duration", "1.2s")]);

    assert_eq!(format!("{value:?}"), "Value(\"{ duration: 1.2s }\")");
}
