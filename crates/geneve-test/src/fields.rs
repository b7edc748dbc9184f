//! Field path and store fixtures.

use geneve_core::{FieldPath, HDict, Value};

/// Parses a dotted path, panicking on invalid input.
pub fn path(s: &str) -> FieldPath {
    FieldPath::parse(s).unwrap_or_else(|e| panic!("bad test path {s:?}: {e}"))
}

/// Store with leaves `a.b.x`, `a.b.y`, `a.c.z` and `d`, in that order.
pub fn nested_fields() -> HDict<Value> {
    let mut fields = HDict::new();
    for (p, value) in [
        ("a.b.x", Value::Bool(true)),
        ("a.b.y", Value::Integer(2)),
        ("a.c.z", Value::from("z")),
        ("d", Value::Float(4.5)),
    ] {
        fields
            .set(&path(p), value)
            .unwrap_or_else(|e| panic!("fixture {p}: {e}"));
    }
    fields
}
