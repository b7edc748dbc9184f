//! Test helpers shared by the core test modules.

use crate::path::FieldPath;

/// Parses a dotted path, panicking on invalid input.
pub fn path(s: &str) -> FieldPath {
    FieldPath::parse(s).unwrap_or_else(|e| panic!("bad test path {s:?}: {e}"))
}
