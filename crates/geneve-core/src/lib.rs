//! Geneve Core - Core types for constraint-driven field generation
//!
//! This crate provides the fundamental abstractions shared by the solvers:
//! - Field paths parsed from dotted strings
//! - Values, operators and constraints
//! - Field kinds declared by schemas
//! - The hierarchical store holding resolved fields
//! - Error types, including the per-field conflict signal

pub mod constraint;
pub mod error;
pub mod hdict;
pub mod kind;
pub mod path;
pub mod value;

#[cfg(test)]
mod test_utils;


pub use constraint::{Constraint, Operator};
pub use error::{ConflictError, GeneveError, Result};
pub use hdict::{Group, HDict, Node};
pub use kind::FieldKind;
pub use path::FieldPath;
pub use value::Value;
