//! Field constraints.
//!
//! Constraints arrive already parsed from upstream queries. Each one is an
//! operator applied to an operand, optionally followed by extra data that
//! only some solvers look at.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneveError;
use crate::value::Value;

/// Constraint operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Eq,
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    Ne,
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    Lt,
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    Le,
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    Gt,
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    Ge,
    #[cfg_attr(feature = "serde", serde(rename = "wildcard"))]
    Wildcard,
    #[cfg_attr(feature = "serde", serde(rename = "not wildcard"))]
    NotWildcard,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Wildcard,
        Operator::NotWildcard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Wildcard => "wildcard",
            Operator::NotWildcard => "not wildcard",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = GeneveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| GeneveError::UnknownOperator(s.to_string()))
    }
}

/// A requirement on a field's final value.
///
/// # Example
///
/// ```
/// use geneve_core::{Constraint, Operator, Value};
///
/// let c = Constraint::ne(true);
/// assert_eq!(c.operator, Operator::Ne);
/// assert_eq!(c.operand, Value::Bool(true));
/// assert!(c.extra.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub operator: Operator,
    pub operand: Value,
    /// Trailing data some solvers use; ignored by the boolean solver.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub extra: Vec<Value>,
}

impl Constraint {
    pub fn new(operator: Operator, operand: impl Into<Value>) -> Self {
        Self {
            operator,
            operand: operand.into(),
            extra: Vec::new(),
        }
    }

    /// Equality constraint.
    pub fn eq(operand: impl Into<Value>) -> Self {
        Self::new(Operator::Eq, operand)
    }

    /// Inequality constraint.
    pub fn ne(operand: impl Into<Value>) -> Self {
        Self::new(Operator::Ne, operand)
    }

    pub fn with_extra(mut self, extra: impl Into<Value>) -> Self {
        self.extra.push(extra.into());
        self
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}
