//! Constraint list builders.

use geneve_core::{Constraint, Operator, Value};

/// Builds constraints from `(operator, operand)` pairs.
///
/// Panics on an unknown operator spelling.
pub fn parse_constraints(pairs: &[(&str, Value)]) -> Vec<Constraint> {
    pairs
        .iter()
        .map(|(op, operand)| {
            let operator: Operator = op
                .parse()
                .unwrap_or_else(|e| panic!("bad test operator {op:?}: {e}"));
            Constraint::new(operator, operand.clone())
        })
        .collect()
}
