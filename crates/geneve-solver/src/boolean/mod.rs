//! Constraints solver for boolean fields.
//!
//! Constraints are folded left to right and a contradiction with an already
//! committed value fails immediately. A field left unset by its constraints
//! is then filled at random while the record's budget lasts.
//!
//! # Example
//!
//! ```
//! use geneve_core::{Constraint, FieldPath};
//! use geneve_solver::boolean::solve_boolean;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let field: FieldPath = "process.elevated".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let solution = solve_boolean(&field, None, &[Constraint::ne(true)], 3, &mut rng).unwrap();
//! assert_eq!(solution.value, Some(false));
//! assert_eq!(solution.left_attempts, 3);
//! ```


use geneve_core::{ConflictError, Constraint, FieldPath, Operator, Result, Value};
use rand::Rng;
use tracing::{debug, trace};

use crate::context::SolveContext;
use crate::solution::Solution;

/// Operators understood by the boolean solver.
pub const BOOLEAN_OPERATORS: [Operator; 2] = [Operator::Eq, Operator::Ne];

/// Solves a boolean field.
///
/// Operands are coerced with [`Value::truthy`]. Operators other than `==`
/// and `!=` are skipped; the registry refuses them before getting here.
///
/// # Errors
///
/// [`ConflictError`] when a constraint contradicts the value set so far.
pub fn solve_boolean<R: Rng + ?Sized>(
    field: &FieldPath,
    mut value: Option<bool>,
    constraints: &[Constraint],
    mut left_attempts: u32,
    rng: &mut R,
) -> std::result::Result<Solution<bool>, ConflictError> {
    for constraint in constraints {
        let operand = constraint.operand.truthy();
        match constraint.operator {
            Operator::Eq => match value {
                Some(current) if current != operand => {
                    return Err(conflict(field, Operator::Eq, current, operand));
                }
                _ => value = Some(operand),
            },
            // Two-valued domain: "not v" leaves exactly one candidate.
            Operator::Ne => match value {
                Some(current) if current == operand => {
                    return Err(conflict(field, Operator::Ne, current, !operand));
                }
                _ => value = Some(!operand),
            },
            _ => continue,
        }
        trace!(field = %field, constraint = %constraint, ?value, "applied constraint");
    }

    if value.is_none() && left_attempts > 0 {
        value = Some(rng.random_bool(0.5));
        left_attempts -= 1;
        trace!(field = %field, ?value, left_attempts, "random choice");
    }

    Ok(Solution::new(value, left_attempts))
}

/// Registry entry point for [`FieldKind::Boolean`](geneve_core::FieldKind::Boolean).
pub fn solve_boolean_field(
    field: &FieldPath,
    value: Option<Value>,
    constraints: &[Constraint],
    left_attempts: u32,
    ctx: &mut SolveContext<'_>,
) -> Result<Solution<Value>> {
    let current = value.as_ref().map(Value::truthy);
    let solution = solve_boolean(field, current, constraints, left_attempts, &mut *ctx.rng)
        .inspect_err(|err| debug!(field = %field, error = %err, "boolean conflict"))?;
    Ok(solution.map(Value::Bool))
}

fn conflict(field: &FieldPath, operator: Operator, current: bool, wanted: bool) -> ConflictError {
    ConflictError::new(
        field.to_string(),
        operator,
        format!("is already {}, cannot set to {}", current, wanted),
    )
}
