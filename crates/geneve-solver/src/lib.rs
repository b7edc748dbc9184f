//! Geneve Solver
//!
//! This crate resolves individual fields of a record:
//! - Solver registry mapping field kinds to resolution functions
//! - Boolean solver, the reference implementation of the solver contract
//! - Solve context (randomness and record environment)
//! - Record scope tying solvers, random budget and the field store together

pub mod boolean;
pub mod context;
pub mod registry;
pub mod scope;
pub mod solution;

pub use boolean::{solve_boolean, solve_boolean_field, BOOLEAN_OPERATORS};
pub use context::{Environment, SolveContext};
pub use registry::{SolverEntry, SolverFn, SolverRegistry};
pub use scope::RecordScope;
pub use solution::Solution;
