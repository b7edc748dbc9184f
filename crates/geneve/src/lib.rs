//! Geneve - constraint-driven field value generation
//!
//! Resolve each field of a record from its constraints, filling the
//! unconstrained ones at random within a per-record budget, and collect the
//! results in a hierarchical store ready to be emitted group by group.
//!
//! # Example
//!
//! ```rust
//! use geneve::prelude::*;
//!
//! let registry = SolverRegistry::with_builtin_solvers();
//! let config = GeneratorConfig::new().with_random_seed(1);
//! let mut record = RecordScope::new(&registry, &config);
//!
//! let field: FieldPath = "process.elevated".parse().unwrap();
//! record
//!     .solve_field(&field, FieldKind::Boolean, &[Constraint::ne(false)])
//!     .unwrap();
//!
//! assert_eq!(record.fields().get(&field), Ok(&Value::Bool(true)));
//! ```

pub mod console;

pub use geneve_config::{ConfigError, EnvironmentMode, GeneratorConfig};
pub use geneve_core::{
    hdict, ConflictError, Constraint, FieldKind, FieldPath, GeneveError, Group, HDict, Node,
    Operator, Result, Value,
};
pub use geneve_solver::{
    boolean, Environment, RecordScope, Solution, SolveContext, SolverEntry, SolverFn,
    SolverRegistry,
};

pub mod prelude {
    pub use super::{
        Constraint, FieldKind, FieldPath, GeneratorConfig, GeneveError, HDict, Operator,
        RecordScope, SolverRegistry, Value,
    };
}
