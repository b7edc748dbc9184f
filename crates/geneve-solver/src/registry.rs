//! Solver registry.
//!
//! Maps each [`FieldKind`] to the function resolving fields of that kind
//! together with the operators it understands. The registry is an explicit
//! value: build it once at startup, then share it read-only with every
//! record being generated.
//!
//! # Example
//!
//! ```
//! use geneve_core::{FieldKind, GeneveError};
//! use geneve_solver::SolverRegistry;
//!
//! let registry = SolverRegistry::with_builtin_solvers();
//! assert!(registry.lookup(FieldKind::Boolean).is_ok());
//! assert!(matches!(
//!     registry.lookup(FieldKind::Ip),
//!     Err(GeneveError::NoSolver { kind: FieldKind::Ip })
//! ));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use geneve_core::{Constraint, FieldKind, FieldPath, GeneveError, Operator, Result, Value};
use tracing::debug;

use crate::boolean;
use crate::context::SolveContext;
use crate::solution::Solution;

/// Resolution function for one field kind.
///
/// Receives the field path, its current value (if any), its constraints in
/// arrival order and the record's remaining random budget. Returns the new
/// value with the updated budget, or an error on contradiction.
pub type SolverFn = fn(
    &FieldPath,
    Option<Value>,
    &[Constraint],
    u32,
    &mut SolveContext<'_>,
) -> Result<Solution<Value>>;

/// A registered solver.
#[derive(Clone)]
pub struct SolverEntry {
    kind: FieldKind,
    operators: BTreeSet<Operator>,
    solver: SolverFn,
}

impl SolverEntry {
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn operators(&self) -> &BTreeSet<Operator> {
        &self.operators
    }

    pub fn supports(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Runs the solver after checking every constraint operator is
    /// supported.
    ///
    /// # Errors
    ///
    /// [`GeneveError::UnsupportedOperator`] for the first constraint using
    /// an operator outside the registered set, otherwise whatever the
    /// solver returns.
    pub fn solve(
        &self,
        field: &FieldPath,
        value: Option<Value>,
        constraints: &[Constraint],
        left_attempts: u32,
        ctx: &mut SolveContext<'_>,
    ) -> Result<Solution<Value>> {
        if let Some(constraint) = constraints.iter().find(|c| !self.supports(c.operator)) {
            return Err(GeneveError::UnsupportedOperator {
                kind: self.kind,
                operator: constraint.operator,
            });
        }
        (self.solver)(field, value, constraints, left_attempts, ctx)
    }
}

impl fmt::Debug for SolverEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverEntry")
            .field("kind", &self.kind)
            .field("operators", &self.operators)
            .finish_non_exhaustive()
    }
}

/// Lookup table from field kind to solver.
#[derive(Debug, Clone, Default)]
pub struct SolverRegistry {
    entries: BTreeMap<FieldKind, SolverEntry>,
}

impl SolverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the solvers shipped with this crate.
    pub fn with_builtin_solvers() -> Self {
        let mut registry = Self::new();
        registry.register(
            FieldKind::Boolean,
            boolean::BOOLEAN_OPERATORS,
            boolean::solve_boolean_field,
        );
        registry
    }

    /// Installs `solver` for fields of `kind` using `operators`.
    ///
    /// Replaces and returns any solver previously registered for `kind`.
    pub fn register(
        &mut self,
        kind: FieldKind,
        operators: impl IntoIterator<Item = Operator>,
        solver: SolverFn,
    ) -> Option<SolverEntry> {
        let operators: BTreeSet<Operator> = operators.into_iter().collect();
        debug!(kind = %kind, operators = ?operators, "registering solver");
        self.entries.insert(
            kind,
            SolverEntry {
                kind,
                operators,
                solver,
            },
        )
    }

    /// Returns the solver for `kind`.
    ///
    /// # Errors
    ///
    /// [`GeneveError::NoSolver`] if nothing was registered for `kind`.
    pub fn lookup(&self, kind: FieldKind) -> Result<&SolverEntry> {
        self.entries
            .get(&kind)
            .ok_or(GeneveError::NoSolver { kind })
    }

    /// Returns the solver for a schema type name.
    pub fn lookup_name(&self, type_name: &str) -> Result<&SolverEntry> {
        self.lookup(type_name.parse()?)
    }

    pub fn is_registered(&self, kind: FieldKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Registered kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use geneve_test::{path, seeded_rng};

    use super::*;
    use crate::context::Environment;

    fn always_zero(
        _field: &FieldPath,
        _value: Option<Value>,
        _constraints: &[Constraint],
        left_attempts: u32,
        _ctx: &mut SolveContext<'_>,
    ) -> Result<Solution<Value>> {
        Ok(Solution::new(Some(Value::Integer(0)), left_attempts))
    }

    #[test]
    fn test_empty_registry() {
        let registry = SolverRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.lookup(FieldKind::Boolean).unwrap_err(),
            GeneveError::NoSolver {
                kind: FieldKind::Boolean
            }
        );
    }

    #[test]
    fn test_builtin_solvers() {
        let registry = SolverRegistry::with_builtin_solvers();
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![FieldKind::Boolean]);

        let entry = registry.lookup(FieldKind::Boolean).unwrap();
        assert_eq!(entry.kind(), FieldKind::Boolean);
        assert!(entry.supports(Operator::Eq));
        assert!(entry.supports(Operator::Ne));
        assert!(!entry.supports(Operator::Gt));
    }

    #[test]
    fn test_lookup_name() {
        let registry = SolverRegistry::with_builtin_solvers();
        assert!(registry.lookup_name("boolean").is_ok());
        assert_eq!(
            registry.lookup_name("long").unwrap_err(),
            GeneveError::NoSolver {
                kind: FieldKind::Long
            }
        );
        assert_eq!(
            registry.lookup_name("blob").unwrap_err(),
            GeneveError::UnknownFieldKind("blob".to_string())
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = SolverRegistry::with_builtin_solvers();
        let previous = registry.register(FieldKind::Boolean, [Operator::Eq], always_zero);
        assert_eq!(previous.unwrap().operators().len(), 2);
        assert_eq!(registry.len(), 1);
        assert!(!registry.lookup(FieldKind::Boolean).unwrap().supports(Operator::Ne));
    }

    #[test]
    fn test_solve_dispatches() {
        let mut registry = SolverRegistry::new();
        registry.register(FieldKind::Long, [Operator::Eq, Operator::Gt], always_zero);

        let mut rng = seeded_rng();
        let environment = Environment::new();
        let mut ctx = SolveContext::new(&mut rng, &environment);

        let solution = registry
            .lookup(FieldKind::Long)
            .unwrap()
            .solve(&path("n"), None, &[Constraint::new(Operator::Gt, 3)], 5, &mut ctx)
            .unwrap();
        assert_eq!(solution, Solution::new(Some(Value::Integer(0)), 5));
    }

    #[test]
    fn test_solve_rejects_unsupported_operator() {
        let registry = SolverRegistry::with_builtin_solvers();
        let mut rng = seeded_rng();
        let environment = Environment::new();
        let mut ctx = SolveContext::new(&mut rng, &environment);

        let constraints = [Constraint::eq(true), Constraint::new(Operator::Lt, 1)];
        let err = registry
            .lookup(FieldKind::Boolean)
            .unwrap()
            .solve(&path("flag"), None, &constraints, 1, &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            GeneveError::UnsupportedOperator {
                kind: FieldKind::Boolean,
                operator: Operator::Lt,
            }
        );
    }

    #[test]
    fn test_entry_debug() {
        let registry = SolverRegistry::with_builtin_solvers();
        let debug = format!("{:?}", registry.lookup(FieldKind::Boolean).unwrap());
        assert!(debug.starts_with("SolverEntry { kind: Boolean"));
    }
}
