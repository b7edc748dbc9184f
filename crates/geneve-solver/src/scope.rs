//! Record-level scope.
//!
//! One [`RecordScope`] covers one record-generation pass: it owns the random
//! number generator, the random budget shared by all fields of the record
//! and the store receiving resolved values. Records generated in parallel
//! each need their own scope.

use geneve_config::{EnvironmentMode, GeneratorConfig};
use geneve_core::{Constraint, FieldKind, FieldPath, HDict, Node, Result, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::context::{Environment, SolveContext};
use crate::registry::SolverRegistry;

/// State of one record-generation pass.
pub struct RecordScope<'r> {
    registry: &'r SolverRegistry,
    rng: StdRng,
    left_attempts: u32,
    fields: HDict<Value>,
    environment: Environment,
}

impl<'r> RecordScope<'r> {
    /// Creates a scope seeded from `config.random_seed`, or from OS entropy
    /// when no seed is configured.
    ///
    /// The config is not validated here. A reproducible config without a
    /// seed still gets an entropy-seeded generator, with a warning; call
    /// [`GeneratorConfig::validate`] first to reject it.
    pub fn new(registry: &'r SolverRegistry, config: &GeneratorConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                if config.environment_mode == EnvironmentMode::Reproducible {
                    warn!("reproducible environment mode without random_seed, seeding from OS entropy");
                }
                StdRng::from_os_rng()
            }
        };
        Self::with_rng(registry, config, rng)
    }

    pub fn with_seed(registry: &'r SolverRegistry, config: &GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(registry, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(registry: &'r SolverRegistry, config: &GeneratorConfig, rng: StdRng) -> Self {
        info!(
            solvers = registry.len(),
            random_attempts = config.random_attempts,
            "Starting record"
        );
        Self {
            registry,
            rng,
            left_attempts: config.random_attempts,
            fields: HDict::new(),
            environment: Environment::new(),
        }
    }

    /// Resolves `field` and stores the result.
    ///
    /// The field's current value in the store, if any, is the starting
    /// point for its constraints. A field left unset (budget exhausted and
    /// no pinning constraint) is not written.
    ///
    /// If `field` names a branch, it starts unset and the resolved value
    /// replaces the whole branch: fields stored below it are dropped.
    ///
    /// # Errors
    ///
    /// Registry and solver errors. On error neither the store nor the
    /// budget is modified.
    pub fn solve_field(
        &mut self,
        field: &FieldPath,
        kind: FieldKind,
        constraints: &[Constraint],
    ) -> Result<Option<Value>> {
        let registry = self.registry;
        let entry = registry.lookup(kind)?;
        let current = self.fields.node(field).and_then(Node::as_leaf).cloned();

        let mut ctx = SolveContext::new(&mut self.rng, &self.environment);
        let solution = entry.solve(field, current, constraints, self.left_attempts, &mut ctx)?;

        if let Some(value) = &solution.value {
            self.fields.set(field, value.clone())?;
        }
        self.left_attempts = solution.left_attempts;

        debug!(
            field = %field,
            kind = %kind,
            value = ?solution.value,
            left_attempts = self.left_attempts,
            "Solved field"
        );
        Ok(solution.value)
    }

    /// Random choices still available to this record.
    pub fn left_attempts(&self) -> u32 {
        self.left_attempts
    }

    pub fn fields(&self) -> &HDict<Value> {
        &self.fields
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Consumes the scope, returning the resolved fields.
    pub fn into_fields(self) -> HDict<Value> {
        self.fields
    }
}
