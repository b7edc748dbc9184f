//! Shared test fixtures for Geneve crates.
//!
//! - [`constraints`] - building constraint lists from operator spellings
//! - [`fields`] - paths and a sample nested field store
//! - [`rng`] - deterministic random number generators
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! geneve-test = { workspace = true }
//! ```

pub mod constraints;
pub mod fields;
pub mod rng;

pub use constraints::parse_constraints;
pub use fields::{nested_fields, path};
pub use rng::{seeded_rng, TEST_SEED};
