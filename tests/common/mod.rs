//! Common test utilities for HydroScope CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and home directories plus a CLI runner
//! - Fixtures: Reusable config and weather-log content

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
