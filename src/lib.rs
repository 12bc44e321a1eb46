//! Exact Riemann solver for the one-dimensional Euler equations of an ideal gas.
//!
//! The library computes the self-similar solution of shock tube problems and
//! samples it on arbitrary grids, providing reference solutions for validating
//! numerical hydrodynamics codes.

pub use config::{RunConfig, SolverCfg};
pub use errors::{ConfigError, RiemannError};
pub use gas_law::AdiabaticIndex;
pub use grid::{Discretization, Grid};
pub use problems::ShockTube;
pub use riemann_solver::{
    sample, solve, ExactRiemannSolver, RiemannProblem, RiemannSolution, SampleResult, WaveKind,
};

pub mod config;
mod errors;
pub mod gas_law;
pub mod grid;
pub mod output;
pub mod physical_quantities;
pub mod problems;
pub mod riemann_solver;
