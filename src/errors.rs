use thiserror::Error;
use yaml_rust::Yaml;

/// Failures of the star region solve (and of setting up its inputs).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiemannError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Pressure iteration did not converge after {iterations} iterations (last pressure: {pressure:e})")]
    NonConvergence { iterations: usize, pressure: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter in configuration: {0}")]
    MissingParameter(String),
    #[error("Unknown problem configured: {0}")]
    UnknownProblem(String),
    #[error("Unknown type of discretization configured: {0}")]
    UnknownDiscretization(String),
    #[error("Unknown type of initial pressure guess configured: {0}")]
    UnknownPressureGuess(String),
    #[error("Expected array of numbers but found: {0:?}")]
    InvalidArrayFormat(Yaml),
    #[error("Expected array of length {0}, but found {1}")]
    InvalidArrayLength(usize, usize),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
    #[error("Error loading configuration: {0}")]
    Load(String),
}
