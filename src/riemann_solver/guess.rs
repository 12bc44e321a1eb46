use std::{fmt::Display, str::FromStr};

use crate::errors::ConfigError;

use super::{PVRiemannSolver, PressureFunction, TRRiemannSolver, TSRiemannSolver};

/// Replacement for a non-positive or non-finite initial pressure guess.
pub const MIN_PRESSURE_GUESS: f64 = 1e-8;

/// Strategy for the starting point of the pressure iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PressureGuess {
    /// Toro's adaptive choice between the three estimates below.
    #[default]
    Adaptive,
    PrimitiveVariable,
    TwoRarefaction,
    TwoShock,
}

impl PressureGuess {
    /// Get a good first guess for the pressure in the iterative scheme
    ///
    /// The adaptive variant is based on (4.47) and (4.48) in Toro and on the
    /// FORTRAN code provided in Toro p.156-157
    pub fn estimate(&self, f: &PressureFunction) -> f64 {
        let p_guess = match self {
            PressureGuess::PrimitiveVariable => PVRiemannSolver::pressure_estimate(f),
            PressureGuess::TwoRarefaction => TRRiemannSolver::pressure_estimate(f),
            PressureGuess::TwoShock => TSRiemannSolver::pressure_estimate(f),
            PressureGuess::Adaptive => {
                let left = f.left_state();
                let right = f.right_state();
                let p_min = left.pressure().min(right.pressure());
                let p_max = left.pressure().max(right.pressure());
                let ppv = PVRiemannSolver::pressure_estimate(f).max(0.);
                if p_max / p_min <= 2. && p_min <= ppv && ppv <= p_max {
                    ppv
                } else if ppv < p_min {
                    TRRiemannSolver::pressure_estimate(f)
                } else {
                    TSRiemannSolver::pressure_estimate(f)
                }
            }
        };

        // Near vacuum the star pressure can lie many decades below this floor,
        // so only unusable estimates are replaced.
        if p_guess.is_finite() && p_guess > 0. {
            p_guess
        } else {
            MIN_PRESSURE_GUESS
        }
    }
}

impl FromStr for PressureGuess {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adaptive" => Ok(PressureGuess::Adaptive),
            "pvrs" => Ok(PressureGuess::PrimitiveVariable),
            "trrs" => Ok(PressureGuess::TwoRarefaction),
            "tsrs" => Ok(PressureGuess::TwoShock),
            _ => Err(ConfigError::UnknownPressureGuess(s.to_string())),
        }
    }
}

impl Display for PressureGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PressureGuess::Adaptive => "adaptive",
            PressureGuess::PrimitiveVariable => "pvrs",
            PressureGuess::TwoRarefaction => "trrs",
            PressureGuess::TwoShock => "tsrs",
        };
        write!(f, "{name}")
    }
}
