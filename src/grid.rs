use std::{fmt::Display, str::FromStr};

use crate::errors::{ConfigError, RiemannError};

/// Below this (absolute) time the solution is sampled at `s = x - x0` instead of
/// `s = (x - x0) / t`.
pub const STATIC_TIME_EPSILON: f64 = 1e-9;

/// Placement of the sample points inside the domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Discretization {
    /// Cell centers of `n` equal cells
    #[default]
    Zonal,
    /// `n` equally spaced nodes, including both end points
    Nodal,
}

impl FromStr for Discretization {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zonal" => Ok(Discretization::Zonal),
            "nodal" => Ok(Discretization::Nodal),
            _ => Err(ConfigError::UnknownDiscretization(s.to_string())),
        }
    }
}

impl Display for Discretization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discretization::Zonal => write!(f, "zonal"),
            Discretization::Nodal => write!(f, "nodal"),
        }
    }
}

/// Similarity coordinate of position `x` at time `time` for a discontinuity
/// initially located at `x0`.
pub fn similarity_coordinate(x: f64, x0: f64, time: f64) -> f64 {
    if time.abs() <= STATIC_TIME_EPSILON {
        x - x0
    } else {
        (x - x0) / time
    }
}

/// One-dimensional set of sample positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    discretization: Discretization,
    bounds: (f64, f64),
    positions: Vec<f64>,
}

impl Grid {
    pub fn new(
        discretization: Discretization,
        bounds: (f64, f64),
        num_points: usize,
    ) -> Result<Self, RiemannError> {
        let (x_min, x_max) = bounds;
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return Err(RiemannError::InvalidInput(format!(
                "invalid domain bounds [{x_min}, {x_max}]"
            )));
        }

        let (dx, shift) = match discretization {
            Discretization::Zonal if num_points > 0 => ((x_max - x_min) / num_points as f64, 0.5),
            Discretization::Nodal if num_points > 1 => {
                ((x_max - x_min) / (num_points - 1) as f64, 0.)
            }
            _ => {
                return Err(RiemannError::InvalidInput(format!(
                    "a {discretization} grid cannot have {num_points} points"
                )))
            }
        };

        let positions = (0..num_points)
            .map(|i| x_min + (i as f64 + shift) * dx)
            .collect();

        Ok(Self {
            discretization,
            bounds,
            positions,
        })
    }

    pub fn discretization(&self) -> Discretization {
        self.discretization
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn similarity_coordinates(&self, x0: f64, time: f64) -> Vec<f64> {
        self.positions
            .iter()
            .map(|&x| similarity_coordinate(x, x0, time))
            .collect()
    }
}
