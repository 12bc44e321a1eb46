//! Shock tube problems.
//!
//! Selected Euler shock tube problems from
//! - G. A. Sod, J. Comput. Phys. 27.1 (1978)
//! - P. D. Lax, Comm. Pure Appl. Math. 7.1 (1954)
//! - E. Toro, Riemann Solvers and Numerical Methods for Fluid Dynamics, Springer (1999)

use crate::{
    errors::RiemannError,
    physical_quantities::{Primitive, State},
    riemann_solver::RiemannProblem,
};

pub const PRESET_NAMES: [&str; 9] = [
    "Sod", "Lax", "Toro-1", "Toro-2", "Toro-3", "Toro-4", "Toro-5", "Toro-6", "Toro-7",
];

/// A Riemann problem placed in a domain: the discontinuity sits at `x0` and the
/// solution is evaluated at `time`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockTube {
    pub name: String,
    pub left: State<Primitive>,
    pub right: State<Primitive>,
    pub time: f64,
    pub x0: f64,
}

impl ShockTube {
    pub fn new(
        name: &str,
        left: State<Primitive>,
        right: State<Primitive>,
        time: f64,
        x0: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            left,
            right,
            time,
            x0,
        }
    }

    /// Look up a problem from the catalog by name.
    pub fn preset(name: &str) -> Option<Self> {
        let (left, right, time, x0) = match name {
            "Sod" => ([1.0, 0.0, 1.0], [0.125, 0.0, 0.1], 0.1644, 0.5),
            "Lax" => ([0.445, 0.698876, 3.52773], [0.5, 0.0, 0.571], 0.16, 0.5),
            "Toro-1" => ([1.0, 0.75, 1.0], [0.125, 0.0, 0.1], 0.2, 0.3),
            "Toro-2" => ([1.0, -2.0, 0.4], [1.0, 2.0, 0.4], 0.15, 0.5),
            "Toro-3" => ([1.0, 0.0, 1000.0], [1.0, 0.0, 0.01], 0.012, 0.5),
            "Toro-4" => (
                [5.99924, 19.5975, 460.894],
                [5.99242, -6.19633, 46.0950],
                0.035,
                0.4,
            ),
            "Toro-5" => ([1.0, -19.59745, 1000.0], [1.0, -19.59745, 0.01], 0.012, 0.8),
            "Toro-6" => ([1.4, 0.0, 1.0], [1.0, 0.0, 1.0], 2.0, 0.5),
            "Toro-7" => ([1.4, 0.1, 1.0], [1.0, 0.1, 1.0], 2.0, 0.5),
            _ => return None,
        };
        Some(Self::new(name, left.into(), right.into(), time, x0))
    }

    /// The complete catalog, in a fixed order.
    pub fn presets() -> Vec<Self> {
        PRESET_NAMES
            .iter()
            .filter_map(|name| Self::preset(name))
            .collect()
    }

    pub fn riemann_problem(&self, gamma: f64) -> Result<RiemannProblem, RiemannError> {
        RiemannProblem::new(gamma, self.left, self.right)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_catalog() {
        let presets = ShockTube::presets();
        assert_eq!(presets.len(), PRESET_NAMES.len());
        for (tube, name) in presets.iter().zip(PRESET_NAMES) {
            assert_eq!(tube.name, name);
            assert!(tube.riemann_problem(1.4).is_ok());
        }
        assert!(ShockTube::preset("sod").is_none());
    }

    #[test]
    fn test_sod() {
        let sod = ShockTube::preset("Sod").unwrap();
        assert_eq!(sod.left, State::<Primitive>::new(1., 0., 1.));
        assert_eq!(sod.right, State::<Primitive>::new(0.125, 0., 0.1));
        assert_eq!(sod.time, 0.1644);
        assert_eq!(sod.x0, 0.5);
    }
}
