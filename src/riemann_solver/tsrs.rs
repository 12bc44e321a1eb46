use super::{PVRiemannSolver, PressureFunction};

/// Two-shock Riemann solver.
///
/// This estimate for the pressure in the star region linearises the shock
/// relations of both waves around the PVRS estimate. Robust for strong shocks.
pub struct TSRiemannSolver;

impl TSRiemannSolver {
    fn g(p: f64, rho_state: f64, p_state: f64, f: &PressureFunction) -> f64 {
        let a = f.gamma().tdgp1() / rho_state;
        let b = f.gamma().gm1dgp1() * p_state;
        f64::sqrt(a / (p + b))
    }

    pub fn pressure_estimate(f: &PressureFunction) -> f64 {
        let left = f.left_state();
        let right = f.right_state();
        let p_guess = PVRiemannSolver::pressure_estimate(f).max(0.);

        let g_l = Self::g(p_guess, left.density(), left.pressure(), f);
        let g_r = Self::g(p_guess, right.density(), right.pressure(), f);
        (g_l * left.pressure() + g_r * right.pressure() - f.velocity_difference()) / (g_l + g_r)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        physical_quantities::{Primitive, State},
        riemann_solver::RiemannProblem,
    };

    #[test]
    fn test_close_to_exact_pressure() {
        // Sod shock tube, exact star pressure 0.30313
        let problem = RiemannProblem::new(
            1.4,
            State::<Primitive>::new(1., 0., 1.),
            State::<Primitive>::new(0.125, 0., 0.1),
        )
        .unwrap();
        let p = TSRiemannSolver::pressure_estimate(&PressureFunction::new(&problem));
        assert!((p - 0.30313).abs() / 0.30313 < 0.05);
    }
}
