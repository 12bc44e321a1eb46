use super::PressureFunction;

/// Primitive variable Riemann solver estimate of the star pressure.
///
/// Linearised acoustic approximation, exact for weak waves. Can become negative
/// for strong rarefactions.
pub struct PVRiemannSolver;

impl PVRiemannSolver {
    pub(super) fn rho_bar(rho_l: f64, rho_r: f64) -> f64 {
        0.5 * (rho_l + rho_r)
    }

    pub(super) fn p_bar(p_l: f64, p_r: f64) -> f64 {
        0.5 * (p_l + p_r)
    }

    pub(super) fn a_bar(a_l: f64, a_r: f64) -> f64 {
        0.5 * (a_l + a_r)
    }

    pub(super) fn p_star(rho_bar: f64, p_bar: f64, a_bar: f64, v_l: f64, v_r: f64) -> f64 {
        p_bar + 0.5 * (v_l - v_r) * rho_bar * a_bar
    }

    pub fn pressure_estimate(f: &PressureFunction) -> f64 {
        let left = f.left_state();
        let right = f.right_state();
        let (a_l, a_r) = f.sound_speeds();
        Self::p_star(
            Self::rho_bar(left.density(), right.density()),
            Self::p_bar(left.pressure(), right.pressure()),
            Self::a_bar(a_l, a_r),
            left.velocity(),
            right.velocity(),
        )
    }
}
