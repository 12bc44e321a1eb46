use super::PressureFunction;

/// Two-rarefaction Riemann solver.
///
/// This estimate for the pressure in the star region assumes both the left and
/// right waves are rarefaction waves. It is exact whenever that assumption holds.
pub struct TRRiemannSolver;

impl TRRiemannSolver {
    pub fn pressure_estimate(f: &PressureFunction) -> f64 {
        let eos = f.gamma();
        let left = f.left_state();
        let right = f.right_state();
        let (a_l, a_r) = f.sound_speeds();
        let beta = eos.gm1d2g();
        let num = a_l + a_r - eos.gm1d2() * f.velocity_difference();
        let denom = a_l * left.pressure().powf(-beta) + a_r * right.pressure().powf(-beta);
        (num / denom).powf(1. / beta)
    }
}
