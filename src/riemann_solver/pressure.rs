use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::RiemannProblem;

/// The pressure function `f(p) = f_L(p) + f_R(p) + (v_R - v_L)` whose root is
/// the pressure in the star region.
///
/// Every `f_K` is the shock relation for `p > p_K` and the isentropic
/// rarefaction relation otherwise. Both branches join smoothly at `p = p_K` and
/// the total function is strictly increasing and concave in `p`.
#[derive(Debug, Clone, Copy)]
pub struct PressureFunction {
    gamma: AdiabaticIndex,
    left: State<Primitive>,
    right: State<Primitive>,
    a_l: f64,
    a_r: f64,
}

impl PressureFunction {
    pub fn new(problem: &RiemannProblem) -> Self {
        let (a_l, a_r) = problem.sound_speeds();
        Self {
            gamma: *problem.gamma(),
            left: *problem.left(),
            right: *problem.right(),
            a_l,
            a_r,
        }
    }

    pub fn gamma(&self) -> &AdiabaticIndex {
        &self.gamma
    }

    pub fn left_state(&self) -> &State<Primitive> {
        &self.left
    }

    pub fn right_state(&self) -> &State<Primitive> {
        &self.right
    }

    pub fn sound_speeds(&self) -> (f64, f64) {
        (self.a_l, self.a_r)
    }

    /// `v_R - v_L`
    pub fn velocity_difference(&self) -> f64 {
        self.right.velocity() - self.left.velocity()
    }

    /// Functions (4.6) and (4.7) in Toro
    fn fb(&self, p: f64, state: &State<Primitive>, a: f64) -> f64 {
        if p > state.pressure() {
            let cap_a = self.gamma.tdgp1() / state.density();
            let cap_b = self.gamma.gm1dgp1() * state.pressure();
            (p - state.pressure()) * (cap_a / (p + cap_b)).sqrt()
        } else {
            self.gamma.tdgm1() * a * ((p / state.pressure()).powf(self.gamma.gm1d2g()) - 1.)
        }
    }

    /// Function (4.37) in Toro
    fn fprimeb(&self, p: f64, state: &State<Primitive>, a: f64) -> f64 {
        if p > state.pressure() {
            let cap_a = self.gamma.tdgp1() / state.density();
            let cap_b = self.gamma.gm1dgp1() * state.pressure();
            (1. - 0.5 * (p - state.pressure()) / (cap_b + p)) * (cap_a / (p + cap_b)).sqrt()
        } else {
            1. / (state.density() * a) * (p / state.pressure()).powf(-self.gamma.gp1d2g())
        }
    }

    pub fn left(&self, p: f64) -> f64 {
        self.fb(p, &self.left, self.a_l)
    }

    pub fn right(&self, p: f64) -> f64 {
        self.fb(p, &self.right, self.a_r)
    }

    /// Function (4.5) in Toro
    pub fn eval(&self, p: f64) -> f64 {
        self.left(p) + self.right(p) + self.velocity_difference()
    }

    /// The derivative of `eval` w.r.t. p
    pub fn derivative(&self, p: f64) -> f64 {
        self.fprimeb(p, &self.left, self.a_l) + self.fprimeb(p, &self.right, self.a_r)
    }

    /// Rounding error level of `eval(p)`. Below it the sign of the pressure
    /// function carries no information.
    pub fn residual_tolerance(&self, p: f64) -> f64 {
        4. * f64::EPSILON
            * (self.left(p).abs() + self.right(p).abs() + self.velocity_difference().abs())
    }

    /// Velocity in the star region belonging to star pressure `p`.
    pub fn star_velocity(&self, p: f64) -> f64 {
        0.5 * (self.left.velocity() + self.right.velocity()) + 0.5 * (self.right(p) - self.left(p))
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn get_function() -> PressureFunction {
        let problem = RiemannProblem::new(
            1.4,
            State::<Primitive>::new(1., 0., 1.),
            State::<Primitive>::new(0.125, 0., 0.1),
        )
        .unwrap();
        PressureFunction::new(&problem)
    }

    #[test]
    fn test_branches_join_smoothly() {
        let f = get_function();
        let eps = 1e-9;
        for p_k in [1., 0.1] {
            assert_approx_eq!(f64, f.eval(p_k - eps), f.eval(p_k + eps), epsilon = 1e-7);
            assert_approx_eq!(
                f64,
                f.derivative(p_k - eps),
                f.derivative(p_k + eps),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_derivative() {
        let f = get_function();
        let h = 1e-6;
        for p in [0.01, 0.05, 0.3, 0.7, 2., 10.] {
            let numerical = (f.eval(p + h) - f.eval(p - h)) / (2. * h);
            assert_approx_eq!(f64, f.derivative(p), numerical, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_monotonic() {
        let f = get_function();
        let mut previous = f.eval(0.);
        for i in 1..200 {
            let current = f.eval(0.05 * i as f64);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_value_at_zero_pressure() {
        // f(0) = -2 / (gamma - 1) (a_L + a_R) + (v_R - v_L)
        let f = get_function();
        let (a_l, a_r) = f.sound_speeds();
        assert_approx_eq!(f64, f.eval(0.), -5. * (a_l + a_r));
    }
}
