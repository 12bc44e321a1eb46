#![allow(dead_code)]

use exact_riemann::{
    physical_quantities::{Primitive, State},
    ExactRiemannSolver, RiemannProblem, RiemannSolution,
};
use float_cmp::assert_approx_eq;

pub const GAMMA: f64 = 1.4;

/// Left and right states of Toro's five test problems (Toro 2009, table 4.1).
pub const TORO_TESTS: [([f64; 3], [f64; 3]); 5] = [
    ([1.0, 0.0, 1.0], [0.125, 0.0, 0.1]),
    ([1.0, -2.0, 0.4], [1.0, 2.0, 0.4]),
    ([1.0, 0.0, 1000.0], [1.0, 0.0, 0.01]),
    ([1.0, 0.0, 0.01], [1.0, 0.0, 100.0]),
    ([5.99924, 19.5975, 460.894], [5.99242, -6.19633, 46.0950]),
];

pub fn get_problem(left: [f64; 3], right: [f64; 3]) -> RiemannProblem {
    RiemannProblem::new(GAMMA, left.into(), right.into()).expect("Error creating Riemann problem!")
}

pub fn get_solution(problem: &RiemannProblem) -> RiemannSolution {
    ExactRiemannSolver::default()
        .solve(problem)
        .expect("Error solving Riemann problem!")
}

/// Similarity coordinates that do not coincide with any wave boundary of the
/// problems under test.
pub fn speeds(min: f64, max: f64) -> Vec<f64> {
    let n = 97;
    (0..n)
        .map(|i| min + (max - min) * (i as f64 + 0.3141) / n as f64)
        .collect()
}

/// Compare two states componentwise, relative to the magnitude of `expected`
/// (but never tighter than `rel` in absolute terms).
pub fn assert_states_close(actual: &State<Primitive>, expected: &State<Primitive>, rel: f64) {
    let scale = |value: f64| rel * value.abs().max(1.);
    assert_approx_eq!(
        f64,
        actual.density(),
        expected.density(),
        epsilon = scale(expected.density())
    );
    assert_approx_eq!(
        f64,
        actual.velocity(),
        expected.velocity(),
        epsilon = scale(expected.velocity())
    );
    assert_approx_eq!(
        f64,
        actual.pressure(),
        expected.pressure(),
        epsilon = scale(expected.pressure())
    );
}
