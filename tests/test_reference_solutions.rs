use common::{assert_states_close, get_problem, get_solution, GAMMA, TORO_TESTS};
use exact_riemann::{
    grid::similarity_coordinate,
    physical_quantities::{Primitive, State},
    riemann_solver::PressureFunction,
    solve, ShockTube, WaveKind,
};
use float_cmp::assert_approx_eq;

mod common;

/// Star region values (pressure, velocity, left and right density) as tabulated
/// by Toro (2009), table 4.3.
const TORO_STAR_REGIONS: [[f64; 4]; 5] = [
    [0.30313, 0.92745, 0.42632, 0.26557],
    [0.00189, 0.00000, 0.02185, 0.02185],
    [460.894, 19.5975, 0.57506, 5.99924],
    [46.0950, -6.19633, 5.99242, 0.57511],
    [1691.64, 8.68975, 14.2823, 31.0426],
];

/// The tabulated values carry five to six significant digits
fn assert_matches_table(actual: f64, expected: f64) {
    assert_approx_eq!(
        f64,
        actual,
        expected,
        epsilon = 5e-5 * expected.abs().max(0.1)
    );
}

#[test]
fn test_toro_star_regions() {
    for ((left, right), expected) in TORO_TESTS.iter().zip(TORO_STAR_REGIONS) {
        let solution = get_solution(&get_problem(*left, *right));
        let star = solution.star().expect("Unexpected vacuum!");
        assert_matches_table(star.pressure(), expected[0]);
        assert_matches_table(star.velocity(), expected[1]);
        assert_matches_table(star.density_left(), expected[2]);
        assert_matches_table(star.density_right(), expected[3]);
    }
}

#[test]
fn test_toro_wave_patterns() {
    use WaveKind::*;
    let expected = [
        (Rarefaction, Shock),
        (Rarefaction, Rarefaction),
        (Rarefaction, Shock),
        (Shock, Rarefaction),
        (Shock, Shock),
    ];
    for ((left, right), (left_wave, right_wave)) in TORO_TESTS.iter().zip(expected) {
        let solution = get_solution(&get_problem(*left, *right));
        let star = solution.star().expect("Unexpected vacuum!");
        assert_eq!(star.left_wave_kind(), left_wave);
        assert_eq!(star.right_wave_kind(), right_wave);
        assert_eq!(solution.left_wave().kind, left_wave);
        assert_eq!(solution.right_wave().kind, right_wave);
    }
}

#[test]
fn test_star_pressure_is_root() {
    for tube in ShockTube::presets() {
        let problem = tube.riemann_problem(GAMMA).unwrap();
        let solution = get_solution(&problem);
        let star = solution.star().expect("Unexpected vacuum!");
        let f = PressureFunction::new(&problem);
        let (a_l, a_r) = f.sound_speeds();
        let velocity_scale = a_l + a_r + f.velocity_difference().abs();
        assert!(star.pressure() > 0.);
        assert!(
            f.eval(star.pressure()).abs() <= 1e-8 * velocity_scale,
            "{}: f(p*) = {:e}",
            tube.name,
            f.eval(star.pressure())
        );
        assert_approx_eq!(
            f64,
            star.velocity(),
            f.star_velocity(star.pressure()),
            epsilon = 1e-12 * velocity_scale
        );
    }
}

#[test]
fn test_sod_profile() {
    let solution = solve(
        GAMMA,
        State::<Primitive>::new(1., 0., 1.),
        State::<Primitive>::new(0.125, 0., 0.1),
    )
    .unwrap();
    let expected = [
        (0.1, [1., 0., 1.]),
        (0.3, [0.8774525327552777, 0.15267996384993598, 0.8327470150499228]),
        (0.4, [0.6029376964981807, 0.5693466305166027, 0.4924718515532225]),
        (0.6, [0.42631942817849516, 0.9274526200489499, 0.3031301780506468]),
        (0.7, [0.265573711705307, 0.9274526200489499, 0.3031301780506468]),
        (0.9, [0.125, 0., 0.1]),
    ];
    for (x, state) in expected {
        let s = similarity_coordinate(x, 0.5, 0.2);
        assert_states_close(&solution.sample_primitives(s), &state.into(), 1e-9);
    }
}

#[test]
fn test_near_vacuum() {
    let solution = get_solution(&ShockTube::preset("Toro-2").unwrap().riemann_problem(GAMMA).unwrap());
    assert!(!solution.is_vacuum());
    let star = solution.star().unwrap();
    assert!(star.pressure() > 0. && star.pressure() < 0.01);
    assert_approx_eq!(f64, star.velocity(), 0., epsilon = 1e-12);
    assert_approx_eq!(f64, star.density_left(), star.density_right(), epsilon = 1e-12);
}

#[test]
fn test_onset_of_vacuum() {
    // Velocity gap a factor 1 - 1e-7 below the vacuum generation threshold
    let a = (GAMMA * 0.4f64).sqrt();
    let v = 5. * a * (1. - 1e-7);
    let solution = get_solution(&get_problem([1., -v, 0.4], [1., v, 0.4]));
    assert!(!solution.is_vacuum());
    let star = solution.star().unwrap();
    assert!(star.pressure() > 0.);
    assert_approx_eq!(f64, star.pressure(), 4e-50, epsilon = 1e-6 * 4e-50);
    assert_approx_eq!(f64, star.velocity(), 0., epsilon = 1e-12);

    let sample = solution.sample(0.);
    assert!(sample.density() > 0. && sample.density() < 1e-30);
    assert_eq!(star.left_wave_kind(), WaveKind::Rarefaction);
}

#[test]
fn test_vacuum_generation() {
    let solution = solve(
        GAMMA,
        State::<Primitive>::new(1., -4., 0.4),
        State::<Primitive>::new(1., 4., 0.4),
    )
    .unwrap();
    assert!(solution.is_vacuum());
    assert!(solution.star().is_none());
    assert!(solution.contact_speed().is_none());

    let sample = solution.sample(0.);
    assert!(sample.primitives().is_vacuum());
    assert_eq!(sample.pressure(), 0.);
    assert_eq!(sample.velocity(), 0.);
    assert_eq!(sample.internal_energy(), 0.);
    assert_eq!(sample.sound_speed(), 0.);

    // Undisturbed states beyond the heads of both rarefactions
    assert_states_close(&solution.sample_primitives(-10.), &[1., -4., 0.4].into(), 1e-12);
    assert_states_close(&solution.sample_primitives(10.), &[1., 4., 0.4].into(), 1e-12);
}

#[test]
fn test_contact_discontinuities() {
    for (name, u) in [("Toro-6", 0.), ("Toro-7", 0.1)] {
        let solution = get_solution(&ShockTube::preset(name).unwrap().riemann_problem(GAMMA).unwrap());
        let star = solution.star().unwrap();
        assert_eq!(star.iterations(), 0);
        assert_approx_eq!(f64, star.pressure(), 1.);
        assert_approx_eq!(f64, star.velocity(), u);
        assert_approx_eq!(f64, star.density_left(), 1.4);
        assert_approx_eq!(f64, star.density_right(), 1.);

        // Only the density jumps, at the contact
        assert_states_close(&solution.sample_primitives(u - 0.01), &[1.4, u, 1.].into(), 1e-12);
        assert_states_close(&solution.sample_primitives(u + 0.01), &[1., u, 1.].into(), 1e-12);
        assert_states_close(&solution.sample_primitives(u), &[1.4, u, 1.].into(), 1e-12);
    }
}

#[test]
fn test_identical_states() {
    let state = State::<Primitive>::new(0.7, -1.3, 2.2);
    let solution = solve(GAMMA, state, state).unwrap();
    let star = solution.star().unwrap();
    assert_eq!(star.iterations(), 0);
    assert_approx_eq!(f64, star.pressure(), 2.2);
    assert_approx_eq!(f64, star.velocity(), -1.3);
    for s in [-50., -3., -1.3, 0., 0.5, 4., 50.] {
        assert_states_close(&solution.sample_primitives(s), &state, 1e-12);
    }
}

#[test]
fn test_sampling_is_idempotent() {
    for tube in ShockTube::presets() {
        let solution = get_solution(&tube.riemann_problem(GAMMA).unwrap());
        for s in common::speeds(-20., 20.) {
            assert_eq!(solution.sample(s), solution.sample(s));
        }
    }
}
