use common::{assert_states_close, get_problem, get_solution, speeds, TORO_TESTS};
use float_cmp::assert_approx_eq;

mod common;

const BOOSTS: [f64; 4] = [-12.3, -0.7, 0.5, 3.25];

#[test]
fn test_star_region_is_galilean_invariant() {
    for (left, right) in TORO_TESTS {
        let problem = get_problem(left, right);
        let solution = get_solution(&problem);
        let star = solution.star().expect("Unexpected vacuum!");

        for w in BOOSTS {
            let boosted = get_solution(&problem.boosted(w));
            let boosted_star = boosted.star().expect("Unexpected vacuum!");

            assert_approx_eq!(
                f64,
                boosted_star.pressure(),
                star.pressure(),
                epsilon = 1e-9 * star.pressure()
            );
            assert_approx_eq!(
                f64,
                boosted_star.velocity(),
                star.velocity() + w,
                epsilon = 1e-9 * (star.velocity().abs() + w.abs()).max(1.)
            );
            assert_approx_eq!(
                f64,
                boosted_star.density_left(),
                star.density_left(),
                epsilon = 1e-9 * star.density_left()
            );
            assert_approx_eq!(
                f64,
                boosted_star.density_right(),
                star.density_right(),
                epsilon = 1e-9 * star.density_right()
            );
            assert_eq!(boosted_star.left_wave_kind(), star.left_wave_kind());
            assert_eq!(boosted_star.right_wave_kind(), star.right_wave_kind());
        }
    }
}

#[test]
fn test_sampled_profile_moves_with_frame() {
    for (left, right) in TORO_TESTS {
        let problem = get_problem(left, right);
        let solution = get_solution(&problem);

        for w in BOOSTS {
            let boosted = get_solution(&problem.boosted(w));
            for s in speeds(-40., 40.) {
                let expected = solution.sample_primitives(s).boost(w);
                let actual = boosted.sample_primitives(s + w);
                assert_states_close(&actual, &expected, 1e-8);
            }
        }
    }
}

#[test]
fn test_vacuum_is_galilean_invariant() {
    let problem = get_problem([1., -4., 0.4], [1., 4., 0.4]);
    let solution = get_solution(&problem);
    assert!(solution.is_vacuum());

    let w = 2.5;
    let boosted = get_solution(&problem.boosted(w));
    assert!(boosted.is_vacuum());
    assert_approx_eq!(
        f64,
        boosted.left_wave().tail,
        solution.left_wave().tail + w,
        epsilon = 1e-12
    );
    assert_approx_eq!(
        f64,
        boosted.right_wave().tail,
        solution.right_wave().tail + w,
        epsilon = 1e-12
    );
    assert!(boosted.sample_primitives(w).is_vacuum());
}
