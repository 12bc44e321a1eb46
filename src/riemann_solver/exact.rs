use log::{debug, warn};

use crate::{
    errors::RiemannError,
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{
    vacuum, PressureFunction, PressureGuess, RiemannProblem, RiemannSolution, StarRegion,
    VacuumRegion, WaveKind,
};

/// Relative tolerance on the change of the star pressure between iterations.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
/// Iteration budget of the Newton-Raphson and (separately) of the Brent stage.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Factor by which the upper end of a bracket is lowered while searching for a
/// positive lower end.
const BRACKET_REDUCTION: f64 = 1e-3;

/// Exact Riemann solver.
///
/// Finds the root of the pressure function with Newton-Raphson iterations,
/// switching to Brent's method when a Newton step would leave the domain of
/// positive pressures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactRiemannSolver {
    guess: PressureGuess,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for ExactRiemannSolver {
    fn default() -> Self {
        Self {
            guess: PressureGuess::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ExactRiemannSolver {
    pub fn new(
        guess: PressureGuess,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<Self, RiemannError> {
        if !(tolerance > 0. && tolerance < 1.) {
            return Err(RiemannError::InvalidInput(format!(
                "tolerance must lie in (0, 1), got {tolerance}"
            )));
        }
        if max_iterations == 0 {
            return Err(RiemannError::InvalidInput(
                "at least one iteration must be allowed".to_string(),
            ));
        }
        Ok(Self {
            guess,
            tolerance,
            max_iterations,
        })
    }

    pub fn guess(&self) -> PressureGuess {
        self.guess
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Solve for the star region of `problem`.
    ///
    /// Vacuum generation is not an error: it yields [`RiemannSolution::Vacuum`].
    pub fn solve(&self, problem: &RiemannProblem) -> Result<RiemannSolution, RiemannError> {
        let f = PressureFunction::new(problem);
        let (a_l, a_r) = f.sound_speeds();

        if vacuum::generates_vacuum(a_l, a_r, f.velocity_difference(), problem.gamma()) {
            debug!("Initial states generate a vacuum, skipping pressure iteration");
            return Ok(RiemannSolution::Vacuum(VacuumRegion {
                problem: *problem,
                a_l,
                a_r,
            }));
        }

        let p_guess = self.guess.estimate(&f);
        debug!("Initial pressure guess ({}): {:e}", self.guess, p_guess);
        let (p, iterations) = self.solve_for_pressure(&f, p_guess)?;
        debug!("Star pressure {p:e} found after {iterations} iterations");

        Ok(RiemannSolution::Star(Self::star_region_from_pstar(
            p, iterations, problem, &f,
        )))
    }

    fn converged(&self, p_old: f64, p_new: f64) -> bool {
        (p_new - p_old).abs() <= self.tolerance * 0.5 * (p_old + p_new)
    }

    /// Find the zeropoint of the pressure function.
    ///
    /// The pressure function is increasing and concave, so Newton steps taken
    /// left of the root never overshoot it, while a step from the right lands
    /// left of the root. Only that first step can become negative, in which case
    /// the root is bracketed by [0, p], the bracket is narrowed from below and
    /// Brent's method takes over.
    fn solve_for_pressure(
        &self,
        f: &PressureFunction,
        p_guess: f64,
    ) -> Result<(f64, usize), RiemannError> {
        // f(0) < 0 whenever no vacuum is generated
        let mut p_low = 0.;
        let mut f_low = f.eval(p_low);

        let mut p = p_guess;
        let mut fp = f.eval(p);
        let mut iterations = 0;
        while fp.abs() > f.residual_tolerance(p) {
            if iterations >= self.max_iterations {
                return Err(RiemannError::NonConvergence {
                    iterations,
                    pressure: p,
                });
            }
            iterations += 1;

            if fp < 0. {
                p_low = p;
                f_low = fp;
            }
            let p_next = p - fp / f.derivative(p);
            if !(p_next.is_finite() && p_next > 0.) {
                if fp > 0. {
                    warn!("Newton-Raphson step left the physical domain (p = {p_next:e}), switching to Brent's method");
                    let ((p_low, f_low), (p_high, f_high), search_iterations) =
                        self.positive_bracket((p_low, f_low), (p, fp), f)?;
                    let (p, brent_iterations) = self.solve_brent(p_low, p_high, f_low, f_high, f)?;
                    return Ok((p, iterations + search_iterations + brent_iterations));
                }
                return Err(RiemannError::NonConvergence {
                    iterations,
                    pressure: p,
                });
            }

            let converged = self.converged(p, p_next);
            p = p_next;
            fp = f.eval(p);
            if converged {
                break;
            }
        }

        Ok((p, iterations))
    }

    /// Move the lower end of the bracket `[low, high]` away from zero.
    ///
    /// The convergence criterion is relative, so a bracket of the form [0, p]
    /// can only be bisected down to about 2^-max_iterations p. Stepping the
    /// upper end down by `BRACKET_REDUCTION` gives a bracket whose ends differ
    /// by at most a factor 1 / `BRACKET_REDUCTION`, also for star pressures
    /// many decades below p.
    fn positive_bracket(
        &self,
        low: (f64, f64),
        high: (f64, f64),
        f: &PressureFunction,
    ) -> Result<((f64, f64), (f64, f64), usize), RiemannError> {
        let (mut p_low, mut f_low) = low;
        let (mut p_high, mut f_high) = high;
        let mut iterations = 0;
        while p_low <= 0. {
            if iterations >= self.max_iterations {
                return Err(RiemannError::NonConvergence {
                    iterations,
                    pressure: p_high,
                });
            }
            iterations += 1;

            let p_trial = BRACKET_REDUCTION * p_high;
            let f_trial = f.eval(p_trial);
            if f_trial > 0. {
                p_high = p_trial;
                f_high = f_trial;
            } else {
                p_low = p_trial;
                f_low = f_trial;
            }
        }
        debug!("Star pressure bracketed by [{p_low:e}, {p_high:e}] after {iterations} reductions");
        Ok(((p_low, f_low), (p_high, f_high), iterations))
    }

    /// Find the zeropoint of the pressure function using Brent's method
    fn solve_brent(
        &self,
        lower_lim: f64,
        upper_lim: f64,
        low_f: f64,
        up_f: f64,
        f: &PressureFunction,
    ) -> Result<(f64, usize), RiemannError> {
        let error_tol = self.tolerance;
        let mut a = lower_lim;
        let mut b = upper_lim;
        let mut c;
        let mut d = f64::INFINITY;

        let mut fa = low_f;
        let mut fb = up_f;
        let mut fc;

        let mut s;
        let mut fs;

        if fa * fb > 0. {
            return Err(RiemannError::NonConvergence {
                iterations: 0,
                pressure: upper_lim,
            });
        }

        // if |f(a)| < |f(b)| then swap (a,b)
        if fa.abs() < fb.abs() {
            (a, b) = (b, a);
            (fa, fb) = (fb, fa);
        }

        c = a;
        fc = fa;
        let mut mflag = true;
        let mut iterations = 0;

        while fb != 0. && (a - b).abs() > error_tol * 0.5 * (a + b) {
            if iterations >= self.max_iterations {
                return Err(RiemannError::NonConvergence {
                    iterations,
                    pressure: b,
                });
            }
            iterations += 1;

            s = if fa != fc && fb != fc {
                // Inverse quadratic interpolation
                a * fb * fc / (fa - fb) / (fa - fc)
                    + b * fa * fc / (fb - fa) / (fb - fc)
                    + c * fa * fb / (fc - fa) / (fc - fb)
            } else {
                // Secant rule
                b - fb * (b - a) / (fb - fa)
            };

            let tmp = 0.25 * (3. * a + b);

            if !((s > tmp && s < b) || (s < tmp && s > b))
                || (mflag && (s - b).abs() >= (0.5 * (b - c).abs()))
                || (!mflag && (s - b).abs() >= (0.5 * (c - d).abs()))
                || (mflag && (b - c).abs() < 0.5 * error_tol * (b + c))
                || (!mflag && (c - d).abs() < 0.5 * error_tol * (c + d))
            {
                s = 0.5 * (a + b);
                mflag = true;
            } else {
                mflag = false;
            }

            fs = f.eval(s);
            d = c;
            c = b;
            fc = fb;
            if fa * fs < 0. {
                b = s;
                fb = fs;
            } else {
                a = s;
                fa = fs;
            }

            // if |f(a)| < |f(b)| then swap (a,b)
            if fa.abs() < fb.abs() {
                (a, b) = (b, a);
                (fa, fb) = (fb, fa);
            }
        }

        Ok((b, iterations))
    }

    fn shock_middle_density(pdps: f64, state: &State<Primitive>, eos: &AdiabaticIndex) -> f64 {
        state.density() * (pdps + eos.gm1dgp1()) / (eos.gm1dgp1() * pdps + 1.)
    }

    fn rarefaction_middle_density(
        pdps: f64,
        state: &State<Primitive>,
        eos: &AdiabaticIndex,
    ) -> f64 {
        state.density() * pdps.powf(eos.gamma_inv())
    }

    fn middle_density(p: f64, state: &State<Primitive>, eos: &AdiabaticIndex) -> (f64, WaveKind) {
        let pdps = p / state.pressure();
        if pdps > 1. {
            (Self::shock_middle_density(pdps, state, eos), WaveKind::Shock)
        } else {
            (
                Self::rarefaction_middle_density(pdps, state, eos),
                WaveKind::Rarefaction,
            )
        }
    }

    /// Complete the star region once its pressure is known.
    pub(super) fn star_region_from_pstar(
        p: f64,
        iterations: usize,
        problem: &RiemannProblem,
        f: &PressureFunction,
    ) -> StarRegion {
        let (a_l, a_r) = f.sound_speeds();
        let u = f.star_velocity(p);
        let (rho_l, left_wave) = Self::middle_density(p, problem.left(), problem.gamma());
        let (rho_r, right_wave) = Self::middle_density(p, problem.right(), problem.gamma());

        StarRegion {
            problem: *problem,
            a_l,
            a_r,
            p,
            u,
            rho_l,
            rho_r,
            left_wave,
            right_wave,
            iterations,
        }
    }
}
