//! Exact solution of the Riemann problem for the one-dimensional Euler equations.
//!
//! Solving happens in two stages: [`ExactRiemannSolver::solve`] determines the
//! pressure and velocity in the star region (or detects that the two rarefaction
//! waves pull apart and leave a vacuum), after which the returned
//! [`RiemannSolution`] can be sampled at any similarity coordinate `s = (x - x0) / t`.

use crate::{
    errors::RiemannError,
    gas_law::AdiabaticIndex,
    physical_quantities::{Conserved, Primitive, State},
};

mod exact;
mod guess;
mod pressure;
mod pvrs;
mod sampling;
mod trrs;
mod tsrs;
mod vacuum;

pub use exact::{ExactRiemannSolver, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use guess::PressureGuess;
pub use pressure::PressureFunction;
pub use pvrs::PVRiemannSolver;
pub use trrs::TRRiemannSolver;
pub use tsrs::TSRiemannSolver;

/// A single Riemann problem: an ideal gas with adiabatic index gamma and two
/// constant states separated by a discontinuity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannProblem {
    gamma: AdiabaticIndex,
    left: State<Primitive>,
    right: State<Primitive>,
}

impl RiemannProblem {
    pub fn new(
        gamma: f64,
        left: State<Primitive>,
        right: State<Primitive>,
    ) -> Result<Self, RiemannError> {
        let gamma = AdiabaticIndex::try_from(gamma)?;
        Self::check_state(&left, "left")?;
        Self::check_state(&right, "right")?;
        Ok(Self { gamma, left, right })
    }

    fn check_state(state: &State<Primitive>, side: &str) -> Result<(), RiemannError> {
        if !state.is_finite() {
            return Err(RiemannError::InvalidInput(format!(
                "{side} state contains non-finite values: {state:?}"
            )));
        }
        if state.density() <= 0. {
            return Err(RiemannError::InvalidInput(format!(
                "{side} density must be positive, got {}",
                state.density()
            )));
        }
        if state.pressure() <= 0. {
            return Err(RiemannError::InvalidInput(format!(
                "{side} pressure must be positive, got {}",
                state.pressure()
            )));
        }
        Ok(())
    }

    pub fn gamma(&self) -> &AdiabaticIndex {
        &self.gamma
    }

    pub fn left(&self) -> &State<Primitive> {
        &self.left
    }

    pub fn right(&self) -> &State<Primitive> {
        &self.right
    }

    /// Sound speeds of the left and right states.
    pub fn sound_speeds(&self) -> (f64, f64) {
        (
            self.gamma
                .sound_speed(self.left.pressure(), 1. / self.left.density()),
            self.gamma
                .sound_speed(self.right.pressure(), 1. / self.right.density()),
        )
    }

    /// The same problem seen in a mirror: left and right are swapped and all
    /// velocities change sign.
    pub fn mirrored(&self) -> Self {
        Self {
            gamma: self.gamma,
            left: self.right.reflect(),
            right: self.left.reflect(),
        }
    }

    /// The same problem seen from a frame moving with velocity `-velocity`.
    pub fn boosted(&self, velocity: f64) -> Self {
        Self {
            gamma: self.gamma,
            left: self.left.boost(velocity),
            right: self.right.boost(velocity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    Shock,
    Rarefaction,
}

/// Extent of a nonlinear wave in similarity space.
///
/// `head` is the edge facing the undisturbed state, `tail` the edge facing the
/// star region (or the vacuum). Both coincide for a shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub kind: WaveKind,
    pub head: f64,
    pub tail: f64,
}

/// Solved star region of a Riemann problem without vacuum generation.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRegion {
    problem: RiemannProblem,
    a_l: f64,
    a_r: f64,
    p: f64,
    u: f64,
    rho_l: f64,
    rho_r: f64,
    left_wave: WaveKind,
    right_wave: WaveKind,
    iterations: usize,
}

impl StarRegion {
    pub fn pressure(&self) -> f64 {
        self.p
    }

    pub fn velocity(&self) -> f64 {
        self.u
    }

    /// Density left of the contact discontinuity
    pub fn density_left(&self) -> f64 {
        self.rho_l
    }

    /// Density right of the contact discontinuity
    pub fn density_right(&self) -> f64 {
        self.rho_r
    }

    pub fn left_wave_kind(&self) -> WaveKind {
        self.left_wave
    }

    pub fn right_wave_kind(&self) -> WaveKind {
        self.right_wave
    }

    /// Number of root finding iterations that were needed to find the pressure.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Riemann problem whose rarefaction waves separate and leave a vacuum in between.
#[derive(Debug, Clone, PartialEq)]
pub struct VacuumRegion {
    problem: RiemannProblem,
    a_l: f64,
    a_r: f64,
}

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub enum RiemannSolution {
    Star(StarRegion),
    Vacuum(VacuumRegion),
}

impl RiemannSolution {
    pub fn problem(&self) -> &RiemannProblem {
        match self {
            RiemannSolution::Star(star) => &star.problem,
            RiemannSolution::Vacuum(vacuum) => &vacuum.problem,
        }
    }

    pub fn is_vacuum(&self) -> bool {
        matches!(self, RiemannSolution::Vacuum(_))
    }

    pub fn star(&self) -> Option<&StarRegion> {
        match self {
            RiemannSolution::Star(star) => Some(star),
            RiemannSolution::Vacuum(_) => None,
        }
    }

    pub fn left_wave(&self) -> Wave {
        match self {
            RiemannSolution::Star(star) => star.left_wave(),
            RiemannSolution::Vacuum(vacuum) => vacuum.left_wave(),
        }
    }

    pub fn right_wave(&self) -> Wave {
        match self {
            RiemannSolution::Star(star) => star.right_wave(),
            RiemannSolution::Vacuum(vacuum) => vacuum.right_wave(),
        }
    }

    /// Speed of the contact discontinuity, if there is one.
    pub fn contact_speed(&self) -> Option<f64> {
        self.star().map(|star| star.u)
    }

    /// Primitive state at similarity coordinate `s`.
    pub fn sample_primitives(&self, s: f64) -> State<Primitive> {
        match self {
            RiemannSolution::Star(star) => star.sample(s),
            RiemannSolution::Vacuum(vacuum) => vacuum.sample(s),
        }
    }

    pub fn sample(&self, s: f64) -> SampleResult {
        SampleResult::new(self.sample_primitives(s), self.problem().gamma())
    }

    /// Sample at every coordinate, preserving order.
    pub fn sample_all(&self, coordinates: &[f64]) -> Vec<SampleResult> {
        coordinates.iter().map(|&s| self.sample(s)).collect()
    }
}

/// Local fluid state at a sampled similarity coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResult {
    primitives: State<Primitive>,
    internal_energy: f64,
    sound_speed: f64,
}

impl SampleResult {
    fn new(primitives: State<Primitive>, gamma: &AdiabaticIndex) -> Self {
        // Vacuum has neither a temperature nor a sound speed, report zero.
        let (internal_energy, sound_speed) = if primitives.density() > 0. {
            let density_inv = 1. / primitives.density();
            (
                gamma.internal_energy_from_pressure(primitives.pressure(), density_inv),
                gamma.sound_speed(primitives.pressure(), density_inv),
            )
        } else {
            (0., 0.)
        };
        Self {
            primitives,
            internal_energy,
            sound_speed,
        }
    }

    pub fn primitives(&self) -> &State<Primitive> {
        &self.primitives
    }

    pub fn density(&self) -> f64 {
        self.primitives.density()
    }

    pub fn velocity(&self) -> f64 {
        self.primitives.velocity()
    }

    pub fn pressure(&self) -> f64 {
        self.primitives.pressure()
    }

    /// Specific internal energy
    pub fn internal_energy(&self) -> f64 {
        self.internal_energy
    }

    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }

    pub fn conserved(&self, gamma: &AdiabaticIndex) -> State<Conserved> {
        State::<Conserved>::from_primitives(&self.primitives, gamma)
    }
}

/// Solve a Riemann problem with the default solver settings.
pub fn solve(
    gamma: f64,
    left: State<Primitive>,
    right: State<Primitive>,
) -> Result<RiemannSolution, RiemannError> {
    let problem = RiemannProblem::new(gamma, left, right)?;
    ExactRiemannSolver::default().solve(&problem)
}

/// Sample a solved Riemann problem at the given similarity coordinates.
pub fn sample(solution: &RiemannSolution, coordinates: &[f64]) -> Vec<SampleResult> {
    solution.sample_all(coordinates)
}
