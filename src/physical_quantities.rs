use std::marker::PhantomData;

use crate::gas_law::AdiabaticIndex;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Primitive;
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Conserved;

/// A one-dimensional fluid state.
///
/// For `State<Primitive>` the components are density, velocity and pressure.
/// For `State<Conserved>` they are densities per unit volume: mass, momentum
/// and total energy.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct State<T>(f64, f64, f64, PhantomData<T>);

impl<T> State<T> {
    pub fn vacuum() -> Self {
        Self(0., 0., 0., PhantomData)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl State<Primitive> {
    pub fn new(density: f64, velocity: f64, pressure: f64) -> Self {
        Self(density, velocity, pressure, PhantomData)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn velocity(&self) -> f64 {
        self.1
    }

    pub fn pressure(&self) -> f64 {
        self.2
    }

    pub fn is_vacuum(&self) -> bool {
        self.density() == 0.
    }

    /// Galilean boost: adds `velocity` to the flow velocity.
    pub fn boost(&self, velocity: f64) -> Self {
        if self.is_vacuum() {
            *self
        } else {
            Self::new(self.density(), self.velocity() + velocity, self.pressure())
        }
    }

    /// Mirror the state around x = 0 (flips the sign of the velocity).
    pub fn reflect(&self) -> Self {
        Self::new(self.density(), -self.velocity(), self.pressure())
    }
}

impl From<[f64; 3]> for State<Primitive> {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl State<Conserved> {
    pub fn new(density: f64, momentum: f64, energy: f64) -> Self {
        Self(density, momentum, energy, PhantomData)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn momentum(&self) -> f64 {
        self.1
    }

    /// Total energy per unit volume
    pub fn energy(&self) -> f64 {
        self.2
    }

    pub fn from_primitives(primitives: &State<Primitive>, gamma: &AdiabaticIndex) -> Self {
        let momentum = primitives.density() * primitives.velocity();
        let energy = gamma.thermal_energy_density(primitives.pressure())
            + 0.5 * momentum * primitives.velocity();
        Self::new(primitives.density(), momentum, energy)
    }
}
