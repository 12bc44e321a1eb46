use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{StarRegion, Wave, WaveKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(&self) -> f64 {
        match self {
            Side::Left => 1.,
            Side::Right => -1.,
        }
    }
}

/// State inside the rarefaction fan of `side`, at similarity coordinate `s`.
///
/// `state` is the undisturbed state ahead of the fan and `a` its sound speed.
/// See (4.56) and (4.63) in Toro.
pub(super) fn sample_rarefaction_fan(
    state: &State<Primitive>,
    a: f64,
    s: f64,
    side: Side,
    eos: &AdiabaticIndex,
) -> State<Primitive> {
    let sign = side.sign();
    let c = eos.tdgp1() * (a + sign * eos.gm1d2() * (state.velocity() - s));
    let v = eos.tdgp1() * (sign * a + eos.gm1d2() * state.velocity() + s);
    let cda = (c / a).max(0.);
    State::<Primitive>::new(
        state.density() * cda.powf(eos.tdgm1()),
        v,
        state.pressure() * cda.powf(eos.tgdgm1()),
    )
}

impl StarRegion {
    fn star_state_left(&self) -> State<Primitive> {
        State::<Primitive>::new(self.rho_l, self.u, self.p)
    }

    fn star_state_right(&self) -> State<Primitive> {
        State::<Primitive>::new(self.rho_r, self.u, self.p)
    }

    /// Speed of a shock running into `state`, (4.52) and (4.59) in Toro.
    fn shock_speed(&self, state: &State<Primitive>, a: f64, side: Side) -> f64 {
        let eos = self.problem.gamma();
        let pdps = self.p / state.pressure();
        state.velocity() - side.sign() * a * (eos.gp1d2g() * pdps + eos.gm1d2g()).sqrt()
    }

    fn wave(&self, kind: WaveKind, state: &State<Primitive>, a: f64, side: Side) -> Wave {
        match kind {
            WaveKind::Shock => {
                let speed = self.shock_speed(state, a, side);
                Wave {
                    kind,
                    head: speed,
                    tail: speed,
                }
            }
            WaveKind::Rarefaction => {
                let eos = self.problem.gamma();
                let a_star = a * (self.p / state.pressure()).powf(eos.gm1d2g());
                Wave {
                    kind,
                    head: state.velocity() - side.sign() * a,
                    tail: self.u - side.sign() * a_star,
                }
            }
        }
    }

    pub fn left_wave(&self) -> Wave {
        self.wave(self.left_wave, self.problem.left(), self.a_l, Side::Left)
    }

    pub fn right_wave(&self) -> Wave {
        self.wave(self.right_wave, self.problem.right(), self.a_r, Side::Right)
    }

    /// Sample the self-similar solution at `s = (x - x0) / t`.
    pub fn sample(&self, s: f64) -> State<Primitive> {
        if s <= self.u {
            self.sample_left(s)
        } else {
            self.sample_right(s)
        }
    }

    fn sample_left(&self, s: f64) -> State<Primitive> {
        let wave = self.left_wave();
        match wave.kind {
            WaveKind::Shock => {
                if s <= wave.head {
                    *self.problem.left()
                } else {
                    self.star_state_left()
                }
            }
            WaveKind::Rarefaction => {
                if s <= wave.head {
                    *self.problem.left()
                } else if s > wave.tail {
                    self.star_state_left()
                } else {
                    sample_rarefaction_fan(
                        self.problem.left(),
                        self.a_l,
                        s,
                        Side::Left,
                        self.problem.gamma(),
                    )
                }
            }
        }
    }

    fn sample_right(&self, s: f64) -> State<Primitive> {
        let wave = self.right_wave();
        match wave.kind {
            WaveKind::Shock => {
                if s >= wave.head {
                    *self.problem.right()
                } else {
                    self.star_state_right()
                }
            }
            WaveKind::Rarefaction => {
                if s >= wave.head {
                    *self.problem.right()
                } else if s < wave.tail {
                    self.star_state_right()
                } else {
                    sample_rarefaction_fan(
                        self.problem.right(),
                        self.a_r,
                        s,
                        Side::Right,
                        self.problem.gamma(),
                    )
                }
            }
        }
    }
}
