use crate::{
    gas_law::AdiabaticIndex,
    physical_quantities::{Primitive, State},
};

use super::{
    sampling::{sample_rarefaction_fan, Side},
    VacuumRegion, Wave, WaveKind,
};

/// Whether two rarefactions moving apart leave a vacuum between them, i.e.
/// `v_R - v_L >= 2 / (gamma - 1) (a_L + a_R)`.
pub(super) fn generates_vacuum(a_l: f64, a_r: f64, v_r_m_v_l: f64, eos: &AdiabaticIndex) -> bool {
    eos.tdgm1() * (a_l + a_r) <= v_r_m_v_l
}

impl VacuumRegion {
    /// Speed of the left vacuum front
    fn s_l(&self) -> f64 {
        self.problem.left().velocity() + self.problem.gamma().tdgm1() * self.a_l
    }

    /// Speed of the right vacuum front
    fn s_r(&self) -> f64 {
        self.problem.right().velocity() - self.problem.gamma().tdgm1() * self.a_r
    }

    pub fn left_wave(&self) -> Wave {
        Wave {
            kind: WaveKind::Rarefaction,
            head: self.problem.left().velocity() - self.a_l,
            tail: self.s_l(),
        }
    }

    pub fn right_wave(&self) -> Wave {
        Wave {
            kind: WaveKind::Rarefaction,
            head: self.problem.right().velocity() + self.a_r,
            tail: self.s_r(),
        }
    }

    /// Sample the self-similar solution at `s = (x - x0) / t`.
    pub fn sample(&self, s: f64) -> State<Primitive> {
        let left = self.left_wave();
        let right = self.right_wave();

        if s <= left.head {
            *self.problem.left()
        } else if s < left.tail {
            sample_rarefaction_fan(
                self.problem.left(),
                self.a_l,
                s,
                Side::Left,
                self.problem.gamma(),
            )
        } else if s <= right.tail {
            State::<Primitive>::vacuum()
        } else if s < right.head {
            sample_rarefaction_fan(
                self.problem.right(),
                self.a_r,
                s,
                Side::Right,
                self.problem.gamma(),
            )
        } else {
            *self.problem.right()
        }
    }
}
