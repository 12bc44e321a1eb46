use crate::errors::RiemannError;

/// Adiabatic index of an ideal (polytropic) gas, together with the
/// combinations of gamma that show up in the Riemann solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdiabaticIndex {
    gamma: f64,
    gamma_inv: f64,
    odgm1: f64,
    odgp1: f64,
}

impl TryFrom<f64> for AdiabaticIndex {
    type Error = RiemannError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value <= 1. {
            return Err(RiemannError::InvalidInput(format!(
                "adiabatic index must be a finite number > 1, got {value}"
            )));
        }
        Ok(AdiabaticIndex {
            gamma: value,
            gamma_inv: 1. / value,
            odgm1: 1. / (value - 1.),
            odgp1: 1. / (value + 1.),
        })
    }
}

impl From<AdiabaticIndex> for f64 {
    fn from(value: AdiabaticIndex) -> Self {
        value.gamma
    }
}

impl AdiabaticIndex {
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// (gamma - 1) / (2 gamma)
    pub fn gm1d2g(&self) -> f64 {
        0.5 * (self.gamma - 1.) * self.gamma_inv
    }

    /// (gamma + 1) / (2 gamma)
    pub fn gp1d2g(&self) -> f64 {
        0.5 * (self.gamma + 1.) * self.gamma_inv
    }

    /// (gamma - 1) / (gamma + 1)
    pub fn gm1dgp1(&self) -> f64 {
        (self.gamma - 1.) * self.odgp1
    }

    /// (gamma - 1) / 2
    pub fn gm1d2(&self) -> f64 {
        0.5 * (self.gamma - 1.)
    }

    pub fn odgm1(&self) -> f64 {
        self.odgm1
    }

    pub fn tdgm1(&self) -> f64 {
        2. * self.odgm1
    }

    pub fn tdgp1(&self) -> f64 {
        2. * self.odgp1
    }

    /// 2 gamma / (gamma - 1)
    pub fn tgdgm1(&self) -> f64 {
        2. * self.gamma * self.odgm1
    }

    pub fn gamma_inv(&self) -> f64 {
        self.gamma_inv
    }

    /// Ideal gas sound speed.
    pub fn sound_speed(&self, pressure: f64, density_inv: f64) -> f64 {
        (self.gamma * pressure * density_inv).sqrt()
    }

    /// Specific internal energy
    pub fn internal_energy_from_pressure(&self, pressure: f64, density_inv: f64) -> f64 {
        pressure * density_inv * self.odgm1
    }

    /// Thermal energy per unit volume
    pub fn thermal_energy_density(&self, pressure: f64) -> f64 {
        pressure * self.odgm1
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_derived_constants() {
        let gamma = AdiabaticIndex::try_from(1.4).unwrap();
        assert_approx_eq!(f64, gamma.gm1d2g(), 0.4 / 2.8);
        assert_approx_eq!(f64, gamma.gp1d2g(), 2.4 / 2.8);
        assert_approx_eq!(f64, gamma.gm1dgp1(), 0.4 / 2.4);
        assert_approx_eq!(f64, gamma.tdgm1(), 5.);
        assert_approx_eq!(f64, gamma.tdgp1(), 2. / 2.4);
        assert_approx_eq!(f64, gamma.tgdgm1(), 7.);
        assert_approx_eq!(f64, f64::from(gamma), 1.4);
    }

    #[test]
    fn test_rejects_unphysical_gamma() {
        assert!(AdiabaticIndex::try_from(1.).is_err());
        assert!(AdiabaticIndex::try_from(0.5).is_err());
        assert!(AdiabaticIndex::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_ideal_gas_relations() {
        let gamma = AdiabaticIndex::try_from(5. / 3.).unwrap();
        assert_approx_eq!(f64, gamma.sound_speed(0.6, 1.), 1.);
        assert_approx_eq!(f64, gamma.internal_energy_from_pressure(1., 0.5), 0.75);
    }
}
