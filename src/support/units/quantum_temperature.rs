use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::bose_einstein::HBAR_OVER_K_B;

/// Extension trait for the characteristic temperature of a bosonic mode.
///
/// The result is a [`TemperatureInterval`] rather than an absolute
/// temperature because it is an energy scale, `ℏω/k_B`, not a bath state.
pub trait QuantumTemperatureScale {
    /// Returns `ℏω/k_B` for this angular frequency.
    fn quantum_temperature(self) -> TemperatureInterval;
}

impl QuantumTemperatureScale for AngularVelocity {
    fn quantum_temperature(self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            HBAR_OVER_K_B * self.get::<radian_per_second>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scales_linearly_with_frequency() {
        let low = AngularVelocity::new::<radian_per_second>(1.0e9).quantum_temperature();
        let high = AngularVelocity::new::<radian_per_second>(3.0e9).quantum_temperature();

        assert_relative_eq!(low.get::<delta_kelvin>(), 7.639e-3);
        assert_relative_eq!(high.get::<delta_kelvin>(), 3.0 * low.get::<delta_kelvin>());
    }
}
