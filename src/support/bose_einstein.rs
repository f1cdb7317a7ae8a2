//! Thermal occupation of a bosonic mode.
//!
//! A mode of angular frequency `ω` in equilibrium with a bath at temperature
//! `T` holds on average
//!
//! ```text
//! n = 1 / (exp(ℏω / k_B·T) - 1)
//! ```
//!
//! quanta. [`photons_from_temp`] evaluates this and [`temp_from_photons`]
//! inverts it, recovering the effective temperature of a mode from its mean
//! photon number.
//!
//! The raw functions take SI base values (`rad/s`, `K`) and never validate.
//! Degenerate inputs propagate as IEEE `NaN`/`±inf`:
//!
//! - `photons_from_temp(0.0, T)` is `+inf` (classical divergence).
//! - `temp_from_photons(ω, 0.0)` is `0.0` and occupations in `(-1, 0)` give `NaN`.
//!
//! [`occupation`] and [`temperature`] are the same formulas on [`uom`]
//! quantities. Validated entry points live in
//! [`models::quantum::thermal_mode`](crate::models::quantum::thermal_mode).

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

/// Reduced Planck constant over Boltzmann constant, `ℏ/k_B`, in K·s.
pub const HBAR_OVER_K_B: f64 = 7.639e-12;

/// Mean photon number of a mode at `omega` (rad/s) and temperature `temp` (K).
///
/// # Example
///
/// ```
/// use twine_quantum_models::support::bose_einstein::photons_from_temp;
///
/// let n = photons_from_temp(1.0e9, 0.002_509_096_305_334_557_3);
/// assert!((n - 0.05).abs() < 1e-12);
/// ```
#[must_use]
pub fn photons_from_temp(omega: f64, temp: f64) -> f64 {
    (HBAR_OVER_K_B * omega / temp).exp_m1().recip()
}

/// Temperature (K) at which a mode at `omega` (rad/s) holds `num_photons` quanta.
///
/// Evaluates `ℏω / (k_B·ln(1/n + 1))`.
#[must_use]
pub fn temp_from_photons(omega: f64, num_photons: f64) -> f64 {
    HBAR_OVER_K_B * omega / num_photons.recip().ln_1p()
}

/// High-temperature limit of [`photons_from_temp`], `k_B·T / ℏω`.
#[must_use]
pub fn classical_occupation(omega: f64, temp: f64) -> f64 {
    temp / (HBAR_OVER_K_B * omega)
}

/// Evaluates [`photons_from_temp`] at a fixed `omega` for each temperature.
#[must_use]
pub fn photons_from_temps(omega: f64, temps: &[f64]) -> Vec<f64> {
    temps
        .iter()
        .map(|&temp| photons_from_temp(omega, temp))
        .collect()
}

/// Evaluates [`temp_from_photons`] at a fixed `omega` for each occupation.
#[must_use]
pub fn temps_from_photons(omega: f64, occupations: &[f64]) -> Vec<f64> {
    occupations
        .iter()
        .map(|&n| temp_from_photons(omega, n))
        .collect()
}

/// Mean photon number of a mode at `omega` in equilibrium at `temp`.
#[must_use]
pub fn occupation(omega: AngularVelocity, temp: ThermodynamicTemperature) -> f64 {
    photons_from_temp(omega.get::<radian_per_second>(), temp.get::<kelvin>())
}

/// Effective temperature of a mode at `omega` holding `num_photons` quanta.
#[must_use]
pub fn temperature(omega: AngularVelocity, num_photons: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(temp_from_photons(
        omega.get::<radian_per_second>(),
        num_photons,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::millikelvin;

    #[test]
    fn gigahertz_mode_with_few_photons() {
        let temp = temp_from_photons(1.0e9, 0.05);
        assert_relative_eq!(temp, 0.002_509_096_305_334_557_3, max_relative = 1e-12);
        assert_relative_eq!(photons_from_temp(1.0e9, temp), 0.05, max_relative = 1e-9);
    }

    #[test]
    fn conversions_are_mutual_inverses() {
        for omega in [1.0e6, 2.0e9, 1.8e10, 5.0e11] {
            for temp in [0.01, 0.05, 4.2, 77.0, 300.0] {
                let n = photons_from_temp(omega, temp);
                assert_relative_eq!(temp_from_photons(omega, n), temp, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn occupation_increases_with_temperature() {
        let omega = 2.0e10;
        let temps: Vec<f64> = (1..=200).map(|i| 0.01 * f64::from(i)).collect();
        let occupations = photons_from_temps(omega, &temps);

        assert!(occupations.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn converges_to_classical_limit() {
        let omega = 1.0e9;
        let errors: Vec<f64> = [1.0, 10.0, 100.0, 1000.0]
            .into_iter()
            .map(|temp| {
                let exact = photons_from_temp(omega, temp);
                let classical = classical_occupation(omega, temp);
                (exact - classical).abs() / classical
            })
            .collect();

        assert!(errors.windows(2).all(|pair| pair[1] < pair[0]));
        assert!(errors[3] < 1e-5);
    }

    #[test]
    fn degenerate_inputs_follow_ieee_semantics() {
        assert_eq!(photons_from_temp(0.0, 1.0), f64::INFINITY);
        assert_eq!(photons_from_temp(1.0e9, 0.0), 0.0);
        assert_eq!(temp_from_photons(1.0e9, 0.0), 0.0);
        assert!(temp_from_photons(1.0e9, -0.5).is_nan());
        assert_eq!(temp_from_photons(1.0e9, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn slices_match_scalar_evaluation() {
        let omega = 3.0e9;
        let occupations = [0.01, 0.5, 12.0];
        let temps = temps_from_photons(omega, &occupations);

        assert_eq!(temps.len(), occupations.len());
        for (temp, n) in temps.iter().zip(occupations) {
            assert_eq!(*temp, temp_from_photons(omega, n));
        }
    }

    #[test]
    fn typed_quantities_match_raw_values() {
        let omega = AngularVelocity::new::<radian_per_second>(1.0e9);
        let temp = ThermodynamicTemperature::new::<millikelvin>(2.5);

        assert_relative_eq!(occupation(omega, temp), photons_from_temp(1.0e9, 2.5e-3));
        assert_relative_eq!(
            temperature(omega, 0.05).get::<kelvin>(),
            temp_from_photons(1.0e9, 0.05)
        );
    }
}
