//! Validated occupation and temperature conversions for a single bosonic mode.
//!
//! These [`twine_core::Model`] adapters check their inputs before delegating
//! to [`support::bose_einstein`](crate::support::bose_einstein), which itself
//! never validates.

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    bose_einstein,
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
};

/// Errors raised when a mode's inputs are outside the physical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThermalModeError {
    #[error("invalid mode frequency: {0}")]
    Frequency(#[source] ConstraintError),
    #[error("invalid mode temperature: {0}")]
    Temperature(#[source] ConstraintError),
    #[error("invalid mode occupation: {0}")]
    Occupation(#[source] ConstraintError),
}

/// A mode frequency paired with the temperature of its bath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeTemperature {
    pub frequency: AngularVelocity,
    pub temperature: ThermodynamicTemperature,
}

/// A mode frequency paired with its mean photon number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeOccupation {
    pub frequency: AngularVelocity,
    pub occupation: f64,
}

/// Mean photon number of a mode in equilibrium with its bath.
///
/// A zero frequency is accepted and yields an infinite occupation.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_quantum_models::models::quantum::thermal_mode::{ModeTemperature, ThermalOccupation};
/// use uom::si::{
///     angular_velocity::radian_per_second, f64::{AngularVelocity, ThermodynamicTemperature},
///     thermodynamic_temperature::kelvin,
/// };
///
/// let n = ThermalOccupation
///     .call(&ModeTemperature {
///         frequency: AngularVelocity::new::<radian_per_second>(1.0e9),
///         temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
///     })
///     .unwrap();
/// assert!(n > 3.9e4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThermalOccupation;

impl Model for ThermalOccupation {
    type Input = ModeTemperature;
    type Output = f64;
    type Error = ThermalModeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        NonNegative::check(&input.frequency.get::<radian_per_second>())
            .map_err(ThermalModeError::Frequency)?;
        StrictlyPositive::check(&input.temperature.get::<kelvin>())
            .map_err(ThermalModeError::Temperature)?;

        Ok(bose_einstein::occupation(input.frequency, input.temperature))
    }
}

/// Effective temperature of a mode from its mean photon number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectiveTemperature;

impl Model for EffectiveTemperature {
    type Input = ModeOccupation;
    type Output = ThermodynamicTemperature;
    type Error = ThermalModeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        StrictlyPositive::check(&input.frequency.get::<radian_per_second>())
            .map_err(ThermalModeError::Frequency)?;
        StrictlyPositive::check(&input.occupation).map_err(ThermalModeError::Occupation)?;

        Ok(bose_einstein::temperature(
            input.frequency,
            input.occupation,
        ))
    }
}
