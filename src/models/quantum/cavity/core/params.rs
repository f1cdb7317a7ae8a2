use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    bose_einstein,
    constraint::{Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive},
};

use super::spectrum::SpectrumTerms;

/// Errors raised while building [`SpinCavityParams`] or [`Baths`].
///
/// Each variant names the offending field and carries the violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinCavityParamsError {
    #[error("invalid cavity-spin coupling: {0}")]
    Coupling(#[source] ConstraintError),
    #[error("invalid spin-ensemble linewidth: {0}")]
    SpinLinewidth(#[source] ConstraintError),
    #[error("invalid output coupling rate: {0}")]
    OutputCoupling(#[source] ConstraintError),
    #[error("invalid internal loss rate: {0}")]
    InternalLoss(#[source] ConstraintError),
    #[error("invalid cavity-spin detuning: {0}")]
    Detuning(#[source] ConstraintError),
    #[error("invalid thermal bath occupation: {0}")]
    ThermalOccupation(#[source] ConstraintError),
    #[error("invalid spin-ensemble occupation: {0}")]
    SpinOccupation(#[source] ConstraintError),
    #[error("invalid reference mode frequency: {0}")]
    ModeFrequency(#[source] ConstraintError),
    #[error("invalid thermal bath temperature: {0}")]
    ThermalTemperature(#[source] ConstraintError),
    #[error("invalid spin-ensemble temperature: {0}")]
    SpinTemperature(#[source] ConstraintError),
}

/// Mean occupations of the two reservoirs exchanging energy through the cavity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baths {
    thermal: Constrained<f64, NonNegative>,
    spin: Constrained<f64, NonNegative>,
}

impl Baths {
    /// Creates baths from mean photon numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if either occupation is negative or `NaN`.
    pub fn new(thermal: f64, spin: f64) -> Result<Self, SpinCavityParamsError> {
        Ok(Self {
            thermal: NonNegative::new(thermal).map_err(SpinCavityParamsError::ThermalOccupation)?,
            spin: NonNegative::new(spin).map_err(SpinCavityParamsError::SpinOccupation)?,
        })
    }

    /// Creates baths from temperatures, evaluating both occupations at `omega`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `omega` and both temperatures are strictly positive.
    pub fn from_temperatures(
        omega: AngularVelocity,
        thermal: ThermodynamicTemperature,
        spin: ThermodynamicTemperature,
    ) -> Result<Self, SpinCavityParamsError> {
        StrictlyPositive::check(&omega.get::<radian_per_second>())
            .map_err(SpinCavityParamsError::ModeFrequency)?;
        StrictlyPositive::check(&thermal.get::<kelvin>())
            .map_err(SpinCavityParamsError::ThermalTemperature)?;
        StrictlyPositive::check(&spin.get::<kelvin>())
            .map_err(SpinCavityParamsError::SpinTemperature)?;

        Self::new(
            bose_einstein::occupation(omega, thermal),
            bose_einstein::occupation(omega, spin),
        )
    }

    /// Occupation of the thermal bath, `nT`.
    #[must_use]
    pub fn thermal(&self) -> f64 {
        *self.thermal.as_ref()
    }

    /// Occupation of the spin ensemble, `nc`.
    #[must_use]
    pub fn spin(&self) -> f64 {
        *self.spin.as_ref()
    }
}

/// Validated parameters of a cavity coupled to a spin ensemble.
///
/// Rates are non-negative angular frequencies. The detuning is signed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinCavityParams {
    coupling: Constrained<AngularVelocity, NonNegative>,
    spin_linewidth: Constrained<AngularVelocity, NonNegative>,
    output_coupling: Constrained<AngularVelocity, NonNegative>,
    internal_loss: Constrained<AngularVelocity, NonNegative>,
    detuning: AngularVelocity,
    baths: Baths,
}

impl SpinCavityParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is negative or `NaN`, or if the detuning is `NaN`.
    pub fn new(
        coupling: AngularVelocity,
        spin_linewidth: AngularVelocity,
        output_coupling: AngularVelocity,
        internal_loss: AngularVelocity,
        detuning: AngularVelocity,
        baths: Baths,
    ) -> Result<Self, SpinCavityParamsError> {
        if detuning.is_nan() {
            return Err(SpinCavityParamsError::Detuning(ConstraintError::NotANumber));
        }

        Ok(Self {
            coupling: NonNegative::new(coupling).map_err(SpinCavityParamsError::Coupling)?,
            spin_linewidth: NonNegative::new(spin_linewidth)
                .map_err(SpinCavityParamsError::SpinLinewidth)?,
            output_coupling: NonNegative::new(output_coupling)
                .map_err(SpinCavityParamsError::OutputCoupling)?,
            internal_loss: NonNegative::new(internal_loss)
                .map_err(SpinCavityParamsError::InternalLoss)?,
            detuning,
            baths,
        })
    }

    /// Returns a copy with different bath occupations.
    #[must_use]
    pub fn with_baths(mut self, baths: Baths) -> Self {
        self.baths = baths;
        self
    }

    #[must_use]
    pub fn coupling(&self) -> AngularVelocity {
        self.coupling.into_inner()
    }

    #[must_use]
    pub fn spin_linewidth(&self) -> AngularVelocity {
        self.spin_linewidth.into_inner()
    }

    #[must_use]
    pub fn output_coupling(&self) -> AngularVelocity {
        self.output_coupling.into_inner()
    }

    #[must_use]
    pub fn internal_loss(&self) -> AngularVelocity {
        self.internal_loss.into_inner()
    }

    #[must_use]
    pub fn detuning(&self) -> AngularVelocity {
        self.detuning
    }

    #[must_use]
    pub fn baths(&self) -> Baths {
        self.baths
    }

    /// Total cavity linewidth, `κ + γ`.
    #[must_use]
    pub fn cavity_linewidth(&self) -> AngularVelocity {
        [self.output_coupling, self.internal_loss]
            .into_iter()
            .sum::<Constrained<AngularVelocity, NonNegative>>()
            .into_inner()
    }

    /// Evaluates the grouped spectrum terms at `omega`.
    #[must_use]
    pub fn terms(&self, omega: AngularVelocity) -> SpectrumTerms {
        SpectrumTerms::new(
            omega.get::<radian_per_second>(),
            self.coupling().get::<radian_per_second>(),
            self.spin_linewidth().get::<radian_per_second>(),
            self.output_coupling().get::<radian_per_second>(),
            self.internal_loss().get::<radian_per_second>(),
            self.baths.thermal(),
            self.baths.spin(),
            self.detuning.get::<radian_per_second>(),
        )
    }

    /// Mean photon number of the cavity output field at `omega`.
    #[must_use]
    pub fn output_occupation(&self, omega: AngularVelocity) -> f64 {
        self.terms(omega).occupation()
    }
}
