//! Cavity–spin-ensemble models.
//!
//! [`SpinEnsembleSpectrum`] is the [`twine_core::Model`] adapter; the
//! computation lives in the internal `core` module and is re-exported here.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_quantum_models::models::quantum::cavity::{
//!     Baths, SpinCavityParams, SpinEnsembleSpectrum,
//! };
//! use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};
//!
//! let rate = |value| AngularVelocity::new::<radian_per_second>(value);
//! let params = SpinCavityParams::new(
//!     rate(1.0),
//!     rate(1.0),
//!     rate(1.0),
//!     rate(1.0),
//!     rate(0.0),
//!     Baths::new(0.1, 0.5).unwrap(),
//! )
//! .unwrap();
//!
//! let point = SpinEnsembleSpectrum::new(params).call(&rate(0.0)).unwrap();
//! assert!((point.occupation - 0.277_777_777_777_777_8).abs() < 1e-15);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::AngularVelocity;

pub use self::core::{
    Baths, OutputSpectrum, SpectrumPoint, SpectrumTerms, SpinCavityParams, SpinCavityParamsError,
    SweepConfig, SweepError, nv_output_spec,
};

/// Output spectrum of a cavity coupled only to a spin ensemble.
///
/// The model input is the frequency at which to evaluate the output field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinEnsembleSpectrum {
    params: SpinCavityParams,
}

impl SpinEnsembleSpectrum {
    #[must_use]
    pub fn new(params: SpinCavityParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &SpinCavityParams {
        &self.params
    }

    /// Evaluates the spectrum over a frequency grid.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if the grid is invalid.
    pub fn sweep(&self, config: &SweepConfig) -> Result<OutputSpectrum, SweepError> {
        OutputSpectrum::sweep(&self.params, config)
    }
}

impl Model for SpinEnsembleSpectrum {
    type Input = AngularVelocity;
    type Output = SpectrumPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(SpectrumPoint::evaluate(&self.params, *input))
    }
}
