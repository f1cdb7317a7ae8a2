use std::cmp::Ordering;

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, ThermodynamicTemperature},
};

use crate::support::bose_einstein;

use super::SpinCavityParams;

/// Errors from building a frequency grid.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SweepError {
    /// A sweep needs both endpoints.
    #[error("sweep needs at least 2 points, got {points}")]
    TooFewPoints { points: usize },

    /// One of the bounds is `NaN` or infinite.
    #[error("sweep bounds must be finite: start={start:?}, stop={stop:?}")]
    NonFiniteBounds {
        start: AngularVelocity,
        stop: AngularVelocity,
    },

    /// The range is empty or reversed.
    #[error("sweep stop must exceed start: start={start:?}, stop={stop:?}")]
    EmptyRange {
        start: AngularVelocity,
        stop: AngularVelocity,
    },
}

/// Linear frequency grid for evaluating a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First frequency of the grid.
    pub start: AngularVelocity,

    /// Last frequency of the grid.
    pub stop: AngularVelocity,

    /// Number of grid points, endpoints included.
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: AngularVelocity::new::<radian_per_second>(0.0),
            stop: AngularVelocity::new::<radian_per_second>(10.0),
            points: 201,
        }
    }
}

impl SweepConfig {
    /// Returns the grid frequencies, evenly spaced from `start` to `stop`.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if there are fewer than two points, a bound is
    /// not finite, or `stop` does not exceed `start`.
    pub fn frequencies(&self) -> Result<Vec<AngularVelocity>, SweepError> {
        let Self {
            start,
            stop,
            points,
        } = *self;

        if points < 2 {
            return Err(SweepError::TooFewPoints { points });
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(SweepError::NonFiniteBounds { start, stop });
        }
        if stop <= start {
            return Err(SweepError::EmptyRange { start, stop });
        }

        let (lo, hi) = (
            start.get::<radian_per_second>(),
            stop.get::<radian_per_second>(),
        );

        #[allow(clippy::cast_precision_loss)]
        let last = (points - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let grid = (0..points)
            .map(|i| {
                let t = i as f64 / last;
                AngularVelocity::new::<radian_per_second>(lo * (1.0 - t) + hi * t)
            })
            .collect();

        Ok(grid)
    }
}

/// The output field evaluated at a single frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    /// Frequency at which the output field was evaluated.
    pub frequency: AngularVelocity,

    /// Mean photon number of the output field.
    pub occupation: f64,

    /// Temperature a mode at `frequency` would need to hold `occupation`.
    ///
    /// Zero at zero frequency and `NaN` where the reduced model yields a
    /// negative occupation.
    pub effective_temperature: ThermodynamicTemperature,
}

impl SpectrumPoint {
    pub(crate) fn evaluate(params: &SpinCavityParams, frequency: AngularVelocity) -> Self {
        let occupation = params.output_occupation(frequency);
        Self {
            frequency,
            occupation,
            effective_temperature: bose_einstein::temperature(frequency, occupation),
        }
    }
}

/// Output spectrum sampled over a [`SweepConfig`] grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSpectrum {
    points: Vec<SpectrumPoint>,
}

impl OutputSpectrum {
    /// Evaluates the output spectrum of `params` at every grid frequency.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if the grid is invalid.
    pub fn sweep(params: &SpinCavityParams, config: &SweepConfig) -> Result<Self, SweepError> {
        let points = config
            .frequencies()?
            .into_iter()
            .map(|frequency| SpectrumPoint::evaluate(params, frequency))
            .collect();

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    /// Returns the point of highest output occupation, skipping `NaN` values.
    #[must_use]
    pub fn peak(&self) -> Option<&SpectrumPoint> {
        self.points
            .iter()
            .filter(|point| !point.occupation.is_nan())
            .max_by(|a, b| {
                a.occupation
                    .partial_cmp(&b.occupation)
                    .unwrap_or(Ordering::Equal)
            })
    }
}
