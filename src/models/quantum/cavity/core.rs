//! Steady-state output spectrum of a cavity coupled to a spin ensemble.
//!
//! The cavity exchanges energy with a thermal bath (occupation `nT`) through
//! its output and loss ports, and with an ensemble of spin defects such as NV
//! centers (occupation `nc`) through the coupling `g`. The output field's
//! mean photon number at frequency `ω` is the bath occupation plus a
//! correction peaked near the normal modes of the coupled system.
//!
//! This is the reduced model with no secondary magnon mode.

mod params;
mod spectrum;
mod sweep;

#[cfg(test)]
pub(super) mod test_support;

pub use params::{Baths, SpinCavityParams, SpinCavityParamsError};
pub use spectrum::{SpectrumTerms, nv_output_spec};
pub use sweep::{OutputSpectrum, SpectrumPoint, SweepConfig, SweepError};
