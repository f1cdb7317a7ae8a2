//! # Twine Quantum Models
//!
//! Closed-form cavity quantum thermodynamics models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Raw and typed entry points
//!
//! Every formula is available twice. The raw functions
//! ([`support::bose_einstein::photons_from_temp`],
//! [`support::bose_einstein::temp_from_photons`],
//! [`models::quantum::cavity::nv_output_spec`]) take SI base values as `f64`,
//! never validate, and let degenerate inputs surface as IEEE `NaN`/`±inf`.
//! The typed APIs take [`uom`] quantities and reject unphysical inputs with
//! typed errors before evaluating the same formulas.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod models;
pub mod support;
