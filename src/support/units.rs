//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its typed boundaries.
//! This module adds the conversions the cavity models need that [`uom`] does
//! not provide directly.
//!
//! ## Quantum temperature scale
//!
//! [`QuantumTemperatureScale`] turns a mode's angular frequency into the
//! temperature interval `ℏω/k_B` that sets when the mode freezes out:
//!
//! ```
//! use uom::si::f64::AngularVelocity;
//! use uom::si::angular_velocity::radian_per_second;
//! use uom::si::temperature_interval::millikelvin;
//! use twine_quantum_models::support::units::QuantumTemperatureScale;
//!
//! let omega = AngularVelocity::new::<radian_per_second>(1.0e9);
//! let scale = omega.quantum_temperature();
//! assert!((scale.get::<millikelvin>() - 7.639).abs() < 1e-9);
//! ```
//!
//! ## Angular frequency
//!
//! Spin transitions and cavity modes are usually quoted in hertz while the
//! formulas are written in rad/s. [`AngularFrequency`] bridges the two.

mod angular_frequency;
mod quantum_temperature;

pub use angular_frequency::AngularFrequency;
pub use quantum_temperature::QuantumTemperatureScale;
