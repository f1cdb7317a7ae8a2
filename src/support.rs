//! Supporting utilities used by models.
//!
//! - [`bose_einstein`]: Thermal occupation of a bosonic mode and its inverse.
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Extensions to [`uom`].

pub mod bose_einstein;
pub mod constraint;
pub mod units;
