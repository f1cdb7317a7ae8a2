//! Cavity quantum thermodynamics models.
//!
//! This module contains models for bosonic modes exchanging energy with
//! thermal reservoirs, including cavities coupled to spin ensembles.

pub mod cavity;
pub mod thermal_mode;
