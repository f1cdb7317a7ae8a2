//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently `quantum`).
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! A model with non-trivial computation keeps it in an internal `core`
//! submodule. The [`twine_core::Model`] implementation is a thin adapter over
//! that core, and the types callers need are re-exported next to it.

pub mod quantum;
