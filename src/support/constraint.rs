//! Type-level numeric constraints checked once at construction.
//!
//! The raw formulas in this crate never validate their inputs and follow IEEE
//! floating-point semantics instead. The typed APIs built on top of them use the
//! wrappers here so that a physically invalid rate, occupation, or temperature
//! is rejected before any formula runs.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (damping rates, occupations)
//! - [`StrictlyPositive`]: Greater than zero (temperatures, mode frequencies)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! `NaN` never satisfies a constraint.

mod non_negative;
mod strictly_positive;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_quantum_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let kelvin = Constrained::<_, StrictlyPositive>::new(0.05).unwrap();
/// assert_eq!(kelvin.into_inner(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Sums constrained values for constraints preserved under addition.
///
/// The total cavity linewidth `κ + γ` is built this way.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

    #[test]
    fn summed_linewidths_stay_non_negative() {
        let total: Constrained<AngularVelocity, NonNegative> = [0.5, 1.5, 0.0]
            .into_iter()
            .map(|rate| NonNegative::new(AngularVelocity::new::<radian_per_second>(rate)).unwrap())
            .sum();

        assert_relative_eq!(total.into_inner().get::<radian_per_second>(), 2.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConstraintError::Negative.to_string(),
            "value must not be negative"
        );
        assert_eq!(
            ConstraintError::NotANumber.to_string(),
            "value is not a number"
        );
    }
}
