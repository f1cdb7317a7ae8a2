use std::f64::consts::TAU;

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Frequency},
    frequency::hertz,
};

/// Extension trait converting a cyclic frequency `f` into `ω = 2πf`.
pub trait AngularFrequency {
    /// Returns the angular frequency in rad/s.
    fn angular(self) -> AngularVelocity;
}

impl AngularFrequency for Frequency {
    fn angular(self) -> AngularVelocity {
        AngularVelocity::new::<radian_per_second>(TAU * self.get::<hertz>())
    }
}
