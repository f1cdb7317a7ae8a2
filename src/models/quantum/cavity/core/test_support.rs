use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

use super::{Baths, SpinCavityParams};

pub(crate) fn rate(value: f64) -> AngularVelocity {
    AngularVelocity::new::<radian_per_second>(value)
}

/// Strongly coupled ensemble with a hot spin bath, in units of `g`.
pub(crate) fn strongly_coupled() -> SpinCavityParams {
    SpinCavityParams::new(
        rate(1.0),
        rate(0.1),
        rate(0.1),
        rate(0.05),
        rate(0.0),
        Baths::new(0.1, 1.0).unwrap(),
    )
    .unwrap()
}
