/// Output occupation of a cavity coupled to a spin ensemble at frequency `omega`.
///
/// All rates are raw SI values in rad/s:
///
/// - `g`: cavity–ensemble coupling
/// - `r`: spin-ensemble damping rate
/// - `kappa`: output coupling rate
/// - `gamma`: internal loss rate
/// - `detuning`: cavity–spin detuning
///
/// `n_thermal` and `n_spin` are the occupations of the thermal bath and of the
/// spin ensemble. No input is validated; degenerate denominators propagate as
/// IEEE `NaN`/`±inf`.
///
/// # Example
///
/// ```
/// use twine_quantum_models::models::quantum::cavity::nv_output_spec;
///
/// let n_out = nv_output_spec(0.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.0);
/// assert!((n_out - 0.1 - 0.4 / 2.25).abs() < 1e-15);
/// ```
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn nv_output_spec(
    omega: f64,
    g: f64,
    r: f64,
    kappa: f64,
    gamma: f64,
    n_thermal: f64,
    n_spin: f64,
    detuning: f64,
) -> f64 {
    SpectrumTerms::new(omega, g, r, kappa, gamma, n_thermal, n_spin, detuning).occupation()
}

/// The separately grouped terms of the output spectrum at one frequency.
///
/// The spectrum is `n_thermal + num / (d + e + f)` with
///
/// ```text
/// num = κ·r·g²·(n_spin - n_thermal)
/// d   = (r²/4 + ω²)·((κ+γ)²/4 + (ω-Δ)²)
/// e   = g²·(r(κ+γ)/2 - 2ω(ω-Δ))
/// f   = g⁴
/// ```
///
/// The terms are evaluated separately and summed as `d + e + f`; they are
/// never combined algebraically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumTerms {
    /// Occupation of the thermal bath, the baseline of the spectrum.
    pub n_thermal: f64,
    /// Drive from the occupation imbalance between spin ensemble and bath.
    pub num: f64,
    /// Product of the spin and cavity Lorentzian denominators.
    pub d: f64,
    /// Normal-mode cross term.
    pub e: f64,
    /// Fourth-order coupling term.
    pub f: f64,
}

impl SpectrumTerms {
    /// Evaluates the terms; arguments are as for [`nv_output_spec`].
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        omega: f64,
        g: f64,
        r: f64,
        kappa: f64,
        gamma: f64,
        n_thermal: f64,
        n_spin: f64,
        detuning: f64,
    ) -> Self {
        let g2 = g.powi(2);
        let linewidth = kappa + gamma;
        let offset = omega - detuning;

        Self {
            n_thermal,
            num: kappa * r * g2 * (n_spin - n_thermal),
            d: (r.powi(2) / 4.0 + omega.powi(2)) * (linewidth.powi(2) / 4.0 + offset.powi(2)),
            e: g2 * (r * linewidth / 2.0 - 2.0 * omega * offset),
            f: g.powf(4.0),
        }
    }

    /// Returns the full denominator `d + e + f`.
    #[must_use]
    pub fn den(&self) -> f64 {
        self.d + self.e + self.f
    }

    /// Returns the correction `num / den` added to the bath occupation.
    #[must_use]
    pub fn correction(&self) -> f64 {
        self.num / self.den()
    }

    /// Returns the output occupation `n_thermal + num / den`.
    #[must_use]
    pub fn occupation(&self) -> f64 {
        self.n_thermal + self.correction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn resonant_zero_frequency_baseline() {
        let n_out = nv_output_spec(0.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.0);
        assert_relative_eq!(n_out, 0.277_777_777_777_777_8, max_relative = 1e-15);

        let terms = SpectrumTerms::new(0.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.0);
        assert_relative_eq!(terms.num, 0.4);
        assert_relative_eq!(terms.d, 0.25);
        assert_relative_eq!(terms.e, 1.0);
        assert_relative_eq!(terms.f, 1.0);
        assert_relative_eq!(terms.den(), 2.25);
    }

    #[test]
    fn fourth_power_is_rounded_once() {
        // Here (g·g)·(g·g) differs from a single rounding of g⁴ in the last bit.
        let g = 1.137_672_564_348_554_3;
        let terms = SpectrumTerms::new(1.0, g, 0.1, 0.1, 0.05, 0.1, 1.0, 0.0);

        assert_eq!(terms.f, 1.675_209_548_501_117_6);
        assert_eq!(
            nv_output_spec(1.0, g, 0.1, 0.1, 0.05, 0.1, 1.0, 0.0),
            0.211_515_401_582_178_85
        );
    }

    #[test]
    fn detuned_baselines() {
        assert_relative_eq!(
            nv_output_spec(0.5, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.0),
            0.288_235_294_117_647_03,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            nv_output_spec(1.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.5),
            0.256_097_560_975_609_76,
            max_relative = 1e-14
        );
    }

    #[test]
    fn swapping_baths_is_not_symmetric_about_each_baseline() {
        let forward = nv_output_spec(0.0, 1.0, 1.0, 1.0, 1.0, 0.1, 0.5, 0.0);
        let swapped = nv_output_spec(0.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.1, 0.0);

        assert_relative_eq!(swapped, 0.322_222_222_222_222_2, max_relative = 1e-15);

        // Each correction is measured from its own thermal bath.
        assert_relative_eq!(swapped - 0.5, -(forward - 0.1), max_relative = 1e-12);

        // Measured from the swapped-in spin occupation instead, it is not.
        assert!(((forward - 0.1) + (swapped - 0.1)).abs() > 0.1);
    }

    #[test]
    fn uncoupled_ensemble_leaves_thermal_occupation() {
        for omega in [0.0, 0.3, 1.0, 7.5] {
            let n_out = nv_output_spec(omega, 0.0, 0.2, 1.0, 0.4, 0.37, 4.0, 0.1);
            assert_eq!(n_out, 0.37);
        }
    }

    #[test]
    fn equal_baths_leave_thermal_occupation() {
        let n_out = nv_output_spec(0.8, 2.0, 0.5, 1.0, 0.5, 1.5, 1.5, -0.3);
        assert_eq!(n_out, 1.5);
    }

    #[test]
    fn cold_spins_cool_the_output() {
        let n_out = nv_output_spec(1.0, 1.0, 0.1, 0.1, 0.05, 2.0, 0.0, 0.0);
        assert!(n_out < 2.0);
    }

    #[test]
    fn degenerate_denominator_is_not_an_error() {
        let terms = SpectrumTerms::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.5, 0.0);
        assert_eq!(terms.den(), 0.0);
        assert!(terms.occupation().is_nan());
    }
}
