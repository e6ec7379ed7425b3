/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `part / total`, or zero when `part` is exactly zero.
///
/// Restart phase fractions are only written for phases that actually flow.
pub fn fraction_or_zero(part: Real, total: Real) -> Real {
    if part.abs() > 0.0 { part / total } else { 0.0 }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn phase_fractions_sum_to_one(
            oil in 0.1_f64..1.0e4,
            water in 0.0_f64..1.0e4,
            gas in 0.0_f64..1.0e4,
        ) {
            let total = oil + water + gas;
            let oil_frac = 1.0 - fraction_or_zero(water, total) - fraction_or_zero(gas, total);
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(oil_frac * total, oil, tol));
        }
    }
}
