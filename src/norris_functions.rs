use itertools::Itertools;
use ndarray::ArrayView1;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::params::{self, ParamRole, ParamSpec};

/// Parameter declarations for the Norris pulse, in call order.
pub const PARAMETERS: [ParamSpec; 4] = [
    ParamSpec {
        name: "K",
        desc: "normalization",
        initial: 1.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Normalization,
    },
    ParamSpec {
        name: "t_start",
        desc: "start time",
        initial: 5.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Time,
    },
    ParamSpec {
        name: "t_rise",
        desc: "time rise constant",
        initial: 1.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Time,
    },
    ParamSpec {
        name: "t_decay",
        desc: "time decay constant",
        initial: 2.5,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Time,
    },
];

/// Evaluates the pulse shape of Norris et al. (2005), ApJ 627, 324 at a
/// single time.
///
/// The `exp(2 * sqrt(t_rise / t_decay))` prefactor normalizes the peak: the
/// maximum flux is `k`, attained at `t_start + sqrt(t_rise * t_decay)`.
#[inline]
pub fn pulse_func(x: f64, k: f64, t_start: f64, t_rise: f64, t_decay: f64) -> f64 {
    let dt = x - t_start;
    k * (2.0 * (t_rise / t_decay).sqrt()).exp() * (-t_rise / dt - dt / t_decay).exp()
}

pub fn evaluate_internal<'py>(
    time: ArrayView1<'py, f64>,
    k: f64,
    t_start: f64,
    t_rise: f64,
    t_decay: f64,
) -> Vec<f64> {
    time.iter()
        .map(|&x| pulse_func(x, k, t_start, t_rise, t_decay))
        .collect_vec()
}

/// Evaluates the Norris pulse over an array of sample times.
///
/// Inputs are never range-checked. At `x == t_start` the exponent divides by
/// zero and the flux comes out as IEEE arithmetic dictates: exactly zero from
/// above, overflowing to infinity just below `t_start`.
///
/// # Arguments
///
/// * `py` - Python GIL token.
/// * `time` - Sample times.
/// * `k` - Peak flux.
/// * `t_start` - Onset time of the pulse.
/// * `t_rise` - Rise timescale.
/// * `t_decay` - Decay timescale.
///
/// # Returns
///
/// * A NumPy array of fluxes, one per sample time.
#[pyfunction]
pub fn evaluate<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<'py, f64>,
    k: f64,
    t_start: f64,
    t_rise: f64,
    t_decay: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(evaluate_internal(time.as_array(), k, t_start, t_rise, t_decay).into_pyarray(py))
}

/// Returns the parameter declarations as `(name, description, initial, min,
/// fixed)` tuples in call order.
#[pyfunction]
pub fn parameters() -> Vec<(&'static str, &'static str, f64, Option<f64>, bool)> {
    PARAMETERS
        .iter()
        .map(|spec| (spec.name, spec.desc, spec.initial, spec.min, spec.fixed))
        .collect_vec()
}

/// Assigns the host axis units to each parameter: `K` takes the flux unit and
/// every timescale takes the time unit.
#[pyfunction]
pub fn assign_units(x_unit: &str, y_unit: &str) -> Vec<(&'static str, String)> {
    params::assign_units(&PARAMETERS, x_unit, y_unit)
        .into_iter()
        .map(|assigned| (assigned.name, assigned.unit))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use proptest::prelude::*;

    #[test]
    fn peak_flux_equals_normalization() {
        for &(k, t_start, t_rise, t_decay) in &[
            (1.0, 5.0, 1.0f64, 2.5f64),
            (4.0, 0.0, 0.3, 7.0),
            (0.7, 12.0, 2.0, 2.0),
        ] {
            let peak = t_start + (t_rise * t_decay).sqrt();
            let f = pulse_func(peak, k, t_start, t_rise, t_decay);
            assert!(
                (f - k).abs() < 1e-12 * k,
                "flux at the peak should equal K={k}, got {f}"
            );
        }
    }

    #[test]
    fn peak_dominates_neighbors() {
        let (k, t_start, t_rise, t_decay) = (2.0, 5.0, 1.0f64, 2.5f64);
        let peak = t_start + (t_rise * t_decay).sqrt();
        let at_peak = pulse_func(peak, k, t_start, t_rise, t_decay);
        assert!(at_peak > pulse_func(peak - 0.5, k, t_start, t_rise, t_decay));
        assert!(at_peak > pulse_func(peak + 0.5, k, t_start, t_rise, t_decay));
    }

    #[test]
    fn matches_direct_substitution() {
        // k = 1, t_start = 0, t_rise = t_decay = 1: f(x) = exp(2 - 1/x - x).
        for &x in &[0.5f64, 1.0, 2.0, 4.0] {
            let expected = (2.0 - 1.0 / x - x).exp();
            let f = pulse_func(x, 1.0, 0.0, 1.0, 1.0);
            assert!(
                (f - expected).abs() < 1e-12 * expected,
                "mismatch at x={x}: {f} vs {expected}"
            );
        }
    }

    #[test]
    fn flux_at_onset_is_zero() {
        // dt = +0.0 sends the exponent to -inf.
        let f = pulse_func(5.0, 3.0, 5.0, 1.0, 2.5);
        assert_eq!(f, 0.0);
    }

    #[test]
    fn flux_just_below_onset_overflows() {
        let f = pulse_func(5.0 - 1e-13, 1.0, 5.0, 1.0, 2.5);
        assert!(
            f.is_infinite() && f > 0.0,
            "the reciprocal term should overflow, got {f}"
        );
    }

    #[test]
    fn array_matches_scalar_elementwise() {
        let time = Array1::from_vec(vec![4.0, 5.0, 5.5, 7.0, 20.0, 100.0]);
        let flux = evaluate_internal(time.view(), 1.5, 5.0, 0.8, 3.0);
        assert_eq!(flux.len(), time.len());
        for (&t, &f) in time.iter().zip(&flux) {
            assert_eq!(f, pulse_func(t, 1.5, 5.0, 0.8, 3.0));
        }
    }

    #[test]
    fn declarations_match_host_convention() {
        let names = PARAMETERS.iter().map(|p| p.name).collect_vec();
        assert_eq!(names, ["K", "t_start", "t_rise", "t_decay"]);
        let initials = PARAMETERS.iter().map(|p| p.initial).collect_vec();
        assert_eq!(initials, [1.0, 5.0, 1.0, 2.5]);
        for spec in &PARAMETERS {
            assert_eq!(spec.min, Some(0.0), "{} should be bounded below", spec.name);
            assert!(!spec.fixed, "{} should be free", spec.name);
        }
    }

    #[test]
    fn units_follow_roles() {
        let assigned = params::assign_units(&PARAMETERS, "s", "keV / (cm2 s)");
        assert_eq!(assigned[0].unit, "keV / (cm2 s)");
        for timescale in &assigned[1..] {
            assert_eq!(timescale.unit, "s", "{} should carry the time unit", timescale.name);
        }
    }

    proptest! {
        #[test]
        fn flux_scales_linearly_in_k(
            t_start in 0.0f64..10.0,
            dt in 1e-3f64..100.0,
            k in 0.1f64..10.0,
            scale in 0.1f64..10.0,
            t_rise in 0.1f64..10.0,
            t_decay in 0.1f64..10.0,
        ) {
            let x = t_start + dt;
            let base = pulse_func(x, k, t_start, t_rise, t_decay);
            let scaled = pulse_func(x, scale * k, t_start, t_rise, t_decay);
            prop_assert!(
                (scaled - scale * base).abs() <= 1e-9 * (1.0 + scaled.abs()),
                "scaling K by {} changed the shape: {} vs {}",
                scale,
                scaled,
                scale * base
            );
        }
    }
}
