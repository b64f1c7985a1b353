use itertools::Itertools;
use ndarray::ArrayView1;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::params::{self, ParamRole, ParamSpec};

/// Parameter declarations for the KRL pulse, in call order.
///
/// The shift `c` trades off against `t_max` and is held fixed by default.
pub const PARAMETERS: [ParamSpec; 5] = [
    ParamSpec {
        name: "K",
        desc: "normalization",
        initial: 1.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Normalization,
    },
    ParamSpec {
        name: "t_max",
        desc: "time of maximum flux",
        initial: 5.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Time,
    },
    ParamSpec {
        name: "rise",
        desc: "time rise constant",
        initial: 1.0,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Index,
    },
    ParamSpec {
        name: "decay",
        desc: "time decay constant",
        initial: 2.5,
        min: Some(0.0),
        fixed: false,
        role: ParamRole::Index,
    },
    ParamSpec {
        name: "c",
        desc: "shift factor",
        initial: 0.0,
        min: None,
        fixed: true,
        role: ParamRole::Time,
    },
];

/// Evaluates the pulse shape of Kocevski, Ryde & Liang (2003), ApJ 596, 389
/// at a single time.
///
/// The flux rises as a power law in the shifted, peak-scaled time and rolls
/// over into a power-law decay; the normalization `k` is the flux at `t_max`.
#[inline]
pub fn pulse_func(x: f64, k: f64, t_max: f64, rise: f64, decay: f64, c: f64) -> f64 {
    let xc = x + c;
    let tc = t_max + c;
    let xt = xc / tc;
    let r1 = rise + 1.0;
    let dr = decay + rise;
    k * xt.powf(rise) / ((decay + rise * xt.powf(r1)) / dr).powf(dr / r1)
}

pub fn evaluate_internal<'py>(
    time: ArrayView1<'py, f64>,
    k: f64,
    t_max: f64,
    rise: f64,
    decay: f64,
    c: f64,
) -> Vec<f64> {
    time.iter()
        .map(|&x| pulse_func(x, k, t_max, rise, decay, c))
        .collect_vec()
}

/// Evaluates the KRL pulse over an array of sample times.
///
/// Inputs are never range-checked: a negative shifted time under a fractional
/// `rise` yields NaN, and `t_max + c == 0` yields non-finite values, exactly
/// as the scalar arithmetic dictates.
///
/// # Arguments
///
/// * `py` - Python GIL token.
/// * `time` - Sample times.
/// * `k` - Peak flux, attained at `t_max`.
/// * `t_max` - Time of maximum flux.
/// * `rise` - Rising power-law index.
/// * `decay` - Decaying power-law index.
/// * `c` - Shift applied to the time axis.
///
/// # Returns
///
/// * A NumPy array of fluxes, one per sample time.
#[pyfunction]
pub fn evaluate<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<'py, f64>,
    k: f64,
    t_max: f64,
    rise: f64,
    decay: f64,
    c: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(evaluate_internal(time.as_array(), k, t_max, rise, decay, c).into_pyarray(py))
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

/// Assigns the host axis units to each parameter: `K` takes the flux unit,
/// `t_max` and `c` take the time unit, and the power-law indices stay
/// dimensionless.
#[pyfunction]
pub fn assign_units(x_unit: &str, y_unit: &str) -> Vec<(&'static str, String)> {
    params::assign_units(&PARAMETERS, x_unit, y_unit)
        .into_iter()
        .map(|assigned| (assigned.name, assigned.unit))
        .collect_vec()
}
