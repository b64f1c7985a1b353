use itertools::Itertools;
use ndarray::ArrayView1;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::ShapeError;
use crate::{krl_functions, norris_functions};

/// One KRL component of a pulse train, read off a host parameter object by
/// the attribute names the declaration table advertises.
#[derive(FromPyObject, Clone, Debug)]
pub struct KrlPulse {
    #[pyo3(attribute("K"))]
    pub k: f64,
    pub t_max: f64,
    pub rise: f64,
    pub decay: f64,
    pub c: f64,
}

/// One Norris component of a pulse train.
#[derive(FromPyObject, Clone, Debug)]
pub struct NorrisPulse {
    #[pyo3(attribute("K"))]
    pub k: f64,
    pub t_start: f64,
    pub t_rise: f64,
    pub t_decay: f64,
}

pub fn krl_train_internal<'py>(time: ArrayView1<'py, f64>, pulses: &[KrlPulse]) -> Vec<f64> {
    (0..time.len())
        .into_par_iter()
        .map(|i| {
            let t = time[i];
            pulses
                .iter()
                .map(|p| krl_functions::pulse_func(t, p.k, p.t_max, p.rise, p.decay, p.c))
                .sum::<f64>()
        })
        .collect()
}

pub fn norris_train_internal<'py>(time: ArrayView1<'py, f64>, pulses: &[NorrisPulse]) -> Vec<f64> {
    (0..time.len())
        .into_par_iter()
        .map(|i| {
            let t = time[i];
            pulses
                .iter()
                .map(|p| norris_functions::pulse_func(t, p.k, p.t_start, p.t_rise, p.t_decay))
                .sum::<f64>()
        })
        .collect()
}

pub fn fluence_internal<'py>(
    time: ArrayView1<'py, f64>,
    flux: ArrayView1<'py, f64>,
) -> Result<f64, ShapeError> {
    if time.len() != flux.len() {
        return Err(ShapeError::LengthMismatch);
    }
    Ok(time
        .iter()
        .zip(flux)
        .tuple_windows()
        .map(|((&t0, &f0), (&t1, &f1))| 0.5 * (f0 + f1) * (t1 - t0))
        .sum())
}

/// Flux of a light curve built from a train of KRL pulses.
///
/// # Arguments
///
/// * `py` - Python GIL token.
/// * `time` - Sample times.
/// * `pulses` - Objects carrying `K`, `t_max`, `rise`, `decay` and `c`
///   attributes, one per component.
///
/// # Returns
///
/// * A NumPy array with the summed component flux at each sample time. An
///   empty train gives zeros.
#[pyfunction]
pub fn krl_train<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<'py, f64>,
    pulses: Vec<KrlPulse>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(krl_train_internal(time.as_array(), &pulses).into_pyarray(py))
}

/// Flux of a light curve built from a train of Norris pulses.
///
/// # Arguments
///
/// * `py` - Python GIL token.
/// * `time` - Sample times.
/// * `pulses` - Objects carrying `K`, `t_start`, `t_rise` and `t_decay`
///   attributes, one per component.
///
/// # Returns
///
/// * A NumPy array with the summed component flux at each sample time.
#[pyfunction]
pub fn norris_train<'py>(
    py: Python<'py>,
    time: PyReadonlyArray1<'py, f64>,
    pulses: Vec<NorrisPulse>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    Ok(norris_train_internal(time.as_array(), &pulses).into_pyarray(py))
}

/// Trapezoidal fluence of a sampled light curve.
///
/// Assumes `time` is nondecreasing; fewer than two samples integrate to zero.
/// Non-finite flux samples propagate into the result.
///
/// # Arguments
///
/// * `time` - Sample times.
/// * `flux` - Flux at each sample time, same length as `time`.
///
/// # Returns
///
/// * The time integral of the flux over the sampled interval.
#[pyfunction]
pub fn fluence(time: PyReadonlyArray1<f64>, flux: PyReadonlyArray1<f64>) -> PyResult<f64> {
    Ok(fluence_internal(time.as_array(), flux.as_array())?)
}
