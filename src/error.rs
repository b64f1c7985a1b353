use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

/// Structural misuse of the evaluation API.
///
/// Out-of-domain numeric inputs are not errors here: divisions by zero and
/// negative bases under fractional exponents propagate as IEEE special values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A flat parameter vector had the wrong number of entries for the model.
    #[error("{model} takes {expected} parameters, got {got}")]
    ParamCount {
        model: &'static str,
        expected: usize,
        got: usize,
    },
    /// Two paired input arrays disagreed in length.
    #[error("input arrays must have the same length")]
    LengthMismatch,
}

impl From<ShapeError> for PyErr {
    fn from(err: ShapeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
