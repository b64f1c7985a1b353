//! The pulse-shape interface the host framework drives: declared parameters,
//! evaluation over a flat parameter vector, and unit assignment.

use ndarray::ArrayView1;

use crate::error::ShapeError;
use crate::params::{self, AssignedUnit, ParamSpec};
use crate::{krl_functions, norris_functions};

pub trait PulseShape {
    fn name(&self) -> &'static str;

    fn parameters(&self) -> &'static [ParamSpec];

    /// Evaluates the pulse over `time`, with `values` holding one entry per
    /// declared parameter in declaration order. Values are never checked
    /// against the declared bounds; only the arity is.
    fn evaluate(
        &self,
        time: ArrayView1<'_, f64>,
        values: &[f64],
    ) -> Result<Vec<f64>, ShapeError>;

    /// Assigns the host axis units to each declared parameter.
    fn assign_units(&self, x_unit: &str, y_unit: &str) -> Vec<AssignedUnit> {
        params::assign_units(self.parameters(), x_unit, y_unit)
    }
}

/// The pulse shape of Kocevski, Ryde & Liang (2003).
pub struct Krl;

/// The pulse shape of Norris et al. (2005).
pub struct Norris;

fn param_array<const N: usize>(
    shape: &dyn PulseShape,
    values: &[f64],
) -> Result<[f64; N], ShapeError> {
    <[f64; N]>::try_from(values).map_err(|_| ShapeError::ParamCount {
        model: shape.name(),
        expected: N,
        got: values.len(),
    })
}

impl PulseShape for Krl {
    fn name(&self) -> &'static str {
        "KRL"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &krl_functions::PARAMETERS
    }

    fn evaluate(
        &self,
        time: ArrayView1<'_, f64>,
        values: &[f64],
    ) -> Result<Vec<f64>, ShapeError> {
        let [k, t_max, rise, decay, c] = param_array(self, values)?;
        Ok(krl_functions::evaluate_internal(
            time, k, t_max, rise, decay, c,
        ))
    }
}

impl PulseShape for Norris {
    fn name(&self) -> &'static str {
        "Norris"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        &norris_functions::PARAMETERS
    }

    fn evaluate(
        &self,
        time: ArrayView1<'_, f64>,
        values: &[f64],
    ) -> Result<Vec<f64>, ShapeError> {
        let [k, t_start, t_rise, t_decay] = param_array(self, values)?;
        Ok(norris_functions::evaluate_internal(
            time, k, t_start, t_rise, t_decay,
        ))
    }
}

/// Every pulse shape a host can register.
pub fn shapes() -> [&'static dyn PulseShape; 2] {
    [&Krl, &Norris]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn trait_matches_module_evaluation() {
        let time = Array1::from_vec(vec![0.0, 2.0, 5.0, 11.0]);
        let flux = Krl
            .evaluate(time.view(), &[2.0, 5.0, 1.0, 2.5, 0.0])
            .unwrap();
        assert_eq!(
            flux,
            krl_functions::evaluate_internal(time.view(), 2.0, 5.0, 1.0, 2.5, 0.0)
        );

        let flux = Norris
            .evaluate(time.view(), &[2.0, 1.0, 1.0, 2.5])
            .unwrap();
        assert_eq!(
            flux,
            norris_functions::evaluate_internal(time.view(), 2.0, 1.0, 1.0, 2.5)
        );
    }

    #[test]
    fn wrong_arity_is_reported() {
        let time = Array1::from_vec(vec![1.0]);
        let err = Krl.evaluate(time.view(), &[1.0, 5.0]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ParamCount {
                model: "KRL",
                expected: 5,
                got: 2,
            }
        );
        let err = Norris
            .evaluate(time.view(), &[1.0, 5.0, 1.0, 2.5, 0.0])
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::ParamCount {
                model: "Norris",
                expected: 4,
                got: 5,
            }
        );
    }

    #[test]
    fn inventory_lists_both_shapes() {
        let registered = shapes();
        let names: Vec<_> = registered.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["KRL", "Norris"]);
        let arities: Vec<_> = registered.iter().map(|s| s.parameters().len()).collect();
        assert_eq!(arities, [5, 4]);
    }

    #[test]
    fn units_assigned_through_the_trait() {
        for shape in shapes() {
            let assigned = shape.assign_units("s", "1 / (keV cm2 s)");
            assert_eq!(assigned[0].name, "K");
            assert_eq!(assigned[0].unit, "1 / (keV cm2 s)");
            assert_eq!(assigned.len(), shape.parameters().len());
        }
    }
}
