/// Which host-supplied unit a declared parameter inherits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    /// Carries the flux unit of the model output.
    Normalization,
    /// Measured in the unit of the independent time axis.
    Time,
    /// Dimensionless power-law index.
    Index,
}

impl ParamRole {
    /// Renders the unit for this role. Dimensionless parameters render as the
    /// empty string, which is how the host prints the bare unit.
    pub fn unit(self, x_unit: &str, y_unit: &str) -> String {
        match self {
            ParamRole::Normalization => y_unit.to_string(),
            ParamRole::Time => x_unit.to_string(),
            ParamRole::Index => String::new(),
        }
    }
}

/// Declaration of a single model parameter as the host framework consumes it.
///
/// `min` is advisory metadata for the host's fitter; evaluation never clamps
/// or checks values against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub desc: &'static str,
    pub initial: f64,
    pub min: Option<f64>,
    pub fixed: bool,
    pub role: ParamRole,
}

/// A parameter name paired with the unit assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedUnit {
    pub name: &'static str,
    pub unit: String,
}

/// Maps the host axis units onto a declaration table, in declaration order.
pub fn assign_units(specs: &[ParamSpec], x_unit: &str, y_unit: &str) -> Vec<AssignedUnit> {
    specs
        .iter()
        .map(|spec| AssignedUnit {
            name: spec.name,
            unit: spec.role.unit(x_unit, y_unit),
        })
        .collect()
}
