pub mod error;
pub mod krl_functions;
pub mod lightcurve_functions;
pub mod models;
pub mod norris_functions;
pub mod params;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use pyo3::prelude::*;

#[pymodule]
#[pyo3(name = "_pulse_models")]
mod pulse_models {
    use super::*;

    #[pymodule]
    mod krl_functions {
        #[pymodule_export]
        use crate::krl_functions::{assign_units, evaluate, parameters};
    }

    #[pymodule]
    mod norris_functions {
        #[pymodule_export]
        use crate::norris_functions::{assign_units, evaluate, parameters};
    }

    #[pymodule]
    mod lightcurve_functions {
        #[pymodule_export]
        use crate::lightcurve_functions::{fluence, krl_train, norris_train};
    }
}
