//! Ideal rocket relations: characteristic velocity (c*) and thrust
//! coefficient (CF) for quick preliminary propulsion sizing.
//!
//! Assumes a calorically perfect, non-reacting gas and isentropic,
//! steady, quasi-1D nozzle flow choked at the throat.
//!
//! ```
//! use rocket_relations::{c_f, c_star};
//!
//! let c_star = c_star(1.2, 350.0, 3500.0)?;
//! let cf = c_f(1.2, 0.0125, 0.02, 10.0)?;
//! assert!((c_star - 1706.6214).abs() < 1e-3);
//! assert!((cf - 1.5423079).abs() < 1e-5);
//! # Ok::<(), rocket_relations::RelationError>(())
//! ```

pub mod constants;
pub mod errors;
pub mod relations;
pub mod report;
pub mod utils;

pub use errors::{RelationError, Result};
pub use relations::characteristic_velocity::{c_star, ChamberConditions};
pub use relations::thrust_coefficient::{c_f, c_f_terms, NozzleConditions, ThrustCoefficientTerms};
pub use report::PerformanceReport;
