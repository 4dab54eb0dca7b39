use crate::constants::GAMMA_MIN;
use crate::errors::{RelationError, Result};
use crate::utils::validation::{require_greater_than, require_real};

/// Chamber state feeding the characteristic velocity relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberConditions {
    /// Ratio of specific heats (> 1).
    pub gamma: f64,
    /// Specific gas constant, J/(kg·K) for SI results (> 0).
    pub gas_constant: f64,
    /// Stagnation temperature in K (> 0).
    pub chamber_temperature: f64,
}

impl ChamberConditions {
    pub fn new(gamma: f64, gas_constant: f64, chamber_temperature: f64) -> Self {
        ChamberConditions {
            gamma,
            gas_constant,
            chamber_temperature,
        }
    }

    pub fn characteristic_velocity(&self) -> Result<f64> {
        c_star(self.gamma, self.gas_constant, self.chamber_temperature)
    }
}

/// Characteristic velocity c* of an ideal rocket, in m/s for SI inputs.
///
/// c* = sqrt( (1/γ) * ((γ+1)/2)^((γ+1)/(γ-1)) * R * T0 )
///
/// ```
/// let c_star = rocket_relations::c_star(1.2, 350.0, 3500.0).unwrap();
/// assert!((c_star - 1706.6214).abs() < 1e-3);
/// ```
pub fn c_star(gamma: f64, r: f64, t0: f64) -> Result<f64> {
    require_real("gamma", gamma)?;
    require_real("R", r)?;
    require_real("T0", t0)?;

    require_greater_than("gamma", gamma, GAMMA_MIN, "> 1")?;
    require_greater_than("R", r, 0.0, "> 0")?;
    require_greater_than("T0", t0, 0.0, "> 0 (absolute temperature)")?;

    // ((γ+1)/2)^((γ+1)/(γ-1)) via ln_1p; the base rounds to 1 as γ -> 1.
    let exponent = (gamma + 1.0) / (gamma - 1.0);
    let term = (exponent * ((gamma - 1.0) / 2.0).ln_1p()).exp();

    // Rooted per factor so R * T0 cannot overflow first.
    let value = (term / gamma).sqrt() * r.sqrt() * t0.sqrt();
    if !value.is_finite() {
        return Err(RelationError::Overflow { name: "c*" });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_scenario() {
        let value = c_star(1.2, 350.0, 3500.0).unwrap();
        assert_abs_diff_eq!(value, 1706.6214, epsilon = 1e-3);
    }

    #[test]
    fn test_air_like_gas() {
        let value = c_star(1.4, 287.0, 3000.0).unwrap();
        assert_relative_eq!(value, 1355.1310490133417, epsilon = 1e-9);
    }

    #[test]
    fn test_scales_with_square_root_of_temperature() {
        let cold = c_star(1.3, 350.0, 1000.0).unwrap();
        let hot = c_star(1.3, 350.0, 4000.0).unwrap();
        assert_relative_eq!(hot / cold, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_huge_gas_constant_and_temperature_stay_finite() {
        let value = c_star(1.2, 1e300, 1e300).unwrap();
        assert!(value.is_finite());
        let expected = 1e300 * (1.1_f64.powi(11) / 1.2).sqrt();
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_unrepresentable_result_is_overflow_error() {
        let err = c_star(1.2, f64::MAX, f64::MAX).unwrap_err();
        assert_eq!(err, RelationError::Overflow { name: "c*" });
    }

    #[test]
    fn test_gamma_just_above_one_keeps_precision() {
        // ((γ+1)/2)^((γ+1)/(γ-1)) tends to e as γ -> 1.
        let value = c_star(1.0 + f64::EPSILON, 350.0, 3500.0).unwrap();
        assert_relative_eq!(value, 1824.800054762803, max_relative = 1e-9);
    }

    #[test]
    fn test_gamma_at_bound_is_range_error() {
        let err = c_star(1.0, 350.0, 3500.0).unwrap_err();
        assert_eq!(
            err,
            RelationError::InvalidRange {
                name: "gamma",
                value: 1.0,
                requirement: "> 1",
            }
        );
    }

    #[test]
    fn test_non_positive_gas_constant_and_temperature() {
        assert_eq!(c_star(1.2, 0.0, 3500.0).unwrap_err().name(), "R");
        assert_eq!(c_star(1.2, -287.0, 3500.0).unwrap_err().name(), "R");
        assert_eq!(c_star(1.2, 350.0, 0.0).unwrap_err().name(), "T0");
        assert_eq!(c_star(1.2, 350.0, -100.0).unwrap_err().name(), "T0");
    }

    #[test]
    fn test_type_checks_run_before_range_checks() {
        // gamma is out of range but T0 is not a number; the type error wins.
        let err = c_star(0.5, 350.0, f64::NAN).unwrap_err();
        assert!(matches!(err, RelationError::InvalidType { name: "T0", .. }));
    }

    #[test]
    fn test_chamber_conditions_matches_function() {
        let chamber = ChamberConditions {
            gamma: 1.25,
            gas_constant: 320.0,
            chamber_temperature: 3200.0,
        };
        assert_eq!(
            chamber.characteristic_velocity().unwrap().to_bits(),
            c_star(1.25, 320.0, 3200.0).unwrap().to_bits()
        );
    }
}
