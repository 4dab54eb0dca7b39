use crate::constants::{EXPANSION_RATIO_MIN, GAMMA_MIN, PRESSURE_RATIO_MAX, PRESSURE_RATIO_MIN};
use crate::errors::Result;
use crate::utils::validation::{
    require_at_least, require_greater_than, require_in_range, require_real,
};

/// Nozzle state feeding the thrust coefficient relation. Pressures are
/// given as ratios to chamber pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleConditions {
    pub gamma: f64,
    /// p_e / p_0, in [0, 1).
    pub exit_pressure_ratio: f64,
    /// p_a / p_0, in [0, 1).
    pub ambient_pressure_ratio: f64,
    /// A_e / A*, at least 1.
    pub expansion_ratio: f64,
}

impl NozzleConditions {
    pub fn new(
        gamma: f64,
        exit_pressure_ratio: f64,
        ambient_pressure_ratio: f64,
        expansion_ratio: f64,
    ) -> Self {
        NozzleConditions {
            gamma,
            exit_pressure_ratio,
            ambient_pressure_ratio,
            expansion_ratio,
        }
    }

    pub fn thrust_coefficient(&self) -> Result<f64> {
        self.thrust_coefficient_terms().map(|terms| terms.total())
    }

    pub fn thrust_coefficient_terms(&self) -> Result<ThrustCoefficientTerms> {
        c_f_terms(
            self.gamma,
            self.exit_pressure_ratio,
            self.ambient_pressure_ratio,
            self.expansion_ratio,
        )
    }
}

/// The two additive parts of CF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustCoefficientTerms {
    /// Ideal expansion contribution, sqrt(term1).
    pub momentum: f64,
    /// Exit-plane pressure mismatch, (pr_e - pr_a) * eps.
    pub pressure: f64,
}

impl ThrustCoefficientTerms {
    pub fn total(&self) -> f64 {
        self.momentum + self.pressure
    }
}

/// Thrust coefficient CF of an ideal nozzle, dimensionless.
///
/// ```
/// let cf = rocket_relations::c_f(1.2, 0.0125, 0.02, 10.0).unwrap();
/// assert!((cf - 1.5423079).abs() < 1e-5);
/// ```
pub fn c_f(gamma: f64, pr_e: f64, pr_a: f64, eps: f64) -> Result<f64> {
    c_f_terms(gamma, pr_e, pr_a, eps).map(|terms| terms.total())
}

/// Validates the nozzle inputs and evaluates both parts of CF.
///
/// The radicand is clamped at zero: as pr_e approaches 1 the bracket
/// `1 - pr_e^((γ-1)/γ)` tends to zero and must never go negative.
pub fn c_f_terms(gamma: f64, pr_e: f64, pr_a: f64, eps: f64) -> Result<ThrustCoefficientTerms> {
    require_real("gamma", gamma)?;
    require_real("pr_e", pr_e)?;
    require_real("pr_a", pr_a)?;
    require_real("eps", eps)?;

    require_greater_than("gamma", gamma, GAMMA_MIN, "> 1")?;
    require_in_range(
        "pr_e",
        pr_e,
        PRESSURE_RATIO_MIN,
        PRESSURE_RATIO_MAX,
        "in [0, 1)",
    )?;
    require_in_range(
        "pr_a",
        pr_a,
        PRESSURE_RATIO_MIN,
        PRESSURE_RATIO_MAX,
        "in [0, 1)",
    )?;
    require_at_least("eps", eps, EXPANSION_RATIO_MIN, ">= 1 (Ae/A*)")?;

    // (2/(γ+1))^((γ+1)/(γ-1)) and 1 - pr_e^((γ-1)/γ) in log form, so
    // neither collapses to 0 or 1 as γ -> 1.
    let factor = (2.0 * gamma * gamma) / (gamma - 1.0);
    let exponent = (gamma + 1.0) / (gamma - 1.0);
    let core = (-exponent * ((gamma - 1.0) / 2.0).ln_1p()).exp();
    let bracket = -(((gamma - 1.0) / gamma) * pr_e.ln()).exp_m1();
    let radicand = (factor * core * bracket).max(0.0);

    Ok(ThrustCoefficientTerms {
        momentum: radicand.sqrt(),
        pressure: (pr_e - pr_a) * eps,
    })
}
