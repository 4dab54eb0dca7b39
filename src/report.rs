use crate::errors::{RelationError, Result};
use crate::relations::characteristic_velocity::ChamberConditions;
use crate::relations::thrust_coefficient::NozzleConditions;

/// Collects evaluated cases as formatted lines for display.
pub struct PerformanceReport {
    pub log: Vec<String>,
    max_c_star: f64,
    max_c_f: f64,
    case_count: usize,
}

impl PerformanceReport {
    pub fn new() -> Self {
        PerformanceReport {
            log: Vec::new(),
            max_c_star: 0.0,
            max_c_f: f64::MIN,
            case_count: 0,
        }
    }

    fn format_velocity(velocity: f64) -> String {
        if velocity >= 1000.0 {
            format!("{:.4} km/s", velocity / 1000.0)
        } else {
            format!("{:.2} m/s", velocity)
        }
    }

    /// Evaluates c* for `chamber` and records it. Failures are recorded too
    /// and then returned to the caller.
    pub fn record_c_star(&mut self, chamber: &ChamberConditions) -> Result<f64> {
        self.case_count += 1;
        match chamber.characteristic_velocity() {
            Ok(value) => {
                self.max_c_star = self.max_c_star.max(value);
                self.log.push(format!(
                    "[{}] c* | gamma = {}, R = {} J/(kg·K), T0 = {} K -> {}",
                    self.case_count,
                    chamber.gamma,
                    chamber.gas_constant,
                    chamber.chamber_temperature,
                    Self::format_velocity(value)
                ));
                Ok(value)
            }
            Err(e) => {
                self.log
                    .push(format!("[{}] c* | rejected: {}", self.case_count, e));
                Err(e)
            }
        }
    }

    pub fn record_c_f(&mut self, nozzle: &NozzleConditions) -> Result<f64> {
        self.case_count += 1;
        match nozzle.thrust_coefficient_terms() {
            Ok(terms) => {
                let value = terms.total();
                self.max_c_f = self.max_c_f.max(value);
                self.log.push(format!(
                    "[{}] CF | gamma = {}, pr_e = {}, pr_a = {}, eps = {} -> {:.7} (momentum {:.7}, pressure {:+.7})",
                    self.case_count,
                    nozzle.gamma,
                    nozzle.exit_pressure_ratio,
                    nozzle.ambient_pressure_ratio,
                    nozzle.expansion_ratio,
                    value,
                    terms.momentum,
                    terms.pressure
                ));
                Ok(value)
            }
            Err(e) => {
                self.log
                    .push(format!("[{}] CF | rejected: {}", self.case_count, e));
                Err(e)
            }
        }
    }

    /// Records CF for `nozzle` at each exit pressure ratio. Rejected points
    /// stay in the log and are returned with their error.
    pub fn record_c_f_sweep(
        &mut self,
        nozzle: &NozzleConditions,
        exit_pressure_ratios: &[f64],
    ) -> Vec<(f64, RelationError)> {
        let mut rejected = Vec::new();
        for &pr_e in exit_pressure_ratios {
            let case = NozzleConditions {
                exit_pressure_ratio: pr_e,
                ..*nozzle
            };
            if let Err(e) = self.record_c_f(&case) {
                rejected.push((pr_e, e));
            }
        }
        rejected
    }

    pub fn case_count(&self) -> usize {
        self.case_count
    }

    pub fn display_data(&self) {
        println!("Performance Report:");
        for entry in &self.log {
            println!("{}", entry);
        }

        println!("\nSummary:");
        println!("Cases evaluated: {}", self.case_count);
        if self.max_c_star > 0.0 {
            println!("Highest c*: {}", Self::format_velocity(self.max_c_star));
        }
        if self.max_c_f > f64::MIN {
            println!("Highest CF: {:.7}", self.max_c_f);
        }
    }
}

impl Default for PerformanceReport {
    fn default() -> Self {
        Self::new()
    }
}
