// Domain bounds
pub const GAMMA_MIN: f64 = 1.0; // exclusive
pub const PRESSURE_RATIO_MIN: f64 = 0.0; // inclusive
pub const PRESSURE_RATIO_MAX: f64 = 1.0; // exclusive
pub const EXPANSION_RATIO_MIN: f64 = 1.0; // inclusive

// Reference engine scenario
pub const REFERENCE_GAMMA: f64 = 1.2;
pub const REFERENCE_GAS_CONSTANT: f64 = 350.0; // J/(kg·K)
pub const REFERENCE_CHAMBER_TEMPERATURE: f64 = 3500.0; // K
pub const REFERENCE_EXIT_PRESSURE_RATIO: f64 = 0.0125;
pub const REFERENCE_AMBIENT_PRESSURE_RATIO: f64 = 0.02;
pub const REFERENCE_EXPANSION_RATIO: f64 = 10.0;

// Expected results for the reference scenario
pub const REFERENCE_C_STAR: f64 = 1706.6214; // m/s
pub const REFERENCE_C_F: f64 = 1.5423079;

// Demo sweep over exit pressure ratio; the last point is outside [0, 1)
pub const SWEEP_EXIT_PRESSURE_RATIOS: [f64; 7] = [0.0, 0.005, 0.0125, 0.02, 0.05, 0.1, 1.0];
