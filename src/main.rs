use rocket_relations::constants::*;
use rocket_relations::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let chamber = ChamberConditions::new(
        REFERENCE_GAMMA,
        REFERENCE_GAS_CONSTANT,
        REFERENCE_CHAMBER_TEMPERATURE,
    );
    let nozzle = NozzleConditions::new(
        REFERENCE_GAMMA,
        REFERENCE_EXIT_PRESSURE_RATIO,
        REFERENCE_AMBIENT_PRESSURE_RATIO,
        REFERENCE_EXPANSION_RATIO,
    );

    let mut report = PerformanceReport::new();

    report.record_c_star(&chamber)?;
    report.record_c_f(&nozzle)?;

    for (pr_e, e) in report.record_c_f_sweep(&nozzle, &SWEEP_EXIT_PRESSURE_RATIOS) {
        println!("Skipping sweep point pr_e = {}: {}", pr_e, e);
    }

    report.display_data();

    Ok(())
}
