//! CSV export of simulation series

use std::path::Path;

use anyhow::Result;

use pandemic_simulator_core_rs::SimulationSeries;

/// Write the cumulative series as a `day,...` table at `path`
pub fn write_csv(series: &SimulationSeries, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "day",
        "infections",
        "hospitalizations",
        "deaths",
        "recoveries",
    ])?;

    for day in 0..=series.days() {
        writer.write_record(&[
            day.to_string(),
            series.infections[day].to_string(),
            series.hospitalizations[day].to_string(),
            series.deaths[day].to_string(),
            series.recoveries[day].to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
