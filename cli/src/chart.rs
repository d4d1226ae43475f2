//! PNG chart rendering for simulation series
//!
//! One line per cumulative series, days on the x axis, counts on the y axis.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use pandemic_simulator_core_rs::SimulationSeries;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

/// Render the four cumulative series as a line chart at `path`
pub fn render(series: &SimulationSeries, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = series.days().max(1) as f64;
    let y_max = peak(series).max(1.0) * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption("Pandemic Simulation Over Time", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Number of Cases")
        .draw()?;

    let lines: [(&[f64], &str, RGBColor); 4] = [
        (&series.infections, "Infections", RED),
        (&series.hospitalizations, "Hospitalizations", BLUE),
        (&series.deaths, "Deaths", BLACK),
        (&series.recoveries, "Recoveries", GREEN),
    ];

    for (values, label, color) in lines {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(day, &v)| (day as f64, v)),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Largest value across all four series, for the y-axis range
fn peak(series: &SimulationSeries) -> f64 {
    series
        .infections
        .iter()
        .chain(&series.hospitalizations)
        .chain(&series.deaths)
        .chain(&series.recoveries)
        .fold(0.0f64, |acc, &v| acc.max(v))
}
