//! Pandemic Simulator CLI
//!
//! Thin glue around the core engine: parses arguments, loads an optional
//! scenario file, runs the simulation, and renders the results as a PNG
//! chart and/or a CSV table. All user-facing reporting happens here; the
//! core itself never prints.

mod chart;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pandemic_simulator_core_rs::{Parameters, ScenarioConfig, SimulationEngine};

/// Run a deterministic pandemic simulation and chart the outcome
#[derive(Debug, Parser)]
#[command(name = "pandemic-sim", version, about)]
struct Cli {
    /// Basic reproduction number (new infections per infection per day)
    #[arg(long, allow_negative_numbers = true)]
    r0: Option<f64>,

    /// Daily mortality rate for hospitalized patients
    #[arg(long, allow_negative_numbers = true)]
    mortality_rate: Option<f64>,

    /// Daily mortality rate for patients without a hospital bed
    #[arg(long, allow_negative_numbers = true)]
    mortality_rate_no_hospital: Option<f64>,

    /// Total number of hospital beds available
    #[arg(long)]
    hospital_beds: Option<u64>,

    /// Number of beds already occupied at simulation start
    #[arg(long, allow_negative_numbers = true)]
    occupied_beds: Option<f64>,

    /// Number of days to simulate
    #[arg(long)]
    days: usize,

    /// Number of infections at the start of the simulation
    #[arg(long, allow_negative_numbers = true)]
    initial_infections: f64,

    /// JSON scenario file supplying the five parameter keys; replaces the
    /// individual parameter flags
    #[arg(long)]
    param_file: Option<PathBuf>,

    /// Output path for the PNG chart
    #[arg(long, default_value = "simulation.png")]
    chart: PathBuf,

    /// Optional output path for a CSV table of the series
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut engine = build_engine(&cli)?;
    let series = engine
        .run(cli.days, cli.initial_infections)
        .context("simulation failed")?;

    let last = series.days();
    println!(
        "Simulated {} day(s): {:.1} infections, {:.1} hospitalizations, {:.1} deaths, {:.1} recoveries",
        last,
        series.infections[last],
        series.hospitalizations[last],
        series.deaths[last],
        series.recoveries[last],
    );

    if let Some(path) = &cli.csv {
        report::write_csv(&series, path)
            .with_context(|| format!("cannot write CSV to {}", path.display()))?;
        println!("CSV written to {}", path.display());
    }

    if !cli.no_chart {
        chart::render(&series, &cli.chart)
            .with_context(|| format!("cannot render chart to {}", cli.chart.display()))?;
        println!("Chart written to {}", cli.chart.display());
    }

    Ok(())
}

/// Build the engine from either the scenario file or the scalar flags
fn build_engine(cli: &Cli) -> Result<SimulationEngine> {
    if let Some(path) = &cli.param_file {
        let config = ScenarioConfig::from_path(path)
            .with_context(|| format!("cannot load scenario {}", path.display()))?;
        return config.into_engine().context("invalid scenario file");
    }

    let (Some(r0), Some(mortality_rate), Some(mortality_rate_no_hospital), Some(hospital_beds)) = (
        cli.r0,
        cli.mortality_rate,
        cli.mortality_rate_no_hospital,
        cli.hospital_beds,
    ) else {
        bail!(
            "either --param-file or all of --r0, --mortality-rate, \
             --mortality-rate-no-hospital and --hospital-beds are required"
        );
    };

    let params = Parameters::new(r0, mortality_rate, mortality_rate_no_hospital, hospital_beds)
        .context("invalid parameters")?;
    SimulationEngine::new(params, cli.occupied_beds.unwrap_or(0.0))
        .context("invalid starting occupancy")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("pandemic-sim").chain(args.iter().copied()))
    }

    #[test]
    fn test_scalar_flags_build_an_engine() {
        let cli = parse(&[
            "--r0", "2.0",
            "--mortality-rate", "0.1",
            "--mortality-rate-no-hospital", "0.2",
            "--hospital-beds", "100",
            "--days", "10",
            "--initial-infections", "5",
        ]);
        let engine = build_engine(&cli).unwrap();
        assert_eq!(engine.params().total_beds(), 100);
        assert_eq!(engine.state().occupied(), 0.0);
    }

    #[test]
    fn test_missing_scalars_without_param_file_is_an_error() {
        let cli = parse(&["--days", "10", "--initial-infections", "5"]);
        assert!(build_engine(&cli).is_err());
    }

    #[test]
    fn test_invalid_rate_is_reported() {
        let cli = parse(&[
            "--r0", "-2.0",
            "--mortality-rate", "0.1",
            "--mortality-rate-no-hospital", "0.2",
            "--hospital-beds", "100",
            "--days", "10",
            "--initial-infections", "5",
        ]);
        assert!(build_engine(&cli).is_err());
    }
}
