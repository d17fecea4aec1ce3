use clap::Parser;
use log::info;
use report::writer::ReportWriter;
use std::path::PathBuf;
use workflow::config::ScenarioConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Evaluate a 1D AESA array and radar link scenario")]
struct Args {
    /// Load a scenario from YAML; the remaining physical flags are ignored
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Carrier frequency in Hz
    #[arg(long, default_value_t = 10.0e9)]
    frequency: f64,
    #[arg(long, default_value_t = 16, allow_negative_numbers = true)]
    elements: i32,
    /// Element spacing in feet; defaults to half a wavelength
    #[arg(long)]
    spacing: Option<f64>,
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    steer_deg: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    observe_deg: f64,
    /// Sweep the array factor across observation angle
    #[arg(long, default_value_t = false)]
    pattern: bool,
    /// Print the report as JSON instead of a text summary
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append the report as a JSON line to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::from_args(
            args.frequency,
            args.elements,
            args.spacing,
            args.steer_deg,
            args.observe_deg,
        )
    };

    let runner = Runner::new(scenario);
    info!(
        "evaluating {} elements at {:.3e} Hz",
        runner.config().element_count,
        runner.config().frequency
    );
    let report = runner.execute(args.pattern)?;

    let writer = ReportWriter::new(args.report);
    if args.json {
        println!("{}", writer.to_json(&report)?);
    } else {
        print!("{}", writer.summary(&report));
    }
    writer.append(&report)?;

    Ok(())
}
