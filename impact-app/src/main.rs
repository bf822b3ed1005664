use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use impact::config::parse_number;
use impact::glam::DVec2;
use impact::{
    BodyParams, LayoutMode, Restitution, Simulation, SimulationConfig, StepRecord,
    EXPORT_PRECISION,
};
use log::{info, warn};

/// Run a two-body collision headless and export its series.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Scenario file (YAML). Without one the reference pair is used.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Mass of body A in kg.
    #[arg(long, allow_hyphen_values = true)]
    mass_a: Option<String>,

    /// Velocity of body A as `vx,vy` in m/s.
    #[arg(long, allow_hyphen_values = true)]
    velocity_a: Option<String>,

    /// Mass of body B in kg.
    #[arg(long, allow_hyphen_values = true)]
    mass_b: Option<String>,

    /// Velocity of body B as `vx,vy` in m/s.
    #[arg(long, allow_hyphen_values = true)]
    velocity_b: Option<String>,

    /// Coefficient of restitution in [0, 1].
    #[arg(short, long, allow_hyphen_values = true)]
    restitution: Option<String>,

    /// Vertical start offsets `a,b` in meters; switches to the 2D layout.
    #[arg(long, allow_hyphen_values = true)]
    offsets: Option<String>,

    /// Fixed timestep in seconds.
    #[arg(long)]
    timestep: Option<String>,

    /// Simulated seconds to run.
    #[arg(short, long, default_value_t = 5.0)]
    duration: f64,

    /// Write the recorded series as CSV to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decimal places in the CSV.
    #[arg(long, default_value_t = EXPORT_PRECISION)]
    precision: usize,
}

fn load_scenario(path: &Path) -> Result<SimulationConfig> {
    let file = File::open(path).with_context(|| format!("Failed to open scenario {:?}", path))?;
    let config = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse scenario {:?}", path))?;
    Ok(config)
}

/// Parse a `x,y` pair of numeric fields.
fn parse_pair(name: &str, text: &str) -> impact::Result<DVec2> {
    let (x, y) = text.split_once(',').unwrap_or((text, "0"));
    Ok(DVec2::new(
        parse_number(&format!("{name}.x"), x)?,
        parse_number(&format!("{name}.y"), y)?,
    ))
}

fn override_body(
    mut params: BodyParams,
    label: &str,
    mass: Option<&str>,
    velocity: Option<&str>,
) -> impact::Result<BodyParams> {
    if let Some(mass) = mass {
        params.mass = parse_number(&format!("{label}.mass"), mass)?;
    }
    if let Some(velocity) = velocity {
        params.velocity = parse_pair(&format!("{label}.velocity"), velocity)?;
    }
    Ok(params)
}

/// Scenario file (or defaults) with command-line overrides applied.
fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => SimulationConfig::default(),
    };

    config.body_a = override_body(
        config.body_a,
        "body_a",
        args.mass_a.as_deref(),
        args.velocity_a.as_deref(),
    )?;
    config.body_b = override_body(
        config.body_b,
        "body_b",
        args.mass_b.as_deref(),
        args.velocity_b.as_deref(),
    )?;

    if let Some(text) = &args.restitution {
        config.restitution = Restitution::from(parse_number("restitution", text)?);
    }
    if let Some(text) = &args.timestep {
        config.timestep = parse_number("timestep", text)?;
    }
    if let Some(text) = &args.offsets {
        let offsets = parse_pair("offsets", text)?;
        config.layout = LayoutMode::TwoDimensional {
            offset_a: offsets.x,
            offset_b: offsets.y,
        };
    }

    Ok(config)
}

fn check_duration(duration: f64) -> Result<f64> {
    ensure!(
        duration.is_finite() && duration >= 0.0,
        "--duration must be a finite, non-negative number of seconds, got {duration}"
    );
    Ok(duration)
}

fn report_pulse(record: &StepRecord) {
    if let Some(pulse) = record.pulse() {
        info!(
            "t = {:.2}s: contact ended, impulse = {:.2} N·s (peak {:.1} N over {:.2} s)",
            record.time,
            pulse.impulse(),
            pulse.peak_force(),
            pulse.duration()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let duration = check_duration(args.duration)?;
    let config = build_config(&args)?;
    let mut sim = Simulation::new(config).context("Invalid simulation parameters")?;

    sim.start()?;
    let records = sim.run_for(duration);
    records.iter().for_each(report_pulse);

    let q = sim.quantities();
    let [a, b] = sim.bodies();
    info!(
        "t: {:.2}s | P_tot: {:.2} kg·m/s | KE: {:.2} J | V1: {:.2} m/s | V2: {:.2} m/s",
        sim.time(),
        q.momentum,
        q.kinetic_energy,
        a.speed(),
        b.speed()
    );

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
            sim.series()
                .write_csv(BufWriter::new(file), args.precision)
                .with_context(|| format!("Failed to export series to {:?}", path))?;
            info!("Wrote {} rows to {:?}", sim.series().len(), path);
        }
        None => warn!("No --output given, series not exported"),
    }

    Ok(())
}
