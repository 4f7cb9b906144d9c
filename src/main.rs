use dpsim::{load_path, transform, Playback, PLAYBACK_DT};
use dpsim::{parse_initial_conditions, SimulateConfig};
use dpsim::{run_integrator, run_viewer};
use dpsim::{DEFAULT_FILE_PATH, DEFAULT_INTEGRATOR, DEFAULT_ITERATIONS, DEFAULT_STEP_SIZE};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dpsim", about = "Double-pendulum run orchestrator and viewer")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Visualise the results of a double pendulum simulation
    Visualise {
        /// Trajectory file produced by the integrator
        #[arg(long)]
        data: PathBuf,
    },
    /// Run the external integrator, then optionally visualise its output
    Simulate {
        /// Four space-separated reals: p1, p2, theta1, theta2 at t = 0
        #[arg(long, default_value = "0.0 0.0 0.0 0.0")]
        initial_conditions: String,

        /// Integrator step size, in seconds
        #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
        step_size: f64,

        /// Number of integrator iterations
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,

        /// Output file the integrator writes records to
        #[arg(long, default_value = DEFAULT_FILE_PATH)]
        file_path: PathBuf,

        /// Feed the output file through the viewer once the run finishes
        #[arg(long)]
        do_visualise: bool,

        /// Integrator binary to launch
        #[arg(long, default_value = DEFAULT_INTEGRATOR)]
        integrator: PathBuf,

        /// Load the whole run configuration from a scenario YAML instead
        #[arg(long)]
        scenario: Option<PathBuf>,
    },
}

// load here to keep main clean
fn load_scenario(path: &Path) -> Result<SimulateConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: SimulateConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;

    Ok(config)
}

/// Load → transform → playback → viewer for one trajectory file
fn visualise_file(path: &Path) -> Result<()> {
    let trajectory = load_path(path)
        .with_context(|| format!("failed to load trajectory {}", path.display()))?;
    let series = transform(&trajectory);

    let mut playback = Playback::new(series, PLAYBACK_DT);
    if !playback.start() {
        warn!("{}: fewer than two frames, nothing to animate", path.display());
        return Ok(());
    }

    run_viewer(playback);
    Ok(())
}

/// Print the run parameters, launch the integrator, then visualise on request
fn simulate(config: SimulateConfig) -> Result<()> {
    let [p1, p2, theta1, theta2] = config.initial_conditions;
    println!("Running simulation with the following parameters:");
    println!("  Initial conditions:");
    println!("    p_1     = {p1}");
    println!("    p_2     = {p2}");
    println!("    theta_1 = {theta1}");
    println!("    theta_2 = {theta2}");
    println!("  Step size  = {}", config.step_size);
    println!("  Iterations = {}", config.iterations);
    println!("  Output     = {}", config.file_path.display());
    println!();

    let report = run_integrator(&config)?;
    if !report.stdout.is_empty() {
        print!("{}", report.stdout);
    }

    if config.visualise {
        visualise_file(&config.file_path)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match args.command {
        Command::Visualise { data } => visualise_file(&data),
        Command::Simulate {
            scenario: Some(path),
            do_visualise,
            ..
        } => {
            let mut config = load_scenario(&path)?;
            config.visualise = config.visualise || do_visualise;
            simulate(config)
        }
        Command::Simulate {
            initial_conditions,
            step_size,
            iterations,
            file_path,
            do_visualise,
            integrator,
            scenario: None,
        } => {
            let config = SimulateConfig {
                initial_conditions: parse_initial_conditions(&initial_conditions)?,
                step_size,
                iterations,
                file_path,
                visualise: do_visualise,
                integrator,
            };
            simulate(config)
        }
    }
}
