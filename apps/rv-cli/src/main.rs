use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rv_core::m;
use rv_rod::{RodParameters, RodSpec, io};
use rv_viewer::{Color, ViewerConfig};

mod error;
mod session;

use error::{CliError, CliResult};
use session::{RodDisplay, Target, demo_states, frame_period, play};

#[derive(Parser)]
#[command(name = "rv-cli")]
#[command(about = "RodView CLI - Mirror elastic rod states in a remote 3D viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded rod trajectory
    Plot {
        /// Path to the recording (YAML, or JSON with a .json extension)
        recording: PathBuf,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        viewer: ViewerArgs,
    },
    /// Send a synthetic bending sweep
    Demo {
        /// Number of rod nodes
        #[arg(long, default_value_t = 20)]
        nodes: usize,
        /// Rod radius in meters
        #[arg(long, default_value_t = 0.01)]
        radius: f64,
        /// Rod integration interval (length)
        #[arg(long, default_value_t = 1.0)]
        length: f64,
        /// Number of frames in the sweep
        #[arg(long, default_value_t = 60)]
        frames: usize,
        /// Peak curvature reached during the sweep
        #[arg(long, default_value_t = 3.0)]
        max_curvature: f64,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        viewer: ViewerArgs,
    },
    /// Validate a viewer configuration file
    CheckConfig {
        /// Path to the viewer YAML file
        config_path: PathBuf,
    },
}

#[derive(Args)]
struct DisplayArgs {
    /// Object name in the viewer
    #[arg(long, default_value = "rod")]
    name: String,
    /// Color as r,g,b[,a] in [0, 1]
    #[arg(long, default_value = "1,1,1,1")]
    color: String,
    /// Viewer group to add the rod to
    #[arg(long)]
    group: Option<String>,
}

#[derive(Args)]
struct ViewerArgs {
    /// Viewer configuration YAML file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Viewer address (host:port), overrides the configuration file
    #[arg(long)]
    addr: Option<String>,
    /// Frames per second; 0 sends as fast as possible
    #[arg(long, default_value_t = 0.0)]
    rate_hz: f64,
    /// Print viewer calls as JSON lines instead of connecting
    #[arg(long)]
    dry_run: bool,
}

fn main() -> CliResult<()> {
    // Initialize tracing; stdout carries dry-run output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plot {
            recording,
            display,
            viewer,
        } => cmd_plot(&recording, &display, &viewer),
        Commands::Demo {
            nodes,
            radius,
            length,
            frames,
            max_curvature,
            display,
            viewer,
        } => cmd_demo(nodes, radius, length, frames, max_curvature, &display, &viewer),
        Commands::CheckConfig { config_path } => cmd_check_config(&config_path),
    }
}

fn cmd_plot(recording_path: &Path, display: &DisplayArgs, viewer: &ViewerArgs) -> CliResult<()> {
    let recording = io::load(recording_path)?;
    let rod = RodSpec::new(recording.parameters.to_parameters()?)?;
    let states = recording.states()?;

    let sent = play(
        &viewer.target()?,
        &rod,
        &display.resolve()?,
        &states,
        frame_period(viewer.rate_hz)?,
    )?;
    if !viewer.dry_run {
        println!("✓ Sent {} frames from {}", sent, recording_path.display());
    }
    Ok(())
}

fn cmd_demo(
    nodes: usize,
    radius: f64,
    length: f64,
    frames: usize,
    max_curvature: f64,
    display: &DisplayArgs,
    viewer: &ViewerArgs,
) -> CliResult<()> {
    let params = RodParameters::new(m(radius), length, nodes)?;
    let rod = RodSpec::new(params.clone())?;
    let states = demo_states(&params, frames, max_curvature)?;

    let sent = play(
        &viewer.target()?,
        &rod,
        &display.resolve()?,
        &states,
        frame_period(viewer.rate_hz)?,
    )?;
    if !viewer.dry_run {
        println!("✓ Sent {} demo frames", sent);
    }
    Ok(())
}

fn cmd_check_config(config_path: &Path) -> CliResult<()> {
    println!("Checking viewer configuration: {}", config_path.display());
    let config = ViewerConfig::load_yaml(config_path)?;
    println!("✓ Configuration is valid");
    println!("  address: {}", config.address);
    println!("  connect timeout: {} ms", config.connect_timeout_ms);
    println!("  io timeout: {} ms", config.io_timeout_ms);
    Ok(())
}

impl DisplayArgs {
    fn resolve(&self) -> CliResult<RodDisplay> {
        if self.name.is_empty() {
            return Err(CliError::InvalidInput("name must not be empty".to_string()));
        }
        Ok(RodDisplay {
            name: self.name.clone(),
            color: self.color.parse::<Color>()?,
            group: self.group.clone(),
        })
    }
}

impl ViewerArgs {
    fn target(&self) -> CliResult<Target> {
        if self.dry_run {
            return Ok(Target::DryRun);
        }
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load_yaml(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(addr) = &self.addr {
            config.address = addr.clone();
        }
        config.validate()?;
        Ok(Target::Viewer(config))
    }
}
