// src/main.rs

use bloch_panels::host::{run_repl, Command};
use bloch_panels::operations::RotationFamily;
use bloch_panels::{PanelError, PanelsConfig, RotationPanelState, Session};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bloch-panels", version, about = "Bloch-sphere panels for single-qubit states")]
struct Cli {
    /// TOML file overriding control ranges, rendering and measurement settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Prepare a state from latitude and longitude in degrees
    Spherical {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Prepare a state from θ/π and φ/π
    Fractional { theta_factor: f64, phi_factor: f64 },
    /// Apply I, X, Y, Z or H to |0⟩, |+⟩ and |r⟩
    Gate { gate: String },
    /// Apply RX, RY or RZ by θ·π to |0⟩, |+⟩ and |r⟩
    Rotate {
        family: String,
        theta_factor: Option<f64>,
        /// Family selected before this one; switching families resets θ to 0.
        /// Defaults to FAMILY, so θ is applied as given.
        #[arg(long)]
        previous: Option<String>,
    },
    /// Read commands from stdin (the default)
    Interactive,
    /// Print the effective configuration as TOML
    PrintConfig,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), PanelError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => PanelsConfig::load(path)?,
        None => PanelsConfig::default(),
    };
    debug!(config = ?cli.config, "configuration loaded");

    let command = match cli.command.unwrap_or(Cmd::Interactive) {
        Cmd::Spherical { latitude, longitude } => Command::Spherical { latitude, longitude },
        Cmd::Fractional { theta_factor, phi_factor } => {
            Command::Fractional { theta_factor, phi_factor }
        }
        Cmd::Gate { gate } => Command::Gate { label: gate },
        Cmd::Rotate { family, theta_factor, previous } => {
            let previous: RotationFamily = previous.as_deref().unwrap_or(family.as_str()).parse()?;
            let prior = RotationPanelState { previous_family: Some(previous), current_angle: 0.0 };
            let mut session = Session::new(config).with_rotation_state(prior);
            let text = session.handle(&Command::Rotate { family, theta_factor })?;
            return emit(&text);
        }
        Cmd::Interactive => {
            let mut session = Session::new(config);
            let stdin = io::stdin();
            return run_repl(&mut session, stdin.lock(), io::stdout().lock());
        }
        Cmd::PrintConfig => return emit(&config.to_toml_string()?),
    };

    let text = Session::new(config).handle(&command)?;
    emit(&text)
}

fn emit(text: &str) -> Result<(), PanelError> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
