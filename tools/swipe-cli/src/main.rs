//! Swipe CLI — replay touch recordings and simulate gestures.
//!
//! Usage:
//!   swipe replay <PATH>      Feed a JSONL touch recording through the tracker
//!   swipe simulate           Generate and track a synthetic swipe
//!   swipe config             Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swipe_common::config::AppConfig;
use swipe_gesture_model::geometry::Point2D;

mod commands;

#[derive(Parser)]
#[command(
    name = "swipe",
    about = "Touch swipe telemetry: distance, speed, and direction per transition",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/swipe/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL touch recording through the tracker
    Replay {
        /// Path to the recording
        path: PathBuf,

        /// Write telemetry records to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print every telemetry record
        #[arg(long)]
        echo: bool,
    },

    /// Generate a synthetic swipe and track it
    Simulate {
        /// Start point as X,Y
        #[arg(long, default_value = "0,0", value_parser = parse_point)]
        from: Point2D,

        /// End point as X,Y
        #[arg(long, default_value = "200,0", value_parser = parse_point)]
        to: Point2D,

        /// Number of move transitions between start and end
        #[arg(
            long,
            default_value = "10",
            value_parser = clap::value_parser!(u32).range(0..=100_000)
        )]
        steps: u32,

        /// Total gesture duration in milliseconds
        #[arg(long, default_value = "200")]
        duration_ms: u64,

        /// Finish with cancel instead of end
        #[arg(long)]
        cancel: bool,

        /// Write telemetry records to this JSONL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print every telemetry record
        #[arg(long)]
        echo: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn parse_point(raw: &str) -> Result<Point2D, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{raw}'"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid Y '{y}': {e}"))?;
    Ok(Point2D::new(x, y))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicitly named config must parse; the default one may not.
    let (config_path, mut config) = match cli.config.clone() {
        Some(path) => {
            let config = AppConfig::load_strict(&path)
                .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;
            (path, config)
        }
        None => {
            let path = swipe_common::config::config_file_path();
            let config = AppConfig::load_from(&path);
            (path, config)
        }
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    swipe_common::logging::init_logging(&config.logging);
    tracing::debug!(path = %config_path.display(), "Configuration loaded");

    match cli.command {
        Commands::Replay { path, output, echo } => {
            commands::replay::run(&config, path, output, echo).await
        }
        Commands::Simulate {
            from,
            to,
            steps,
            duration_ms,
            cancel,
            output,
            echo,
        } => {
            let plan = commands::simulate::SwipePlan {
                from,
                to,
                steps,
                duration_ms,
                cancel,
            };
            commands::simulate::run(&config, plan, output, echo).await
        }
        Commands::Config { save } => commands::config::run(&config, &config_path, save),
    }
}
