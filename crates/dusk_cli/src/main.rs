//! Dusk CLI
//!
//! Drives the theme toggle screen without a window:
//! - `dusk run` executes a JSON scenario and reports pass/fail
//! - `dusk trace` prints one JSON frame sample per line
//! - `dusk variants` lists the built-in presets

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::DuskConfig;
use dusk_app::headless_runner::run_loaded_scenario;
use dusk_app::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use dusk_app::headless_scenario::HeadlessScenario;
use dusk_app::{FrameSample, ThemeToggleAnimator};
use dusk_theme::ToggleVariant;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "dusk")]
#[command(about = "Theme toggle animator - headless runs and frame traces")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless JSON scenario
    Run {
        /// Scenario file
        scenario: PathBuf,

        /// Config file or directory containing dusk.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured variant
        #[arg(long)]
        variant: Option<String>,

        /// Write the JSON report to this relative path instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,

        /// Logical milliseconds per frame
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Embed frame samples in the report
        #[arg(long)]
        samples: bool,
    },

    /// Print rendered frame samples as JSON lines
    Trace {
        /// Number of frames to render
        #[arg(long, default_value = "75")]
        frames: u32,

        /// Logical milliseconds per frame
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Flip the switch before rendering this frame (repeatable)
        #[arg(long = "toggle-at")]
        toggle_at: Vec<u32>,

        /// Config file or directory containing dusk.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured variant
        #[arg(long)]
        variant: Option<String>,
    },

    /// List the built-in variants
    Variants,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            config,
            variant,
            report,
            tick_ms,
            samples,
        } => cmd_run(
            &scenario,
            config.as_deref(),
            variant,
            report.as_deref(),
            tick_ms,
            samples,
        ),
        Commands::Trace {
            frames,
            tick_ms,
            toggle_at,
            config,
            variant,
        } => cmd_trace(frames, tick_ms, &toggle_at, config.as_deref(), variant),
        Commands::Variants => cmd_variants(),
    }
}

fn load_config(path: Option<&Path>, variant: Option<String>) -> Result<DuskConfig> {
    let mut config = match path {
        Some(path) => DuskConfig::load(path)?,
        None => DuskConfig::load_default()?,
    };
    if variant.is_some() {
        config.theme.variant = variant;
    }
    Ok(config)
}

fn cmd_run(
    scenario_path: &Path,
    config_path: Option<&Path>,
    variant: Option<String>,
    report_path: Option<&Path>,
    tick_ms: Option<u64>,
    samples: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path, variant)?;
    let mut animator =
        ThemeToggleAnimator::from_config(&config.theme).context("Invalid theme configuration")?;

    let mut run_cfg = config.headless.run_config();
    if let Some(tick_ms) = tick_ms {
        run_cfg.tick_ms = tick_ms;
    }
    run_cfg.record_samples |= samples;

    let scenario = HeadlessScenario::from_path(scenario_path)?;
    info!(
        "Running {} ({} steps)",
        scenario_path.display(),
        scenario.steps.len()
    );

    let outcome = run_loaded_scenario(&scenario, run_cfg, &mut animator)?;
    match report_path {
        Some(path) => {
            outcome.report().write_to_path(path)?;
            info!("Report written to {}", path.display());
        }
        None => outcome.report().write_to_writer(&mut std::io::stdout().lock())?,
    }

    if outcome.is_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn cmd_trace(
    frames: u32,
    tick_ms: Option<u64>,
    toggle_at: &[u32],
    config_path: Option<&Path>,
    variant: Option<String>,
) -> Result<ExitCode> {
    let config = load_config(config_path, variant)?;
    let mut animator =
        ThemeToggleAnimator::from_config(&config.theme).context("Invalid theme configuration")?;

    let run_cfg = HeadlessRunConfig {
        max_frames: frames,
        tick_ms: tick_ms.unwrap_or(config.headless.tick_ms),
        ..Default::default()
    };

    let mut trace: Vec<FrameSample> = Vec::with_capacity(frames as usize);
    HeadlessRuntime::run(run_cfg, |ctx| {
        if toggle_at.contains(&ctx.frame_index) {
            animator.toggle();
        }
        trace.push(animator.frame().sample());
        animator.tick(run_cfg.tick_ms as f64);
    })?;

    let mut out = std::io::stdout().lock();
    for sample in &trace {
        serde_json::to_writer(&mut out, sample)?;
        writeln!(out)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_variants() -> Result<ExitCode> {
    for variant in ToggleVariant::all() {
        let motion = variant.motion();
        println!(
            "{:<10} {:<10} scale {}/{}  progress {}/{}  opacity {}/{}  {}ms {}",
            variant.id(),
            variant.display_name(),
            motion.scale.rest,
            motion.scale.active,
            motion.progress.rest,
            motion.progress.active,
            motion.opacity.rest,
            motion.opacity.active,
            motion.timing.duration_ms,
            motion.timing.easing,
        );
    }
    Ok(ExitCode::SUCCESS)
}
