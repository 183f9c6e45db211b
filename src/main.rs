//! batt: renders the battery indicator for the current machine.
//!
//! Run with:  `RUST_LOG=debug batt --output battery.png --plan`

use anyhow::{Context, Result};
use batt_core::{Orientation, Size};
use batt_renderer::Canvas;
use batt_widgets::BatteryIndicator;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Render a battery-level indicator")]
struct Args {
    /// Config file (default: `$XDG_CONFIG_HOME/batt/batt.toml`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Charge level in percent; overrides the system battery.
    #[arg(short, long, allow_negative_numbers = true)]
    level: Option<i32>,

    /// Force the charging flag; overrides the system battery.
    #[arg(long)]
    charging: Option<bool>,

    /// Override the configured orientation.
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// PNG file to write.
    #[arg(short, long, default_value = "battery.png")]
    output: PathBuf,

    /// Print the draw plan as JSON on stdout.
    #[arg(long)]
    plan: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait  => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

fn main() -> Result<()> {
    // Structured logging. RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("batt v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let path = args.config.clone().unwrap_or_else(batt_config::default_path);
    let config = batt_config::load(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    let mut indicator = BatteryIndicator::new(config);
    if let Some(orientation) = args.orientation {
        indicator.set_orientation(orientation.into());
    }

    // CLI flags win over the system battery, which wins over the config.
    match batt_system::read_battery() {
        Some(reading) if args.level.is_none() || args.charging.is_none() => {
            tracing::info!("system battery at {}% ({:?})", reading.percent, reading.status);
            indicator.update_from_battery_status(reading.fraction(), reading.is_charging());
        }
        Some(_) => {}
        None => tracing::info!("no system battery; using configured state"),
    }
    if let Some(level) = args.level {
        indicator.set_charge_level(level);
    }
    if let Some(charging) = args.charging {
        indicator.set_charging(charging);
    }

    let size = indicator.measure(Size::default());
    let mut canvas = Canvas::new(size.width, size.height);
    let plan = indicator.draw(&mut canvas)?;

    canvas
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        "rendered {}x{} {:?} indicator to {}",
        size.width,
        size.height,
        plan.bucket,
        args.output.display()
    );

    if args.plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    Ok(())
}
