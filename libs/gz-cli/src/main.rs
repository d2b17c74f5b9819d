//! gz: righting-lever (GZ) curve of a Wigley hull.
//!
//! Builds the closed hull once, then heels it through the requested sweep at
//! a fixed draft and prints KN and GZ per angle.
//!
//! # Logging
//!
//! Set `RUST_LOG` to override the `-v` flags:
//! - `RUST_LOG=hydrostatics=debug` - per-angle volumes and levers
//! - `RUST_LOG=hull_mesh=debug` - mesh construction stages
//!
//! # Example
//!
//! ```bash
//! gz --kg 2.0 --draft 6.0
//! gz --kg 2.0 --draft 6.0 --nx 121 --nz 121 --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::{
    DEFAULT_BREADTH, DEFAULT_DEPTH, DEFAULT_HEEL_COUNT, DEFAULT_HEEL_MAX_DEG, DEFAULT_LENGTH,
    DEFAULT_NX, DEFAULT_NZ,
};
use config::CurveConfig;
use hull_mesh::{assemble_hull, HullParams};
use hydrostatics::gz_curve;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;

/// gz - GZ stability curve of a parametric Wigley hull.
///
/// The hull frame has z = 0 at the deck, increasing toward the keel; the
/// draft is the depth of the waterplane below the deck.
#[derive(Parser)]
#[command(name = "gz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Vertical centre of gravity KG (m)
    #[arg(long)]
    kg: f64,

    /// Waterplane depth below the deck (m); z >= draft is submerged
    #[arg(long)]
    draft: f64,

    /// Hull length L (m)
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: f64,

    /// Hull breadth B (m)
    #[arg(long, default_value_t = DEFAULT_BREADTH)]
    breadth: f64,

    /// Hull depth T (m)
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: f64,

    /// Samples along the length
    #[arg(long, default_value_t = DEFAULT_NX)]
    nx: usize,

    /// Samples along the depth
    #[arg(long, default_value_t = DEFAULT_NZ)]
    nz: usize,

    /// Largest heel angle of the sweep (degrees)
    #[arg(long, default_value_t = DEFAULT_HEEL_MAX_DEG)]
    heel_max: f64,

    /// Number of heel angles, 0° included
    #[arg(long, default_value_t = DEFAULT_HEEL_COUNT)]
    heel_count: usize,

    /// Output format for results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Text,
    /// JSON document for scripting
    Json,
}

fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "gz=info,hull_mesh=info,hydrostatics=info",
            2 => "gz=debug,hull_mesh=debug,hydrostatics=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = HullParams::new(cli.length, cli.breadth, cli.depth, cli.nx, cli.nz)
        .context("invalid hull parameters")?;
    let conf = CurveConfig::new(cli.kg, cli.draft, cli.heel_max, cli.heel_count)
        .context("invalid run parameters")?;

    let hull = assemble_hull(&params).context("failed to build hull mesh")?;
    info!(
        vertices = hull.vertex_count(),
        triangles = hull.triangle_count(),
        "built hull"
    );

    let curve = gz_curve(&hull, &conf);
    info!(
        angles = curve.len(),
        failures = curve.failures().count(),
        "computed curve"
    );
    if let Some(best) = curve.max_gz() {
        info!(heel_deg = best.heel_deg, gz = best.gz, "maximum righting lever");
    }

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&curve),
        OutputFormat::Json => output::render_json(&params, &curve)?,
    };
    println!("{rendered}");

    Ok(())
}
