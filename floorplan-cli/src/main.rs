//! # Floorplan CLI
//!
//! Thin command-line shell over the composer crates: fetch the palette
//! for a room type, place assets into a plan, and export or print the
//! rendered snapshot.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use floorplan_catalog::CatalogClient;
use floorplan_core::{placement, FloorPlan, Room};
use floorplan_render::{ExportConfig, ExportFormat, PlanExporter};

#[derive(Parser)]
#[command(name = "floorplan", version, about = "2D floor-plan composer")]
struct Cli {
    /// Catalog API base URL.
    #[arg(long, env = "FLOORPLAN_API", default_value = "https://api.example.com/", global = true)]
    api_base: String,

    /// Media base URL asset file paths are resolved against.
    #[arg(long, env = "FLOORPLAN_MEDIA", default_value = "https://media.example.com/", global = true)]
    media_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and list the palette assets for a room type.
    Palette {
        /// Room type identifier.
        #[arg(long)]
        room_id: u64,
    },

    /// Compose a plan: place each palette asset once at a random
    /// position and write the plan document.
    Compose {
        /// Room type identifier.
        #[arg(long)]
        room_id: u64,
        /// Room width in feet.
        #[arg(long, default_value = "15")]
        width: String,
        /// Room height in feet.
        #[arg(long, default_value = "10")]
        height: String,
        /// Seed for deterministic placement.
        #[arg(long)]
        seed: Option<u64>,
        /// Output path for the plan JSON.
        #[arg(long, default_value = "plan.json")]
        out: PathBuf,
    },

    /// Export a plan snapshot to SVG or PNG.
    Export {
        /// Plan JSON written by `compose`.
        #[arg(long)]
        plan: PathBuf,
        /// Output image path.
        #[arg(long)]
        out: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value = "png")]
        format: Format,
        /// Scale factor (2.0 for retina).
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
    },

    /// Render the plan to a PDF and hand it to printing. One-shot:
    /// a failure is logged, not retried.
    Print {
        /// Plan JSON written by `compose`.
        #[arg(long)]
        plan: PathBuf,
        /// Output PDF path.
        #[arg(long, default_value = "plan.pdf")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Svg,
}

/// Initialize structured tracing.
///
/// Set `RUST_LOG` to control log levels; set `RUST_LOG_FORMAT=json`
/// for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,floorplan_cli=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Palette { room_id } => {
            let client = CatalogClient::new(&cli.api_base).context("invalid API base URL")?;
            let assets = client.fetch_or_empty(room_id).await;
            if assets.is_empty() {
                println!("no assets available for room {room_id}");
            }
            for asset in assets {
                println!(
                    "{:>4}  {:<20} {:.1}ft x {:.1}ft  {}",
                    asset.id, asset.title, asset.width, asset.length, asset.file
                );
            }
        }

        Command::Compose {
            room_id,
            width,
            height,
            seed,
            out,
        } => {
            let room = Room::parse(&width, &height).context("invalid room dimensions")?;
            let media_base = Url::parse(&cli.media_base).context("invalid media base URL")?;
            let client = CatalogClient::new(&cli.api_base).context("invalid API base URL")?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let mut plan = FloorPlan::new(room, 800.0, 600.0);
            for asset in client.fetch_or_empty(room_id).await {
                let element = placement::spawn_element(&mut rng, &plan.room, &media_base, &asset)
                    .context("failed to spawn asset")?;
                tracing::info!(title = %element.title, x = element.x, y = element.y, "placed");
                plan.add_element(element);
            }

            std::fs::write(&out, plan.to_json()?).context("failed to write plan")?;
            println!("wrote {} elements to {}", plan.element_count(), out.display());
        }

        Command::Export {
            plan,
            out,
            format,
            scale,
        } => {
            let plan = load_plan(&plan)?;
            let exporter = PlanExporter::new(ExportConfig {
                scale,
                ..Default::default()
            });
            let bytes = match format {
                Format::Png => exporter.export(&plan, ExportFormat::Png)?,
                Format::Svg => exporter.export(&plan, ExportFormat::Svg)?,
            };
            std::fs::write(&out, bytes).context("failed to write snapshot")?;
            println!("wrote {}", out.display());
        }

        Command::Print { plan, out } => {
            let plan = load_plan(&plan)?;
            let exporter = PlanExporter::with_defaults();
            // Fire and forget: a failed print is logged, never retried.
            match exporter
                .render_to_pdf(&plan)
                .map_err(anyhow::Error::from)
                .and_then(|pdf| std::fs::write(&out, pdf).map_err(anyhow::Error::from))
            {
                Ok(()) => println!("print document at {}", out.display()),
                Err(e) => tracing::error!(error = %e, "print failed"),
            }
        }
    }

    Ok(())
}

fn load_plan(path: &PathBuf) -> anyhow::Result<FloorPlan> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan {}", path.display()))?;
    Ok(FloorPlan::from_json(&json)?)
}
