use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swatch_color::{rgb_to_hsl, rgb_to_lab, DistanceMetric, Rgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchmatch::api;
use swatchmatch::assets::{AssetCategory, AssetLoader};
use swatchmatch::models::{AppConfig, PaletteEntry};
use swatchmatch::server;
use swatchmatch::services::{normalize_entries, PaletteStore};

#[derive(Parser)]
#[command(name = "swatchmatch")]
#[command(about = "Swatchmatch - find the nearest spot colors for any hex/RGB color")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the nearest palette colors for a hex color
    Match {
        /// Hex color, 3 or 6 digits, '#' optional (e.g. "#5F3EFF")
        color: String,

        /// Number of matches to print (default from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Distance metric: "cie76" or "ciede2000" (default from config)
        #[arg(short, long)]
        metric: Option<DistanceMetric>,
    },
    /// Print a hex color as RGB, CIELAB and HSL
    Convert {
        /// Hex color, 3 or 6 digits, '#' optional
        color: String,
    },
    /// Fill in missing hex/rgb/lab fields of a palette file
    Normalize {
        /// Palette JSON to read
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the normalized palette
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Extract the embedded palette and config to the filesystem
    Init {
        /// Extract only the palette
        #[arg(long)]
        palette: bool,

        /// Extract only config.yaml
        #[arg(long)]
        config: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchmatch API",
        description = "Nearest spot-color lookup for hex/RGB colors",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_match,
        api::handle_convert,
        api::handle_list_colors,
        api::handle_get_color,
        api::handle_palette_summary,
    ),
    components(schemas(
        api::ColorInfo,
        api::MatchEntry,
        api::MatchResponse,
        api::SwatchResponse,
        api::ColorListResponse,
        api::PaletteSummary,
    )),
    tags(
        (name = "Matching", description = "Nearest palette colors"),
        (name = "Colors", description = "Color conversion"),
        (name = "Palette", description = "Palette browsing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Match {
            color,
            limit,
            metric,
        }) => run_match_command(&color, limit, metric),
        Some(Commands::Convert { color }) => run_convert_command(&color),
        Some(Commands::Normalize { input, output }) => run_normalize_command(&input, &output),
        Some(Commands::Init {
            palette,
            config,
            force,
            list,
        }) => run_init_command(palette, config, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchmatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Asset loader with optional external paths from env vars
fn asset_loader_from_env() -> AssetLoader {
    let palette_file = std::env::var("PALETTE_FILE").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AssetLoader::new(palette_file, config_file)
}

fn parse_color(color: &str) -> anyhow::Result<Rgb> {
    color
        .parse::<Rgb>()
        .with_context(|| format!("invalid color {color:?}"))
}

fn format_lab(rgb: Rgb) -> String {
    let lab = rgb_to_lab(rgb);
    format!("Lab({:.2}, {:.2}, {:.2})", lab.l, lab.a, lab.b)
}

/// Rank the palette against one color and print a table
fn run_match_command(
    color: &str,
    limit: Option<usize>,
    metric: Option<DistanceMetric>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let rgb = parse_color(color)?;
    let loader = asset_loader_from_env();
    let config = AppConfig::load_from_assets(&loader);
    let palette = PaletteStore::load(&loader).context("Failed to load palette")?;

    let limit = config.effective_limit(limit);
    let metric = metric.unwrap_or(config.default_metric);
    let matches = palette.rank(rgb_to_lab(rgb), limit, metric);

    println!(
        "Query:  {rgb}  rgb({}, {}, {})  {}",
        rgb.r,
        rgb.g,
        rgb.b,
        format_lab(rgb)
    );
    println!("Metric: {metric}\n");

    if matches.is_empty() {
        println!("Palette is empty, no matches.");
        return Ok(());
    }

    let name_width = matches
        .iter()
        .map(|m| m.reference.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        " {:>3}  {:<name_width$}  {:<7}  {:>7}  Quality",
        "#", "Name", "Hex", "ΔE"
    );
    for (rank, m) in matches.iter().enumerate() {
        println!(
            " {:>3}  {:<name_width$}  {:<7}  {:>7.2}  {}",
            rank + 1,
            m.reference.name(),
            m.reference.hex(),
            m.distance,
            m.quality
        );
    }

    Ok(())
}

/// Print one color in every representation
fn run_convert_command(color: &str) -> anyhow::Result<()> {
    let rgb = parse_color(color)?;

    println!("Hex: {rgb}");
    println!("RGB: rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("Lab: {}", format_lab(rgb));
    println!("HSL: {}", rgb_to_hsl(rgb));

    Ok(())
}

/// Complete a palette file so every entry carries hex, rgb and lab
fn run_normalize_command(input: &Path, output: &Path) -> anyhow::Result<()> {
    init_cli_tracing();

    let json = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let mut entries: Vec<PaletteEntry> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let report = normalize_entries(&mut entries)?;

    // Reject files the server would refuse to load (duplicate codes)
    PaletteStore::from_entries(entries.clone())?;

    let mut out = serde_json::to_string_pretty(&entries)?;
    out.push('\n');
    std::fs::write(output, out)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Normalized {} entries -> {} (filled: {} hex, {} rgb, {} lab)",
        report.total,
        output.display(),
        report.hex_filled,
        report.rgb_filled,
        report.lab_filled
    );

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(palette: bool, config: bool, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palette) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // No selection means everything
    let categories: Vec<AssetCategory> = match (palette, config) {
        (true, false) => vec![AssetCategory::Palette],
        (false, true) => vec![AssetCategory::Config],
        _ => AssetCategory::ALL.to_vec(),
    };

    let loader = asset_loader_from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("Swatchmatch v{VERSION}");
    println!("Nearest spot colors for any hex/RGB color\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:  {config_source}");

    let loader = asset_loader_from_env();
    match PaletteStore::load(&loader) {
        Ok(store) => println!(
            "  Palette: {} ({} entries)",
            loader.palette_source(),
            store.len()
        ),
        Err(e) => println!("  Palette: {} (failed to load: {e})", loader.palette_source()),
    }

    println!("\nCommands:");
    println!("  swatchmatch serve       Start the HTTP server");
    println!("  swatchmatch match       Print the nearest palette colors");
    println!("  swatchmatch convert     Print a color as RGB, Lab and HSL");
    println!("  swatchmatch normalize   Fill in missing palette fields");
    println!("  swatchmatch init        Extract embedded assets");
    println!("\nRun 'swatchmatch --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchmatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(asset_loader_from_env());

    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                palette = report.palette_seeded,
                config = report.config_seeded,
                "Seeded missing files with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchmatch server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
