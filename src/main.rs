use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bin2art::models::{AppConfig, ConfigSource, OutputFormat, CONFIG_ENV_VAR};
use bin2art::rendering::EnhanceOptions;
use bin2art::services::{discover_inputs, ArtPipeline, RenderOptions};
use byte_canvas::{ColorMode, EffectStyle};

#[derive(Parser)]
#[command(name = "bin2art")]
#[command(about = "Render binary files (ROMs, tapes, disk images, audio) as square pixel art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render files to images
    Render(RenderArgs),
    /// List effect styles and color modes
    List,
}

#[derive(Args)]
struct RenderArgs {
    /// Files to render (default: scan --input-dir)
    files: Vec<PathBuf>,

    /// Directory scanned for inputs when no files are given
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Color mode (see `bin2art list`)
    #[arg(short, long, default_value = "normal")]
    color: ColorMode,

    /// Effect style (see `bin2art list`)
    #[arg(short, long, default_value = "none")]
    effect: EffectStyle,

    /// Gaussian blur
    #[arg(long)]
    blur: bool,

    /// Boost color saturation
    #[arg(long)]
    enhance_color: bool,

    /// Boost contrast
    #[arg(long)]
    enhance_contrast: bool,

    /// Reduce the number of colors
    #[arg(long)]
    posterize: bool,

    /// Enable blur, color, contrast and posterize
    #[arg(long)]
    all_effects: bool,

    /// Smooth stair-stepped edges after upscaling
    #[arg(long)]
    antialias: bool,

    /// Overlay CRT scanlines after upscaling
    #[arg(long)]
    scanlines: bool,

    /// Output side in pixels (default from config: 1920)
    #[arg(short, long)]
    size: Option<u32>,

    /// Directory for output files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Recompress PNG output with oxipng
    #[arg(long)]
    optimize: bool,

    /// Config file (YAML); falls back to $BIN2ART_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => run_render_command(args),
        Some(Commands::List) => {
            run_list_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bin2art=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    init_logging();

    let source = ConfigSource::resolve(args.config.clone());
    let config = AppConfig::load(&source);

    let inputs = if args.files.is_empty() {
        discover_inputs(&args.input_dir, &config).with_context(|| {
            format!("Failed to scan input directory {}", args.input_dir.display())
        })?
    } else {
        args.files.clone()
    };

    if inputs.is_empty() {
        tracing::warn!(
            dir = %args.input_dir.display(),
            extensions = ?config.included_extensions,
            "No input files found"
        );
        return Ok(());
    }

    let options = render_options(&args, &config);
    tracing::info!(
        files = inputs.len(),
        effect = %options.effect,
        color_mode = %options.color_mode,
        size = options.output_size,
        format = %options.format,
        "Starting render"
    );

    let pipeline = ArtPipeline::new(options, &args.output_dir);
    let report = pipeline.run(&inputs);

    for rendered in &report.rendered {
        println!(
            "Rendered {} -> {} ({}x{} canvas, {} bytes)",
            rendered.input.display(),
            rendered.output.display(),
            rendered.side,
            rendered.side,
            rendered.bytes
        );
    }
    println!(
        "\n{} rendered, {} skipped, {} failed",
        report.rendered.len(),
        report.skipped.len(),
        report.failed.len()
    );

    if let Some((input, error)) = report.failed.first() {
        anyhow::bail!(
            "{} file(s) failed to render; first: {}: {error}",
            report.failed.len(),
            input.display()
        );
    }
    Ok(())
}

fn render_options(args: &RenderArgs, config: &AppConfig) -> RenderOptions {
    let all = args.all_effects;
    let mut enhance = EnhanceOptions::new();
    if args.blur || all {
        enhance = enhance.blur(config.blur_radius);
    }
    if args.enhance_color || all {
        enhance = enhance.color(config.color_enhance);
    }
    if args.enhance_contrast || all {
        enhance = enhance.contrast(config.contrast_enhance);
    }
    if args.posterize || all {
        enhance = enhance.posterize(config.poster_colors);
    }

    RenderOptions {
        effect: args.effect,
        color_mode: args.color,
        enhance,
        antialias: args.antialias,
        scanlines: args.scanlines,
        output_size: args.size.unwrap_or(config.output_size),
        format: args.format,
        optimize: args.optimize || config.optimize_png,
    }
}

fn run_list_command() {
    println!("Effect styles:");
    for style in EffectStyle::ALL {
        println!("  {style}");
    }
    println!("\nColor modes:");
    for mode in ColorMode::ALL {
        let note = if mode.is_hardware_palette() {
            " (hardware palette)"
        } else {
            ""
        };
        println!("  {mode}{note}");
    }
}

/// Show version, configuration and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let source = ConfigSource::resolve(None);
    let config_state = match source.path() {
        Some(path) if !path.exists() => format!("{source} (file not found, using defaults)"),
        _ => source.to_string(),
    };
    let config = AppConfig::load(&source);

    // Header
    println!("bin2art v{VERSION}");
    println!("Binary files as square pixel art\n");

    println!("Configuration:");
    println!("  Source      = {config_state}");
    println!("  Extensions  = {}", config.included_extensions.join(", "));
    println!(
        "  Output size = {}x{}",
        config.output_size, config.output_size
    );
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR).as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  bin2art render [FILES...]  Render files (or --input-dir) to images");
    println!("  bin2art list               List effect styles and color modes");
    println!("\nRun 'bin2art <command> --help' for options.");
}
