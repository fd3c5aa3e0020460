use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eyedropper_rs::image_pipeline::{EyedropperSession, ExportConfig, ExportFormat, SessionConfig};
use eyedropper_rs::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "eyedropper")]
#[command(version, about = "Remove a color cast by picking a pixel that should be white", long_about = None)]
struct Cli {
    /// Image to correct
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Reference pixel column
    #[arg(short, long, allow_negative_numbers = true)]
    x: f64,

    /// Reference pixel row
    #[arg(short, long, allow_negative_numbers = true)]
    y: f64,

    /// Treat X/Y as a click on a surface of this size instead of image pixels
    #[arg(long, value_name = "WxH", value_parser = parse_display)]
    display: Option<(f64, f64)>,

    /// Output file (defaults to corrected_image.<ext>)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Tiff,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Tiff => ExportFormat::Tiff,
        }
    }
}

fn parse_display(s: &str) -> std::result::Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let format = ExportFormat::from(cli.format);
    let config = SessionConfig::builder()
        .export(ExportConfig::builder().format(format).build())
        .build();
    let mut session = EyedropperSession::new(config);

    session
        .load_file(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    match cli.display {
        Some((width, height)) => session.select_display_point(cli.x, cli.y, width, height),
        None => session.select_pixel_point(cli.x, cli.y),
    }
    .context("selecting reference point")?;

    if let Some(gain) = session.gain() {
        info!("Gain: R={:.4} G={:.4} B={:.4}", gain.r, gain.g, gain.b);
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    session
        .export_file(&output)
        .with_context(|| format!("exporting {}", output.display()))?;

    info!(output = %output.display(), "Done");
    Ok(())
}
