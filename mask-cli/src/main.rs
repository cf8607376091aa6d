//! Command-line mask generator: skin PNG in, printable PDF out.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mask_pipeline::MaskConfig;
use tracing_subscriber::EnvFilter;

/// Turn a Minecraft skin into a printable papercraft face-mask PDF.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the skin texture (PNG, conventional 64x64 layout).
    skin: PathBuf,

    /// Where to write the generated PDF.
    #[arg(short, long, default_value = "papercraft-mask.pdf")]
    output: PathBuf,

    /// Print resolution in dots per inch.
    #[arg(long, default_value_t = MaskConfig::default().dpi)]
    dpi: f64,

    /// Physical page width in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().a4_width_mm)]
    a4_width_mm: f64,

    /// Physical page height in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().a4_height_mm)]
    a4_height_mm: f64,

    /// Printed overlap between consecutive pages in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().overlap_mm)]
    overlap_mm: f64,

    /// Side length of one alignment-marker square in pixels.
    #[arg(long, default_value_t = MaskConfig::default().marker_size)]
    marker_size: u32,

    /// Target width of the printed face in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().face_width_mm)]
    face_width_mm: f64,

    /// Target height of the printed face in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().face_height_mm)]
    face_height_mm: f64,

    /// Thickness of the fold-over edge strips in millimeters.
    #[arg(long, default_value_t = MaskConfig::default().edge_thickness_mm)]
    edge_thickness_mm: f64,

    /// Scale multiplier for the overlay layer.
    #[arg(long, default_value_t = MaskConfig::default().outer_scale_factor)]
    outer_scale_factor: f64,
}

impl Cli {
    fn config(&self) -> MaskConfig {
        MaskConfig {
            dpi: self.dpi,
            a4_width_mm: self.a4_width_mm,
            a4_height_mm: self.a4_height_mm,
            overlap_mm: self.overlap_mm,
            marker_size: self.marker_size,
            face_width_mm: self.face_width_mm,
            face_height_mm: self.face_height_mm,
            edge_thickness_mm: self.edge_thickness_mm,
            outer_scale_factor: self.outer_scale_factor,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = cli.config();
    cfg.validate()?;

    let skin = image::open(&cli.skin)
        .with_context(|| format!("failed to open skin image {}", cli.skin.display()))?
        .to_rgba8();

    let pages = mask_pipeline::generate_mask_pages(&skin, &cfg)?;
    let bytes = pdf_export::write_pdf(&pages, cfg.dpi)?;
    std::fs::write(&cli.output, &bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        pages = pages.len(),
        output = %cli.output.display(),
        "Wrote mask PDF"
    );
    Ok(())
}
