//! Analyze rasterized document pages, write marked overlay images, and
//! report a label anchor for every text-line band.
//!
//! Pages are supplied as raster images (PNG, JPEG, BMP, WebP) in page
//! order; rasterizing a source document into page images is a separate
//! concern. The label report goes to stdout as JSON, progress to stderr.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use rowmark_analysis::{AnalysisConfig, MarginSpec, SegmenterConfig, analyze};
use rowmark_overlay::{Label, OverlayConfig, band_labels, render_page_overlay};
use serde::Serialize;

/// Locate text-line bands on rasterized document pages.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input page images, in page order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for overlay images (defaults to each input's directory).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Rows excluded from analysis at the top of each page.
    #[arg(long, default_value_t = 60)]
    margin_top: u32,

    /// Columns excluded at the right edge.
    #[arg(long, default_value_t = 60)]
    margin_right: u32,

    /// Rows excluded at the bottom.
    #[arg(long, default_value_t = 60)]
    margin_bottom: u32,

    /// Columns excluded at the left edge.
    #[arg(long, default_value_t = 60)]
    margin_left: u32,

    /// Peak value for the density trace in the overlay gutter.
    #[arg(long, default_value_t = rowmark_analysis::DEFAULT_PEAK)]
    peak: f64,

    /// Minimum band span: a band over rows i..=j is kept only when
    /// j > i + SPAN.
    #[arg(long, value_name = "SPAN", default_value_t = rowmark_analysis::DEFAULT_MIN_BAND_SPAN)]
    min_band_span: usize,

    /// Distance of the label column from each page's right edge.
    #[arg(long, default_value_t = 35)]
    label_offset: u32,

    /// Skip writing overlay images; only print the label report.
    #[arg(long)]
    no_overlay: bool,
}

/// One entry of the JSON report printed to stdout.
#[derive(Serialize)]
struct PageReport {
    /// 1-based page number, following input order.
    page: usize,
    /// Source image path.
    input: PathBuf,
    /// Overlay image path, absent with `--no-overlay`.
    overlay: Option<PathBuf>,
    /// One label per detected band, top to bottom.
    labels: Vec<Label>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let margins = MarginSpec {
        top: args.margin_top,
        right: args.margin_right,
        bottom: args.margin_bottom,
        left: args.margin_left,
    };
    let config = AnalysisConfig {
        margins,
        peak: args.peak,
        segmenter: SegmenterConfig {
            min_band_span: args.min_band_span,
            ..SegmenterConfig::default()
        },
    };
    let overlay_config = OverlayConfig {
        label_offset: args.label_offset,
        ..OverlayConfig::default()
    };

    let mut reports = Vec::with_capacity(args.inputs.len());
    for (index, input) in args.inputs.iter().enumerate() {
        let page_number = index + 1;

        eprintln!("Page {page_number}: reading {}", input.display());
        let bytes = std::fs::read(input)
            .map_err(|e| format!("failed to read {}: {e}", input.display()))?;
        let raster = image::load_from_memory(&bytes)
            .map_err(|e| format!("failed to decode {}: {e}", input.display()))?
            .to_rgba8();

        let analysis = analyze(&raster, &config)
            .map_err(|e| format!("page {page_number} ({}): {e}", input.display()))?;
        eprintln!("Page {page_number}: {} band(s)", analysis.anchors.len());

        let labels = band_labels(
            page_number,
            &analysis.anchors,
            raster.width(),
            args.label_offset,
        );

        let overlay = if args.no_overlay {
            None
        } else {
            let path = overlay_path(input, args.output_dir.as_deref())?;
            let rendered = render_page_overlay(&raster, &analysis, margins, &overlay_config);
            rendered
                .save(&path)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Page {page_number}: overlay written to {}", path.display());
            Some(path)
        };

        reports.push(PageReport {
            page: page_number,
            input: input.clone(),
            overlay,
            labels,
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

/// Build `<stem>-marked.png` inside `output_dir`, or beside the input
/// when no directory was given.
fn overlay_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf, Box<dyn Error>> {
    let stem = input
        .file_stem()
        .ok_or_else(|| format!("input has no file name: {}", input.display()))?;
    let mut name = stem.to_os_string();
    name.push("-marked.png");

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map_or_else(PathBuf::new, Path::to_path_buf),
    };
    Ok(dir.join(name))
}
