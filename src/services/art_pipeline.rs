use std::path::{Path, PathBuf};

use byte_canvas::{
    apply_pixel_antialias, apply_scanlines, compute_side, render_canvas, Canvas, ColorMode,
    EffectStyle,
};

use crate::error::ArtError;
use crate::models::{AppConfig, OutputFormat};
use crate::rendering::{apply_enhancements, encode_image, EnhanceOptions};
use crate::services::file_scanner::output_path;
use crate::services::source_loader::SourceData;

/// Everything that decides how one file is turned into an image
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub effect: EffectStyle,
    pub color_mode: ColorMode,
    /// Enhancements applied before upscaling
    pub enhance: EnhanceOptions,
    pub antialias: bool,
    pub scanlines: bool,
    /// Side of the saved image in pixels
    pub output_size: u32,
    pub format: OutputFormat,
    /// Recompress PNG output with oxipng
    pub optimize: bool,
}

impl RenderOptions {
    /// Plain render at the configured size: no enhancements or retro filters.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            effect: EffectStyle::default(),
            color_mode: ColorMode::default(),
            enhance: EnhanceOptions::new(),
            antialias: false,
            scanlines: false,
            output_size: config.output_size,
            format: OutputFormat::default(),
            optimize: config.optimize_png,
        }
    }
}

/// Result of rendering one file
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Side of the raw canvas before upscaling
    pub side: usize,
    /// Encoded size in bytes
    pub bytes: usize,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: Vec<RenderedFile>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ArtError)>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Pipeline that orchestrates load → render → enhance → upscale → filter → save
pub struct ArtPipeline {
    options: RenderOptions,
    output_dir: PathBuf,
}

impl ArtPipeline {
    pub fn new(options: RenderOptions, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            options,
            output_dir: output_dir.into(),
        }
    }

    /// Turn raw bytes into the final, upscaled canvas.
    ///
    /// Returns the canvas together with the side of the raw render.
    pub fn render_bytes(&self, data: &[u8]) -> (Canvas, usize) {
        let options = &self.options;
        let side = compute_side(data.len());
        let canvas = render_canvas(data, side, options.effect, options.color_mode);
        tracing::debug!(
            side,
            effect = %options.effect,
            color_mode = %options.color_mode,
            "Rendered canvas"
        );

        let canvas = apply_enhancements(&canvas, &options.enhance);

        let size = options.output_size.max(1) as usize;
        let mut canvas = canvas.resize_nearest(size, size);

        if options.antialias {
            tracing::debug!("Applying pixel antialias");
            canvas = apply_pixel_antialias(&canvas);
        }
        if options.scanlines {
            tracing::debug!(original_side = side, "Applying scanlines");
            canvas = apply_scanlines(&canvas, side);
        }
        (canvas, side)
    }

    /// Render one input file and write the image next to the others.
    ///
    /// Empty inputs fail with [`ArtError::EmptyInput`].
    pub fn process_file(&self, input: &Path) -> Result<RenderedFile, ArtError> {
        let data = SourceData::open(input)?;
        if data.is_empty() {
            return Err(ArtError::EmptyInput(input.to_path_buf()));
        }
        tracing::info!(input = %input.display(), bytes = data.len(), "Processing");

        let (canvas, side) = self.render_bytes(&data);
        let encoded = encode_image(&canvas, self.options.format, self.options.optimize)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let output = output_path(&self.output_dir, input, self.options.format);
        std::fs::write(&output, &encoded)?;

        tracing::info!(
            output = %output.display(),
            bytes = encoded.len(),
            "Saved"
        );
        Ok(RenderedFile {
            input: input.to_path_buf(),
            output,
            side,
            bytes: encoded.len(),
        })
    }

    /// Render every input, continuing past failures.
    pub fn run(&self, inputs: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();
        for input in inputs {
            match self.process_file(input) {
                Ok(rendered) => report.rendered.push(rendered),
                Err(ArtError::EmptyInput(path)) => {
                    tracing::warn!(input = %path.display(), "Skipping empty file");
                    report.skipped.push(path);
                }
                Err(e) => {
                    tracing::error!(input = %input.display(), error = %e, "Failed to render");
                    report.failed.push((input.clone(), e));
                }
            }
        }
        tracing::info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Batch complete"
        );
        report
    }
}
