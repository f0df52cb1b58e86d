//! Persisting a rendered grid, either as a raster file or as a one page PDF.

use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::{MmPaperError, Result};
use crate::grid::rasterize;
use crate::image::Image;
use crate::info::Info;
use crate::page::Page;
use crate::pagesize::{Orientation, PageSize, PaperFormat};
use crate::units::Mm;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat, RgbImage};
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What kind of file an output path asks for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// A PDF page with the raster stretched over it
    Document,
    /// The raster itself, encoded as the given format
    Raster(ImageFormat),
}

impl OutputKind {
    /// Decide from the file extension. `.pdf` in any case is a document;
    /// anything else must be a format [image] knows how to write.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OutputKind> {
        let path = path.as_ref();
        let unsupported = || MmPaperError::UnsupportedOutput(path.to_path_buf());

        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(unsupported)?;
        if ext.eq_ignore_ascii_case("pdf") {
            return Ok(OutputKind::Document);
        }

        let format = ImageFormat::from_extension(ext).ok_or_else(unsupported)?;
        if !is_writable(format) {
            return Err(unsupported());
        }
        Ok(OutputKind::Raster(format))
    }
}

/// Raster formats whose encoders accept an 8-bit RGB canvas of any size
fn is_writable(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Jpeg
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::Tga
            | ImageFormat::Pnm
            | ImageFormat::Gif
    )
}

/// What got written, for reporting back to the user
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub kind: OutputKind,
    pub format: PaperFormat,
    pub orientation: Orientation,
    pub page_size: PageSize,
    pub margin: Mm,
    pub grid_size: PageSize,
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Millimeter paper created: {}", self.output.display())?;
        writeln!(f, "Format: {}, Orientation: {}", self.format, self.orientation)?;
        writeln!(f, "Dimensions: {} x {}", self.page_size.0, self.page_size.1)?;
        writeln!(f, "Margin: {}", self.margin)?;
        write!(f, "Grid area: {} x {}", self.grid_size.0, self.grid_size.1)
    }
}

/// Render the grid described by `config` and write it to `config.output`.
///
/// The configuration is validated before anything touches the filesystem.
/// PDF output passes the raster through a uniquely named temporary PNG next to
/// the output file; it is removed however the write ends. The PDF itself is
/// staged the same way and only moved over `config.output` once complete.
pub fn render(config: &RenderConfig) -> Result<RenderSummary> {
    config.validate()?;
    let kind = OutputKind::from_path(&config.output)?;
    let canvas = rasterize(config)?;

    let output = config.output.as_path();
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match kind {
        OutputKind::Document => write_document(config, &canvas)?,
        OutputKind::Raster(format) => canvas.save_with_format(output, format)?,
    }
    log::info!("wrote {}", output.display());

    Ok(RenderSummary {
        output: config.output.clone(),
        kind,
        format: config.page.format,
        orientation: config.page.orientation,
        page_size: config.page.size(),
        margin: config.margin,
        grid_size: config.grid_size(),
    })
}

fn temp_dir_for(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn staging_file(output: &Path, suffix: &str) -> Result<NamedTempFile> {
    let file = tempfile::Builder::new()
        .prefix(".mm-paper-")
        .suffix(suffix)
        .tempfile_in(temp_dir_for(output))?;
    Ok(file)
}

fn write_document(config: &RenderConfig, canvas: &RgbImage) -> Result<()> {
    let output = config.output.as_path();

    let mut temp = staging_file(output, ".png")?;
    log::debug!("staging raster in {}", temp.path().display());
    {
        let mut staged = BufWriter::new(temp.as_file_mut());
        PngEncoder::new(&mut staged).write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )?;
        staged.flush()?;
    }

    let image = Image::new_from_disk(temp.path())?;

    let mut info = Info::new();
    info.title(format!(
        "Millimeter paper {} {}",
        config.page.format, config.page.orientation
    ))
    .subject(format!("1mm grid, {} margin", config.margin));

    let mut doc = Document::new();
    doc.set_info(info);
    let image_id = doc.add_image(image);
    let mut page = Page::new(config.page.size());
    page.add_full_page_image(image_id);
    doc.add_page(page);

    let mut staged_pdf = staging_file(output, ".pdf")?;
    {
        let mut out = BufWriter::new(staged_pdf.as_file_mut());
        doc.write(&mut out)?;
        out.flush()?;
    }
    staged_pdf.persist(output).map_err(|e| e.error)?;

    temp.close()?;
    Ok(())
}
