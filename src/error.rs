use crate::units::Mm;
use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum MmPaperError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to encode or decode the raster
    Image(#[from] image::ImageError),

    #[error("margin of {margin} leaves no grid area on a {width} x {height} page")]
    /// The margin eats the whole page along at least one axis
    InvalidMargin { margin: Mm, width: Mm, height: Mm },

    #[error("{which} line thickness must be at least 1 pixel")]
    /// A line thickness of zero was requested
    InvalidThickness { which: &'static str },

    #[error("can't tell which file type to write from {0:?}")]
    /// The output extension is neither `.pdf` nor a raster format [image] can encode
    UnsupportedOutput(PathBuf),
}

pub type Result<T> = std::result::Result<T, MmPaperError>;
