//! Supported paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! # Example
//!
//! ```
//! use mm_paper::pagesize::{A4, PageOrientation};
//! use mm_paper::Mm;
//!
//! let landscape = A4.landscape();
//! assert_eq!(landscape, (Mm(297), Mm(210)));
//! ```

use crate::units::*;
use clap::ValueEnum;
use std::fmt;

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

pub const A3: PageSize = (Mm(297), Mm(420));
pub const A4: PageSize = (Mm(210), Mm(297));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum PaperFormat {
    #[value(name = "A3", alias = "a3")]
    A3,
    #[default]
    #[value(name = "A4", alias = "a4")]
    A4,
}

impl PaperFormat {
    /// Look a format up by name, ignoring case. Anything unrecognised is
    /// treated as A4.
    pub fn from_name(name: &str) -> PaperFormat {
        match name.trim().to_ascii_uppercase().as_str() {
            "A3" => PaperFormat::A3,
            "A4" => PaperFormat::A4,
            other => {
                log::warn!("unknown paper format {other:?}, falling back to A4");
                PaperFormat::A4
            }
        }
    }

    /// The canonical portrait size of this format
    pub fn size(self) -> PageSize {
        match self {
            PaperFormat::A3 => A3,
            PaperFormat::A4 => A4,
        }
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperFormat::A3 => f.write_str("A3"),
            PaperFormat::A4 => f.write_str("A4"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Resolve a format and orientation into physical page dimensions
pub fn resolve_page_size(format: PaperFormat, orientation: Orientation) -> PageSize {
    let size = format.size();
    match orientation {
        Orientation::Portrait => size.portrait(),
        Orientation::Landscape => size.landscape(),
    }
}
