//! Millimetre graph paper, rasterised at print resolution and written either
//! as an image or as a single page PDF sized to the physical sheet.
//!
//! ```no_run
//! use mm_paper::{render, Mm, Orientation, PaperFormat, RenderConfig};
//!
//! let mut config = RenderConfig::new();
//! config
//!     .format(PaperFormat::A3)
//!     .orientation(Orientation::Landscape)
//!     .margin(Mm(5))
//!     .output("a3.pdf");
//! let summary = render(&config).expect("can render");
//! println!("{summary}");
//! ```

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod grid;
pub use grid::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

mod output;
pub use output::*;

mod page;
pub use page::*;

/// Supported paper sizes and orientations
pub mod pagesize;
pub use pagesize::{resolve_page_size, Orientation, PaperFormat};

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
