//! Typed render configuration.
//!
//! [RenderConfig] carries everything one render needs. Build it with
//! [RenderConfig::default] and the chainable setters, then hand it to
//! [render](crate::render), which calls [RenderConfig::validate] first.

use crate::colour::{colours, Colour};
use crate::error::{MmPaperError, Result};
use crate::pagesize::{resolve_page_size, Orientation, PageSize, PaperFormat};
use crate::units::Mm;
use std::path::PathBuf;

/// Raster resolution in dots per inch
pub const DPI: u32 = 300;
/// Distance between minor lines
pub const MINOR_SPACING_MM: u32 = 1;
/// Distance between main lines
pub const MAIN_SPACING_MM: u32 = 10;
pub const DEFAULT_MARGIN_MM: u32 = 10;
pub const DEFAULT_OUTPUT: &str = "mm_paper.pdf";

/// Which sheet of paper to draw on
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSpec {
    pub format: PaperFormat,
    pub orientation: Orientation,
}

impl PageSpec {
    /// Physical (width, height) of the sheet
    pub fn size(&self) -> PageSize {
        resolve_page_size(self.format, self.orientation)
    }
}

/// Colours and pixel widths of the two line tiers
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridStyle {
    pub main_colour: Colour,
    pub minor_colour: Colour,
    pub main_thickness: u32,
    pub minor_thickness: u32,
}

impl Default for GridStyle {
    fn default() -> Self {
        GridStyle {
            main_colour: colours::BLUE,
            minor_colour: colours::LIGHT_BLUE,
            main_thickness: 1,
            minor_thickness: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub page: PageSpec,
    pub style: GridStyle,
    pub margin: Mm,
    /// Always [DPI]; the canvas size depends on it
    dpi: u32,
    /// The extension selects between raster and PDF output
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            page: PageSpec::default(),
            style: GridStyle::default(),
            margin: Mm(DEFAULT_MARGIN_MM),
            dpi: DPI,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    pub fn new() -> RenderConfig {
        RenderConfig::default()
    }

    /// Raster resolution the grid is drawn at
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn format(&mut self, format: PaperFormat) -> &mut Self {
        self.page.format = format;
        self
    }

    pub fn orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.page.orientation = orientation;
        self
    }

    pub fn main_colour<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.style.main_colour = colour.into();
        self
    }

    pub fn minor_colour<C: Into<Colour>>(&mut self, colour: C) -> &mut Self {
        self.style.minor_colour = colour.into();
        self
    }

    pub fn main_thickness(&mut self, px: u32) -> &mut Self {
        self.style.main_thickness = px;
        self
    }

    pub fn minor_thickness(&mut self, px: u32) -> &mut Self {
        self.style.minor_thickness = px;
        self
    }

    pub fn margin(&mut self, margin: Mm) -> &mut Self {
        self.margin = margin;
        self
    }

    pub fn output<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.output = path.into();
        self
    }

    /// Check that the configuration describes a drawable grid.
    ///
    /// The margin is applied to both sides of each axis, so it must leave at
    /// least one millimetre of grid in both directions.
    pub fn validate(&self) -> Result<()> {
        if self.style.main_thickness == 0 {
            return Err(MmPaperError::InvalidThickness { which: "main" });
        }
        if self.style.minor_thickness == 0 {
            return Err(MmPaperError::InvalidThickness { which: "minor" });
        }

        let (width, height) = self.page.size();
        let both_sides = self.margin.doubled();
        if both_sides >= width || both_sides >= height {
            return Err(MmPaperError::InvalidMargin {
                margin: self.margin,
                width,
                height,
            });
        }

        Ok(())
    }

    /// Size of the area inside the margins. An axis the margin swallows
    /// whole comes out as `Mm(0)`; [validate](Self::validate) rejects those.
    pub fn grid_size(&self) -> PageSize {
        let (width, height) = self.page.size();
        let both_sides = self.margin.doubled();
        (
            Mm(width.0.saturating_sub(both_sides.0)),
            Mm(height.0.saturating_sub(both_sides.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_command_line() {
        let config = RenderConfig::default();
        assert_eq!(config.page.format, PaperFormat::A4);
        assert_eq!(config.page.orientation, Orientation::Portrait);
        assert_eq!(config.style.main_colour, Colour::new_rgb_bytes(0, 0, 255));
        assert_eq!(config.style.minor_colour, Colour::new_rgb_bytes(200, 200, 255));
        assert_eq!(config.margin, Mm(10));
        assert_eq!(config.dpi(), 300);
        assert_eq!(config.output, PathBuf::from("mm_paper.pdf"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_margin_grid_is_the_whole_page() {
        let mut config = RenderConfig::new();
        config.margin(Mm(0));
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), (Mm(210), Mm(297)));
    }

    #[test]
    fn grid_size_subtracts_both_margins() {
        let mut config = RenderConfig::new();
        config.format(PaperFormat::A3).orientation(Orientation::Landscape).margin(Mm(15));
        assert_eq!(config.grid_size(), (Mm(390), Mm(267)));
    }

    #[test]
    fn margin_must_leave_a_grid() {
        let mut config = RenderConfig::new();
        // half of A4's short side
        config.margin(Mm(105));
        assert!(matches!(
            config.validate(),
            Err(MmPaperError::InvalidMargin { margin: Mm(105), .. })
        ));
        config.margin(Mm(104));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn grid_size_never_underflows() {
        let mut config = RenderConfig::new();
        config.margin(Mm(120));
        assert!(config.validate().is_err());
        // 2 * 120 is wider than A4 but shorter than its height
        assert_eq!(config.grid_size(), (Mm(0), Mm(57)));

        config.margin(Mm(u32::MAX));
        assert_eq!(config.grid_size(), (Mm(0), Mm(0)));
    }

    #[test]
    fn thickness_must_be_positive() {
        let mut config = RenderConfig::new();
        config.minor_thickness(0);
        assert!(matches!(
            config.validate(),
            Err(MmPaperError::InvalidThickness { which: "minor" })
        ));
        config.minor_thickness(1).main_thickness(0);
        assert!(matches!(
            config.validate(),
            Err(MmPaperError::InvalidThickness { which: "main" })
        ));
    }
}
