//! Rasterising the millimetre grid.
//!
//! All millimetre to pixel conversions truncate. Line positions are computed
//! from the grid start for every offset independently, so rounding error never
//! accumulates by more than a pixel.

use crate::colour::{colours, Colour};
use crate::config::{RenderConfig, MAIN_SPACING_MM, MINOR_SPACING_MM};
use crate::error::Result;
use crate::units::{px_per_mm, Mm};
use image::{Rgb, RgbImage};

/// Pixel layout of a grid on a canvas, derived from a [RenderConfig]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    pub px_per_mm: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub margin: Mm,
    pub margin_px: u32,
    pub start_x: u32,
    pub end_x: u32,
    pub start_y: u32,
    pub end_y: u32,
    /// Grid extent inside the margins
    pub grid_width: Mm,
    pub grid_height: Mm,
}

impl GridGeometry {
    pub fn new(config: &RenderConfig) -> Result<GridGeometry> {
        config.validate()?;

        let (width, height) = config.page.size();
        let (grid_width, grid_height) = config.grid_size();
        let dpi = config.dpi();
        let width_px = width.to_px(dpi);
        let height_px = height.to_px(dpi);
        let margin_px = config.margin.to_px(dpi);

        Ok(GridGeometry {
            px_per_mm: px_per_mm(dpi),
            width_px,
            height_px,
            margin: config.margin,
            margin_px,
            start_x: margin_px,
            end_x: width_px - margin_px,
            start_y: margin_px,
            end_y: height_px - margin_px,
            grid_width,
            grid_height,
        })
    }

    fn offset_px(&self, offset_mm: u32) -> u32 {
        (offset_mm as f64 * self.px_per_mm) as u32
    }

    /// Column of the vertical line `offset_mm` millimetres right of the grid start
    pub fn x_at(&self, offset_mm: u32) -> u32 {
        self.start_x + self.offset_px(offset_mm)
    }

    /// Row of the horizontal line `offset_mm` millimetres below the grid start
    pub fn y_at(&self, offset_mm: u32) -> u32 {
        self.start_y + self.offset_px(offset_mm)
    }
}

/// Grid-relative offsets of every minor line along an axis, both edges included
pub fn minor_offsets(extent: Mm) -> impl Iterator<Item = u32> {
    (0..=extent.0).step_by(MINOR_SPACING_MM as usize)
}

/// Grid-relative offsets of the main lines along an axis.
///
/// The first offset is `margin % 10`, which puts main lines on whole
/// centimetres measured from the page edge rather than from the margin.
pub fn major_offsets(margin: Mm, extent: Mm) -> impl Iterator<Item = u32> {
    (margin.0 % MAIN_SPACING_MM..=extent.0).step_by(MAIN_SPACING_MM as usize)
}

#[derive(Copy, Clone, Debug)]
struct Pen {
    colour: Rgb<u8>,
    thickness: u32,
}

impl Pen {
    fn new(colour: Colour, thickness: u32) -> Pen {
        Pen {
            colour: colour.into(),
            thickness,
        }
    }

    /// Pixel span `[from, to)` a line centred on `centre` covers
    fn band(&self, centre: u32) -> (i64, i64) {
        let from = centre as i64 - (self.thickness / 2) as i64;
        (from, from + self.thickness as i64)
    }
}

/// Fill `[x0, x1) x [y0, y1)`, clipped to the canvas
fn fill_rect(canvas: &mut RgbImage, (x0, x1): (i64, i64), (y0, y1): (i64, i64), colour: Rgb<u8>) {
    let clip = |v: i64, max: u32| v.clamp(0, max as i64) as u32;
    let (x0, x1) = (clip(x0, canvas.width()), clip(x1, canvas.width()));
    let (y0, y1) = (clip(y0, canvas.height()), clip(y1, canvas.height()));
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, colour);
        }
    }
}

fn draw_tier<X, Y>(canvas: &mut RgbImage, geometry: &GridGeometry, xs: X, ys: Y, pen: Pen)
where
    X: Iterator<Item = u32>,
    Y: Iterator<Item = u32>,
{
    // lines run edge to edge of the grid box, end pixel included
    let rows = (geometry.start_y as i64, geometry.end_y as i64 + 1);
    for offset in xs {
        fill_rect(canvas, pen.band(geometry.x_at(offset)), rows, pen.colour);
    }

    let columns = (geometry.start_x as i64, geometry.end_x as i64 + 1);
    for offset in ys {
        fill_rect(canvas, columns, pen.band(geometry.y_at(offset)), pen.colour);
    }
}

/// Draw the grid described by `config` onto a fresh white canvas.
///
/// Minor lines go down first and main lines are drawn over them, so the main
/// colour wins wherever the two coincide.
pub fn rasterize(config: &RenderConfig) -> Result<RgbImage> {
    let geometry = GridGeometry::new(config)?;
    log::debug!(
        "canvas {}x{}px, grid {}x{} starting at {}px",
        geometry.width_px,
        geometry.height_px,
        geometry.grid_width,
        geometry.grid_height,
        geometry.margin_px
    );

    let mut canvas = RgbImage::from_pixel(geometry.width_px, geometry.height_px, colours::WHITE.into());
    let style = &config.style;

    draw_tier(
        &mut canvas,
        &geometry,
        minor_offsets(geometry.grid_width),
        minor_offsets(geometry.grid_height),
        Pen::new(style.minor_colour, style.minor_thickness),
    );
    draw_tier(
        &mut canvas,
        &geometry,
        major_offsets(geometry.margin, geometry.grid_width),
        major_offsets(geometry.margin, geometry.grid_height),
        Pen::new(style.main_colour, style.main_thickness),
    );

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MmPaperError;

    const MAIN: Rgb<u8> = Rgb([0, 0, 255]);
    const MINOR: Rgb<u8> = Rgb([200, 200, 255]);
    const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn a4_portrait_geometry() {
        let geometry = GridGeometry::new(&RenderConfig::default()).unwrap();
        assert_eq!((geometry.width_px, geometry.height_px), (2480, 3507));
        assert_eq!(geometry.margin_px, 118);
        assert_eq!((geometry.start_x, geometry.end_x), (118, 2362));
        assert_eq!((geometry.start_y, geometry.end_y), (118, 3389));
        assert_eq!((geometry.grid_width, geometry.grid_height), (Mm(190), Mm(277)));
        assert_eq!(geometry.x_at(1), 118 + 11);
        assert_eq!(geometry.x_at(10), 118 + 118);
    }

    #[test]
    fn one_minor_line_per_millimetre_plus_one() {
        assert_eq!(minor_offsets(Mm(190)).count(), 191);
        assert_eq!(minor_offsets(Mm(277)).count(), 278);
        assert_eq!(minor_offsets(Mm(0)).count(), 1);
    }

    #[test]
    fn main_lines_sit_on_whole_centimetres_of_the_page() {
        let offsets: Vec<u32> = major_offsets(Mm(10), Mm(40)).collect();
        assert_eq!(offsets, vec![0, 10, 20, 30, 40]);

        let offsets: Vec<u32> = major_offsets(Mm(15), Mm(40)).collect();
        assert_eq!(offsets, vec![5, 15, 25, 35]);
        for offset in major_offsets(Mm(7), Mm(196)) {
            assert_eq!((offset + 7) % 10, 0);
        }
    }

    #[test]
    fn geometry_rejects_degenerate_margin() {
        let mut config = RenderConfig::default();
        config.margin(Mm(200));
        assert!(matches!(
            GridGeometry::new(&config),
            Err(MmPaperError::InvalidMargin { .. })
        ));
    }

    #[test]
    fn draws_both_tiers_inside_the_margin() {
        let config = RenderConfig::default();
        let geometry = GridGeometry::new(&config).unwrap();
        let canvas = rasterize(&config).unwrap();
        assert_eq!(canvas.dimensions(), (2480, 3507));

        // a row strictly between two horizontal lines
        let row = geometry.y_at(5) + 3;
        assert_eq!(*canvas.get_pixel(geometry.x_at(0), row), MAIN);
        assert_eq!(*canvas.get_pixel(geometry.x_at(1), row), MINOR);
        assert_eq!(*canvas.get_pixel(geometry.x_at(1) + 3, row), PAPER);
        assert_eq!(*canvas.get_pixel(geometry.x_at(10), row), MAIN);
        assert_eq!(*canvas.get_pixel(geometry.x_at(190), row), MAIN);

        // main lines win where they cross minor ones
        assert_eq!(*canvas.get_pixel(geometry.x_at(10), geometry.y_at(3)), MAIN);
        assert_eq!(*canvas.get_pixel(geometry.x_at(3), geometry.y_at(3)), MINOR);

        // margins stay blank
        assert_eq!(*canvas.get_pixel(geometry.start_x - 1, row), PAPER);
        assert_eq!(*canvas.get_pixel(geometry.x_at(3), geometry.start_y - 1), PAPER);
        assert_eq!(*canvas.get_pixel(0, 0), PAPER);
    }

    #[test]
    fn thickness_spreads_around_the_line_centre() {
        let mut config = RenderConfig::default();
        config.main_thickness(3);
        let geometry = GridGeometry::new(&config).unwrap();
        let canvas = rasterize(&config).unwrap();

        let row = geometry.y_at(5) + 3;
        let x = geometry.x_at(0);
        assert_eq!(*canvas.get_pixel(x - 1, row), MAIN);
        assert_eq!(*canvas.get_pixel(x, row), MAIN);
        assert_eq!(*canvas.get_pixel(x + 1, row), MAIN);
        assert_eq!(*canvas.get_pixel(x - 2, row), PAPER);
        assert_eq!(*canvas.get_pixel(x + 2, row), PAPER);
    }

    #[test]
    fn offset_margin_shifts_main_lines() {
        let mut config = RenderConfig::default();
        config.margin(Mm(15));
        let geometry = GridGeometry::new(&config).unwrap();
        let canvas = rasterize(&config).unwrap();

        let row = geometry.y_at(2) + 3;
        assert_eq!(*canvas.get_pixel(geometry.x_at(0), row), MINOR);
        assert_eq!(*canvas.get_pixel(geometry.x_at(5), row), MAIN);
        assert_eq!(*canvas.get_pixel(geometry.x_at(15), row), MAIN);
    }

    #[test]
    fn zero_margin_clips_the_far_edge() {
        let mut config = RenderConfig::default();
        config.margin(Mm(0));
        let geometry = GridGeometry::new(&config).unwrap();
        assert_eq!(geometry.x_at(210), 2480);

        let canvas = rasterize(&config).unwrap();
        assert_eq!(canvas.dimensions(), (2480, 3507));
        assert_eq!(*canvas.get_pixel(0, geometry.y_at(5) + 3), MAIN);
        assert_eq!(*canvas.get_pixel(geometry.x_at(5) + 3, 0), MAIN);
    }
}
