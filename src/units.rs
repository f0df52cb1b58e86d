//! Physical units used throughout the crate.
//!
//! Paper and grid measurements are whole millimetres ([Mm]); the PDF side of
//! the crate works in points ([Pt]). Conversions between the two go through
//! the inch, `25.4mm = 72pt`.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;
/// PDF points per inch
pub const PT_PER_INCH: f32 = 72.0;

/// A whole number of millimetres
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Add, AddAssign, Sub, Sum,
    From, Into, Display,
)]
#[display("{_0}mm")]
pub struct Mm(pub u32);

/// PDF points (1/72 of an inch)
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Add, AddAssign, Sub, Sum, From, Into, Display)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// How many pixels one millimetre covers at the given resolution
pub fn px_per_mm(dpi: u32) -> f64 {
    dpi as f64 / MM_PER_INCH
}

impl Mm {
    /// Convert to pixels at `dpi`, truncating towards zero
    pub fn to_px(self, dpi: u32) -> u32 {
        (self.0 as f64 * px_per_mm(dpi)) as u32
    }

    /// Twice this length, as used when a margin is applied to both sides of an axis
    pub fn doubled(self) -> Mm {
        Mm(self.0.saturating_mul(2))
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt((mm.0 as f64 * PT_PER_INCH as f64 / MM_PER_INCH) as f32)
    }
}
