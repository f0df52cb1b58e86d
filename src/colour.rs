use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit-per-channel RGB colour, used for grid lines
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Reasons an `R,G,B` colour string can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    #[error("colour must have exactly 3 components in the form 'R,G,B', found {0}")]
    WrongComponentCount(usize),

    #[error("colour component {0:?} is not an integer")]
    NotAnInteger(String),

    #[error("colour component {0} is outside the range 0-255")]
    OutOfRange(i64),
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<Colour> for image::Rgb<u8> {
    fn from(c: Colour) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    /// Parses `"R,G,B"`, e.g. `"0,0,255"`. Whitespace around each component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ColourParseError::WrongComponentCount(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(parts) {
            let value: i64 = part
                .parse()
                .map_err(|_| ColourParseError::NotAnInteger(part.to_string()))?;
            *channel =
                u8::try_from(value).map_err(|_| ColourParseError::OutOfRange(value))?;
        }

        Ok(Colour::from(channels))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const WHITE: Colour = Colour::new_rgb_bytes(255, 255, 255);
    /// default colour of the 10mm lines
    pub const BLUE: Colour = Colour::new_rgb_bytes(0, 0, 255);
    /// default colour of the 1mm lines
    pub const LIGHT_BLUE: Colour = Colour::new_rgb_bytes(200, 200, 255);
}
