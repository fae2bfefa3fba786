//! Color primitives
//!
//! Colors enter the system as `(r, g, b)` cells in the color table and are
//! rendered as lowercase `#rrggbb` hex.

use std::fmt;
use std::str::FromStr;

use crate::StintError;

/// A 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Encode as lowercase `#rrggbb`, two zero-padded hex digits per channel
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = StintError;

    /// Parse a color cell of the form `(r, g, b)` or `r, g, b`
    ///
    /// Surrounding whitespace is trimmed, one leading `(` and one trailing
    /// `)` are stripped, tokens are trimmed. Channels must be integers in
    /// 0..=255 and there must be exactly three of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner.strip_prefix('(').unwrap_or(inner);
        let inner = inner.strip_suffix(')').unwrap_or(inner);

        let mut channels = [0u8; 3];
        let mut count = 0;
        for token in inner.split(',') {
            if count == channels.len() {
                return Err(StintError::InvalidColorCell(s.to_string()));
            }
            channels[count] = token
                .trim()
                .parse()
                .map_err(|_| StintError::InvalidColorCell(s.to_string()))?;
            count += 1;
        }
        if count != channels.len() {
            return Err(StintError::InvalidColorCell(s.to_string()));
        }

        Ok(Rgb::new(channels[0], channels[1], channels[2]))
    }
}

/// Background/foreground color pair for one displayed timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockColor {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ClockColor {
    #[inline]
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        ClockColor {
            background,
            foreground,
        }
    }
}

impl Default for ClockColor {
    /// White background, black foreground
    fn default() -> Self {
        ClockColor::new(Rgb::WHITE, Rgb::BLACK)
    }
}

/// Colors for all four quadrant clocks, indexed by [`Position`]
///
/// Slots not filled from the color table stay at the default pair.
///
/// [`Position`]: crate::Position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorLayout {
    slots: [ClockColor; 4],
}

impl ColorLayout {
    #[inline]
    pub fn get(&self, position: crate::Position) -> ClockColor {
        self.slots[position.index()]
    }

    #[inline]
    pub fn set(&mut self, position: crate::Position, color: ClockColor) {
        self.slots[position.index()] = color;
    }
}
