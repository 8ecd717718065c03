//! Fixed character tables: the 8 custom glyphs loaded into CGRAM and the 16 special characters
//! that can be printed by index.

use crate::{LcdError, LcdResult};

/// A 5x8 custom character. Each byte is one row, top to bottom, using only the lowest 5 bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Glyph(pub [u8; 8]);

impl Glyph {
    /// Degree sign followed by a small "C".
    pub const DEGREE: Glyph = Glyph([
        0b00000, 0b10110, 0b01001, 0b01000, 0b01000, 0b01001, 0b00110, 0b00000,
    ]);
    /// Greek tau, used for the dew point.
    pub const DEW_POINT: Glyph = Glyph([
        0b00000, 0b00000, 0b01111, 0b10100, 0b00100, 0b00100, 0b00100, 0b00000,
    ]);
    /// Greek phi, used for the relative humidity.
    pub const HUMIDITY: Glyph = Glyph([
        0b00000, 0b00000, 0b10010, 0b10101, 0b01110, 0b00100, 0b00100, 0b00000,
    ]);
    pub const ARROW_UP: Glyph = Glyph([
        0b00000, 0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b00100, 0b00000,
    ]);
    pub const ARROW_DOWN: Glyph = Glyph([
        0b00000, 0b00100, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100, 0b00000,
    ]);
    pub const SMILEY: Glyph = Glyph([
        0b00000, 0b00000, 0b01010, 0b00100, 0b00100, 0b10001, 0b01110, 0b00000,
    ]);
    pub const STAIRS: Glyph = Glyph([
        0b00000, 0b00001, 0b00011, 0b00110, 0b01100, 0b11000, 0b00000, 0b00000,
    ]);
    pub const FRAME: Glyph = Glyph([
        0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
    ]);

    pub fn rows(&self) -> &[u8; 8] {
        &self.0
    }

    /// Gets the CGRAM address of the first row of the glyph with the given code.
    ///
    /// # Errors
    /// - [LcdError::GlyphCodeOutOfRange] if `code` is above 7.
    pub fn cgram_address(code: u8) -> LcdResult<u8> {
        if code as usize >= GLYPHS.len() {
            return Err(LcdError::GlyphCodeOutOfRange(code));
        }
        Ok(code << 3)
    }
}

/// Glyphs loaded at initialization, indexed by their character code.
pub const GLYPHS: [Glyph; 8] = [
    Glyph::DEGREE,
    Glyph::DEW_POINT,
    Glyph::HUMIDITY,
    Glyph::ARROW_UP,
    Glyph::ARROW_DOWN,
    Glyph::SMILEY,
    Glyph::STAIRS,
    Glyph::FRAME,
];

/// Character codes printable by index: the 8 custom glyphs, then 8 symbols from the built-in ROM.
pub const SPECIAL_CHARS: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // CGRAM
    0xFF, 0xDB, 0xA5, 0xDE, 0xEB, 0xE0, 0xF4, 0xF3, // CGROM
];

/// Looks up a special character code by its index.
///
/// # Errors
/// - [LcdError::SpecialCharOutOfRange] if `index` is above 15.
pub fn special_char(index: u8) -> LcdResult<u8> {
    SPECIAL_CHARS
        .get(index as usize)
        .copied()
        .ok_or(LcdError::SpecialCharOutOfRange(index))
}
