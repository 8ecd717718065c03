//! Driver for the LCD1602 RGB module: a 16x2 character LCD controller and a PCA9633-style RGB
//! backlight driver sharing one I²C bus.
//!
//! The bus and the delay provider come from the host, as any [embedded_hal::i2c::I2c] and
//! [embedded_hal::delay::DelayNs]. See [Lcd1602Rgb] for the combined module, [HD44780Driver] and
//! [DisplayExt] for the display side, and [RgbBacklightDriver] for the backlight.
//!
//! [HD44780Driver]: lcd::hd44780::HD44780Driver
//! [DisplayExt]: lcd::hd44780::DisplayExt
//! [RgbBacklightDriver]: backlight::RgbBacklightDriver

pub mod backlight;
pub mod delay;
pub mod lcd;
mod module;
#[cfg(test)]
mod testing;

pub use module::*;

use embedded_hal::i2c::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum LcdError {
    #[error("column {0} is out of range (0-15)")]
    ColumnOutOfRange(u8),
    #[error("row {0} is out of range (0-1)")]
    RowOutOfRange(u8),
    #[error("special character index {0} is out of range (0-15)")]
    SpecialCharOutOfRange(u8),
    #[error("glyph code {0} is out of range (0-7)")]
    GlyphCodeOutOfRange(u8),
    #[error("address {0:#04x} does not fit the command")]
    AddressOutOfRange(u8),
    #[error("invalid color, expected #rrggbb")]
    InvalidColor,
    #[error("bus error: {0:?}")]
    Bus(ErrorKind),
}

impl LcdError {
    /// Wraps any I²C transport error, keeping only its [ErrorKind].
    pub fn bus<E: embedded_hal::i2c::Error>(err: E) -> Self {
        LcdError::Bus(err.kind())
    }
}

pub type LcdResult<T> = Result<T, LcdError>;
