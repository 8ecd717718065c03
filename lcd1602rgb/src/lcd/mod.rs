//! Character LCD side of the module.

pub mod glyph;
pub mod hd44780;
mod position;

pub use position::*;

/// Visible columns per row.
pub const COLUMNS: u8 = 16;
/// Rows on the display.
pub const ROWS: u8 = 2;
