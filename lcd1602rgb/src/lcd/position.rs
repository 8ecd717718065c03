use crate::lcd::{COLUMNS, ROWS};
use crate::{LcdError, LcdResult};

/// DDRAM offset of the first cell of each row.
pub const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// A validated character cell on the 16x2 display.
///
/// The controller is never asked where the cursor is, so every positioning call goes through one of
/// these and re-sends the full DDRAM address.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CellAddress {
    column: u8,
    row: u8,
}

impl CellAddress {
    /// Creates a cell address.
    ///
    /// # Errors
    /// - [LcdError::RowOutOfRange] if `row` is not 0 or 1.
    /// - [LcdError::ColumnOutOfRange] if `column` is above 15.
    pub fn new(column: u8, row: u8) -> LcdResult<Self> {
        if row >= ROWS {
            return Err(LcdError::RowOutOfRange(row));
        }
        if column >= COLUMNS {
            return Err(LcdError::ColumnOutOfRange(column));
        }
        Ok(CellAddress { column, row })
    }

    /// First cell of the given row.
    pub fn row_start(row: u8) -> LcdResult<Self> {
        Self::new(0, row)
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Gets the DDRAM address of the cell. Never above `0x4F`.
    pub fn ddram_address(&self) -> u8 {
        ROW_OFFSETS[self.row as usize] + self.column
    }

    /// Maps a DDRAM address back to the visible cell it belongs to.
    ///
    /// Returns `None` for addresses outside the visible 16 columns of either row.
    pub fn from_ddram(address: u8) -> Option<Self> {
        ROW_OFFSETS
            .iter()
            .zip(0u8..)
            .find_map(|(&offset, row)| {
                let column = address.checked_sub(offset)?;
                (column < COLUMNS).then_some(CellAddress { column, row })
            })
    }
}
