//! HD44780-compatible command set, as spoken by the LCD controller of the module.
//!
//! Over I²C each transaction starts with a control byte selecting the register: `0x80` for the
//! command register, `0x40` for the data register. See [HD44780Driver] for the command encoders
//! and [DisplayExt] for the higher level operations built on top of them.

mod ext;

pub use ext::*;

use crate::{LcdError, LcdResult};
use std::fmt::Debug;

/// Control byte selecting the command register.
pub const CONTROL_COMMAND: u8 = 0x80;
/// Control byte selecting the data register.
pub const CONTROL_DATA: u8 = 0x40;

/// Time given to the controller after every transaction.
pub const SETTLE_MS: u32 = 1;
/// Extra time needed by the clear display command on top of [SETTLE_MS].
pub const CLEAR_HOLD_MS: u32 = 2;

/// The `HD44780Driver` trait encodes HD44780 commands on top of a few raw primitives.
///
/// The controller is write-only from here: nothing is read back and no display state is mirrored,
/// so every command is encoded in full from its arguments.
pub trait HD44780Driver: Debug {
    /// Clears the display and sets the cursor to the home position.
    ///
    /// Command: `00000001`. Waits [CLEAR_HOLD_MS] on top of the usual settle time.
    fn clear_display(&mut self) -> LcdResult<()> {
        self.send_command(0b00000001)?;
        self.delay_ms(CLEAR_HOLD_MS);
        Ok(())
    }

    /// Sets the direction the address counter moves after each data write, and whether the display
    /// shifts along.
    ///
    /// Command: `000001IS`.
    fn set_entry_mode(&mut self, cursor_direction: CursorDirection, shift: bool) -> LcdResult<()> {
        let mut command = 0b00000100;
        if cursor_direction == CursorDirection::Right {
            command |= 0b00000010;
        }
        if shift {
            command |= 0b00000001;
        }
        self.send_command(command)
    }

    /// Turns the display on or off, and controls the cursor and its blinking.
    ///
    /// Command: `00001DCB`.
    fn set_display_control(
        &mut self,
        display_on: bool,
        cursor_on: bool,
        blink_on: bool,
    ) -> LcdResult<()> {
        let mut command = 0b00001000;
        if display_on {
            command |= 0b00000100;
        }
        if cursor_on {
            command |= 0b00000010;
        }
        if blink_on {
            command |= 0b00000001;
        }
        self.send_command(command)
    }

    /// Moves the cursor or shifts the whole display window by one position.
    ///
    /// Command: `0001DR00`.
    fn cursor_shift(&mut self, display_shift: bool, direction: CursorDirection) -> LcdResult<()> {
        let mut command = 0b00010000;
        if display_shift {
            command |= 0b00001000;
        }
        if direction == CursorDirection::Right {
            command |= 0b00000100;
        }
        self.send_command(command)
    }

    /// Sets the interface data length, the number of lines and the font.
    ///
    /// Command: `001DNF00`.
    fn function_set(&mut self, data_length: bool, two_lines: bool, font: bool) -> LcdResult<()> {
        let mut command = 0b00100000;
        if data_length {
            command |= 0b00010000;
        }
        if two_lines {
            command |= 0b00001000;
        }
        if font {
            command |= 0b00000100;
        }
        self.send_command(command)
    }

    /// Sets the CGRAM address. Following data writes go to custom character memory.
    ///
    /// # Errors
    /// - [LcdError::AddressOutOfRange] if the address doesn't fit in 6 bits.
    fn set_cgram_address(&mut self, address: u8) -> LcdResult<()> {
        if address > 0b00111111 {
            return Err(LcdError::AddressOutOfRange(address));
        }
        self.send_command(0b01000000 | address)
    }

    /// Sets the DDRAM address. Following data writes go to display memory.
    ///
    /// # Errors
    /// - [LcdError::AddressOutOfRange] if the address doesn't fit in 7 bits.
    fn set_ddram_address(&mut self, address: u8) -> LcdResult<()> {
        if address > 0b01111111 {
            return Err(LcdError::AddressOutOfRange(address));
        }
        self.send_command(0b10000000 | address)
    }

    // Low-level primitives, implemented by the transport.

    /// Sends one command byte as `[0x80, command]`, then waits [SETTLE_MS].
    fn send_command(&mut self, command: u8) -> LcdResult<()>;

    /// Sends one data byte as `[0x40, data]`, then waits [SETTLE_MS].
    fn send_data(&mut self, data: u8) -> LcdResult<()>;

    /// Sends several data bytes in a single `[0x40, data...]` transaction, without waiting.
    fn send_data_burst(&mut self, data: &[u8]) -> LcdResult<()>;

    /// Blocks for the given number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CursorDirection {
    /// Towards lower addresses.
    Left,
    /// Towards higher addresses.
    Right,
}
