//! Host-level display operations, built on the raw [HD44780Driver] commands.

use crate::lcd::glyph::{special_char, Glyph, GLYPHS, SPECIAL_CHARS};
use crate::lcd::hd44780::{CursorDirection, HD44780Driver};
use crate::lcd::{CellAddress, COLUMNS};
use crate::LcdResult;
use log::{debug, warn};

/// Extension trait for [HD44780Driver], providing text, numbers and special characters at a
/// given cell of the 16x2 display.
///
/// Cells are validated before anything is sent, so a rejected call leaves the display untouched.
/// Text longer than the rest of the row is not clamped: it runs on into DDRAM the way the
/// controller itself handles it.
pub trait DisplayExt {
    /// Initializes the display: two-line mode, left-to-right entry without shifting, custom glyphs,
    /// then turns the display on.
    fn init_display(&mut self) -> LcdResult<()>;

    /// Loads the 8 [GLYPHS] into CGRAM, one address-set and one 8-row burst per glyph.
    fn load_glyphs(&mut self) -> LcdResult<()>;

    /// Moves the address counter to the given cell without writing anything.
    fn set_position(&mut self, column: u8, row: u8) -> LcdResult<()>;

    /// Writes text at the current address, one data transaction per character.
    ///
    /// Characters above `U+00FF` have no code on the controller and are replaced with `?`.
    fn print(&mut self, text: &str) -> LcdResult<()>;

    /// Writes text starting at the given cell.
    fn write_text(&mut self, text: &str, column: u8, row: u8) -> LcdResult<()>;

    /// Writes an integer in plain decimal, starting at the given cell.
    fn write_number<N: itoa::Integer>(&mut self, value: N, column: u8, row: u8) -> LcdResult<()>;

    /// Writes one of the 16 [SPECIAL_CHARS] at the given cell.
    fn write_special_char(&mut self, index: u8, column: u8, row: u8) -> LcdResult<()>;

    /// Clears the display and writes all 16 special characters from the home position.
    fn show_all_special_chars(&mut self) -> LcdResult<()>;

    /// Blanks a row by writing spaces over it.
    fn clear_line(&mut self, row: u8) -> LcdResult<()>;

    /// Turns the blinking block cursor on or off. The display stays on.
    fn set_cursor_blink(&mut self, on: bool) -> LcdResult<()>;

    /// Turns the whole display output on or off. Cursor and blinking are switched off.
    fn set_display(&mut self, on: bool) -> LcdResult<()>;

    /// Shifts the visible window by one position. DDRAM contents are not moved.
    fn shift(&mut self, direction: CursorDirection) -> LcdResult<()>;
}

fn encode_char(c: char) -> u8 {
    match u8::try_from(c) {
        Ok(byte) => byte,
        Err(_) => {
            warn!("Character {:?} has no display code, writing '?'", c);
            b'?'
        }
    }
}

impl<T: ?Sized + HD44780Driver> DisplayExt for T {
    fn init_display(&mut self) -> LcdResult<()> {
        debug!("Initializing display");
        self.function_set(false, true, false)?;
        self.set_entry_mode(CursorDirection::Right, false)?;
        self.load_glyphs()?;
        self.set_display_control(true, false, false)
    }

    fn load_glyphs(&mut self) -> LcdResult<()> {
        for (code, glyph) in (0u8..).zip(GLYPHS.iter()) {
            debug!("Loading glyph {}", code);
            self.set_cgram_address(Glyph::cgram_address(code)?)?;
            self.send_data_burst(glyph.rows())?;
        }
        Ok(())
    }

    fn set_position(&mut self, column: u8, row: u8) -> LcdResult<()> {
        let cell = CellAddress::new(column, row)?;
        self.set_ddram_address(cell.ddram_address())
    }

    fn print(&mut self, text: &str) -> LcdResult<()> {
        for c in text.chars() {
            self.send_data(encode_char(c))?;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str, column: u8, row: u8) -> LcdResult<()> {
        self.set_position(column, row)?;
        self.print(text)
    }

    fn write_number<N: itoa::Integer>(&mut self, value: N, column: u8, row: u8) -> LcdResult<()> {
        let mut buffer = itoa::Buffer::new();
        self.write_text(buffer.format(value), column, row)
    }

    fn write_special_char(&mut self, index: u8, column: u8, row: u8) -> LcdResult<()> {
        let code = special_char(index)?;
        self.set_position(column, row)?;
        self.send_data(code)
    }

    fn show_all_special_chars(&mut self) -> LcdResult<()> {
        // 16 codes fill row 0 exactly, so the address counter never has to leave it.
        self.clear_display()?;
        for code in SPECIAL_CHARS {
            self.send_data(code)?;
        }
        Ok(())
    }

    fn clear_line(&mut self, row: u8) -> LcdResult<()> {
        let start = CellAddress::row_start(row)?;
        self.set_ddram_address(start.ddram_address())?;
        for _ in 0..COLUMNS {
            self.send_data(b' ')?;
        }
        Ok(())
    }

    fn set_cursor_blink(&mut self, on: bool) -> LcdResult<()> {
        self.set_display_control(true, false, on)
    }

    fn set_display(&mut self, on: bool) -> LcdResult<()> {
        self.set_display_control(on, false, false)
    }

    fn shift(&mut self, direction: CursorDirection) -> LcdResult<()> {
        self.cursor_shift(true, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::hd44780::{CONTROL_COMMAND, CONTROL_DATA, SETTLE_MS};
    use crate::lcd::{COLUMNS, ROWS};
    use crate::testing::{Event, Recorder};
    use crate::{LcdError, LCD_ADDRESS};

    fn command(byte: u8) -> Event {
        Event::write(LCD_ADDRESS, &[CONTROL_COMMAND, byte])
    }

    fn data(byte: u8) -> Event {
        Event::write(LCD_ADDRESS, &[CONTROL_DATA, byte])
    }

    #[test]
    fn positioning_sends_only_the_address() {
        for row in 0..ROWS {
            for column in 0..COLUMNS {
                let recorder = Recorder::new();
                let mut lcd = recorder.module();

                lcd.set_position(column, row).unwrap();
                lcd.write_text("", column, row).unwrap();

                let base = if row == 0 { 0x00 } else { 0x40 };
                let expected = command(0x80 | (base + column));
                assert_eq!(recorder.writes(), vec![expected.clone(), expected]);
            }
        }
    }

    #[test]
    fn writes_text_after_the_address() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.write_text("Hi!", 3, 1).unwrap();

        assert_eq!(
            recorder.writes(),
            vec![command(0xC3), data(b'H'), data(b'i'), data(b'!')]
        );
    }

    #[test]
    fn text_may_run_past_the_last_column() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.write_text("0123456789", 10, 0).unwrap();

        assert_eq!(recorder.writes().len(), 11);
    }

    #[test]
    fn replaces_characters_without_a_code() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.print("°→").unwrap();

        assert_eq!(recorder.writes(), vec![data(0xB0), data(b'?')]);
    }

    #[test]
    fn writes_negative_numbers_in_decimal() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.write_number(-42, 0, 0).unwrap();

        assert_eq!(
            recorder.writes(),
            vec![command(0x80), data(b'-'), data(b'4'), data(b'2')]
        );
    }

    #[test]
    fn writes_special_chars_by_index() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.write_special_char(0, 0, 1).unwrap();
        lcd.write_special_char(9, 15, 0).unwrap();

        assert_eq!(
            recorder.writes(),
            vec![command(0xC0), data(0x00), command(0x8F), data(0xDB)]
        );
    }

    #[test]
    fn shows_all_special_chars_after_clearing() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.show_all_special_chars().unwrap();

        let mut expected = vec![command(0x01)];
        expected.extend(SPECIAL_CHARS.iter().map(|&code| data(code)));
        assert_eq!(recorder.writes(), expected);
    }

    #[test]
    fn clears_a_line_with_spaces() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.clear_line(1).unwrap();

        let writes = recorder.writes();
        assert_eq!(writes[0], command(0xC0));
        assert_eq!(writes.len(), 17);
        assert!(writes[1..].iter().all(|write| *write == data(b' ')));
    }

    #[test]
    fn rejects_bad_arguments_before_sending() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        assert_eq!(lcd.write_text("x", 0, 2), Err(LcdError::RowOutOfRange(2)));
        assert_eq!(lcd.write_text("x", 16, 0), Err(LcdError::ColumnOutOfRange(16)));
        assert_eq!(lcd.write_number(7, 0, 5), Err(LcdError::RowOutOfRange(5)));
        assert_eq!(
            lcd.write_special_char(16, 0, 0),
            Err(LcdError::SpecialCharOutOfRange(16))
        );
        assert_eq!(lcd.write_special_char(3, 0, 2), Err(LcdError::RowOutOfRange(2)));
        assert_eq!(lcd.clear_line(2), Err(LcdError::RowOutOfRange(2)));
        assert_eq!(lcd.set_position(0, 9), Err(LcdError::RowOutOfRange(9)));
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn display_control_flags() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.set_cursor_blink(true).unwrap();
        lcd.set_cursor_blink(false).unwrap();
        lcd.set_display(true).unwrap();
        lcd.set_display(false).unwrap();
        lcd.shift(CursorDirection::Right).unwrap();
        lcd.shift(CursorDirection::Left).unwrap();

        assert_eq!(
            recorder.writes(),
            vec![
                command(0x0D),
                command(0x0C),
                command(0x0C),
                command(0x08),
                command(0x1C),
                command(0x18),
            ]
        );
    }

    #[test]
    fn loads_each_glyph_with_one_burst() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.load_glyphs().unwrap();

        let mut expected = Vec::new();
        for (code, glyph) in (0u8..).zip(GLYPHS.iter()) {
            expected.push(command(0x40 | (code << 3)));
            expected.push(Event::delay_ms(SETTLE_MS));
            let mut burst = vec![CONTROL_DATA];
            burst.extend_from_slice(glyph.rows());
            expected.push(Event::write(LCD_ADDRESS, &burst));
        }
        assert_eq!(recorder.events(), expected);
    }

    #[test]
    fn init_display_turns_the_display_on_last() {
        let recorder = Recorder::new();
        let mut lcd = recorder.module();

        lcd.init_display().unwrap();

        let writes = recorder.writes();
        assert_eq!(writes.len(), 2 + 16 + 1);
        assert_eq!(writes[0], command(0x28));
        assert_eq!(writes[1], command(0x06));
        assert_eq!(writes[2], command(0x40));
        assert_eq!(writes[18], command(0x0C));
    }
}
