use crate::backlight::{Color, RgbBacklightDriver};
use crate::lcd::hd44780::{
    CONTROL_COMMAND, CONTROL_DATA, CursorDirection, DisplayExt, HD44780Driver, SETTLE_MS,
};
use crate::{LcdError, LcdResult};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, trace};
use std::fmt::{Debug, Formatter};

/// I²C address of the LCD controller.
pub const LCD_ADDRESS: u8 = 0x3E;
/// I²C address of the RGB backlight driver.
pub const RGB_ADDRESS: u8 = 0x60;

/// The LCD1602 RGB module: both chips on one I²C bus.
///
/// Implements [HD44780Driver] for the display (so [DisplayExt] is available too) and
/// [RgbBacklightDriver] for the backlight. Every transaction is followed by a [SETTLE_MS] pause,
/// except CGRAM bursts.
///
/// Calls are expected to come from a single place, one after another. Nothing inside guards against
/// interleaved use of the bus.
pub struct Lcd1602Rgb<I, D> {
    i2c: I,
    delay: D,
}

impl<I: I2c, D: DelayNs> Lcd1602Rgb<I, D> {
    pub fn new(i2c: I, delay: D) -> Self {
        Lcd1602Rgb { i2c, delay }
    }

    /// Initializes both chips and sets the backlight to [Color::INITIAL].
    ///
    /// The display is configured and loaded with glyphs first, then the backlight is woken up, and
    /// only then the display is turned on. Has to be called before anything else.
    pub fn init(&mut self) -> LcdResult<()> {
        debug!("Initializing LCD1602 RGB module");
        self.function_set(false, true, false)?;
        self.set_entry_mode(CursorDirection::Right, false)?;
        self.load_glyphs()?;
        self.init_backlight()?;
        self.set_display(true)?;
        self.set_color(Color::INITIAL)
    }

    /// Gives the bus and the delay back.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> LcdResult<()> {
        trace!("I2C {:#04x} <- {:02x?}", address, bytes);
        self.i2c.write(address, bytes).map_err(LcdError::bus)
    }
}

impl<I, D> Debug for Lcd1602Rgb<I, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lcd1602Rgb(lcd: {:#04x}, rgb: {:#04x})", LCD_ADDRESS, RGB_ADDRESS)
    }
}

impl<I: I2c, D: DelayNs> HD44780Driver for Lcd1602Rgb<I, D> {
    fn send_command(&mut self, command: u8) -> LcdResult<()> {
        self.transmit(LCD_ADDRESS, &[CONTROL_COMMAND, command])?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    fn send_data(&mut self, data: u8) -> LcdResult<()> {
        self.transmit(LCD_ADDRESS, &[CONTROL_DATA, data])?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    fn send_data_burst(&mut self, data: &[u8]) -> LcdResult<()> {
        let mut buffer = Vec::with_capacity(data.len() + 1);
        buffer.push(CONTROL_DATA);
        buffer.extend_from_slice(data);
        self.transmit(LCD_ADDRESS, &buffer)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

impl<I: I2c, D: DelayNs> RgbBacklightDriver for Lcd1602Rgb<I, D> {
    fn write_register(&mut self, register: u8, value: u8) -> LcdResult<()> {
        self.transmit(RGB_ADDRESS, &[register, value])?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    fn write_burst(&mut self, control: u8, values: &[u8]) -> LcdResult<()> {
        let mut buffer = Vec::with_capacity(values.len() + 1);
        buffer.push(control);
        buffer.extend_from_slice(values);
        self.transmit(RGB_ADDRESS, &buffer)?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }
}
