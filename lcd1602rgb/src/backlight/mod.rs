//! RGB backlight side of the module, a PCA9633-style 4-channel PWM LED driver with three channels
//! wired to the red, green and blue LEDs.

mod color;

pub use color::*;

use crate::LcdResult;
use log::debug;
use std::fmt::Debug;

/// Mode register 1.
pub const REG_MODE1: u8 = 0x00;
/// Oscillator running, no sleep.
pub const MODE1_NORMAL: u8 = 0x00;
/// PWM brightness register of the blue channel (PWM0).
pub const REG_PWM_BLUE: u8 = 0x02;
/// PWM brightness register of the green channel (PWM1).
pub const REG_PWM_GREEN: u8 = 0x03;
/// PWM brightness register of the red channel (PWM2).
pub const REG_PWM_RED: u8 = 0x04;
/// LED output state register.
pub const REG_LEDOUT: u8 = 0x08;
/// LED 0–2 driven by their own PWM registers.
pub const LEDOUT_INDIVIDUAL: u8 = 0x3F;
/// Control byte starting an auto-incremented write at [REG_PWM_BLUE], rolling over the brightness
/// registers only.
pub const AUTO_INCREMENT_PWM: u8 = 0xA2;

/// The `RgbBacklightDriver` trait encodes backlight register writes on top of two raw primitives.
///
/// Registers are never read back.
pub trait RgbBacklightDriver: Debug {
    /// Wakes the driver into normal mode and puts the three color channels under individual PWM
    /// control. Has to be called before [Self::set_color].
    fn init_backlight(&mut self) -> LcdResult<()> {
        debug!("Initializing backlight");
        self.write_register(REG_MODE1, MODE1_NORMAL)?;
        self.write_register(REG_LEDOUT, LEDOUT_INDIVIDUAL)
    }

    /// Sets all three channels in one transaction.
    ///
    /// The brightness registers are laid out blue, green, red, so that's the order on the wire.
    fn set_color(&mut self, color: Color) -> LcdResult<()> {
        self.write_burst(AUTO_INCREMENT_PWM, &[color.blue, color.green, color.red])
    }

    /// Sets the brightness of a single channel.
    fn set_channel(&mut self, channel: Channel, value: u8) -> LcdResult<()> {
        self.write_register(channel.register(), value)
    }

    // Low-level primitives, implemented by the transport.

    /// Writes one register as `[register, value]`, then lets the driver settle.
    fn write_register(&mut self, register: u8, value: u8) -> LcdResult<()>;

    /// Writes `[control, values...]` in one transaction, then lets the driver settle.
    fn write_burst(&mut self, control: u8, values: &[u8]) -> LcdResult<()>;
}

/// One color channel of the backlight.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Gets the PWM register driving the channel.
    pub fn register(&self) -> u8 {
        match self {
            Channel::Red => REG_PWM_RED,
            Channel::Green => REG_PWM_GREEN,
            Channel::Blue => REG_PWM_BLUE,
        }
    }
}
