use embedded_hal::i2c::{ErrorType, I2c, Operation};
use lcd1602rgb::{LCD_ADDRESS, RGB_ADDRESS};
use log::info;
use std::convert::Infallible;

/// Stand-in I²C bus that logs every transaction instead of driving hardware.
#[derive(Debug, Default)]
pub struct LoggingBus {
    transactions: usize,
}

impl LoggingBus {
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    fn device_name(address: u8) -> &'static str {
        match address {
            LCD_ADDRESS => "lcd",
            RGB_ADDRESS => "rgb",
            _ => "???",
        }
    }
}

impl ErrorType for LoggingBus {
    type Error = Infallible;
}

impl I2c for LoggingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    info!("{} ({:#04x}) <- {:02x?}", Self::device_name(address), address, bytes);
                }
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        self.transactions += 1;
        Ok(())
    }
}
