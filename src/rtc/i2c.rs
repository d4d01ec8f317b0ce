use embedded_hal::i2c::{Error as _, I2c};
use log::warn;

use crate::rtc::{Error, Result, transport::Transport};

/// [`Transport`] over an `embedded-hal` I2C bus.
///
/// The driver hands out the left-shifted 8-bit address; this adapter shifts
/// it back to the 7-bit form `embedded-hal` expects. Bus errors are logged
/// with their [`ErrorKind`](embedded_hal::i2c::ErrorKind) and collapse to
/// [`Error`].
#[derive(Debug)]
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<()> {
        self.i2c.read(address >> 1, buf).map_err(|e| {
            warn!("i2c read failed: {:?}", e.kind());
            Error
        })
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.i2c.write(address >> 1, data).map_err(|e| {
            warn!("i2c write failed: {:?}", e.kind());
            Error
        })
    }
}
