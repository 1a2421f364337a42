//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Mpu6050Interface;

/// I2C-based interface implementation for the MPU-6050 driver.
///
/// Transmit and receive map to separate `write` and `read` transactions with a
/// stop condition in between; `write_read` is never used.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mpu6050Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn transmit(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error> {
        if bytes.is_empty() {
            return Ok(());
        }

        self.i2c.write(address, bytes)
    }

    fn receive(&mut self, address: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.read(address, buf)
    }
}
