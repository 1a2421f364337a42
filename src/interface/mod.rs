//! Bus interface abstraction for the MPU-6050 driver.

pub mod i2c;

/// Upper bound, in milliseconds, a transport should allow each transaction.
///
/// `embedded-hal` leaves timeouts to the HAL, so configure the bus peripheral
/// with this value where the HAL exposes one.
pub const BUS_TIMEOUT_MS: u32 = 150;

/// Abstraction over the low-level bus access required by the driver.
///
/// Every call is one complete bus transaction addressed to a 7-bit device
/// address. Implementations must not retry on failure.
pub trait Mpu6050Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes `bytes` to the device in a single transaction.
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Fills `buf` from the device in a single transaction.
    fn receive(&mut self, address: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes a single register as one `[register, value]` transaction.
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> core::result::Result<(), Self::Error> {
        self.transmit(address, &[register, value])
    }

    /// Selects `register` and then reads it back in a separate transaction.
    fn read_register(&mut self, address: u8, register: u8) -> core::result::Result<u8, Self::Error> {
        self.transmit(address, core::slice::from_ref(&register))?;
        let mut value = [0u8; 1];
        self.receive(address, &mut value)?;
        Ok(value[0])
    }
}
