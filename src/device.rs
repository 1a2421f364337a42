//! High-level MPU-6050 device driver implementation.

use crate::channel::Channel;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Mpu6050Interface;
use crate::log::{log_debug, log_trace, log_warn};
use crate::params::{AccelRange, Address, FilterCutoff, GyroRange};
use crate::registers::{
    AccelConfig,
    Configuration,
    GyroConfig,
    PowerManagement,
    Register,
    WhoAmI,
    EXPECTED_DEVICE_ID,
    REG_WHO_AM_I,
};
use embedded_hal::i2c::I2c;

/// Synchronous register-level driver for the MPU-6050.
///
/// The driver owns the bus but keeps no per-device state, so one instance can
/// serve both strap addresses on a shared bus. Each call is an independent
/// transaction sequence and the first failing transaction aborts it.
pub struct Mpu6050<IFACE> {
    interface: IFACE,
}

impl<IFACE> Mpu6050<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub const fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Mpu6050<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub const fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::new(i2c))
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<IFACE, CommE> Mpu6050<IFACE>
where
    IFACE: Mpu6050Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Wakes the sensor from its power-on sleep state.
    ///
    /// Writes `PWR_MGMT_1 = 0x00`: sleep cleared, internal 8 MHz clock.
    /// Safe to repeat on an awake device.
    pub fn init(&mut self, address: Address) -> Result<(), CommE> {
        log_debug!("mpu6050 {=u8:#x}: wake", address.bus_address());
        self.write_config::<PowerManagement>(address, PowerManagement::new().into())
    }

    /// Applies range and filter settings, stopping at the first failed write.
    pub fn configure(&mut self, address: Address, config: &Config) -> Result<(), CommE> {
        self.set_accel_range(address, config.accel_range)?;
        self.set_gyro_range(address, config.gyro_range)?;
        self.set_filter(address, config.filter)?;
        Ok(())
    }

    /// Selects the accelerometer full-scale range.
    pub fn set_accel_range(&mut self, address: Address, range: AccelRange) -> Result<(), CommE> {
        log_debug!("mpu6050 {=u8:#x}: accel range {}", address.bus_address(), range);
        let value = AccelConfig::new().with_range(range);
        self.write_config::<AccelConfig>(address, value.into())
    }

    /// Selects the gyroscope full-scale range.
    pub fn set_gyro_range(&mut self, address: Address, range: GyroRange) -> Result<(), CommE> {
        log_debug!("mpu6050 {=u8:#x}: gyro range {}", address.bus_address(), range);
        let value = GyroConfig::new().with_range(range);
        self.write_config::<GyroConfig>(address, value.into())
    }

    /// Selects the digital low-pass filter.
    ///
    /// This overwrites the whole `CONFIG` register: `EXT_SYNC_SET` is reset to
    /// zero, disabling external frame sync.
    pub fn set_filter(&mut self, address: Address, filter: FilterCutoff) -> Result<(), CommE> {
        log_debug!("mpu6050 {=u8:#x}: filter {}", address.bus_address(), filter);
        let value = Configuration::new().with_filter(filter);
        self.write_config::<Configuration>(address, value.into())
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads the raw `WHO_AM_I` register.
    pub fn who_am_i(&mut self, address: Address) -> Result<u8, CommE> {
        self.fetch(address, REG_WHO_AM_I)
    }

    /// Confirms the device at `address` identifies as an MPU-6050.
    pub fn verify_identity(&mut self, address: Address) -> Result<(), CommE> {
        let raw = self.who_am_i(address)?;
        if WhoAmI::from(raw).id() != EXPECTED_DEVICE_ID {
            log_warn!("mpu6050 {=u8:#x}: unexpected WHO_AM_I {=u8:#x}", address.bus_address(), raw);
            return Err(Error::DeviceIdMismatch(raw));
        }

        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Raw X-axis acceleration.
    pub fn accel_x(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::AccelX)
    }

    /// Raw Y-axis acceleration.
    pub fn accel_y(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::AccelY)
    }

    /// Raw Z-axis acceleration.
    pub fn accel_z(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::AccelZ)
    }

    /// Raw X-axis angular rate.
    pub fn gyro_x(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::GyroX)
    }

    /// Raw Y-axis angular rate.
    pub fn gyro_y(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::GyroY)
    }

    /// Raw Z-axis angular rate.
    pub fn gyro_z(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::GyroZ)
    }

    /// Raw die temperature.
    ///
    /// Degrees Celsius are `raw / 340 + 36.53`, see
    /// [`TEMP_LSB_PER_CELSIUS`](crate::params::TEMP_LSB_PER_CELSIUS).
    pub fn temperature(&mut self, address: Address) -> Result<i16, CommE> {
        self.read_signed(address, Channel::Temperature)
    }

    /// Number of bytes currently held in the FIFO.
    pub fn fifo_count(&mut self, address: Address) -> Result<u16, CommE> {
        self.read_word(address, Channel::FifoCount)
    }

    /// Raw acceleration triplet, read one axis at a time in X, Y, Z order.
    pub fn accel(&mut self, address: Address) -> Result<[i16; 3], CommE> {
        Ok([
            self.accel_x(address)?,
            self.accel_y(address)?,
            self.accel_z(address)?,
        ])
    }

    /// Raw angular rate triplet, read one axis at a time in X, Y, Z order.
    pub fn gyro(&mut self, address: Address) -> Result<[i16; 3], CommE> {
        Ok([
            self.gyro_x(address)?,
            self.gyro_y(address)?,
            self.gyro_z(address)?,
        ])
    }

    /// Reads the 16-bit word behind `channel` without interpreting its sign.
    ///
    /// Issues select, receive, select, receive as four separate transactions.
    /// Signed channels should be reinterpreted with `as i16`.
    pub fn read_word(&mut self, address: Address, channel: Channel) -> Result<u16, CommE> {
        let pair = channel.register_pair();
        let [first, second] = pair.sequence();
        log_trace!("mpu6050 {=u8:#x}: read {}", address.bus_address(), channel);

        let first = self.fetch(address, first)?;
        let second = self.fetch(address, second)?;
        Ok(pair.assemble(first, second))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn read_signed(&mut self, address: Address, channel: Channel) -> Result<i16, CommE> {
        debug_assert!(channel.is_signed());
        self.read_word(address, channel).map(|word| word as i16)
    }

    fn fetch(&mut self, address: Address, register: u8) -> Result<u8, CommE> {
        self.interface
            .read_register(address.bus_address(), register)
            .map_err(|err| Self::bus_failure(address, err))
    }

    fn write_config<R: Register>(&mut self, address: Address, value: u8) -> Result<(), CommE> {
        self.interface
            .write_register(address.bus_address(), R::ADDRESS, value)
            .map_err(|err| Self::bus_failure(address, err))
    }

    fn bus_failure(address: Address, err: CommE) -> Error<CommE> {
        log_warn!("mpu6050 {=u8:#x}: bus transaction failed", address.bus_address());
        let _ = address;
        Error::Interface(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Status;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x68;
    const ADDR_HIGH: u8 = 0x69;

    fn driver(expectations: &[I2cTransaction]) -> Mpu6050<I2cInterface<I2cMock>> {
        Mpu6050::new_i2c(I2cMock::new(expectations))
    }

    /// Transactions for a successful two-register read.
    fn pair_read(address: u8, channel: Channel, first: u8, second: u8) -> [I2cTransaction; 4] {
        let [reg_a, reg_b] = channel.register_pair().sequence();
        [
            I2cTransaction::write(address, vec![reg_a]),
            I2cTransaction::read(address, vec![first]),
            I2cTransaction::write(address, vec![reg_b]),
            I2cTransaction::read(address, vec![second]),
        ]
    }

    #[test]
    fn init_clears_sleep_bit() {
        let mut imu = driver(&[I2cTransaction::write(ADDR, vec![0x6B, 0x00])]);
        assert_eq!(imu.init(Address::Ad0Low), Ok(()));
        imu.release_i2c().done();
    }

    #[test]
    fn init_reports_bus_failure() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x6B, 0x00]).with_error(ErrorKind::Other),
        ]);
        let result = imu.init(Address::Ad0Low);
        assert_eq!(result, Err(Error::Interface(ErrorKind::Other)));
        assert_eq!(Status::of(&result), Status::BusFailure);
        imu.release_i2c().done();
    }

    #[test]
    fn init_is_repeatable() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x6B, 0x00]),
            I2cTransaction::write(ADDR, vec![0x6B, 0x00]),
        ]);
        imu.init(Address::Ad0Low).unwrap();
        imu.init(Address::Ad0Low).unwrap();
        imu.release_i2c().done();
    }

    #[test]
    fn set_accel_range_4g_writes_shifted_selector() {
        let mut imu = driver(&[I2cTransaction::write(ADDR, vec![28, 8])]);
        let result = imu.set_accel_range(Address::Ad0Low, AccelRange::G4);
        assert_eq!(Status::of(&result), Status::Ok);
        imu.release_i2c().done();
    }

    #[test]
    fn range_setters_pack_every_selector() {
        let accel = [AccelRange::G2, AccelRange::G4, AccelRange::G8, AccelRange::G16];
        let gyro = [
            GyroRange::Dps250,
            GyroRange::Dps500,
            GyroRange::Dps1000,
            GyroRange::Dps2000,
        ];

        let mut expectations = Vec::new();
        for selector in 0u8..4 {
            expectations.push(I2cTransaction::write(ADDR, vec![0x1C, selector << 3]));
            expectations.push(I2cTransaction::write(ADDR, vec![0x1B, selector << 3]));
        }

        let mut imu = driver(&expectations);
        for (a, g) in accel.into_iter().zip(gyro) {
            imu.set_accel_range(Address::Ad0Low, a).unwrap();
            imu.set_gyro_range(Address::Ad0Low, g).unwrap();
        }
        imu.release_i2c().done();
    }

    #[test]
    fn set_filter_overwrites_config_register() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x1A, 0x00]),
            I2cTransaction::write(ADDR, vec![0x1A, 0x06]),
            I2cTransaction::write(ADDR, vec![0x1A, 0x06]),
        ]);
        imu.set_filter(Address::Ad0Low, FilterCutoff::Hz260).unwrap();
        imu.set_filter(Address::Ad0Low, FilterCutoff::Hz5).unwrap();
        imu.set_filter(Address::Ad0Low, FilterCutoff::Hz5).unwrap();
        imu.release_i2c().done();
    }

    #[test]
    fn setters_address_the_selected_device() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR_HIGH, vec![0x1B, 0x18]),
            I2cTransaction::write(ADDR, vec![0x1B, 0x00]),
        ]);
        imu.set_gyro_range(Address::Ad0High, GyroRange::Dps2000).unwrap();
        imu.set_gyro_range(Address::Ad0Low, GyroRange::Dps250).unwrap();
        imu.release_i2c().done();
    }

    #[test]
    fn configure_writes_all_settings_in_order() {
        let config = Config::new()
            .accel_range(AccelRange::G16)
            .gyro_range(GyroRange::Dps500)
            .filter(FilterCutoff::Hz40)
            .build();

        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x1C, 0x18]),
            I2cTransaction::write(ADDR, vec![0x1B, 0x08]),
            I2cTransaction::write(ADDR, vec![0x1A, 0x03]),
        ]);
        imu.configure(Address::Ad0Low, &config).unwrap();
        imu.release_i2c().done();
    }

    #[test]
    fn configure_stops_at_first_failure() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x1C, 0x00]),
            I2cTransaction::write(ADDR, vec![0x1B, 0x00]).with_error(ErrorKind::Other),
        ]);
        let result = imu.configure(Address::Ad0Low, &Config::default());
        assert_eq!(result, Err(Error::Interface(ErrorKind::Other)));
        imu.release_i2c().done();
    }

    #[test]
    fn accel_x_places_lower_address_in_high_byte() {
        // Register 60 (low byte) answers 0x00, register 59 (high byte) answers 0x01.
        let mut imu = driver(&pair_read(ADDR, Channel::AccelX, 0x00, 0x01));
        assert_eq!(imu.accel_x(Address::Ad0Low), Ok(256));
        imu.release_i2c().done();
    }

    #[test]
    fn signed_channels_decode_twos_complement() {
        let cases: [(Channel, u8, u8, i16); 7] = [
            (Channel::AccelX, 0x34, 0x12, 0x1234),
            (Channel::AccelY, 0xFF, 0xFF, -1),
            (Channel::AccelZ, 0x00, 0x40, 16_384),
            (Channel::GyroX, 0x00, 0x80, i16::MIN),
            (Channel::GyroY, 0xFF, 0x7F, i16::MAX),
            (Channel::GyroZ, 0x7D, 0xFF, -131),
            (Channel::Temperature, 0xAC, 0xFE, -340),
        ];

        for (channel, first, second, expected) in cases {
            let mut imu = driver(&pair_read(ADDR, channel, first, second));
            let value = match channel {
                Channel::AccelX => imu.accel_x(Address::Ad0Low),
                Channel::AccelY => imu.accel_y(Address::Ad0Low),
                Channel::AccelZ => imu.accel_z(Address::Ad0Low),
                Channel::GyroX => imu.gyro_x(Address::Ad0Low),
                Channel::GyroY => imu.gyro_y(Address::Ad0Low),
                Channel::GyroZ => imu.gyro_z(Address::Ad0Low),
                Channel::Temperature => imu.temperature(Address::Ad0Low),
                Channel::FifoCount => unreachable!(),
            };
            assert_eq!(value, Ok(expected), "{channel:?}");
            imu.release_i2c().done();
        }
    }

    #[test]
    fn fifo_count_reads_high_byte_first_and_is_unsigned() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![114]),
            I2cTransaction::read(ADDR, vec![0x80]),
            I2cTransaction::write(ADDR, vec![115]),
            I2cTransaction::read(ADDR, vec![0x01]),
        ]);
        assert_eq!(imu.fifo_count(Address::Ad0Low), Ok(0x8001));
        imu.release_i2c().done();
    }

    #[test]
    fn failure_at_each_step_aborts_the_read() {
        for failing_step in 0..4 {
            let mut expectations: Vec<I2cTransaction> = pair_read(ADDR, Channel::GyroY, 0x11, 0x22)
                .into_iter()
                .take(failing_step + 1)
                .collect();
            let last = expectations.pop().unwrap();
            expectations.push(last.with_error(ErrorKind::Other));

            let mut imu = driver(&expectations);
            let result = imu.gyro_y(Address::Ad0Low);
            assert_eq!(result, Err(Error::Interface(ErrorKind::Other)), "step {failing_step}");
            assert_eq!(Status::of(&result), Status::BusFailure);
            imu.release_i2c().done();
        }
    }

    #[test]
    fn failed_read_value_is_discarded() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![60]),
            I2cTransaction::read(ADDR, vec![0x7F]),
            I2cTransaction::write(ADDR, vec![59]).with_error(ErrorKind::Other),
        ]);
        assert_eq!(imu.accel_x(Address::Ad0Low).unwrap_or_default(), 0);
        imu.release_i2c().done();
    }

    #[test]
    fn accel_triplet_reads_axes_in_order() {
        let mut expectations = Vec::new();
        expectations.extend(pair_read(ADDR_HIGH, Channel::AccelX, 0x01, 0x00));
        expectations.extend(pair_read(ADDR_HIGH, Channel::AccelY, 0x02, 0x00));
        expectations.extend(pair_read(ADDR_HIGH, Channel::AccelZ, 0x00, 0x40));

        let mut imu = driver(&expectations);
        assert_eq!(imu.accel(Address::Ad0High), Ok([1, 2, 16_384]));
        imu.release_i2c().done();
    }

    #[test]
    fn gyro_triplet_stops_on_failed_axis() {
        let mut expectations = Vec::new();
        expectations.extend(pair_read(ADDR, Channel::GyroX, 0x01, 0x00));
        expectations.push(I2cTransaction::write(ADDR, vec![70]).with_error(ErrorKind::Other));

        let mut imu = driver(&expectations);
        assert_eq!(imu.gyro(Address::Ad0Low), Err(Error::Interface(ErrorKind::Other)));
        imu.release_i2c().done();
    }

    #[test]
    fn read_word_covers_every_channel() {
        for channel in Channel::ALL {
            let mut imu = driver(&pair_read(ADDR, channel, 0xCD, 0xAB));
            let word = imu.read_word(Address::Ad0Low, channel).unwrap();
            let expected = if channel == Channel::FifoCount { 0xCDAB } else { 0xABCD };
            assert_eq!(word, expected, "{channel:?}");
            imu.release_i2c().done();
        }
    }

    #[test]
    fn verify_identity_accepts_mpu6050() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x75]),
            I2cTransaction::read(ADDR, vec![0x68]),
        ]);
        assert_eq!(imu.verify_identity(Address::Ad0Low), Ok(()));
        imu.release_i2c().done();
    }

    #[test]
    fn verify_identity_rejects_other_parts() {
        let mut imu = driver(&[
            I2cTransaction::write(ADDR, vec![0x75]),
            I2cTransaction::read(ADDR, vec![0x70]),
        ]);
        let result = imu.verify_identity(Address::Ad0Low);
        assert_eq!(result, Err(Error::DeviceIdMismatch(0x70)));
        assert_eq!(Status::of(&result), Status::GenericError);
        imu.release_i2c().done();
    }
}
