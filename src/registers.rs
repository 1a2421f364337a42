//! Register map definitions for the MPU-6050.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{AccelRange, ClockSource, FilterCutoff, GyroRange};

/// Register address of `CONFIG` (external sync and low-pass filter).
pub const REG_CONFIG: u8 = 0x1A;
/// Register address of `GYRO_CONFIG`.
pub const REG_GYRO_CONFIG: u8 = 0x1B;
/// Register address of `ACCEL_CONFIG`.
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
/// Register address of `ACCEL_XOUT_H`.
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
/// Register address of `ACCEL_XOUT_L`.
pub const REG_ACCEL_XOUT_L: u8 = 0x3C;
/// Register address of `ACCEL_YOUT_H`.
pub const REG_ACCEL_YOUT_H: u8 = 0x3D;
/// Register address of `ACCEL_YOUT_L`.
pub const REG_ACCEL_YOUT_L: u8 = 0x3E;
/// Register address of `ACCEL_ZOUT_H`.
pub const REG_ACCEL_ZOUT_H: u8 = 0x3F;
/// Register address of `ACCEL_ZOUT_L`.
pub const REG_ACCEL_ZOUT_L: u8 = 0x40;
/// Register address of `TEMP_OUT_H`.
pub const REG_TEMP_OUT_H: u8 = 0x41;
/// Register address of `TEMP_OUT_L`.
pub const REG_TEMP_OUT_L: u8 = 0x42;
/// Register address of `GYRO_XOUT_H`.
pub const REG_GYRO_XOUT_H: u8 = 0x43;
/// Register address of `GYRO_XOUT_L`.
pub const REG_GYRO_XOUT_L: u8 = 0x44;
/// Register address of `GYRO_YOUT_H`.
pub const REG_GYRO_YOUT_H: u8 = 0x45;
/// Register address of `GYRO_YOUT_L`.
pub const REG_GYRO_YOUT_L: u8 = 0x46;
/// Register address of `GYRO_ZOUT_H`.
pub const REG_GYRO_ZOUT_H: u8 = 0x47;
/// Register address of `GYRO_ZOUT_L`.
pub const REG_GYRO_ZOUT_L: u8 = 0x48;
/// Register address of `PWR_MGMT_1`.
pub const REG_PWR_MGMT_1: u8 = 0x6B;
/// Register address of `FIFO_COUNT_H`.
pub const REG_FIFO_COUNT_H: u8 = 0x72;
/// Register address of `FIFO_COUNT_L`.
pub const REG_FIFO_COUNT_L: u8 = 0x73;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x75;

/// Identity reported in `WHO_AM_I[6:1]`.
pub const EXPECTED_DEVICE_ID: u8 = 0x34;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the register map.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Power-on value.
    const RESET_VALUE: u8;
}

/// Bitfield representation of the `CONFIG` register (address `0x1A`).
///
/// Only the filter field is driven. Writing this register always zeroes
/// `EXT_SYNC_SET`, so external frame sync is disabled by every filter change.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    // Digital low-pass filter selection (bits 2:0).
    pub filter: FilterCutoff,
    // External frame sync input (bits 5:3).
    pub ext_sync_set: B3,
    #[skip]
    __: B2,
}

impl From<u8> for Configuration {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Configuration> for u8 {
    fn from(value: Configuration) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `GYRO_CONFIG` register (address `0x1B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    #[skip]
    __: B3,
    // Full-scale range (bits 4:3).
    pub range: GyroRange,
    // Per-axis self-test triggers (bits 7:5), never set by this driver.
    #[skip]
    __: B3,
}

impl From<u8> for GyroConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<GyroConfig> for u8 {
    fn from(value: GyroConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACCEL_CONFIG` register (address `0x1C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    #[skip]
    __: B3,
    // Full-scale range (bits 4:3).
    pub range: AccelRange,
    // Per-axis self-test triggers (bits 7:5), never set by this driver.
    #[skip]
    __: B3,
}

impl From<u8> for AccelConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AccelConfig> for u8 {
    fn from(value: AccelConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `PWR_MGMT_1` register (address `0x6B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerManagement {
    // Clock source (bits 2:0).
    pub clock_source: ClockSource,
    // Temperature sensor disable (bit 3).
    pub temp_disable: bool,
    #[skip]
    __: B1,
    // Cycle between sleep and single samples (bit 5).
    pub cycle: bool,
    // Sleep mode, set at power-on (bit 6).
    pub sleep: bool,
    // Reset all registers to defaults (bit 7).
    pub device_reset: bool,
}

impl From<u8> for PowerManagement {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerManagement> for u8 {
    fn from(value: PowerManagement) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `WHO_AM_I` register (address `0x75`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhoAmI {
    #[skip]
    __: B1,
    // Upper six bits of the 7-bit I2C address (bits 6:1).
    pub id: B6,
    #[skip]
    __: B1,
}

impl From<u8> for WhoAmI {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl Register for Configuration {
    const ADDRESS: u8 = REG_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for GyroConfig {
    const ADDRESS: u8 = REG_GYRO_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for AccelConfig {
    const ADDRESS: u8 = REG_ACCEL_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x00;
}

impl Register for PowerManagement {
    const ADDRESS: u8 = REG_PWR_MGMT_1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u8 = 0x40;
}

impl Register for WhoAmI {
    const ADDRESS: u8 = REG_WHO_AM_I;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: u8 = 0x68;
}

/// Order in which the two halves of a [`RegisterPair`] are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferOrder {
    /// Fetch the less significant register first.
    LowFirst,
    /// Fetch the more significant register first.
    HighFirst,
}

/// Two adjacent registers jointly holding one 16-bit word.
///
/// The register at the lower address always carries the more significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterPair {
    /// Register holding bits 15:8.
    pub high: u8,
    /// Register holding bits 7:0.
    pub low: u8,
    /// Fetch order used on the bus.
    pub order: TransferOrder,
}

impl RegisterPair {
    /// Pair whose low byte is fetched first.
    pub const fn low_first(high: u8) -> Self {
        Self {
            high,
            low: high + 1,
            order: TransferOrder::LowFirst,
        }
    }

    /// Pair whose high byte is fetched first.
    pub const fn high_first(high: u8) -> Self {
        Self {
            high,
            low: high + 1,
            order: TransferOrder::HighFirst,
        }
    }

    /// Registers in the order they are selected on the bus.
    pub const fn sequence(&self) -> [u8; 2] {
        match self.order {
            TransferOrder::LowFirst => [self.low, self.high],
            TransferOrder::HighFirst => [self.high, self.low],
        }
    }

    /// Combines the bytes returned for [`sequence`](Self::sequence) into one word.
    ///
    /// Bytes are placed by significance, never by host memory layout.
    pub const fn assemble(&self, first: u8, second: u8) -> u16 {
        let (msb, lsb) = match self.order {
            TransferOrder::LowFirst => (second, first),
            TransferOrder::HighFirst => (first, second),
        };
        ((msb as u16) << 8) | lsb as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_fields_occupy_bits_four_and_three() {
        let ranges = [AccelRange::G2, AccelRange::G4, AccelRange::G8, AccelRange::G16];
        for range in ranges {
            let raw = u8::from(AccelConfig::new().with_range(range));
            assert_eq!(raw, (range as u8) << 3);
            assert_eq!(raw & !0b0001_1000, 0);
            assert_eq!(AccelConfig::from(raw).range(), range);
        }

        let ranges = [
            GyroRange::Dps250,
            GyroRange::Dps500,
            GyroRange::Dps1000,
            GyroRange::Dps2000,
        ];
        for range in ranges {
            let raw = u8::from(GyroConfig::new().with_range(range));
            assert_eq!(raw, (range as u8) << 3);
        }
    }

    #[test]
    fn filter_overwrites_ext_sync() {
        let raw = u8::from(Configuration::new().with_filter(FilterCutoff::Hz5));
        assert_eq!(raw, 0b0000_0110);

        let decoded = Configuration::from(0b0010_1011);
        assert_eq!(decoded.filter(), FilterCutoff::Hz40);
        assert_eq!(decoded.ext_sync_set(), 0b101);
    }

    #[test]
    fn default_power_management_clears_sleep() {
        assert_eq!(u8::from(PowerManagement::new()), 0x00);

        let reset = PowerManagement::from(PowerManagement::RESET_VALUE);
        assert!(reset.sleep());
        assert_eq!(reset.clock_source(), ClockSource::Internal8MHz);
    }

    #[test]
    fn who_am_i_identity_bits() {
        assert_eq!(WhoAmI::from(WhoAmI::RESET_VALUE).id(), EXPECTED_DEVICE_ID);
        assert_eq!(WhoAmI::from(0x69).id(), EXPECTED_DEVICE_ID);
        assert_ne!(WhoAmI::from(0x70).id(), EXPECTED_DEVICE_ID);
    }

    #[test]
    fn register_pairs_assemble_by_significance() {
        let accel_x = RegisterPair::low_first(REG_ACCEL_XOUT_H);
        assert_eq!(accel_x.sequence(), [60, 59]);
        assert_eq!(accel_x.assemble(0x00, 0x01), 256);

        let fifo = RegisterPair::high_first(REG_FIFO_COUNT_H);
        assert_eq!(fifo.sequence(), [114, 115]);
        assert_eq!(fifo.assemble(0x01, 0x00), 256);
        assert_eq!(fifo.assemble(0x12, 0x34), 0x1234);
    }
}
