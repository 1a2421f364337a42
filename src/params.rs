//! Strongly typed parameter enumerations for the MPU-6050 driver.
//!
//! These enums map directly to register field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! Conversion from raw counts to physical units is left to the caller; the
//! factors documented in the register map are exposed here as const methods.
//!
//! # Examples
//!
//! ```rust
//! use mpu6050::params::{AccelRange, GyroRange};
//!
//! let raw: i16 = 8192;
//! let g = f32::from(raw) / AccelRange::G4.lsb_per_g();
//! assert_eq!(g, 1.0);
//!
//! let dps = f32::from(-131i16) / GyroRange::Dps250.lsb_per_dps();
//! assert_eq!(dps, -1.0);
//! ```

use modular_bitfield::prelude::Specifier;

/// Raw temperature counts per degree Celsius.
pub const TEMP_LSB_PER_CELSIUS: f32 = 340.0;
/// Temperature in degrees Celsius corresponding to a raw reading of zero.
pub const TEMP_OFFSET_CELSIUS: f32 = 36.53;

/// I2C address of the device, selected by the AD0 strap pin.
///
/// Two sensors can share a bus by strapping one AD0 low and the other high.
/// Each must be initialized and queried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// AD0 pulled low (7-bit address `0x68`).
    Ad0Low,
    /// AD0 pulled high (7-bit address `0x69`).
    Ad0High,
}

impl Address {
    /// 7-bit address as consumed by `embedded-hal` I2C implementations.
    pub const fn bus_address(self) -> u8 {
        match self {
            Self::Ad0Low => 0x68,
            Self::Ad0High => 0x69,
        }
    }

    /// Address shifted into the upper seven bits of the address byte
    /// (`0xD0`/`0xD2`), the form some vendor HALs expect.
    pub const fn shifted(self) -> u8 {
        self.bus_address() << 1
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::Ad0Low
    }
}

/// Accelerometer full-scale range, `ACCEL_CONFIG[4:3]` (`AFS_SEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AccelRange {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl AccelRange {
    /// Sensitivity in raw counts per g.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 16_384.0,
            Self::G4 => 8_192.0,
            Self::G8 => 4_096.0,
            Self::G16 => 2_048.0,
        }
    }

    /// Full-scale magnitude in g.
    pub const fn full_scale_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

impl Default for AccelRange {
    fn default() -> Self {
        Self::G2
    }
}

/// Gyroscope full-scale range, `GYRO_CONFIG[4:3]` (`FS_SEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum GyroRange {
    /// ±250 °/s.
    Dps250 = 0b00,
    /// ±500 °/s.
    Dps500 = 0b01,
    /// ±1000 °/s.
    Dps1000 = 0b10,
    /// ±2000 °/s.
    Dps2000 = 0b11,
}

impl GyroRange {
    /// Sensitivity in raw counts per degree per second.
    pub const fn lsb_per_dps(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }

    /// Full-scale magnitude in degrees per second.
    pub const fn full_scale_dps(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1_000,
            Self::Dps2000 => 2_000,
        }
    }
}

impl Default for GyroRange {
    fn default() -> Self {
        Self::Dps250
    }
}

/// Digital low-pass filter selection, `CONFIG[2:0]` (`DLPF_CFG`).
///
/// Corner frequencies differ slightly between the accelerometer and gyroscope
/// paths, and lower corners add up to ~20 ms of delay. The register map lists
/// the exact figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum FilterCutoff {
    /// ~260 Hz (filter effectively bypassed).
    Hz260 = 0,
    /// ~180 Hz.
    Hz180 = 1,
    /// ~90 Hz.
    Hz90 = 2,
    /// ~40 Hz.
    Hz40 = 3,
    /// ~20 Hz.
    Hz20 = 4,
    /// ~10 Hz.
    Hz10 = 5,
    /// ~5 Hz.
    Hz5 = 6,
}

impl FilterCutoff {
    /// Approximate corner frequency in hertz.
    pub const fn approx_hz(self) -> u16 {
        match self {
            Self::Hz260 => 260,
            Self::Hz180 => 180,
            Self::Hz90 => 90,
            Self::Hz40 => 40,
            Self::Hz20 => 20,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }
}

impl Default for FilterCutoff {
    fn default() -> Self {
        Self::Hz260
    }
}

/// Clock source selection, `PWR_MGMT_1[2:0]` (`CLKSEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum ClockSource {
    /// Internal 8 MHz oscillator.
    Internal8MHz = 0b000,
    /// PLL referenced to the X-axis gyroscope.
    PllGyroX = 0b001,
    /// PLL referenced to the Y-axis gyroscope.
    PllGyroY = 0b010,
    /// PLL referenced to the Z-axis gyroscope.
    PllGyroZ = 0b011,
    /// PLL referenced to an external 32.768 kHz clock.
    PllExternal32K = 0b100,
    /// PLL referenced to an external 19.2 MHz clock.
    PllExternal19M = 0b101,
    /// Clock stopped; timing generator held in reset.
    Stopped = 0b111,
}
