//! Measurement channels and their register pairs.

use crate::registers::{
    RegisterPair,
    REG_ACCEL_XOUT_H,
    REG_ACCEL_YOUT_H,
    REG_ACCEL_ZOUT_H,
    REG_FIFO_COUNT_H,
    REG_GYRO_XOUT_H,
    REG_GYRO_YOUT_H,
    REG_GYRO_ZOUT_H,
    REG_TEMP_OUT_H,
};

/// A readable 16-bit quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// X-axis acceleration.
    AccelX,
    /// Y-axis acceleration.
    AccelY,
    /// Z-axis acceleration.
    AccelZ,
    /// X-axis angular rate.
    GyroX,
    /// Y-axis angular rate.
    GyroY,
    /// Z-axis angular rate.
    GyroZ,
    /// Die temperature.
    Temperature,
    /// Number of bytes held in the FIFO.
    FifoCount,
}

impl Channel {
    /// Every readable channel.
    pub const ALL: [Channel; 8] = [
        Self::AccelX,
        Self::AccelY,
        Self::AccelZ,
        Self::GyroX,
        Self::GyroY,
        Self::GyroZ,
        Self::Temperature,
        Self::FifoCount,
    ];

    /// Register pair backing this channel.
    pub const fn register_pair(self) -> RegisterPair {
        match self {
            Self::AccelX => RegisterPair::low_first(REG_ACCEL_XOUT_H),
            Self::AccelY => RegisterPair::low_first(REG_ACCEL_YOUT_H),
            Self::AccelZ => RegisterPair::low_first(REG_ACCEL_ZOUT_H),
            Self::GyroX => RegisterPair::low_first(REG_GYRO_XOUT_H),
            Self::GyroY => RegisterPair::low_first(REG_GYRO_YOUT_H),
            Self::GyroZ => RegisterPair::low_first(REG_GYRO_ZOUT_H),
            Self::Temperature => RegisterPair::low_first(REG_TEMP_OUT_H),
            // The count latches on reading the high byte, so it goes first.
            Self::FifoCount => RegisterPair::high_first(REG_FIFO_COUNT_H),
        }
    }

    /// Whether the word is two's complement. Only the FIFO count is unsigned.
    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::FifoCount)
    }
}
