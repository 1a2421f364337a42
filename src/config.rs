//! Configuration primitives for the MPU-6050 driver.

use crate::params::{AccelRange, FilterCutoff, GyroRange};

/// Measurement settings applied by [`Mpu6050::configure`](crate::Mpu6050::configure).
///
/// The driver does not cache this; the device registers remain the only record
/// of what is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Accelerometer full-scale range.
    pub accel_range: AccelRange,
    /// Gyroscope full-scale range.
    pub gyro_range: GyroRange,
    /// Digital low-pass filter selection.
    pub filter: FilterCutoff,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with the power-on settings.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the accelerometer range.
    pub fn accel_range(mut self, range: AccelRange) -> Self {
        self.config.accel_range = range;
        self
    }

    /// Overrides the gyroscope range.
    pub fn gyro_range(mut self, range: GyroRange) -> Self {
        self.config.gyro_range = range;
        self
    }

    /// Overrides the low-pass filter.
    pub fn filter(mut self, filter: FilterCutoff) -> Self {
        self.config.filter = filter;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
