//! Error handling primitives for the MPU-6050 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// Unspecified driver error.
    Generic,
    /// `WHO_AM_I` did not identify an MPU-6050. Carries the raw register value.
    DeviceIdMismatch(u8),
}

impl<E> Error<E> {
    /// Collapses the error into the driver's tri-state status code.
    pub const fn status(&self) -> Status {
        match self {
            Self::Interface(_) => Status::BusFailure,
            Self::Generic | Self::DeviceIdMismatch(_) => Status::GenericError,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

/// Outcome code of a driver operation.
///
/// Every [`Result`] returned by the driver maps onto exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    /// The operation completed.
    Ok = 0,
    /// The driver rejected the operation or the device answered unexpectedly.
    GenericError = 1,
    /// A bus transaction failed.
    BusFailure = 2,
}

impl Status {
    /// Returns the status describing `result`.
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }

    /// Returns `true` for [`Status::Ok`].
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}
