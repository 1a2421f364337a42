#![cfg_attr(not(test), no_std)]

mod error;
mod log;

pub mod channel;
pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::channel::Channel;
pub use crate::config::Config;
pub use crate::device::Mpu6050;
pub use crate::error::{Error, Result, Status};
pub use crate::params::Address;
