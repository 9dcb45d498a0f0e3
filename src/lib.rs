//! Platform-agnostic driver for the TI LP8860 LED backlight controller.
//!
//! The chip sits on an I2C bus with a dedicated power-enable GPIO. The
//! driver covers power sequencing, per-cluster brightness and current
//! limits, EEPROM load/verify/program, and fault readout, built on the
//! blocking `embedded-hal` traits.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod registers;

pub use driver::Lp8860;
pub use error::Error;
pub use registers::DEFAULT_I2C_ADDRESS;
