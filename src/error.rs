//! Error definitions for the LP8860 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError, PinError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// Power-enable pin could not be driven or read back.
    Pin(PinError),
    /// ID register read failed or returned the invalid-ID sentinel.
    NotDetected,
    /// Payload exceeds the single block-transfer limit.
    BufferTooLarge,
}

impl<I2cError: core::fmt::Debug, PinError: core::fmt::Debug> core::fmt::Display
    for Error<I2cError, PinError>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::Pin(e) => write!(f, "enable pin error: {:?}", e),
            Error::NotDetected => write!(f, "LP8860 not detected on the bus"),
            Error::BufferTooLarge => write!(f, "register write exceeds block-transfer limit"),
        }
    }
}
