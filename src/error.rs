//! Error type of the driver.

use core::fmt;

use crate::reg::Register;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// An identity register did not hold the expected value.
    DeviceMismatch {
        /// `Register::DeviceId` or `Register::ManufacturerId`
        register: Register,
        found: [u8; 2],
    },
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::DeviceMismatch { register, found } => write!(
                f,
                "unexpected {:?} register contents: {:#04x} {:#04x}",
                register, found[0], found[1]
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::DeviceMismatch { register, found } => defmt::write!(
                f,
                "unexpected {} register contents: {=[u8]:#x}",
                register,
                &found[..]
            ),
        }
    }
}
