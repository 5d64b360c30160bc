//! Platform agnostic driver for the TI OPT3001 ambient light sensor, built on
//! the blocking [`embedded_hal::i2c::I2c`] trait.
//!
//! Creating the driver checks the device and manufacturer IDs, then puts the
//! sensor in automatic full-scale range, 100 ms conversion time and
//! continuous conversion mode.

#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

use embedded_hal::i2c;

pub mod encode;
pub mod error;
pub mod reg;
pub mod types;

pub use crate::error::Error;
pub use crate::reg::Register;
pub use crate::types::{Config, ConversionTime, DeviceAddress, Lux, Mode, RangeMode, RawLux};

use crate::reg::BitField;

/// Expected contents of the device ID register.
pub const DEVICE_ID: [u8; 2] = [0x30, 0x01];
/// Expected contents of the manufacturer ID register, ASCII "TI".
pub const MANUFACTURER_ID: [u8; 2] = *b"TI";

#[derive(Debug)]
pub struct Opt3001<I2C> {
    i2c: I2C,
    address: DeviceAddress,
    // register pointer followed by the two register bytes
    buf: [u8; 3],
}

impl<I2C: i2c::I2c> Opt3001<I2C> {
    /// Creates a new instance of the sensor with the default configuration,
    /// taking ownership of the i2c peripheral.
    pub fn new(i2c: I2C, address: DeviceAddress) -> Result<Self, Error<I2C::Error>> {
        Self::new_with_config(i2c, address, Config::default())
    }

    /// Creates a new instance of the sensor and applies `config`.
    ///
    /// Nothing is written to the device if the identity check fails.
    pub fn new_with_config(
        i2c: I2C,
        address: DeviceAddress,
        config: Config,
    ) -> Result<Self, Error<I2C::Error>> {
        let mut sensor = Self {
            i2c,
            address,
            buf: [0; 3],
        };

        sensor.check_identity()?;

        sensor.set_range_mode(config.range)?;
        sensor.set_conversion_time(config.conversion_time)?;
        sensor.set_mode(config.mode)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("OPT3001 at {=u8:#x} configured: {}", address as u8, config);

        Ok(sensor)
    }

    /// Releases the i2c peripheral.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    fn check_identity(&mut self) -> Result<(), Error<I2C::Error>> {
        for (register, expected) in [
            (Register::DeviceId, DEVICE_ID),
            (Register::ManufacturerId, MANUFACTURER_ID),
        ] {
            let found = self.read_register(register)?;
            if found != expected {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} mismatch: {=[u8]:#x}", register, &found[..]);

                return Err(Error::DeviceMismatch { register, found });
            }
        }
        Ok(())
    }

    /// Returns the raw contents of the device ID register.
    pub fn device_id(&mut self) -> Result<[u8; 2], Error<I2C::Error>> {
        Ok(self.read_register(Register::DeviceId)?)
    }

    /// Returns the raw contents of the manufacturer ID register.
    pub fn manufacturer_id(&mut self) -> Result<[u8; 2], Error<I2C::Error>> {
        Ok(self.read_register(Register::ManufacturerId)?)
    }

    /// Reads a register using the `write_read` method, so no stop condition
    /// is sent between the pointer write and the data read.
    fn read_register(&mut self, register: Register) -> Result<[u8; 2], I2C::Error> {
        self.buf[0] = register.address();
        let (pointer, data) = self.buf.split_at_mut(1);
        self.i2c.write_read(self.address as u8, pointer, data)?;
        Ok([self.buf[1], self.buf[2]])
    }

    /// Writes the pointer and both register bytes in one transaction.
    fn write_register(&mut self, register: Register, value: [u8; 2]) -> Result<(), I2C::Error> {
        self.buf = [register.address(), value[0], value[1]];
        self.i2c.write(self.address as u8, &self.buf)
    }

    fn read_bits(&mut self, field: BitField) -> Result<u16, I2C::Error> {
        let data = self.read_register(field.register)?;
        Ok(encode::read_field(data, &field))
    }

    /// Read-modify-write of a single field.
    fn write_bits(&mut self, field: BitField, value: u16) -> Result<(), I2C::Error> {
        let data = self.read_register(field.register)?;
        let data = encode::write_field(data, &field, value);
        self.write_register(field.register, data)
    }

    /// Reads the result register without decoding it.
    pub fn raw_lux(&mut self) -> Result<RawLux, Error<I2C::Error>> {
        Ok(RawLux(self.read_register(Register::Result)?))
    }

    /// Reads the latest conversion result.
    ///
    /// This does not wait for [`Opt3001::ready`].
    pub fn lux(&mut self) -> Result<Lux, Error<I2C::Error>> {
        Ok(Lux::from(self.raw_lux()?))
    }

    pub fn range_mode(&mut self) -> Result<RangeMode, Error<I2C::Error>> {
        Ok(RangeMode::from_register(self.read_bits(reg::RANGE_NUMBER)?))
    }

    pub fn set_range_mode(&mut self, range: RangeMode) -> Result<(), Error<I2C::Error>> {
        Ok(self.write_bits(reg::RANGE_NUMBER, range.to_register())?)
    }

    pub fn conversion_time(&mut self) -> Result<ConversionTime, Error<I2C::Error>> {
        Ok(ConversionTime::from_register(
            self.read_bits(reg::CONVERSION_TIME)?,
        ))
    }

    pub fn set_conversion_time(&mut self, time: ConversionTime) -> Result<(), Error<I2C::Error>> {
        Ok(self.write_bits(reg::CONVERSION_TIME, time.to_register())?)
    }

    pub fn mode(&mut self) -> Result<Mode, Error<I2C::Error>> {
        Ok(Mode::from_register(self.read_bits(reg::MODE)?))
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<I2C::Error>> {
        Ok(self.write_bits(reg::MODE, mode.to_register())?)
    }

    /// Whether a conversion finished since the configuration register was last read.
    pub fn ready(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_bits(reg::READY)? != 0)
    }

    /// Whether the last conversion exceeded the full-scale range.
    pub fn overflow(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_bits(reg::OVERFLOW)? != 0)
    }

    pub fn flag_high(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_bits(reg::FLAG_HIGH)? != 0)
    }

    pub fn flag_low(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(self.read_bits(reg::FLAG_LOW)? != 0)
    }

    /// Returns the 12 low bits of the high-limit register, unscaled.
    pub fn limit_high(&mut self) -> Result<u16, Error<I2C::Error>> {
        Ok(self.read_bits(reg::HIGH_LIMIT)?)
    }

    /// Sets bits 11-0 of the high-limit register. Only the 12 LSBs of `limit`
    /// are kept, bits 15-12 of the register are left alone.
    pub fn set_limit_high(&mut self, limit: u16) -> Result<(), Error<I2C::Error>> {
        Ok(self.write_bits(reg::HIGH_LIMIT, limit & 0x0FFF)?)
    }

    /// Returns the 12 low bits of the low-limit register, unscaled.
    pub fn limit_low(&mut self) -> Result<u16, Error<I2C::Error>> {
        Ok(self.read_bits(reg::LOW_LIMIT)?)
    }

    /// Same as [`Opt3001::set_limit_high`] for the low-limit register.
    pub fn set_limit_low(&mut self, limit: u16) -> Result<(), Error<I2C::Error>> {
        Ok(self.write_bits(reg::LOW_LIMIT, limit & 0x0FFF)?)
    }
}
