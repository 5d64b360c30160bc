use crate::encode;

/// Illuminance in lux.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lux(pub f32);

/// Undecoded contents of the result register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawLux(pub [u8; 2]);

impl RawLux {
    pub fn exponent(&self) -> u8 {
        encode::exponent_mantissa(self.0).0
    }

    pub fn mantissa(&self) -> u16 {
        encode::exponent_mantissa(self.0).1
    }
}

impl From<RawLux> for Lux {
    fn from(raw: RawLux) -> Self {
        Self(encode::lux_conversion(raw.0))
    }
}

/// Full-scale range of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeMode {
    /// 40.95 lux
    Lux40 = 0b0000,
    Lux81 = 0b0001,
    Lux163 = 0b0010,
    Lux327 = 0b0011,
    Lux655 = 0b0100,
    Lux1310 = 0b0101,
    Lux2620 = 0b0110,
    Lux5241 = 0b0111,
    Lux10483 = 0b1000,
    Lux20966 = 0b1001,
    Lux41932 = 0b1010,
    /// 83865.60 lux
    Lux83865 = 0b1011,
    /// The device picks the range for every conversion
    Automatic = 0b1100,
}

impl RangeMode {
    pub(crate) fn to_register(&self) -> u16 {
        *self as u16
    }

    pub(crate) fn from_register(reg: u16) -> Self {
        match reg {
            0b0000 => RangeMode::Lux40,
            0b0001 => RangeMode::Lux81,
            0b0010 => RangeMode::Lux163,
            0b0011 => RangeMode::Lux327,
            0b0100 => RangeMode::Lux655,
            0b0101 => RangeMode::Lux1310,
            0b0110 => RangeMode::Lux2620,
            0b0111 => RangeMode::Lux5241,
            0b1000 => RangeMode::Lux10483,
            0b1001 => RangeMode::Lux20966,
            0b1010 => RangeMode::Lux41932,
            0b1011 => RangeMode::Lux83865,
            // 0b1101..=0b1111 are reserved and read back as automatic
            _ => RangeMode::Automatic,
        }
    }

    /// Upper end of a manual range, `None` for automatic ranging.
    pub fn full_scale(&self) -> Option<Lux> {
        match self {
            RangeMode::Automatic => None,
            manual => Some(Lux((4095u32 << manual.to_register()) as f32 / 100.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionTime {
    Ms100 = 0,
    Ms800 = 1,
}

impl ConversionTime {
    pub(crate) fn to_register(&self) -> u16 {
        *self as u16
    }

    pub(crate) fn from_register(reg: u16) -> Self {
        if reg & 0x1 != 0 {
            ConversionTime::Ms800
        } else {
            ConversionTime::Ms100
        }
    }
}

/// Mode of conversion operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Shutdown = 0b00,
    /// Returns to shutdown after one conversion
    SingleShot = 0b01,
    Continuous = 0b11,
}

impl Mode {
    pub(crate) fn to_register(&self) -> u16 {
        *self as u16
    }

    pub(crate) fn from_register(reg: u16) -> Self {
        match reg & 0b11 {
            0b00 => Mode::Shutdown,
            0b01 => Mode::SingleShot,
            // 0b10 is continuous as well
            _ => Mode::Continuous,
        }
    }
}

/// Operating mode applied when the driver is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub range: RangeMode,
    pub conversion_time: ConversionTime,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: RangeMode::Automatic,
            conversion_time: ConversionTime::Ms100,
            mode: Mode::Continuous,
        }
    }
}

/// I2C address, selected by what the ADDR pin is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceAddress {
    #[default]
    Gnd = 0x44,
    Vdd = 0x45,
    Sda = 0x46,
    Scl = 0x47,
}

impl TryFrom<u8> for DeviceAddress {
    type Error = ();

    fn try_from(value: u8) -> Result<DeviceAddress, ()> {
        match value {
            0x44 => Ok(DeviceAddress::Gnd),
            0x45 => Ok(DeviceAddress::Vdd),
            0x46 => Ok(DeviceAddress::Sda),
            0x47 => Ok(DeviceAddress::Scl),
            _ => Err(()),
        }
    }
}
