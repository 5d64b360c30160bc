/// 16-bit registers of the OPT3001.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Result = 0x00,
    Configuration = 0x01,
    LowLimit = 0x02,
    HighLimit = 0x03,
    ManufacturerId = 0x7E, // Should contain "TI"
    DeviceId = 0x7F,       // Should contain 0x3001
}

impl Register {
    pub fn address(&self) -> u8 {
        *self as u8
    }
}

/// Order of the two bytes of a register on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first. Every OPT3001 register uses this.
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    pub fn to_word(&self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }

    pub fn to_bytes(&self, word: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => word.to_be_bytes(),
            ByteOrder::LittleEndian => word.to_le_bytes(),
        }
    }
}

/// A run of bits inside a register.
///
/// `offset` counts from the least significant bit of the 16-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub register: Register,
    pub offset: u8,
    pub width: u8,
    pub order: ByteOrder,
}

impl BitField {
    const fn new(register: Register, offset: u8, width: u8) -> Self {
        assert!(width > 0 && offset + width <= 16);
        Self {
            register,
            offset,
            width,
            order: ByteOrder::BigEndian,
        }
    }

    /// Largest value the field can hold.
    pub const fn max(&self) -> u16 {
        ((1u32 << self.width) - 1) as u16
    }
}

// See table 11 of the datasheet for the configuration register layout
pub const RANGE_NUMBER: BitField = BitField::new(Register::Configuration, 12, 4);
pub const CONVERSION_TIME: BitField = BitField::new(Register::Configuration, 11, 1);
pub const MODE: BitField = BitField::new(Register::Configuration, 9, 2);
pub const OVERFLOW: BitField = BitField::new(Register::Configuration, 8, 1);
pub const READY: BitField = BitField::new(Register::Configuration, 7, 1);
pub const FLAG_HIGH: BitField = BitField::new(Register::Configuration, 6, 1);
pub const FLAG_LOW: BitField = BitField::new(Register::Configuration, 5, 1);

pub const LOW_LIMIT: BitField = BitField::new(Register::LowLimit, 0, 12);
pub const HIGH_LIMIT: BitField = BitField::new(Register::HighLimit, 0, 12);
