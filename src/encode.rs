use bitvec::prelude::*;

use crate::reg::BitField;

/// Extracts `field` from the raw contents of its register.
pub fn read_field(bytes: [u8; 2], field: &BitField) -> u16 {
    let word = field.order.to_word(bytes);
    let start = field.offset as usize;
    let end = start + field.width as usize;
    word.view_bits::<Lsb0>()[start..end].load_le::<u16>()
}

/// Returns the register contents with `field` replaced by `value`.
///
/// Bits outside the field are kept as they are. Bits of `value` above the
/// field width are dropped.
pub fn write_field(bytes: [u8; 2], field: &BitField, value: u16) -> [u8; 2] {
    let mut word = field.order.to_word(bytes);
    let start = field.offset as usize;
    let end = start + field.width as usize;
    word.view_bits_mut::<Lsb0>()[start..end].store_le(value & field.max());
    field.order.to_bytes(word)
}

/// Splits a result or limit register into its 4-bit exponent and 12-bit mantissa.
#[inline]
pub fn exponent_mantissa(buffer: [u8; 2]) -> (u8, u16) {
    // E[3:0] R[11:8] | R[7:0]
    let exponent = buffer[0] >> 4;
    let mantissa = (((buffer[0] & 0x0F) as u16) << 8) + buffer[1] as u16;
    (exponent, mantissa)
}

/// lux = 0.01 * 2^exponent * mantissa
///
/// Exponents above 11 are not rejected.
#[inline]
pub fn lux_conversion(buffer: [u8; 2]) -> f32 {
    let (exponent, mantissa) = exponent_mantissa(buffer);
    ((mantissa as u32) << exponent) as f32 / 100.0
}
