//! Byte to bit sequence packing.
//!
//! The payload travels through the carrier one bit per selected weight, least
//! significant bit first within each byte. Both directions go through
//! `bitstream-io` in little-endian bit order, which is exactly that layout.

use std::io::Cursor;

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};

use crate::error::{Result, SynapseError};

/// Unpack bytes into bits, LSB first within each byte.
///
/// The result always has `8 * bytes.len()` entries.
pub fn to_bits(bytes: &[u8]) -> Result<Vec<bool>> {
    let mut reader = BitReader::endian(Cursor::new(bytes), LittleEndian);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for _ in 0..bytes.len() * 8 {
        bits.push(reader.read_bit()?);
    }
    Ok(bits)
}

/// Pack bits back into bytes, inverse of [`to_bits`].
///
/// Fails with [`SynapseError::MalformedBitStream`] when the bit count is not
/// a multiple of 8.
pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(SynapseError::MalformedBitStream { len: bits.len() });
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    {
        let mut writer = BitWriter::endian(&mut bytes, LittleEndian);
        for &bit in bits {
            writer.write_bit(bit)?;
        }
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_lsb_first() {
        let bits = to_bits(&[0b0000_0001]).unwrap();
        assert_eq!(
            bits,
            vec![true, false, false, false, false, false, false, false]
        );

        let bits = to_bits(&[0b1000_0000]).unwrap();
        assert_eq!(
            bits,
            vec![false, false, false, false, false, false, false, true]
        );
    }

    #[test]
    fn roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let bits = to_bits(&bytes).unwrap();
        assert_eq!(bits.len(), bytes.len() * 8);
        assert_eq!(from_bits(&bits).unwrap(), bytes);
    }

    #[test]
    fn roundtrip_empty() {
        let bits = to_bits(&[]).unwrap();
        assert!(bits.is_empty());
        assert_eq!(from_bits(&bits).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn unaligned_bit_count_is_rejected() {
        let bits = vec![true; 13];
        assert!(matches!(
            from_bits(&bits),
            Err(SynapseError::MalformedBitStream { len: 13 })
        ));
    }
}
