// SPDX-License-Identifier: CC0-1.0

//! Regrouping of bit strings between word widths.

use alloc::vec::Vec;

use crate::error::{ConvertBitsError, PaddingError};

/// Regroups `data`, a string of `from_bits` wide words, into `to_bits` wide words.
///
/// Bits are consumed most significant first. With `pad` a trailing partial word is shifted up and
/// emitted; without it the trailing bits must be fewer than `from_bits` and all zero.
///
/// Both widths must be between 1 and 8.
///
/// # Errors
///
/// If a word of `data` does not fit in `from_bits`, or, when not padding, the leftover bits are
/// too many or not all zero.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertBitsError> {
    debug_assert!(from_bits >= 1 && from_bits <= 8);
    debug_assert!(to_bits >= 1 && to_bits <= 8);

    let max_value: u32 = (1 << to_bits) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let total_bits = data.len() * from_bits as usize;
    let mut ret = Vec::with_capacity((total_bits + to_bits as usize - 1) / to_bits as usize);

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(ConvertBitsError::InvalidValue { value, from_bits });
        }
        // Only the low `from_bits + to_bits` bits are ever needed.
        acc = ((acc << from_bits) | u32::from(value)) & 0xffff;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits {
        return Err(PaddingError::TooMuchPadding { bits }.into());
    } else if (acc << (to_bits - bits)) & max_value != 0 {
        return Err(PaddingError::NonZeroPadding.into());
    }

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn eight_to_five() {
        assert_eq!(convert_bits(&[0xff], 8, 5, true), Ok(vec![31, 28]));
        assert_eq!(convert_bits(&[0x00, 0x01], 8, 5, true), Ok(vec![0, 0, 0, 16]));
        assert_eq!(convert_bits(&[], 8, 5, true), Ok(vec![]));
    }

    #[test]
    fn five_to_eight() {
        assert_eq!(convert_bits(&[31, 28], 5, 8, false), Ok(vec![0xff]));
        assert_eq!(convert_bits(&[0, 0, 0, 16], 5, 8, false), Ok(vec![0x00, 0x01]));
    }

    #[test]
    fn round_trips_through_padding() {
        let data = [0x00, 0x14, 0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4];
        let five = convert_bits(&data, 8, 5, true).unwrap();
        assert_eq!(five.len(), 16);
        assert_eq!(convert_bits(&five, 5, 8, false).unwrap(), data);
    }

    #[test]
    fn rejects_too_much_padding() {
        // Three digits carry 15 bits: one byte and 7 leftover bits.
        assert_eq!(
            convert_bits(&[0, 0, 0], 5, 8, false),
            Err(ConvertBitsError::Padding(PaddingError::TooMuchPadding { bits: 7 }))
        );
        // A lone digit never makes a byte.
        assert_eq!(
            convert_bits(&[0], 5, 8, false),
            Err(ConvertBitsError::Padding(PaddingError::TooMuchPadding { bits: 5 }))
        );
    }

    #[test]
    fn rejects_non_zero_padding() {
        // Two digits: one byte and 2 leftover bits, the lowest of which is set.
        assert_eq!(
            convert_bits(&[31, 29], 5, 8, false),
            Err(ConvertBitsError::Padding(PaddingError::NonZeroPadding))
        );
        assert_eq!(convert_bits(&[31, 28], 5, 8, false), Ok(vec![0xff]));
    }

    #[test]
    fn rejects_wide_values() {
        assert_eq!(
            convert_bits(&[32], 5, 8, true),
            Err(ConvertBitsError::InvalidValue { value: 32, from_bits: 5 })
        );
    }
}
