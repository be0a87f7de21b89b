/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{DecodeError, BINARY_LENGTH, ULID_LENGTH};

/// Maps every byte to its 5-bit value, or to `INVALID` when it is not in the alphabet.
static CROCKFORD_BASE32_DECODE: [u8; 256] = include!("../resources/crockford_base32_decode.txt");

const INVALID: u8 = 0xFF;
// Never set by a valid 5-bit value, always set by `INVALID`
const INVALID_BIT: u8 = 0x80;
// The first character carries only the top 3 bits of the 128
const MAX_FIRST_QUINT: u8 = 0x07;

/**
 * Decodes a ULID string into 16 big-endian bytes.
 *
 * All 26 lookups are OR-ed together so that a single test catches any invalid character. The
 * position of the offending character is only searched for once decoding has already failed.
 */
pub fn ascii_to_bytes(input: &[u8]) -> Result<[u8; BINARY_LENGTH], DecodeError> {
    let chars: &[u8; ULID_LENGTH] = input.try_into().map_err(|_| DecodeError::InvalidSize {
        expected: ULID_LENGTH,
        actual: input.len(),
    })?;

    let mut quints = [0u8; ULID_LENGTH];
    let mut lookups = 0u8;
    for (quint, &byte) in quints.iter_mut().zip(chars) {
        *quint = CROCKFORD_BASE32_DECODE[byte as usize];
        lookups |= *quint;
    }

    if lookups & INVALID_BIT != 0 {
        return Err(invalid_character(chars));
    }
    if quints[0] > MAX_FIRST_QUINT {
        return Err(DecodeError::Overflow);
    }

    let value = quints
        .iter()
        .fold(0u128, |value, &quint| (value << 5) | quint as u128);

    Ok(value.to_be_bytes())
}

/**
 * Decodes a ULID string into a `u128`, failing on the first bad character
 */
pub fn ascii_to_u128_scalar(input: &[u8]) -> Result<u128, DecodeError> {
    if input.len() != ULID_LENGTH {
        return Err(DecodeError::InvalidSize {
            expected: ULID_LENGTH,
            actual: input.len(),
        });
    }

    let mut result = 0u128;
    for (position, &byte) in input.iter().enumerate() {
        let quint = CROCKFORD_BASE32_DECODE[byte as usize];
        if quint == INVALID {
            return Err(DecodeError::InvalidCharacter { position, byte });
        }

        result <<= 5;
        result |= quint as u128;
    }

    if CROCKFORD_BASE32_DECODE[input[0] as usize] > MAX_FIRST_QUINT {
        return Err(DecodeError::Overflow);
    }

    Ok(result)
}

#[cold]
fn invalid_character(chars: &[u8; ULID_LENGTH]) -> DecodeError {
    let position = chars
        .iter()
        .position(|&byte| CROCKFORD_BASE32_DECODE[byte as usize] == INVALID)
        .unwrap_or_default();

    DecodeError::InvalidCharacter {
        position,
        byte: chars[position],
    }
}
