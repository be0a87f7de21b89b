/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{BINARY_LENGTH, ULID_LENGTH};

/// Crockford base32, without I, L, O and U.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/**
 * Encodes 16 big-endian bytes into a ULID string.
 *
 * The 128 bits are read as 26 groups of 5 bits, the first group holding only the top 3 bits.
 * Every 5 bytes produce 8 characters, so groups that straddle two bytes are stitched together
 * from both.
 */
pub fn bytes_to_ascii(bytes: &[u8; BINARY_LENGTH]) -> [u8; ULID_LENGTH] {
    [
        // Timestamp: 48 bits, 10 characters
        ALPHABET[(bytes[0] >> 5) as usize],
        ALPHABET[(bytes[0] & 0x1F) as usize],
        ALPHABET[((bytes[1] >> 3) & 0x1F) as usize],
        ALPHABET[(((bytes[1] << 2) | (bytes[2] >> 6)) & 0x1F) as usize],
        ALPHABET[((bytes[2] >> 1) & 0x1F) as usize],
        ALPHABET[(((bytes[2] << 4) | (bytes[3] >> 4)) & 0x1F) as usize],
        ALPHABET[(((bytes[3] << 1) | (bytes[4] >> 7)) & 0x1F) as usize],
        ALPHABET[((bytes[4] >> 2) & 0x1F) as usize],
        ALPHABET[(((bytes[4] << 3) | (bytes[5] >> 5)) & 0x1F) as usize],
        ALPHABET[(bytes[5] & 0x1F) as usize],
        // Randomness: 80 bits, 16 characters
        ALPHABET[((bytes[6] >> 3) & 0x1F) as usize],
        ALPHABET[(((bytes[6] << 2) | (bytes[7] >> 6)) & 0x1F) as usize],
        ALPHABET[((bytes[7] >> 1) & 0x1F) as usize],
        ALPHABET[(((bytes[7] << 4) | (bytes[8] >> 4)) & 0x1F) as usize],
        ALPHABET[(((bytes[8] << 1) | (bytes[9] >> 7)) & 0x1F) as usize],
        ALPHABET[((bytes[9] >> 2) & 0x1F) as usize],
        ALPHABET[(((bytes[9] << 3) | (bytes[10] >> 5)) & 0x1F) as usize],
        ALPHABET[(bytes[10] & 0x1F) as usize],
        ALPHABET[((bytes[11] >> 3) & 0x1F) as usize],
        ALPHABET[(((bytes[11] << 2) | (bytes[12] >> 6)) & 0x1F) as usize],
        ALPHABET[((bytes[12] >> 1) & 0x1F) as usize],
        ALPHABET[(((bytes[12] << 4) | (bytes[13] >> 4)) & 0x1F) as usize],
        ALPHABET[(((bytes[13] << 1) | (bytes[14] >> 7)) & 0x1F) as usize],
        ALPHABET[((bytes[14] >> 2) & 0x1F) as usize],
        ALPHABET[(((bytes[14] << 3) | (bytes[15] >> 5)) & 0x1F) as usize],
        ALPHABET[(bytes[15] & 0x1F) as usize],
    ]
}

/**
 * Encodes a `u128` into a ULID string one 5-bit group at a time
 */
pub fn u128_to_ascii_scalar(ulid: &u128) -> [u8; ULID_LENGTH] {
    let mut chars = [0u8; ULID_LENGTH];
    for (i, c) in chars.iter_mut().enumerate() {
        let shifted = (ulid >> (125 - i * 5)) as usize & 0x1F;
        *c = ALPHABET[shifted];
    }

    chars
}

pub(crate) fn ascii_as_str(chars: &[u8; ULID_LENGTH]) -> &str {
    // SAFETY: callers only pass output of the encoders above, which is drawn from `ALPHABET`.
    unsafe { std::str::from_utf8_unchecked(chars) }
}
