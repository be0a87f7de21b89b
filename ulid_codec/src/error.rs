/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

/// Reasons a text or binary ULID was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Text input was not 26 bytes, or binary input was not 16 bytes.
    #[error("ulid: invalid size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    /// A byte outside `0123456789ABCDEFGHJKMNPQRSTVWXYZ`. `position` is the first offender.
    #[error("ulid: invalid character {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    /// The first character is above `7`, so the value needs more than 128 bits.
    #[error("ulid: overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DecodeError::InvalidSize {
            expected: 26,
            actual: 25,
        };
        assert_eq!(err.to_string(), "ulid: invalid size: expected 26 bytes, got 25");

        let err = DecodeError::InvalidCharacter {
            position: 25,
            byte: b'!',
        };
        assert_eq!(err.to_string(), "ulid: invalid character 0x21 at position 25");

        assert_eq!(DecodeError::Overflow.to_string(), "ulid: overflow");
    }
}
