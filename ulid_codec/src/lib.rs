/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Universally Unique Lexicographically Sortable Identifiers.
//!
//! A [`Ulid`] is 16 bytes: a 48-bit big-endian millisecond timestamp followed by 80 bits of
//! randomness. Its text form is 26 characters of Crockford base32, and sorting the text sorts
//! the identifiers.
//!
//! ```
//! use ulid_codec::Ulid;
//!
//! let ulid = Ulid::decode("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
//! assert_eq!(ulid.time(), 0x1563e3ab5d3);
//! assert_eq!(ulid.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

pub use crate::error::DecodeError;
pub use crate::ulid_generate::{GenerationError, Generator};

use crate::ulid_decode::ascii_to_bytes;
use crate::ulid_encode::{ascii_as_str, bytes_to_ascii};

mod error;
#[cfg(feature = "serde")]
mod serde;
pub mod ulid_decode;
pub mod ulid_encode;
pub mod ulid_generate;

/// Length of the text form.
pub const ULID_LENGTH: usize = 26;
/// Length of the binary form.
pub const BINARY_LENGTH: usize = 16;
/// Largest timestamp that fits in the 48-bit time field.
pub const MAX_TIME_MS: u64 = 0xFFFF_FFFFFFFF;

const TIME_LENGTH: usize = 6;

#[repr(transparent)]
#[derive(Default, Eq, Ord, PartialEq, PartialOrd, Hash, Copy, Clone)]
pub struct Ulid([u8; BINARY_LENGTH]);

impl Ulid {
    const RANDOM_MASK: u128 = 0x000000000000FFFFFFFFFFFFFFFFFFFF;

    /// The all-zero identifier, `00000000000000000000000000`.
    pub const ZERO: Ulid = Ulid([0; BINARY_LENGTH]);

    pub const fn from_bytes(bytes: [u8; BINARY_LENGTH]) -> Self {
        Ulid(bytes)
    }

    pub const fn to_bytes(self) -> [u8; BINARY_LENGTH] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; BINARY_LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /**
     * Copies a binary ULID out of `bytes`, which must hold exactly 16 bytes.
     */
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        <[u8; BINARY_LENGTH]>::try_from(bytes)
            .map(Ulid)
            .map_err(|_| DecodeError::InvalidSize {
                expected: BINARY_LENGTH,
                actual: bytes.len(),
            })
    }

    /**
     * Builds a ULID from a millisecond timestamp and a random payload. Bits above the 48-bit
     * time field and the 80-bit random field are dropped.
     */
    pub fn from_parts(time_ms: u64, random: u128) -> Self {
        let mut ulid = Ulid::from(random & Ulid::RANDOM_MASK);
        ulid.set_time(time_ms);
        ulid
    }

    /**
     * Writes the low 48 bits of `time_ms` into the time field, most significant byte first.
     * Higher bits are truncated.
     */
    pub fn set_time(&mut self, time_ms: u64) {
        self.0[..TIME_LENGTH].copy_from_slice(&time_ms.to_be_bytes()[2..]);
    }

    /// Milliseconds since the Unix epoch.
    pub fn time(&self) -> u64 {
        let mut be_bytes = [0u8; 8];
        be_bytes[2..].copy_from_slice(&self.0[..TIME_LENGTH]);
        u64::from_be_bytes(be_bytes)
    }

    /// The 80-bit random field.
    pub fn random(&self) -> u128 {
        u128::from(*self) & Ulid::RANDOM_MASK
    }

    /// Byte-wise unsigned comparison, identical to `Ord::cmp`.
    pub fn compare(&self, other: &Ulid) -> Ordering {
        self.0.cmp(&other.0)
    }

    pub fn is_zero(&self) -> bool {
        *self == Ulid::ZERO
    }

    pub fn encode(&self) -> String {
        ascii_as_str(&self.to_ascii()).to_owned()
    }

    /// The text form without allocating.
    pub fn to_ascii(&self) -> [u8; ULID_LENGTH] {
        bytes_to_ascii(&self.0)
    }

    /**
     * Parses the 26-character text form. Accepts anything byte-like, so `&str`, `String`,
     * `&[u8]` and `Vec<u8>` all work.
     */
    pub fn decode(input: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        let input = input.as_ref();
        ascii_to_bytes(input).map(Ulid).inspect_err(|err| {
            tracing::trace!(error = %err, len = input.len(), "rejected ULID text");
        })
    }

    /// Appends the 26-character text form to `buf`.
    pub fn append_text(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_ascii());
    }

    /// Appends the 16-byte binary form to `buf`.
    pub fn append_binary(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }

    pub fn append_to_string(&self, string: &mut String) {
        string.push_str(ascii_as_str(&self.to_ascii()));
    }
}

impl Display for Ulid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(ascii_as_str(&self.to_ascii()))
    }
}

impl Debug for Ulid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:#034X})", self, u128::from(*self))
    }
}

impl FromStr for Ulid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::decode(s)
    }
}

impl TryFrom<&str> for Ulid {
    type Error = DecodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ulid::decode(value)
    }
}

/// Binary form. Use [`Ulid::decode`] for text held in a byte slice.
impl TryFrom<&[u8]> for Ulid {
    type Error = DecodeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ulid::from_slice(value)
    }
}

impl From<[u8; BINARY_LENGTH]> for Ulid {
    fn from(value: [u8; BINARY_LENGTH]) -> Self {
        Ulid(value)
    }
}

impl From<Ulid> for [u8; BINARY_LENGTH] {
    fn from(value: Ulid) -> Self {
        value.0
    }
}

impl From<u128> for Ulid {
    fn from(value: u128) -> Self {
        Ulid(value.to_be_bytes())
    }
}

impl From<Ulid> for u128 {
    fn from(value: Ulid) -> Self {
        u128::from_be_bytes(value.0)
    }
}

impl From<&Ulid> for String {
    fn from(value: &Ulid) -> Self {
        value.encode()
    }
}

impl AsRef<[u8]> for Ulid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
