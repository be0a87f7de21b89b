/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Text form for human-readable formats, the raw 16 bytes for everything else.

use std::fmt::Formatter;

use ::serde::de::{self, SeqAccess, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ulid_encode::ascii_as_str;
use crate::{Ulid, BINARY_LENGTH};

impl Serialize for Ulid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(ascii_as_str(&self.to_ascii()))
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UlidVisitor)
        } else {
            deserializer.deserialize_bytes(UlidVisitor)
        }
    }
}

struct UlidVisitor;

impl<'de> Visitor<'de> for UlidVisitor {
    type Value = Ulid;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a 26-character ULID string or 16 bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ulid::decode(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ulid::from_slice(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0u8; BINARY_LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            match seq.next_element()? {
                Some(value) => *byte = value,
                None => return Err(de::Error::invalid_length(i, &self)),
            }
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(BINARY_LENGTH + 1, &self));
        }

        Ok(Ulid(bytes))
    }
}

#[cfg(test)]
mod tests {
    use ::serde::de::value::{BytesDeserializer, Error as ValueError, SeqDeserializer};
    use ::serde::de::IntoDeserializer;
    use ::serde::{Deserialize, Serialize};

    use crate::Ulid;

    const SAMPLE_BYTES: [u8; 16] = [
        0x01, 0x56, 0x3e, 0x3a, 0xb5, 0xd3, 0xd6, 0x76, 0x4c, 0x61, 0xef, 0xb9, 0x93, 0x02, 0xbd,
        0x5b,
    ];

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: Ulid,
        name: String,
    }

    #[test]
    fn test_json_round_trip() {
        let record = Record {
            id: Ulid::from_bytes(SAMPLE_BYTES),
            name: "alpha".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"01ARZ3NDEKTSV4RRFFQ69G5FAV","name":"alpha"}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let err = serde_json::from_str::<Ulid>(r#""01ARZ3NDEKTSV4RRFFQ69G5FA!""#).unwrap_err();
        assert!(err.to_string().contains("ulid: invalid character"), "{}", err);

        let err = serde_json::from_str::<Ulid>(r#""80000000000000000000000000""#).unwrap_err();
        assert!(err.to_string().contains("ulid: overflow"), "{}", err);

        assert!(serde_json::from_str::<Ulid>("42").is_err());
    }

    #[test]
    fn test_deserialize_bytes() {
        let deserializer = BytesDeserializer::<ValueError>::new(&SAMPLE_BYTES);
        assert_eq!(Ulid::deserialize(deserializer), Ok(Ulid::from_bytes(SAMPLE_BYTES)));

        let deserializer = BytesDeserializer::<ValueError>::new(&SAMPLE_BYTES[..15]);
        assert!(Ulid::deserialize(deserializer).is_err());
    }

    #[test]
    fn test_deserialize_seq() {
        let deserializer: SeqDeserializer<_, ValueError> =
            SAMPLE_BYTES.to_vec().into_deserializer();
        assert_eq!(Ulid::deserialize(deserializer), Ok(Ulid::from_bytes(SAMPLE_BYTES)));

        let deserializer: SeqDeserializer<_, ValueError> = vec![0u8; 17].into_deserializer();
        assert!(Ulid::deserialize(deserializer).is_err());

        let deserializer: SeqDeserializer<_, ValueError> = vec![0u8; 3].into_deserializer();
        assert!(Ulid::deserialize(deserializer).is_err());
    }
}
