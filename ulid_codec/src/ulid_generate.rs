/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::{Duration, SystemTime};

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

use crate::{Ulid, TIME_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The system clock reads earlier than the Unix epoch by the given amount.
    #[error("ulid: clock is {0:?} before the Unix epoch")]
    TooFarPast(Duration),

    /// The random source could not supply bytes.
    #[error("ulid: entropy source failed: {0}")]
    Entropy(String),
}

/**
 * Creates ULIDs from a timestamp and bytes drawn from `R`. The random field of every ULID is
 * drawn fresh; there is no monotonic ordering within a millisecond.
 *
 * The default generator reads the operating system's cryptographically secure source.
 */
#[derive(Debug, Clone)]
pub struct Generator<R: TryRngCore = OsRng> {
    rng: R,
}

impl<R: TryRngCore> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /**
     * Creates a ULID for `unix_time`. Milliseconds beyond the 48-bit time field are truncated
     * the same way as [`Ulid::set_time`].
     */
    pub fn create(&mut self, unix_time: Duration) -> Result<Ulid, GenerationError> {
        let mut ulid = Ulid::ZERO;
        ulid.set_time(unix_time.as_millis() as u64);
        self.rng
            .try_fill_bytes(&mut ulid.0[TIME_LENGTH..])
            .map_err(|err| GenerationError::Entropy(err.to_string()))?;

        Ok(ulid)
    }

    pub fn create_now(&mut self) -> Result<Ulid, GenerationError> {
        let unix_time = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH);
        match unix_time {
            Ok(unix_time) => self.create(unix_time),
            Err(time_err) => Err(GenerationError::TooFarPast(time_err.duration())),
        }
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self { rng: OsRng }
    }
}

impl Ulid {
    /**
     * Creates a ULID from the current time and the operating system's random source.
     *
     * # Panics
     * When the random source fails or the clock is before the Unix epoch. Neither can be
     * recovered from by the caller, and a partially random ULID is never returned.
     */
    pub fn make() -> Ulid {
        match Generator::<OsRng>::default().create_now() {
            Ok(ulid) => ulid,
            Err(err) => {
                tracing::error!(error = %err, "cannot create ULID");
                panic!("{}", err);
            }
        }
    }
}
