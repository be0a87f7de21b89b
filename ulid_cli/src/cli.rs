/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use ulid_codec::Ulid;

/// Generate a ULID, or print the timestamp of an existing one.
#[derive(Debug, Parser)]
#[command(name = "ulid", version, about)]
pub struct Cli {
    /// ULID to inspect. A new one is generated when omitted.
    pub ulid: Option<String>,

    /// Log filter directive, e.g. `debug` or `ulid_codec=trace`.
    #[arg(long, env = "ULID_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.ulid {
            None => {
                let ulid = Ulid::make();
                tracing::debug!(%ulid, time_ms = ulid.time(), "generated ULID");
                writeln!(out, "{}", ulid).context("failed to write ULID")?;
            }
            Some(text) => {
                let ulid = Ulid::decode(text)?;
                let time = format_time(&ulid)?;
                tracing::debug!(%ulid, %time, "parsed ULID");
                writeln!(out, "{}", time).context("failed to write timestamp")?;
            }
        }

        Ok(())
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2016-07-30T23:54:10.259Z`.
pub fn format_time(ulid: &Ulid) -> Result<String> {
    // 48 bits always fit in an i64
    let time_ms = ulid.time() as i64;
    let time = DateTime::<Utc>::from_timestamp_millis(time_ms)
        .with_context(|| format!("timestamp {} is out of range", time_ms))?;

    Ok(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        cli.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_prints_time() {
        let out = run(&["ulid", "01ARZ3NDEKTSV4RRFFQ69G5FAV"]).unwrap();
        assert_eq!(out, "2016-07-30T23:54:10.259Z\n");
    }

    #[test]
    fn test_generate_prints_ulid() {
        let out = run(&["ulid"]).unwrap();
        let line = out.strip_suffix('\n').unwrap();

        assert_eq!(line.len(), ulid_codec::ULID_LENGTH);
        assert!(Ulid::decode(line).is_ok());
    }

    #[test]
    fn test_parse_error_is_decode_error() {
        let err = run(&["ulid", "01ARZ3NDEKTSV4RRFFQ69G5FA"]).unwrap_err();
        assert_eq!(err.to_string(), "ulid: invalid size: expected 26 bytes, got 25");

        let err = run(&["ulid", "80000000000000000000000000"]).unwrap_err();
        assert_eq!(err.to_string(), "ulid: overflow");
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["ulid", "a", "b"]).is_err());
    }

    static TIMES: [(&str, &str); 3] = [
        ("00000000000000000000000000", "1970-01-01T00:00:00.000Z"),
        ("01ARZ3NDEK0000000000000000", "2016-07-30T23:54:10.259Z"),
        ("00X3AAA400ZZZZZZZZZZZZZZZZ", "2001-09-09T01:46:40.000Z"),
    ];

    #[test]
    fn test_format_time() {
        for (ulid_str, expected) in TIMES {
            let ulid = Ulid::decode(ulid_str).unwrap();
            assert_eq!(format_time(&ulid).unwrap(), expected);
        }
    }
}
