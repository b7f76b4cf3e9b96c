/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time with nanosecond precision, independent of any wire format
///
/// AWS JSON protocols transmit timestamps as (possibly fractional) epoch seconds. `Instant`
/// keeps the whole seconds and the sub-second nanos separately so that a value read off the
/// wire can be written back without loss.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` is expected in `[0, 1)`. A fraction that rounds up to a whole second carries
    /// into `epoch_seconds`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64).round() as u32;
        Instant {
            seconds: epoch_seconds + (nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Builds an `Instant` from epoch seconds expressed as a float, eg. `1515531081.1234`
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    /// Converts from a `SystemTime`. Times before the epoch are represented with negative seconds.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = 1_000_000_000 - nanos;
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn to_system_time(&self) -> SystemTime {
        let nanos = Duration::from_nanos(self.subsecond_nanos as u64);
        if self.seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.seconds as u64) + nanos
        } else {
            UNIX_EPOCH - Duration::from_secs(self.seconds.unsigned_abs()) + nanos
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // chrono pads fractional seconds to a multiple of three digits
                    let mut trimmed = rfc3339.trim_end_matches('Z').to_owned();
                    if trimmed.contains('.') {
                        trimmed = trimmed.trim_end_matches('0').to_owned();
                    }
                    trimmed.push('Z');
                    trimmed
                }
                // out of range for a calendar date, fall back to the raw epoch value
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Instant::fmt(self, Format::DateTime))
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339 date time, eg. `2019-12-16T23:48:18Z`
    DateTime,
    /// Seconds since the Unix epoch with an optional fractional component
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::proptest;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1515531081.25);
        assert_eq!(instant.epoch_seconds(), 1515531081);
        assert_eq!(instant.epoch_subsecond_nanos(), 250_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1515531081.25");
    }

    #[test]
    fn fraction_rounding_up_carries_into_seconds() {
        let instant = Instant::from_f64(0.9999999999);
        assert_eq!(instant, Instant::from_epoch_seconds(1));
        assert_eq!(instant.fmt(Format::EpochSeconds), "1");

        let instant = Instant::from_f64(-0.00000000001);
        assert_eq!(instant, Instant::from_epoch_seconds(0));
        assert!(Instant::from_fractional_seconds(5, 0.9999999996).epoch_subsecond_nanos() < 1_000_000_000);
    }

    #[test]
    fn negative_times() {
        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::DateTime), "1969-12-31T23:59:58.5Z");
    }

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::from_millis(1_234_567);
        let instant = Instant::from_system_time(time);
        assert_eq!(instant.epoch_seconds(), 1234);
        assert_eq!(instant.epoch_subsecond_nanos(), 567_000_000);
        assert_eq!(instant.to_system_time(), time);

        let before = UNIX_EPOCH - Duration::from_millis(1_500);
        let instant = Instant::from_system_time(before);
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(instant.to_system_time(), before);
    }

    proptest! {
        #[test]
        fn whole_seconds_survive_f64(seconds in -1_000_000_000_i64..4_000_000_000_i64) {
            let instant = Instant::from_epoch_seconds(seconds);
            assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }
    }
}
