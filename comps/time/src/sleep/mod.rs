// SPDX-License-Identifier: MPL-2.0

//! Blocking sleep.
//!
//! A sleep never ends before the requested duration has passed. Wake-ups
//! caused by signals or by a coarse timer are absorbed by sleeping again
//! for whatever is left.

use cfg_if::cfg_if;

use crate::prelude::*;

cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        use self::windows::sleep_at_least;
    } else {
        mod posix;
        use self::posix::sleep_at_least;
    }
}

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Blocks the calling thread for at least `seconds` seconds.
///
/// Zero, negative and NaN durations return at once. Durations too large
/// for a [`Duration`], infinity included, sleep for [`Duration::MAX`].
pub fn sleep(seconds: f64) {
    if let Some(duration) = duration_from_secs(seconds) {
        sleep_for(duration);
    }
}

/// Blocks the calling thread for at least `duration`.
pub fn sleep_for(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    sleep_at_least(duration);
}

/// Converts `duration` into whole milliseconds, rounding any remainder up.
///
/// Hosts whose timers count in milliseconds use this so that a short
/// request such as 0.1ms becomes 1ms instead of no wait at all.
pub fn millis_round_up(duration: Duration) -> u64 {
    let millis = duration.as_nanos().div_ceil(NANOS_PER_MILLI);
    u64::try_from(millis).unwrap_or(u64::MAX)
}

fn duration_from_secs(seconds: f64) -> Option<Duration> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }
    Some(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use super::*;

    #[test]
    fn non_positive_seconds_are_ignored() {
        assert_eq!(duration_from_secs(0.0), None);
        assert_eq!(duration_from_secs(-0.0), None);
        assert_eq!(duration_from_secs(-1.0), None);
        assert_eq!(duration_from_secs(f64::NEG_INFINITY), None);
        assert_eq!(duration_from_secs(f64::NAN), None);
    }

    #[test]
    fn seconds_to_duration() {
        assert_eq!(duration_from_secs(0.25), Some(Duration::from_millis(250)));
        assert_eq!(duration_from_secs(1.5), Some(Duration::from_millis(1500)));
        assert_eq!(duration_from_secs(f64::INFINITY), Some(Duration::MAX));
        assert_eq!(duration_from_secs(1e30), Some(Duration::MAX));
    }

    #[test]
    fn millis_are_rounded_up() {
        assert_eq!(millis_round_up(Duration::ZERO), 0);
        assert_eq!(millis_round_up(Duration::from_micros(100)), 1);
        assert_eq!(millis_round_up(Duration::from_nanos(1)), 1);
        assert_eq!(millis_round_up(Duration::from_micros(1000)), 1);
        assert_eq!(millis_round_up(Duration::from_micros(1001)), 2);
        assert_eq!(millis_round_up(Duration::from_secs_f64(0.0015)), 2);
        assert_eq!(millis_round_up(Duration::from_secs(1)), 1000);
        assert_eq!(millis_round_up(Duration::MAX), u64::MAX);
    }

    #[test]
    fn short_request_still_waits() {
        let start = Instant::now();
        sleep(0.0001);
        assert!(start.elapsed() >= Duration::from_micros(100));
    }
}
