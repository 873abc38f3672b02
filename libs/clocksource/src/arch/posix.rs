// SPDX-License-Identifier: MPL-2.0

//! `clock_gettime` based facilities.
//!
//! Both clocks report nanoseconds, so the frequency is fixed at 1 GHz
//! whichever clock id is selected.

use nix::{
    sys::time::TimeSpec,
    time::{ClockId, clock_gettime},
};

use super::Probe;
use crate::{ClockKind, prelude::*};

const NANOS_PER_SEC: u64 = 1_000_000_000;

pub(crate) fn probe(kind: ClockKind) -> Result<Probe> {
    let (clock_id, read): (ClockId, fn() -> u64) = match kind {
        ClockKind::Monotonic => (ClockId::CLOCK_MONOTONIC, read_monotonic),
        ClockKind::Realtime => (ClockId::CLOCK_REALTIME, read_realtime),
        _ => return_errno_with_message!(Errno::ENODEV, "not a POSIX clock"),
    };

    // A clock id the kernel does not know fails right here with `EINVAL`.
    clock_gettime(clock_id)?;

    Ok(Probe {
        frequency: NANOS_PER_SEC,
        read,
    })
}

/// The realtime clock, taken without probing.
pub(crate) fn last_resort() -> (ClockKind, Probe) {
    let probe = Probe {
        frequency: NANOS_PER_SEC,
        read: read_realtime,
    };
    (ClockKind::Realtime, probe)
}

fn read_monotonic() -> u64 {
    read_clock(ClockId::CLOCK_MONOTONIC)
}

fn read_realtime() -> u64 {
    read_clock(ClockId::CLOCK_REALTIME)
}

fn read_clock(clock_id: ClockId) -> u64 {
    // The clock id answered its probe, so a failure here is not recoverable.
    clock_gettime(clock_id).map_or(0, |ts| timespec_to_nanos(&ts))
}

fn timespec_to_nanos(ts: &TimeSpec) -> u64 {
    (ts.tv_sec() as u64)
        .wrapping_mul(NANOS_PER_SEC)
        .wrapping_add(ts.tv_nsec() as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timespec_in_nanoseconds() {
        let ts = TimeSpec::new(3, 250_000_000);
        assert_eq!(timespec_to_nanos(&ts), 3_250_000_000);
    }

    #[test]
    fn both_clock_ids_answer() {
        for kind in [ClockKind::Monotonic, ClockKind::Realtime] {
            let probe = probe(kind).unwrap();
            assert_eq!(probe.frequency, NANOS_PER_SEC);
            assert!((probe.read)() > 0);
        }
    }

    #[test]
    fn foreign_kinds_are_rejected() {
        let err = probe(ClockKind::PerformanceCounter).unwrap_err();
        assert_eq!(err.error(), Errno::ENODEV);
    }
}
