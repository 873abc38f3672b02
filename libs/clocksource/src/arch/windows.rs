// SPDX-License-Identifier: MPL-2.0

//! Performance counter and tick count facilities.

use windows_sys::Win32::System::{
    Performance::{QueryPerformanceCounter, QueryPerformanceFrequency},
    SystemInformation::GetTickCount64,
};

use super::Probe;
use crate::{ClockKind, prelude::*};

const TICK_COUNT_FREQ: u64 = 1000;

pub(crate) fn probe(kind: ClockKind) -> Result<Probe> {
    match kind {
        ClockKind::PerformanceCounter => probe_performance_counter(),
        ClockKind::TickCount => Ok(tick_count()),
        _ => return_errno_with_message!(Errno::ENODEV, "not a Windows clock"),
    }
}

/// The tick count, which cannot fail.
pub(crate) fn last_resort() -> (ClockKind, Probe) {
    (ClockKind::TickCount, tick_count())
}

fn probe_performance_counter() -> Result<Probe> {
    let mut frequency: i64 = 0;
    // SAFETY: `frequency` is a valid, writable integer.
    let ok = unsafe { QueryPerformanceFrequency(&mut frequency) };
    if ok == 0 || frequency <= 0 {
        return_errno_with_message!(Errno::ENODEV, "the performance counter is unavailable");
    }

    Ok(Probe {
        frequency: frequency as u64,
        read: read_performance_counter,
    })
}

fn tick_count() -> Probe {
    Probe {
        frequency: TICK_COUNT_FREQ,
        read: read_tick_count,
    }
}

fn read_performance_counter() -> u64 {
    let mut value: i64 = 0;
    // SAFETY: `value` is a valid, writable integer.
    unsafe { QueryPerformanceCounter(&mut value) };
    value as u64
}

fn read_tick_count() -> u64 {
    // SAFETY: Reading the tick count has no preconditions.
    unsafe { GetTickCount64() }
}
