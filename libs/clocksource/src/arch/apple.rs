// SPDX-License-Identifier: MPL-2.0

//! `mach_absolute_time` with the POSIX clocks behind it.

use mach2::{
    kern_return::KERN_SUCCESS,
    mach_time::{mach_absolute_time, mach_timebase_info, mach_timebase_info_data_t},
};

use super::{Probe, posix, timebase_frequency};
use crate::{ClockKind, prelude::*};

pub(crate) fn probe(kind: ClockKind) -> Result<Probe> {
    match kind {
        ClockKind::MachAbsolute => probe_mach(),
        _ => posix::probe(kind),
    }
}

fn probe_mach() -> Result<Probe> {
    let mut info = mach_timebase_info_data_t { numer: 0, denom: 0 };
    // SAFETY: `info` is a valid, writable timebase record.
    let ret = unsafe { mach_timebase_info(&mut info) };
    if ret != KERN_SUCCESS {
        return_errno_with_message!(Errno::ENODEV, "mach_timebase_info failed");
    }

    Ok(Probe {
        frequency: timebase_frequency(info.numer, info.denom)?,
        read: read_mach,
    })
}

fn read_mach() -> u64 {
    // SAFETY: Reading the absolute time has no preconditions.
    unsafe { mach_absolute_time() }
}
