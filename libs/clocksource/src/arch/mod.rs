// SPDX-License-Identifier: MPL-2.0

//! Platform-specific tick facilities.
//!
//! Each platform family supported by this crate contains a submodule here.
//! A submodule exports `probe`, which checks one [`ClockKind`] and returns
//! its frequency and reader, and `last_resort`, the source used when every
//! candidate has been rejected.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub(crate) use self::windows::{last_resort, probe};
    } else if #[cfg(target_vendor = "apple")] {
        mod apple;
        mod posix;
        pub(crate) use self::apple::probe;
        pub(crate) use self::posix::last_resort;
    } else if #[cfg(unix)] {
        mod posix;
        pub(crate) use self::posix::{last_resort, probe};
    } else {
        compile_error!("the performance clock supports only Windows and Unix hosts");
    }
}

/// A facility that answered its probe.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Probe {
    pub(crate) frequency: u64,
    pub(crate) read: fn() -> u64,
}

/// Converts a `numer / denom` nanoseconds-per-tick timebase into ticks per second.
#[cfg(any(target_vendor = "apple", test))]
pub(crate) fn timebase_frequency(numer: u32, denom: u32) -> crate::prelude::Result<u64> {
    use crate::prelude::*;

    const NANOS_PER_SEC: u128 = 1_000_000_000;

    if numer == 0 || denom == 0 {
        return_errno_with_message!(Errno::EINVAL, "the timebase ratio has a zero term");
    }
    let frequency = u128::from(denom) * NANOS_PER_SEC / u128::from(numer);
    match u64::try_from(frequency) {
        Ok(0) => return_errno_with_message!(Errno::EINVAL, "the timebase is slower than 1 Hz"),
        Ok(frequency) => Ok(frequency),
        Err(_) => return_errno!(Errno::EOVERFLOW),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Errno;

    #[test]
    fn timebase_one_to_one_is_nanoseconds() {
        assert_eq!(timebase_frequency(1, 1).unwrap(), 1_000_000_000);
    }

    #[test]
    fn timebase_of_arm_macs() {
        // 125 / 3 ns per tick, i.e. a 24 MHz counter.
        assert_eq!(timebase_frequency(125, 3).unwrap(), 24_000_000);
    }

    #[test]
    fn timebase_rejects_degenerate_ratios() {
        assert_eq!(timebase_frequency(0, 1).unwrap_err().error(), Errno::EINVAL);
        assert_eq!(timebase_frequency(1, 0).unwrap_err().error(), Errno::EINVAL);
        assert_eq!(
            timebase_frequency(u32::MAX, 1).unwrap_err().error(),
            Errno::EINVAL
        );
    }
}
