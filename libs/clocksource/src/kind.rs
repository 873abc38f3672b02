// SPDX-License-Identifier: MPL-2.0

use core::fmt;

use cfg_if::cfg_if;

/// The tick facilities a [`ClockSource`] can be built on.
///
/// Not every facility exists on every platform. [`ClockKind::candidates`]
/// lists the ones the current platform offers, best first.
///
/// [`ClockSource`]: crate::ClockSource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockKind {
    /// The Windows performance counter. The OS reports the tick value and
    /// the frequency separately.
    PerformanceCounter,
    /// The Windows millisecond tick count since boot.
    TickCount,
    /// The Apple absolute time, converted with the fixed timebase ratio.
    MachAbsolute,
    /// The POSIX `CLOCK_MONOTONIC` clock in nanoseconds.
    Monotonic,
    /// The POSIX `CLOCK_REALTIME` clock in nanoseconds.
    ///
    /// This clock is settable and may step backwards. It is only selected
    /// when nothing monotonic is available.
    Realtime,
}

cfg_if! {
    if #[cfg(windows)] {
        const CANDIDATES: &[ClockKind] = &[ClockKind::PerformanceCounter, ClockKind::TickCount];
    } else if #[cfg(target_vendor = "apple")] {
        const CANDIDATES: &[ClockKind] = &[
            ClockKind::MachAbsolute,
            ClockKind::Monotonic,
            ClockKind::Realtime,
        ];
    } else {
        const CANDIDATES: &[ClockKind] = &[ClockKind::Monotonic, ClockKind::Realtime];
    }
}

impl ClockKind {
    /// Returns the facilities of the current platform in preference order.
    pub const fn candidates() -> &'static [ClockKind] {
        CANDIDATES
    }

    /// Returns whether readings of this facility never decrease.
    pub const fn is_monotonic(self) -> bool {
        !matches!(self, ClockKind::Realtime)
    }

    /// Returns whether the current platform offers this facility at all.
    pub fn is_supported(self) -> bool {
        Self::candidates().contains(&self)
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClockKind::PerformanceCounter => "performance-counter",
            ClockKind::TickCount => "tick-count",
            ClockKind::MachAbsolute => "mach-absolute",
            ClockKind::Monotonic => "monotonic",
            ClockKind::Realtime => "realtime",
        };
        f.write_str(name)
    }
}
