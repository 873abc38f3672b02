// SPDX-License-Identifier: MPL-2.0

//! The clock source of the performance timing facility.
//!
//! A [`ClockSource`] pairs a raw tick counter with its frequency. The counter
//! is the most precise monotonic facility the host offers:
//!
//! - Windows: the performance counter, then the millisecond tick count.
//! - Apple platforms: `mach_absolute_time`, then the POSIX clocks.
//! - Other Unix hosts: `CLOCK_MONOTONIC`, then `CLOCK_REALTIME`.
//!
//! The selection is made once. [`ClockSource::get`] detects the best facility
//! on its first call and returns the same source for the rest of the process.
//!
//! ```
//! use perf_clocksource::ClockSource;
//!
//! let clock = ClockSource::get();
//! let start = clock.read_ticks();
//! let ticks = clock.read_ticks() - start;
//! assert!(clock.ticks_to_duration(ticks).as_secs() < 1);
//! ```

mod arch;
pub mod error;
mod kind;
mod prelude;
mod source;

pub use self::{
    error::{Errno, Error},
    kind::ClockKind,
    source::ClockSource,
};
