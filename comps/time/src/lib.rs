// SPDX-License-Identifier: MPL-2.0

//! Process-relative timing for embedding hosts.
//!
//! The host builds one [`TimeService`] while it initializes and hands the
//! `Arc` to every caller. The service offers four operations:
//!
//! | Operation | Result |
//! |---|---|
//! | [`counter`](TimeService::counter) | raw ticks of the clock |
//! | [`frequency`](TimeService::frequency) | ticks per second |
//! | [`now`](TimeService::now) | seconds since the service was built |
//! | [`sleep`](TimeService::sleep) | blocks for at least the given seconds |
//!
//! The service must be built before the host lets a second thread call it.
//! After that it is read-only and safe to call from any thread.
//!
//! ```
//! use perf_time::TimeService;
//!
//! let time = TimeService::new();
//! time.sleep(Some(0.01));
//! assert!(time.now() >= 0.01);
//! ```

mod config;
mod prelude;
mod service;
pub mod sleep;

pub use perf_clocksource::{ClockKind, ClockSource, Errno, Error};

pub use self::{
    config::{ClockPreference, TimeConfig},
    service::TimeService,
    sleep::{millis_round_up, sleep, sleep_for},
};
