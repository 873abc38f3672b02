// SPDX-License-Identifier: MPL-2.0

#![allow(unused)]

pub(crate) use std::{sync::Arc, time::Duration};

pub(crate) use log::{debug, info, trace, warn};
pub(crate) use perf_clocksource::{ClockKind, ClockSource, Errno, Error};

pub(crate) type Result<T> = core::result::Result<T, Error>;
