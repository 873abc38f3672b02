// SPDX-License-Identifier: MPL-2.0

use std::time::Instant;

use windows_sys::Win32::System::Threading::Sleep;

use super::millis_round_up;
use crate::prelude::*;

/// The longest single `Sleep`; `u32::MAX` means `INFINITE`.
const MAX_SLEEP_MILLIS: u64 = (u32::MAX - 1) as u64;

/// Sleeps with `Sleep` until the deadline has passed.
///
/// `Sleep` only counts whole timer ticks and may return a fraction of a tick
/// early, so the remaining time is measured again after every wake-up.
pub(super) fn sleep_at_least(duration: Duration) {
    let Some(deadline) = Instant::now().checked_add(duration) else {
        sleep_millis(millis_round_up(duration));
        return;
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        sleep_millis(millis_round_up(remaining));
    }
}

fn sleep_millis(mut millis: u64) {
    while millis > 0 {
        let chunk = millis.min(MAX_SLEEP_MILLIS);
        // SAFETY: `Sleep` has no preconditions.
        unsafe { Sleep(chunk as u32) };
        millis -= chunk;
    }
}
