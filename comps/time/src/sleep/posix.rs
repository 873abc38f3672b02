// SPDX-License-Identifier: MPL-2.0

use nix::{errno::Errno as OsErrno, libc, sys::time::TimeSpec};

use crate::prelude::*;

/// Sleeps with `nanosleep`, resuming with the remaining time after a signal.
pub(super) fn sleep_at_least(duration: Duration) {
    let mut request = timespec_from(duration);
    let mut remain = TimeSpec::new(0, 0);

    loop {
        match nanosleep(&request, &mut remain) {
            Ok(()) => return,
            Err(e) if e.error() == Errno::EINTR => {
                trace!(
                    "sleep: interrupted with {}.{:09}s left",
                    remain.tv_sec(),
                    remain.tv_nsec()
                );
                request = remain;
            }
            Err(e) => {
                warn!("sleep: nanosleep failed: {}", e);
                return;
            }
        }
    }
}

fn nanosleep(request: &TimeSpec, remain: &mut TimeSpec) -> Result<()> {
    // SAFETY: Both pointers refer to valid `timespec`s that outlive the call.
    let ret = unsafe { libc::nanosleep(request.as_ref(), remain.as_mut()) };
    OsErrno::result(ret)?;
    Ok(())
}

/// Converts `duration` into a `timespec`, saturating the seconds at `time_t::MAX`.
fn timespec_from(duration: Duration) -> TimeSpec {
    match libc::time_t::try_from(duration.as_secs()) {
        Ok(secs) => TimeSpec::new(secs, duration.subsec_nanos() as _),
        Err(_) => TimeSpec::new(libc::time_t::MAX, 999_999_999),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timespec_keeps_nanoseconds() {
        let ts = timespec_from(Duration::new(2, 500));
        assert_eq!(ts.tv_sec(), 2);
        assert_eq!(ts.tv_nsec(), 500);
    }

    #[test]
    fn timespec_saturates() {
        let ts = timespec_from(Duration::MAX);
        assert_eq!(ts.tv_sec(), libc::time_t::MAX);
        assert_eq!(ts.tv_nsec(), 999_999_999);
    }
}
