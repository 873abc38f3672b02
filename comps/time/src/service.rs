// SPDX-License-Identifier: MPL-2.0

use crate::{TimeConfig, prelude::*, sleep};

/// Process-relative time on top of a [`ClockSource`].
///
/// The tick count read when the service is built becomes the zero reference,
/// so [`TimeService::now`] starts near `0.0` and grows from there. Nothing
/// changes after construction; share the service through its `Arc`.
#[derive(Debug)]
pub struct TimeService {
    clock: Arc<ClockSource>,
    offset: u64,
}

impl TimeService {
    /// Creates a service on the process-wide best clock source.
    pub fn new() -> Arc<Self> {
        Self::with_clock(ClockSource::get().clone())
    }

    /// Creates a service on the clock chosen by `config`.
    pub fn with_config(config: &TimeConfig) -> Arc<Self> {
        Self::with_clock(config.resolve_clock())
    }

    /// Creates a service on `clock`, taking the current tick count as zero.
    pub fn with_clock(clock: Arc<ClockSource>) -> Arc<Self> {
        let offset = clock.read_ticks();
        debug!(
            "time: zero reference at tick {} of the {} clock ({} Hz)",
            offset,
            clock.kind(),
            clock.frequency()
        );
        Arc::new(Self { clock, offset })
    }

    /// Returns the raw tick count of the clock.
    ///
    /// The value is not shifted by the zero reference. Differences between
    /// two counters divided by [`TimeService::frequency`] give seconds.
    pub fn counter(&self) -> u64 {
        self.clock.read_ticks()
    }

    /// Returns the number of ticks per second.
    pub fn frequency(&self) -> u64 {
        self.clock.frequency()
    }

    /// Returns the seconds elapsed since the service was created.
    ///
    /// The `f64` keeps sub-microsecond precision for months of uptime and
    /// loses it slowly after that.
    pub fn now(&self) -> f64 {
        self.elapsed_ticks() as f64 / self.clock.frequency() as f64
    }

    /// Returns the time elapsed since the service was created.
    pub fn elapsed(&self) -> Duration {
        self.clock.ticks_to_duration(self.elapsed_ticks())
    }

    /// Blocks the calling thread for at least `seconds` seconds.
    ///
    /// `None` is the same as zero: the call returns at once.
    pub fn sleep(&self, seconds: Option<f64>) {
        sleep::sleep(seconds.unwrap_or(0.0));
    }

    /// Returns the tick count taken as zero.
    pub fn reference_offset(&self) -> u64 {
        self.offset
    }

    pub fn clock(&self) -> &Arc<ClockSource> {
        &self.clock
    }

    fn elapsed_ticks(&self) -> u64 {
        // A realtime clock may step back behind the reference.
        self.clock.read_ticks().saturating_sub(self.offset)
    }
}

#[cfg(test)]
mod test {
    use core::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    static FAKE_TICKS: AtomicU64 = AtomicU64::new(0);

    fn read_fake() -> u64 {
        FAKE_TICKS.load(Ordering::Relaxed)
    }

    // All assertions on the fake clock live in one test so that parallel
    // tests cannot move the shared counter underneath each other.
    #[test]
    fn fake_clock_readings() {
        let clock = ClockSource::new(ClockKind::Monotonic, 1_000, read_fake).unwrap();

        FAKE_TICKS.store(5_000, Ordering::Relaxed);
        let service = TimeService::with_clock(Arc::new(clock));
        assert_eq!(service.reference_offset(), 5_000);
        assert_eq!(service.now(), 0.0);
        assert_eq!(service.elapsed(), Duration::ZERO);

        FAKE_TICKS.store(7_500, Ordering::Relaxed);
        assert_eq!(service.counter(), 7_500);
        assert_eq!(service.frequency(), 1_000);
        assert_eq!(service.now(), 2.5);
        assert_eq!(service.elapsed(), Duration::from_millis(2_500));

        // Stepping back behind the reference clamps to zero.
        FAKE_TICKS.store(4_000, Ordering::Relaxed);
        assert_eq!(service.now(), 0.0);
        assert_eq!(service.counter(), 4_000);
    }

    #[test]
    fn starts_near_zero() {
        let service = TimeService::new();
        assert!(service.now() < 0.01);
        assert!(Arc::ptr_eq(service.clock(), ClockSource::get()));
    }

    #[test]
    fn sleep_without_seconds_returns() {
        let service = TimeService::new();
        let before = service.now();
        service.sleep(None);
        assert!(service.now() - before < 0.01);
    }
}
