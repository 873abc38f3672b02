// SPDX-License-Identifier: MPL-2.0

use spin::Once;

use crate::{ClockKind, arch, prelude::*};

/// The process-wide best clock source.
static BEST: Once<Arc<ClockSource>> = Once::new();

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A counter of ticks together with the number of ticks per second.
///
/// A `ClockSource` is fixed once built: the facility it reads and its
/// frequency never change, so it can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct ClockSource {
    kind: ClockKind,
    frequency: u64,
    read: fn() -> u64,
}

impl ClockSource {
    /// Creates a clock source from a raw reader.
    ///
    /// `frequency` is the number of ticks `read` advances by per second.
    /// A zero frequency cannot convert ticks to seconds and is rejected.
    pub fn new(kind: ClockKind, frequency: u64, read: fn() -> u64) -> Result<Self> {
        if frequency == 0 {
            return_errno_with_message!(
                Errno::EINVAL,
                "the frequency of a clock source must be positive"
            );
        }
        Ok(Self {
            kind,
            frequency,
            read,
        })
    }

    /// Builds a clock source on exactly the given facility.
    ///
    /// Fails with `ENODEV` if the platform does not offer the facility,
    /// or with the OS error if the facility does not answer.
    pub fn probe(kind: ClockKind) -> Result<Self> {
        if !kind.is_supported() {
            return_errno_with_message!(Errno::ENODEV, "the clock is not offered by this platform");
        }
        let probe = arch::probe(kind)?;
        Self::new(kind, probe.frequency, probe.read)
    }

    /// Builds a clock source on the best facility that answers.
    ///
    /// The candidates are tried in [`ClockKind::candidates`] order. This never
    /// fails: when every candidate is rejected, the platform's last resort
    /// is used without probing.
    pub fn detect() -> Self {
        for &kind in ClockKind::candidates() {
            match Self::probe(kind) {
                Ok(source) => {
                    info!(
                        "clocksource: selected {} at {} Hz",
                        kind, source.frequency
                    );
                    return source;
                }
                Err(err) => warn!("clocksource: {} rejected: {}", kind, err),
            }
        }

        let (kind, probe) = arch::last_resort();
        warn!("clocksource: no candidate answered, falling back to {}", kind);
        Self {
            kind,
            frequency: probe.frequency,
            read: probe.read,
        }
    }

    /// Gets the process-wide best clock source.
    ///
    /// Detection runs on the first call only. Later calls, from any thread,
    /// return the same source.
    pub fn get() -> &'static Arc<ClockSource> {
        BEST.call_once(|| Arc::new(Self::detect()))
    }

    /// Reads the current tick count.
    pub fn read_ticks(&self) -> u64 {
        (self.read)()
    }

    /// Returns the number of ticks per second.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Returns the facility this source reads.
    pub fn kind(&self) -> ClockKind {
        self.kind
    }

    /// Returns whether readings of this source never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.kind.is_monotonic()
    }

    /// Gets the [`Duration`] spanned by `ticks` ticks of this source.
    pub fn ticks_to_duration(&self, ticks: u64) -> Duration {
        let secs = ticks / self.frequency;
        let rem = u128::from(ticks % self.frequency);
        let nanos = rem * NANOS_PER_SEC / u128::from(self.frequency);
        Duration::new(secs, nanos as u32)
    }
}
